use super::nucleus::Nucleus;
use super::symmetry::{ReflectionSymmetry, RotationSymmetry};
use std::fmt;

/// Schoenflies point groups the classifier can currently assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointGroup {
    /// A single mirror plane and nothing else.
    Cs,
    /// Linear without an inversion centre (e.g. HCN).
    CInfV,
    /// Linear with an inversion centre (e.g. CO2).
    DInfH,
    /// Tetrahedral (e.g. CH4).
    Td,
    /// Octahedral (e.g. SF6).
    Oh,
    /// Icosahedral (e.g. B12H12 2-).
    Ih,
}

impl PointGroup {
    /// The Schoenflies label in TeX-like notation, e.g. `D_{inf h}`.
    pub fn label(&self) -> &'static str {
        match self {
            PointGroup::Cs => "C_{s}",
            PointGroup::CInfV => "C_{inf v}",
            PointGroup::DInfH => "D_{inf h}",
            PointGroup::Td => "T_{d}",
            PointGroup::Oh => "O_{h}",
            PointGroup::Ih => "I_{h}",
        }
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of running a point set through the classification flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A single nucleus; no symmetry search was performed.
    NotComputed,
    /// The flow reached a terminal point group.
    Resolved(PointGroup),
    /// The flow ended in a branch that has no point-group assignment.
    Unclassified,
}

impl Classification {
    pub fn point_group(&self) -> Option<PointGroup> {
        match self {
            Classification::Resolved(group) => Some(*group),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::NotComputed => f.write_str("not computed"),
            Classification::Resolved(group) => write!(f, "{}", group),
            Classification::Unclassified => f.write_str("unclassified"),
        }
    }
}

/// A symmetry-analysed molecule in its standard orientation.
///
/// This is the terminal output of the detection workflow. The nuclei, the discovered
/// symmetry elements and the classification are mutually consistent: every element vector
/// is expressed in the same frame as the nuclear coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    nuclei: Vec<Nucleus>,
    rotations: Vec<RotationSymmetry>,
    reflections: Vec<ReflectionSymmetry>,
    classification: Classification,
}

impl Molecule {
    pub(crate) fn new(
        nuclei: Vec<Nucleus>,
        rotations: Vec<RotationSymmetry>,
        reflections: Vec<ReflectionSymmetry>,
        classification: Classification,
    ) -> Self {
        Self {
            nuclei,
            rotations,
            reflections,
            classification,
        }
    }

    /// The centered, canonically oriented nuclei.
    pub fn nuclei(&self) -> &[Nucleus] {
        &self.nuclei
    }

    pub fn rotations(&self) -> &[RotationSymmetry] {
        &self.rotations
    }

    pub fn reflections(&self) -> &[ReflectionSymmetry] {
        &self.reflections
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn point_group(&self) -> Option<PointGroup> {
        self.classification.point_group()
    }

    /// Whether any symmetry element beyond the identity was found.
    pub fn has_symmetry_elements(&self) -> bool {
        !self.rotations.is_empty() || !self.reflections.is_empty()
    }

    /// Consumes the molecule and returns its nuclei.
    pub fn into_nuclei(self) -> Vec<Nucleus> {
        self.nuclei
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn point_group_labels_match_schoenflies_notation() {
        assert_eq!(PointGroup::Cs.to_string(), "C_{s}");
        assert_eq!(PointGroup::CInfV.to_string(), "C_{inf v}");
        assert_eq!(PointGroup::DInfH.to_string(), "D_{inf h}");
        assert_eq!(PointGroup::Td.to_string(), "T_{d}");
        assert_eq!(PointGroup::Oh.to_string(), "O_{h}");
        assert_eq!(PointGroup::Ih.to_string(), "I_{h}");
    }

    #[test]
    fn classification_distinguishes_gap_from_skip() {
        assert_eq!(Classification::Unclassified.point_group(), None);
        assert_eq!(Classification::NotComputed.point_group(), None);
        assert_ne!(Classification::Unclassified, Classification::NotComputed);
        assert_eq!(
            Classification::Resolved(PointGroup::Td).point_group(),
            Some(PointGroup::Td)
        );
        assert_eq!(Classification::Unclassified.to_string(), "unclassified");
    }

    #[test]
    fn molecule_exposes_its_parts() {
        let molecule = Molecule::new(
            vec![Nucleus::new("He", 2.0, Vector3::zeros())],
            Vec::new(),
            vec![ReflectionSymmetry::new(Vector3::z())],
            Classification::Resolved(PointGroup::Cs),
        );
        assert_eq!(molecule.nuclei().len(), 1);
        assert!(molecule.rotations().is_empty());
        assert_eq!(molecule.reflections().len(), 1);
        assert!(molecule.has_symmetry_elements());
        assert_eq!(molecule.point_group(), Some(PointGroup::Cs));
    }
}
