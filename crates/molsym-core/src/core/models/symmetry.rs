use nalgebra::{UnitQuaternion, Vector3};

/// A proper rotation axis through the origin.
///
/// The fold is fixed once the axis is validated; the axis vector is re-oriented together
/// with the nuclei whenever the system is rotated.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationSymmetry {
    fold: u32,
    /// Unit vector along the axis. Its sign carries no meaning.
    pub vector: Vector3<f64>,
}

impl RotationSymmetry {
    pub fn new(fold: u32, vector: Vector3<f64>) -> Self {
        Self { fold, vector }
    }

    /// The highest validated order `n` of the axis (rotation by `2π/n`).
    pub fn fold(&self) -> u32 {
        self.fold
    }

    pub fn rotate(&mut self, quaternion: &UnitQuaternion<f64>) {
        self.vector = quaternion * self.vector;
    }
}

/// A mirror plane through the origin, identified by its unit normal.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionSymmetry {
    /// Unit normal of the plane. Its sign carries no meaning.
    pub vector: Vector3<f64>,
}

impl ReflectionSymmetry {
    pub fn new(vector: Vector3<f64>) -> Self {
        Self { vector }
    }

    pub fn rotate(&mut self, quaternion: &UnitQuaternion<f64>) {
        self.vector = quaternion * self.vector;
    }
}

/// Index of the principal axis: the first axis carrying the highest fold.
pub fn principal_axis_index(rotations: &[RotationSymmetry]) -> Option<usize> {
    let highest = rotations.iter().map(RotationSymmetry::fold).max()?;
    rotations.iter().position(|r| r.fold() == highest)
}

/// Index of the secondary axis used to fix the azimuth of the standard orientation.
///
/// The second-highest fold is taken from the fold multiset (so two 4-fold axes give a
/// second-highest value of 4), and the first axis with that fold other than the principal
/// axis is returned.
pub fn secondary_axis_index(rotations: &[RotationSymmetry], principal: usize) -> Option<usize> {
    let mut folds: Vec<u32> = rotations.iter().map(RotationSymmetry::fold).collect();
    folds.sort_unstable_by(|a, b| b.cmp(a));
    let second_highest = *folds.get(1)?;
    rotations
        .iter()
        .enumerate()
        .position(|(i, r)| i != principal && r.fold() == second_highest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn axes(folds: &[u32]) -> Vec<RotationSymmetry> {
        folds
            .iter()
            .map(|&f| RotationSymmetry::new(f, Vector3::z()))
            .collect()
    }

    #[test]
    fn principal_axis_is_first_with_highest_fold() {
        assert_eq!(principal_axis_index(&axes(&[2, 4, 3, 4])), Some(1));
        assert_eq!(principal_axis_index(&[]), None);
    }

    #[test]
    fn secondary_axis_uses_fold_multiset() {
        let rotations = axes(&[2, 4, 3, 4]);
        assert_eq!(secondary_axis_index(&rotations, 1), Some(3));

        let rotations = axes(&[2, 4, 3]);
        assert_eq!(secondary_axis_index(&rotations, 1), Some(2));
    }

    #[test]
    fn secondary_axis_requires_two_axes() {
        assert_eq!(secondary_axis_index(&axes(&[3]), 0), None);
    }

    #[test]
    fn rotate_updates_orientation_but_not_fold() {
        let mut rotation = RotationSymmetry::new(3, Vector3::x());
        let q = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
        rotation.rotate(&q);
        assert_eq!(rotation.fold(), 3);
        assert!((rotation.vector - Vector3::y()).norm() < 1e-12);

        let mut reflection = ReflectionSymmetry::new(Vector3::x());
        reflection.rotate(&q);
        assert!((reflection.vector - Vector3::y()).norm() < 1e-12);
    }
}
