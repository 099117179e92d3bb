use nalgebra::Vector3;

/// An atomic nucleus: a point mass carrying element identity and charge.
///
/// Coordinates are cartesian and expressed in atomic units (bohr). They are the only mutable
/// part of a nucleus; every centering step and rigid rotation updates them in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Nucleus {
    /// The element symbol (e.g. "C", "Cl").
    pub element: String,
    /// The nuclear charge in elementary charge units. Usually the atomic number, but
    /// fractional values are accepted.
    pub charge: f64,
    /// The cartesian position of the nucleus in bohr.
    pub coordinates: Vector3<f64>,
}

impl Nucleus {
    /// Creates a new `Nucleus`.
    ///
    /// # Arguments
    ///
    /// * `element` - The element symbol.
    /// * `charge` - The nuclear charge.
    /// * `coordinates` - The cartesian position in bohr.
    pub fn new(element: &str, charge: f64, coordinates: Vector3<f64>) -> Self {
        Self {
            element: element.to_string(),
            charge,
            coordinates,
        }
    }

    /// Whether two nuclei are interchangeable under a symmetry operation: same element
    /// and exactly the same charge.
    pub fn is_equivalent_to(&self, other: &Nucleus) -> bool {
        self.element == other.element && self.charge == other.charge
    }

    /// Returns a copy of this nucleus moved to `coordinates`.
    pub fn with_coordinates(&self, coordinates: Vector3<f64>) -> Self {
        Self {
            element: self.element.clone(),
            charge: self.charge,
            coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_nucleus_stores_fields() {
        let nucleus = Nucleus::new("O", 8.0, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(nucleus.element, "O");
        assert_eq!(nucleus.charge, 8.0);
        assert_eq!(nucleus.coordinates, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn equivalence_requires_element_and_charge() {
        let a = Nucleus::new("H", 1.0, Vector3::zeros());
        let b = Nucleus::new("H", 1.0, Vector3::new(5.0, 0.0, 0.0));
        let c = Nucleus::new("H", 0.5, Vector3::zeros());
        let d = Nucleus::new("He", 1.0, Vector3::zeros());
        assert!(a.is_equivalent_to(&b));
        assert!(!a.is_equivalent_to(&c));
        assert!(!a.is_equivalent_to(&d));
    }

    #[test]
    fn with_coordinates_keeps_identity() {
        let a = Nucleus::new("N", 7.0, Vector3::zeros());
        let moved = a.with_coordinates(Vector3::new(0.0, 0.0, 1.0));
        assert!(a.is_equivalent_to(&moved));
        assert_eq!(moved.coordinates.z, 1.0);
        assert_eq!(a.coordinates, Vector3::zeros());
    }
}
