use crate::core::models::nucleus::Nucleus;
use crate::core::utils::geometry::distance;
use nalgebra::Vector3;

/// Returns a fresh copy of `nuclei` with `transform` applied to every coordinate.
///
/// The input snapshot is never touched, so a single snapshot can be tested against any
/// number of candidate operations.
pub fn transformed<F>(nuclei: &[Nucleus], transform: F) -> Vec<Nucleus>
where
    F: Fn(&Vector3<f64>) -> Vector3<f64>,
{
    nuclei
        .iter()
        .map(|n| n.with_coordinates(transform(&n.coordinates)))
        .collect()
}

/// Whether `image` is the same point set as `original` under first-fit matching.
///
/// Each original nucleus claims the first unclaimed image nucleus that lies within
/// `tolerance` and carries exactly the same charge. Matching is greedy in encounter order;
/// no global assignment is attempted.
pub fn is_same_point_set(original: &[Nucleus], image: &[Nucleus], tolerance: f64) -> bool {
    if original.len() != image.len() {
        return false;
    }
    let mut claimed = vec![false; image.len()];
    for nucleus in original {
        let hit = image.iter().enumerate().position(|(j, candidate)| {
            !claimed[j]
                && candidate.charge == nucleus.charge
                && distance(&candidate.coordinates, &nucleus.coordinates) <= tolerance
        });
        match hit {
            Some(j) => claimed[j] = true,
            None => return false,
        }
    }
    true
}

/// Whether `nuclei` maps onto itself under `transform`.
pub fn is_invariant_under<F>(nuclei: &[Nucleus], tolerance: f64, transform: F) -> bool
where
    F: Fn(&Vector3<f64>) -> Vector3<f64>,
{
    let image = transformed(nuclei, transform);
    is_same_point_set(nuclei, &image, tolerance)
}
