use crate::core::models::nucleus::Nucleus;
use crate::core::utils::geometry::rho;
use nalgebra::Vector3;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Translates the nuclei so that their unweighted centroid sits at the origin.
///
/// The nuclei are re-sorted by ascending distance from the origin. If the closest one lies
/// within `tolerance` of the origin, its residual offset is removed from every other nucleus
/// and it is snapped to exactly `(0, 0, 0)`.
///
/// Returns the centroid that was subtracted.
#[instrument(skip_all, name = "centering_task")]
pub fn run(nuclei: &mut [Nucleus], tolerance: f64) -> Vector3<f64> {
    if nuclei.is_empty() {
        return Vector3::zeros();
    }

    let count = nuclei.len() as f64;
    let centroid = nuclei
        .iter()
        .fold(Vector3::zeros(), |acc, n| acc + n.coordinates)
        / count;

    for nucleus in nuclei.iter_mut() {
        nucleus.coordinates -= centroid;
    }

    nuclei.sort_by(|a, b| {
        rho(&a.coordinates)
            .partial_cmp(&rho(&b.coordinates))
            .unwrap_or(Ordering::Equal)
    });

    let offset = nuclei[0].coordinates;
    if rho(&offset) <= tolerance {
        debug!(
            element = %nuclei[0].element,
            "Snapping the nucleus closest to the centroid onto the origin."
        );
        nuclei[0].coordinates = Vector3::zeros();
        for nucleus in nuclei.iter_mut().skip(1) {
            nucleus.coordinates -= offset;
        }
    }

    debug!(
        x = centroid.x,
        y = centroid.y,
        z = centroid.z,
        "Moved centroid to origin."
    );
    centroid
}
