use crate::core::models::molecule::{Classification, PointGroup};
use crate::core::models::nucleus::Nucleus;
use crate::core::models::symmetry::{ReflectionSymmetry, RotationSymmetry};
use crate::core::utils::geometry::{distance, is_on_z_axis};
use tracing::{debug, info, instrument};

/// Runs an oriented point set and its symmetry elements through the point-group flow.
///
/// The flow checks, in order: linearity along z, high symmetry (more than two axes of fold
/// above two), any remaining rotation axis, and finally a horizontal mirror. Branches with
/// no assignment yield [`Classification::Unclassified`].
#[instrument(skip_all, name = "classification_task")]
pub fn run(
    nuclei: &[Nucleus],
    rotations: &[RotationSymmetry],
    reflections: &[ReflectionSymmetry],
    tolerance: f64,
) -> Classification {
    let classification = if is_linear(nuclei, tolerance) {
        debug!("Point set is linear.");
        if has_inversion_center(nuclei, tolerance) {
            Classification::Resolved(PointGroup::DInfH)
        } else {
            Classification::Resolved(PointGroup::CInfV)
        }
    } else if is_high_symmetry(rotations) {
        debug!("Point set has high symmetry.");
        if has_inversion_center(nuclei, tolerance) {
            if has_five_fold_axis(rotations) {
                Classification::Resolved(PointGroup::Ih)
            } else {
                Classification::Resolved(PointGroup::Oh)
            }
        } else {
            Classification::Resolved(PointGroup::Td)
        }
    } else if !rotations.is_empty() {
        debug!(
            axes = rotations.len(),
            "Rotation axes present without high symmetry; no assignment for this branch."
        );
        Classification::Unclassified
    } else if has_horizontal_mirror(reflections, tolerance) {
        Classification::Resolved(PointGroup::Cs)
    } else {
        Classification::Unclassified
    };

    info!(%classification, "Classification complete.");
    classification
}

/// Whether every nucleus lies on the z-axis.
pub fn is_linear(nuclei: &[Nucleus], tolerance: f64) -> bool {
    nuclei
        .iter()
        .all(|n| is_on_z_axis(&n.coordinates, tolerance))
}

/// Whether more than two rotation axes have a fold above two.
pub fn is_high_symmetry(rotations: &[RotationSymmetry]) -> bool {
    rotations.iter().filter(|r| r.fold() > 2).count() > 2
}

pub fn has_five_fold_axis(rotations: &[RotationSymmetry]) -> bool {
    rotations.iter().any(|r| r.fold() == 5)
}

/// Whether some mirror normal lies along z, i.e. the plane is horizontal in the standard frame.
pub fn has_horizontal_mirror(reflections: &[ReflectionSymmetry], tolerance: f64) -> bool {
    reflections
        .iter()
        .any(|r| is_on_z_axis(&r.vector, tolerance))
}

/// Whether every nucleus has an equivalent partner within `tolerance` of its antipode.
///
/// A nucleus at the origin is its own partner.
pub fn has_inversion_center(nuclei: &[Nucleus], tolerance: f64) -> bool {
    nuclei.iter().all(|nucleus| {
        let antipode = -nucleus.coordinates;
        nuclei.iter().any(|partner| {
            partner.is_equivalent_to(nucleus)
                && distance(&partner.coordinates, &antipode) <= tolerance
        })
    })
}
