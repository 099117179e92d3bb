use crate::core::models::nucleus::Nucleus;
use crate::core::models::symmetry::{
    ReflectionSymmetry, RotationSymmetry, principal_axis_index, secondary_axis_index,
};
use crate::core::utils::geometry::{
    is_on_z_axis, phi, quaternion_rotation, quaternion_to_z_axis, rotation_about_z, theta,
};
use nalgebra::UnitQuaternion;
use std::f64::consts::FRAC_PI_2;
use tracing::{debug, info, instrument};

/// The canonical frame a system was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFrame {
    /// Principal axis on +z, secondary axis at zero azimuth.
    PrincipalAxes,
    /// The only rotation axis on +z; the first mirror normal with positive azimuth, if any,
    /// sets a turn about z of `π/2 - θ(normal)`.
    AxisAndPlane,
    /// First mirror normal on +z, second mirror normal at azimuth π/2.
    MirrorPlanes,
    /// The only mirror normal on +z.
    SingleMirror,
    /// No reorientation was applied.
    Unchanged,
}

/// Rigidly rotates the nuclei and all symmetry elements into the standard orientation.
///
/// Every rotation is applied to nuclei, rotation axes and mirror normals alike so the
/// elements stay consistent with the geometry.
#[instrument(skip_all, name = "orientation_task")]
pub fn run(
    nuclei: &mut [Nucleus],
    rotations: &mut [RotationSymmetry],
    reflections: &mut [ReflectionSymmetry],
    tolerance: f64,
) -> StandardFrame {
    let frame = match (rotations.len(), reflections.len()) {
        (r, _) if r >= 2 => {
            let (Some(principal), Some(secondary)) = principal_and_secondary(rotations) else {
                return StandardFrame::Unchanged;
            };
            let to_z = quaternion_to_z_axis(&rotations[principal].vector);
            rotate_all(&to_z, nuclei, rotations, reflections);

            let to_zero_azimuth = rotation_about_z(-phi(&rotations[secondary].vector));
            rotate_all(&to_zero_azimuth, nuclei, rotations, reflections);
            StandardFrame::PrincipalAxes
        }
        (1, p) if p >= 1 => {
            let to_z = quaternion_to_z_axis(&rotations[0].vector);
            rotate_all(&to_z, nuclei, rotations, reflections);

            // A normal on z has no meaningful azimuth once rounding noise is involved.
            let vertical = reflections
                .iter()
                .find(|r| phi(&r.vector) > tolerance && !is_on_z_axis(&r.vector, tolerance))
                .map(|r| r.vector);
            if let Some(normal) = vertical {
                let angle = FRAC_PI_2 - theta(&normal);
                debug!(angle, "Turning about z by the polar offset of the first vertical mirror.");
                let about_z = rotation_about_z(angle);
                rotate_all(&about_z, nuclei, rotations, reflections);
            }
            StandardFrame::AxisAndPlane
        }
        (0, p) if p >= 2 => {
            let to_z = quaternion_to_z_axis(&reflections[0].vector);
            rotate_all(&to_z, nuclei, rotations, reflections);

            let about_z = rotation_about_z(FRAC_PI_2 - phi(&reflections[1].vector));
            rotate_all(&about_z, nuclei, rotations, reflections);
            StandardFrame::MirrorPlanes
        }
        (0, 1) => {
            let to_z = quaternion_to_z_axis(&reflections[0].vector);
            rotate_all(&to_z, nuclei, rotations, reflections);
            StandardFrame::SingleMirror
        }
        _ => StandardFrame::Unchanged,
    };

    info!(?frame, "Standard orientation applied.");
    frame
}

fn principal_and_secondary(rotations: &[RotationSymmetry]) -> (Option<usize>, Option<usize>) {
    let principal = principal_axis_index(rotations);
    let secondary = principal.and_then(|p| secondary_axis_index(rotations, p));
    (principal, secondary)
}

/// Applies `quaternion` to every nucleus, rotation axis and mirror normal.
pub fn rotate_all(
    quaternion: &UnitQuaternion<f64>,
    nuclei: &mut [Nucleus],
    rotations: &mut [RotationSymmetry],
    reflections: &mut [ReflectionSymmetry],
) {
    for rotation in rotations.iter_mut() {
        rotation.rotate(quaternion);
    }
    for reflection in reflections.iter_mut() {
        reflection.rotate(quaternion);
    }
    for nucleus in nuclei.iter_mut() {
        nucleus.coordinates = quaternion_rotation(quaternion, &nucleus.coordinates);
    }
}
