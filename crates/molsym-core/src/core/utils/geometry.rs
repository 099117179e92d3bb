use nalgebra::{Matrix3, Unit, UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Magnitude below which a vector is treated as having no direction.
const DEGENERATE_NORM: f64 = 1e-12;

/// Returns the Euclidean length of `v` (the spherical radius `r`).
pub fn rho(v: &Vector3<f64>) -> f64 {
    v.norm()
}

pub fn distance(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (a - b).norm()
}

/// Returns `v` scaled to unit length, or `None` if `v` has no usable direction.
pub fn normalize(v: &Vector3<f64>) -> Option<Vector3<f64>> {
    let norm = v.norm();
    if norm <= DEGENERATE_NORM || !norm.is_finite() {
        None
    } else {
        Some(v / norm)
    }
}

pub fn cross(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a.cross(b)
}

/// Polar angle of `v` measured from the +z axis, in `[0, π]`.
///
/// The zero vector has a polar angle of zero.
pub fn theta(v: &Vector3<f64>) -> f64 {
    let r = v.norm();
    if r <= DEGENERATE_NORM {
        return 0.0;
    }
    (v.z / r).clamp(-1.0, 1.0).acos()
}

/// Azimuthal angle of `v` in the xy-plane, `atan2(y, x)`, in `(-π, π]`.
pub fn phi(v: &Vector3<f64>) -> f64 {
    v.y.atan2(v.x)
}

/// Converts cartesian coordinates into spherical `(r, θ, φ)`.
pub fn cartesian_to_spherical(v: &Vector3<f64>) -> (f64, f64, f64) {
    (rho(v), theta(v), phi(v))
}

/// Builds the unit quaternion rotating by `angle` radians about `axis`.
///
/// Returns `None` when `axis` is too short to define a direction.
pub fn create_quaternion(axis: &Vector3<f64>, angle: f64) -> Option<UnitQuaternion<f64>> {
    Unit::try_new(*axis, DEGENERATE_NORM).map(|axis| UnitQuaternion::from_axis_angle(&axis, angle))
}

pub fn quaternion_rotation(quaternion: &UnitQuaternion<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    quaternion * v
}

/// Rotation about the +z axis by `angle` radians.
pub fn rotation_about_z(angle: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle)
}

/// Rotation carrying the direction of `v` onto +z.
///
/// The rotation axis is `z × v` and the angle is `-θ(v)`. A vector already on +z yields the
/// identity and a vector on -z yields a half-turn about +x.
pub fn quaternion_to_z_axis(v: &Vector3<f64>) -> UnitQuaternion<f64> {
    let axis = Vector3::new(-v.y, v.x, 0.0);
    match create_quaternion(&axis, -theta(v)) {
        Some(quaternion) => quaternion,
        None if v.z < 0.0 => UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI),
        None => UnitQuaternion::identity(),
    }
}

/// Householder operator `I - 2 n nᵀ` reflecting through the plane with unit normal `normal`.
pub fn householder(normal: &Vector3<f64>) -> Matrix3<f64> {
    let n = *normal;
    Matrix3::identity() - (n * n.transpose()) * 2.0
}

/// Whether `a` and `b` describe the same undirected axis within `tolerance`.
pub fn same_axis(a: &Vector3<f64>, b: &Vector3<f64>, tolerance: f64) -> bool {
    (a + b).norm() <= tolerance || (a - b).norm() <= tolerance
}

/// Whether `v` lies on the z-axis: its polar angle modulo π is within `tolerance` of zero.
///
/// Vectors shorter than `tolerance` count as lying on the axis.
pub fn is_on_z_axis(v: &Vector3<f64>, tolerance: f64) -> bool {
    if rho(v) <= tolerance {
        return true;
    }
    let reduced = theta(v) % PI;
    reduced <= tolerance || PI - reduced <= tolerance
}
