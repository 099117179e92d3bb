use crate::core::models::nucleus::Nucleus;
use crate::core::utils::geometry::{cross, distance, normalize, rho, same_axis};
use itertools::Itertools;
use nalgebra::Vector3;

/// Returns the nuclei that lie further than `tolerance` from the origin.
///
/// A nucleus at the origin is fixed by every operation and carries no orientation.
pub fn off_origin(nuclei: &[Nucleus], tolerance: f64) -> Vec<Nucleus> {
    nuclei
        .iter()
        .filter(|n| rho(&n.coordinates) > tolerance)
        .cloned()
        .collect()
}

/// Unit direction of every nucleus; the "vertex" candidates.
pub fn vertex_directions(nuclei: &[Nucleus]) -> Vec<Vector3<f64>> {
    nuclei
        .iter()
        .filter_map(|n| normalize(&n.coordinates))
        .collect()
}

fn distinct(a: &Vector3<f64>, b: &Vector3<f64>, tolerance: f64) -> bool {
    distance(a, b) > tolerance
}

fn normalized_if_long(v: Vector3<f64>, tolerance: f64) -> Option<Vector3<f64>> {
    if rho(&v) > tolerance {
        normalize(&v)
    } else {
        None
    }
}

/// Bisectors of every pair of distinct directions; the "edge" candidates.
pub fn edge_axes(directions: &[Vector3<f64>], tolerance: f64) -> Vec<Vector3<f64>> {
    directions
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| distinct(a, b, tolerance))
        .filter_map(|(a, b)| normalized_if_long(a + b, tolerance))
        .collect()
}

/// Normalized sums of every triple of pairwise distinct directions; the "face" candidates.
pub fn face_axes(directions: &[Vector3<f64>], tolerance: f64) -> Vec<Vector3<f64>> {
    directions
        .iter()
        .tuple_combinations()
        .filter(|(a, b, c)| {
            distinct(a, b, tolerance) && distinct(a, c, tolerance) && distinct(b, c, tolerance)
        })
        .filter_map(|(a, b, c)| normalized_if_long(a + b + c, tolerance))
        .collect()
}

/// Normalized cross products of every pair of distinct directions.
///
/// These serve both as "perpendicular" rotation candidates and as mirror-plane normals.
pub fn perpendicular_axes(directions: &[Vector3<f64>], tolerance: f64) -> Vec<Vector3<f64>> {
    directions
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| distinct(a, b, tolerance))
        .filter_map(|(a, b)| normalized_if_long(cross(a, b), tolerance))
        .collect()
}

/// Drops every candidate that describes the same undirected axis as an earlier one.
pub fn remove_duplicates(candidates: Vec<Vector3<f64>>, tolerance: f64) -> Vec<Vector3<f64>> {
    let mut unique: Vec<Vector3<f64>> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !unique.iter().any(|u| same_axis(u, &candidate, tolerance)) {
            unique.push(candidate);
        }
    }
    unique
}
