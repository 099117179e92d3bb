use crate::core::models::nucleus::Nucleus;
use crate::core::models::symmetry::{ReflectionSymmetry, RotationSymmetry, principal_axis_index};
use crate::core::utils::geometry::{create_quaternion, householder, quaternion_rotation};
use crate::engine::config::SymmetryConfig;
use crate::engine::progress::{ElementKind, Progress, ProgressReporter};
use crate::engine::utils::candidates::{
    off_origin, perpendicular_axes, remove_duplicates, vertex_directions,
};
use crate::engine::utils::matching::is_invariant_under;
use nalgebra::Vector3;
use std::f64::consts::PI;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Finds every distinct mirror plane through the origin of a centered point set.
///
/// Candidate normals are the normals of every pair of nucleus directions. When rotation axes
/// are known, each candidate is also rotated about the principal axis by `kπ/n`
/// (`k = 1..n`), which recovers planes related to the raw candidates by the principal
/// rotation. Each distinct candidate is validated with its Householder reflection.
#[instrument(skip_all, name = "reflection_search_task")]
pub fn run(
    nuclei: &[Nucleus],
    rotations: &[RotationSymmetry],
    config: &SymmetryConfig,
    reporter: &ProgressReporter,
) -> Vec<ReflectionSymmetry> {
    let tolerance = config.tolerance;
    let snapshot = off_origin(nuclei, tolerance);
    let vertices = vertex_directions(&snapshot);
    let base = perpendicular_axes(&vertices, tolerance);

    if base.is_empty() {
        info!("No candidate mirror planes; skipping reflection search.");
        reporter.report(Progress::CandidatesGenerated {
            kind: ElementKind::MirrorPlane,
            count: 0,
        });
        reporter.report(Progress::ElementsFound {
            kind: ElementKind::MirrorPlane,
            count: 0,
        });
        return Vec::new();
    }

    let mut candidates = base.clone();
    if let Some(index) = principal_axis_index(rotations) {
        let principal = &rotations[index];
        let fold = principal.fold();
        for k in 1..fold {
            let angle = PI * f64::from(k) / f64::from(fold);
            if let Some(quaternion) = create_quaternion(&principal.vector, angle) {
                candidates.extend(base.iter().map(|v| quaternion_rotation(&quaternion, v)));
            }
        }
        debug!(
            fold,
            added = candidates.len() - base.len(),
            "Rotated candidate normals about the principal axis."
        );
    }

    let normals = remove_duplicates(candidates, tolerance);

    reporter.report(Progress::CandidatesGenerated {
        kind: ElementKind::MirrorPlane,
        count: normals.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = normals.iter();

    #[cfg(feature = "parallel")]
    let iterator = normals.par_iter();

    let reflections: Vec<ReflectionSymmetry> = iterator
        .filter_map(|normal| {
            let valid = is_symmetric_reflection(&snapshot, normal, tolerance);
            reporter.report(Progress::CandidateValidated {
                kind: ElementKind::MirrorPlane,
                accepted: valid,
            });
            valid.then(|| ReflectionSymmetry::new(*normal))
        })
        .collect();

    reporter.report(Progress::ElementsFound {
        kind: ElementKind::MirrorPlane,
        count: reflections.len(),
    });

    info!(
        candidates = normals.len(),
        found = reflections.len(),
        "Reflection plane search complete."
    );
    reflections
}

/// Whether reflecting through the plane with unit normal `normal` maps the set onto itself.
pub fn is_symmetric_reflection(nuclei: &[Nucleus], normal: &Vector3<f64>, tolerance: f64) -> bool {
    let operator = householder(normal);
    is_invariant_under(nuclei, tolerance, |v| operator * v)
}
