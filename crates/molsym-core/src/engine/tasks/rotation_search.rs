use crate::core::models::nucleus::Nucleus;
use crate::core::models::symmetry::RotationSymmetry;
use crate::core::utils::geometry::{create_quaternion, quaternion_rotation};
use crate::engine::config::SymmetryConfig;
use crate::engine::progress::{ElementKind, Progress, ProgressReporter};
use crate::engine::utils::candidates::{
    edge_axes, face_axes, off_origin, perpendicular_axes, remove_duplicates, vertex_directions,
};
use crate::engine::utils::matching::is_invariant_under;
use nalgebra::Vector3;
use std::f64::consts::TAU;
use tracing::{debug, info, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Finds every distinct proper rotation axis of a centered point set.
///
/// Candidate axes are the nucleus directions, the bisectors of direction pairs, the sums of
/// direction triples and the normals of direction pairs. Each distinct candidate keeps the
/// highest fold in `2..=max_fold` under which the set is invariant; candidates with no
/// passing fold are dropped. The result preserves candidate order.
#[instrument(skip_all, name = "rotation_search_task")]
pub fn run(
    nuclei: &[Nucleus],
    config: &SymmetryConfig,
    reporter: &ProgressReporter,
) -> Vec<RotationSymmetry> {
    let tolerance = config.tolerance;
    let snapshot = off_origin(nuclei, tolerance);
    let vertices = vertex_directions(&snapshot);

    let edges = edge_axes(&vertices, tolerance);
    let faces = face_axes(&vertices, tolerance);
    let perpendiculars = perpendicular_axes(&vertices, tolerance);
    debug!(
        vertices = vertices.len(),
        edges = edges.len(),
        faces = faces.len(),
        perpendiculars = perpendiculars.len(),
        "Generated candidate rotation axes."
    );

    let mut candidates = vertices;
    candidates.extend(edges);
    candidates.extend(faces);
    candidates.extend(perpendiculars);
    let axes = remove_duplicates(candidates, tolerance);

    reporter.report(Progress::CandidatesGenerated {
        kind: ElementKind::RotationAxis,
        count: axes.len() as u64,
    });
    if axes.is_empty() {
        info!("No candidate rotation axes; skipping rotation search.");
        reporter.report(Progress::ElementsFound {
            kind: ElementKind::RotationAxis,
            count: 0,
        });
        return Vec::new();
    }

    #[cfg(not(feature = "parallel"))]
    let iterator = axes.iter();

    #[cfg(feature = "parallel")]
    let iterator = axes.par_iter();

    let rotations: Vec<RotationSymmetry> = iterator
        .filter_map(|axis| {
            let fold = highest_fold(&snapshot, axis, config);
            reporter.report(Progress::CandidateValidated {
                kind: ElementKind::RotationAxis,
                accepted: fold.is_some(),
            });
            fold.map(|fold| {
                trace!(fold, x = axis.x, y = axis.y, z = axis.z, "Validated rotation axis.");
                RotationSymmetry::new(fold, *axis)
            })
        })
        .collect();

    reporter.report(Progress::ElementsFound {
        kind: ElementKind::RotationAxis,
        count: rotations.len(),
    });

    info!(
        candidates = axes.len(),
        found = rotations.len(),
        "Rotation axis search complete."
    );
    rotations
}

/// The highest `n` in `2..=max_fold` such that rotating by `2π/n` about `axis` leaves the
/// point set invariant.
pub fn highest_fold(nuclei: &[Nucleus], axis: &Vector3<f64>, config: &SymmetryConfig) -> Option<u32> {
    (2..=config.max_fold).rev().find(|&fold| {
        is_symmetric_rotation(nuclei, axis, TAU / f64::from(fold), config.tolerance)
    })
}

/// Whether rotating by `angle` about `axis` maps the point set onto itself.
pub fn is_symmetric_rotation(
    nuclei: &[Nucleus],
    axis: &Vector3<f64>,
    angle: f64,
    tolerance: f64,
) -> bool {
    create_quaternion(axis, angle).is_some_and(|quaternion| {
        is_invariant_under(nuclei, tolerance, |v| quaternion_rotation(&quaternion, v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::geometry::same_axis;

    fn config() -> SymmetryConfig {
        SymmetryConfig::default()
    }

    fn square_planar() -> Vec<Nucleus> {
        vec![
            Nucleus::new("Pt", 78.0, Vector3::zeros()),
            Nucleus::new("Cl", 17.0, Vector3::new(2.3, 0.0, 0.0)),
            Nucleus::new("Cl", 17.0, Vector3::new(0.0, 2.3, 0.0)),
            Nucleus::new("Cl", 17.0, Vector3::new(-2.3, 0.0, 0.0)),
            Nucleus::new("Cl", 17.0, Vector3::new(0.0, -2.3, 0.0)),
        ]
    }

    fn tetrahedron() -> Vec<Nucleus> {
        let mut nuclei = vec![Nucleus::new("C", 6.0, Vector3::zeros())];
        for v in [
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.0, -1.0, -1.0),
            Vector3::new(-1.0, 1.0, -1.0),
            Vector3::new(-1.0, -1.0, 1.0),
        ] {
            nuclei.push(Nucleus::new("H", 1.0, v * 1.2));
        }
        nuclei
    }

    #[test]
    fn square_planar_has_four_fold_principal_axis() {
        let rotations = run(&square_planar(), &config(), &ProgressReporter::new());

        assert_eq!(rotations.len(), 5);
        let principal: Vec<_> = rotations.iter().filter(|r| r.fold() == 4).collect();
        assert_eq!(principal.len(), 1);
        assert!(same_axis(&principal[0].vector, &Vector3::z(), 1e-9));
        assert_eq!(rotations.iter().filter(|r| r.fold() == 2).count(), 4);
    }

    #[test]
    fn tetrahedron_has_four_three_fold_and_three_two_fold_axes() {
        let rotations = run(&tetrahedron(), &config(), &ProgressReporter::new());
        assert_eq!(rotations.iter().filter(|r| r.fold() == 3).count(), 4);
        assert_eq!(rotations.iter().filter(|r| r.fold() == 2).count(), 3);
        assert_eq!(rotations.len(), 7);
    }

    #[test]
    fn found_folds_are_valid_and_maximal() {
        let nuclei = tetrahedron();
        let config = config();
        for rotation in run(&nuclei, &config, &ProgressReporter::new()) {
            let fold = f64::from(rotation.fold());
            assert!((rotation.vector.norm() - 1.0).abs() < config.tolerance);
            assert!(is_symmetric_rotation(
                &nuclei,
                &rotation.vector,
                TAU / fold,
                config.tolerance
            ));
            assert!(!is_symmetric_rotation(
                &nuclei,
                &rotation.vector,
                TAU / (fold + 1.0),
                config.tolerance
            ));
        }
    }

    #[test]
    fn antiparallel_axes_never_both_appear() {
        let rotations = run(&square_planar(), &config(), &ProgressReporter::new());
        for (i, a) in rotations.iter().enumerate() {
            for b in rotations.iter().skip(i + 1) {
                assert!(!same_axis(&a.vector, &b.vector, 1e-3));
            }
        }
    }

    #[test]
    fn asymmetric_set_has_no_rotation_axes() {
        let nuclei = vec![
            Nucleus::new("H", 1.0, Vector3::new(0.0, 0.0, 0.0)),
            Nucleus::new("F", 9.0, Vector3::new(1.7, 0.0, 0.0)),
            Nucleus::new("Cl", 17.0, Vector3::new(0.4, 2.1, 0.0)),
            Nucleus::new("Br", 35.0, Vector3::new(-0.6, 0.3, 1.9)),
        ];
        assert!(run(&nuclei, &config(), &ProgressReporter::new()).is_empty());
    }

    #[test]
    fn max_fold_caps_the_reported_fold() {
        let nuclei = vec![
            Nucleus::new("O", 8.0, Vector3::new(0.0, 0.0, 2.2)),
            Nucleus::new("C", 6.0, Vector3::zeros()),
            Nucleus::new("O", 8.0, Vector3::new(0.0, 0.0, -2.2)),
        ];
        let capped = SymmetryConfig {
            max_fold: 5,
            ..SymmetryConfig::default()
        };
        let rotations = run(&nuclei, &capped, &ProgressReporter::new());
        assert_eq!(rotations.len(), 1);
        assert_eq!(rotations[0].fold(), 5);
    }
}
