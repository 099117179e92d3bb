use crate::core::models::molecule::{Classification, Molecule};
use crate::core::models::nucleus::Nucleus;
use crate::engine::config::SymmetryConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter, Stage};
use crate::engine::tasks::{
    centering, classification, orientation, reflection_search, rotation_search,
};
use nalgebra::Vector3;
use tracing::{debug, info, instrument};

/// Detects the point group of `nuclei` and returns the molecule in its standard orientation.
///
/// A single nucleus is moved to the origin and returned with
/// [`Classification::NotComputed`]; no search is performed.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, `nuclei` is empty, or a coordinate is
/// not finite. Missing symmetry is never an error.
#[instrument(skip_all, name = "detection_workflow")]
pub fn run(
    nuclei: Vec<Nucleus>,
    config: &SymmetryConfig,
    reporter: &ProgressReporter,
) -> Result<Molecule, EngineError> {
    config.validate()?;
    validate_nuclei(&nuclei)?;

    let mut nuclei = nuclei;
    info!(
        nuclei = nuclei.len(),
        tolerance = config.tolerance,
        max_fold = config.max_fold,
        "Starting point-group detection."
    );

    if nuclei.len() == 1 {
        nuclei[0].coordinates = Vector3::zeros();
        info!("Single nucleus; skipping symmetry detection.");
        return Ok(Molecule::new(
            nuclei,
            Vec::new(),
            Vec::new(),
            Classification::NotComputed,
        ));
    }

    let centroid = reporter.stage(Stage::Centering, || {
        centering::run(&mut nuclei, config.tolerance)
    });
    debug!(
        x = centroid.x,
        y = centroid.y,
        z = centroid.z,
        "Moved centroid to the origin."
    );

    let mut rotations = reporter.stage(Stage::RotationSearch, || {
        rotation_search::run(&nuclei, config, reporter)
    });

    let mut reflections = reporter.stage(Stage::ReflectionSearch, || {
        reflection_search::run(&nuclei, &rotations, config, reporter)
    });

    reporter.stage(Stage::Orientation, || {
        orientation::run(
            &mut nuclei,
            &mut rotations,
            &mut reflections,
            config.tolerance,
        )
    });

    let classification = reporter.stage(Stage::Classification, || {
        classification::run(&nuclei, &rotations, &reflections, config.tolerance)
    });
    reporter.report(Progress::Classified(classification));

    info!(
        %classification,
        rotations = rotations.len(),
        reflections = reflections.len(),
        "Detection workflow complete."
    );
    Ok(Molecule::new(nuclei, rotations, reflections, classification))
}

fn validate_nuclei(nuclei: &[Nucleus]) -> Result<(), EngineError> {
    if nuclei.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    if let Some((index, nucleus)) = nuclei
        .iter()
        .enumerate()
        .find(|(_, n)| n.coordinates.iter().any(|c| !c.is_finite()))
    {
        return Err(EngineError::NonFiniteCoordinate {
            index,
            element: nucleus.element.clone(),
        });
    }
    Ok(())
}
