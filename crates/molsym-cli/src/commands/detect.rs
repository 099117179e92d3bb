use crate::cli::DetectArgs;
use crate::config::PartialSymmetryConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use molsym::{
    core::io::{
        traits::NucleiFile,
        xyz::{Units, XyzFile, XyzMetadata},
    },
    core::models::molecule::Molecule,
    engine::progress::ProgressReporter,
    workflows,
};
use std::io::{self, Write};
use tracing::{info, warn};

pub fn run(args: DetectArgs) -> Result<()> {
    run_with_progress(args, CliProgressHandler::new())
}

fn run_with_progress(args: DetectArgs, progress_handler: CliProgressHandler) -> Result<()> {
    let partial_config = PartialSymmetryConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let units = Units::from(args.units);
    let xyz = XyzFile::new(units);

    info!("Loading input geometry from {:?}", &args.input);
    let (nuclei, metadata) =
        xyz.read_from_path(&args.input)
            .map_err(|e| CliError::FileParsing {
                path: args.input.clone(),
                source: e.into(),
            })?;

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(nuclei = nuclei.len(), "Invoking the detection workflow...");
    let molecule = workflows::detect::run(nuclei, &config, &reporter)?;

    if molecule.point_group().is_none() {
        warn!(
            classification = %molecule.classification(),
            "No point group was assigned."
        );
    }

    write_summary(&mut io::stdout().lock(), &molecule, units)?;

    if let Some(output) = &args.output {
        let out_metadata = XyzMetadata {
            comment: format!(
                "{} | point group: {}",
                metadata.comment.trim(),
                molecule.classification()
            ),
        };
        xyz.write_to_path(molecule.nuclei(), &out_metadata, output)
            .map_err(|e| CliError::FileParsing {
                path: output.clone(),
                source: e.into(),
            })?;
        println!("✓ Oriented geometry written to: {}", output.display());
    }

    Ok(())
}

fn units_label(units: Units) -> &'static str {
    match units {
        Units::Bohr => "bohr",
        Units::Angstrom => "angstrom",
    }
}

/// Writes the point group, the symmetry elements and the oriented coordinates.
fn write_summary(out: &mut impl Write, molecule: &Molecule, units: Units) -> io::Result<()> {
    writeln!(out, "Point group: {}", molecule.classification())?;

    writeln!(out, "Rotation axes ({}):", molecule.rotations().len())?;
    for rotation in molecule.rotations() {
        let v = rotation.vector;
        writeln!(
            out,
            "  C{:<3} [{:>10.6}, {:>10.6}, {:>10.6}]",
            rotation.fold(),
            v.x,
            v.y,
            v.z
        )?;
    }

    writeln!(out, "Mirror planes ({}):", molecule.reflections().len())?;
    for reflection in molecule.reflections() {
        let v = reflection.vector;
        writeln!(
            out,
            "  normal [{:>10.6}, {:>10.6}, {:>10.6}]",
            v.x, v.y, v.z
        )?;
    }

    writeln!(out, "Oriented coordinates ({}):", units_label(units))?;
    for nucleus in molecule.nuclei() {
        let c = nucleus.coordinates.map(|v| units.from_bohr(v));
        writeln!(
            out,
            "  {:<3}{:>14.8}{:>14.8}{:>14.8}",
            nucleus.element, c.x, c.y, c.z
        )?;
    }
    Ok(())
}
