use clap::{Args, Parser, Subcommand, ValueEnum};
use molsym::core::io::xyz::Units;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "MolSym Developers",
    version,
    about = "MolSym CLI - Detects the point group of a molecule and places it in its standard orientation.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for candidate validation.
    /// Only honoured when built with the `parallel` feature.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect symmetry elements and the point group of a molecule in XYZ format.
    Detect(DetectArgs),
}

/// Arguments for the `detect` subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Path to the input XYZ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the oriented geometry to this XYZ file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the geometric tolerance (bohr).
    #[arg(short, long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Override the highest rotation fold that is tested.
    #[arg(long, value_name = "INT")]
    pub max_fold: Option<u32>,

    /// Length unit of the coordinates in the input and output files.
    #[arg(short, long, value_enum, default_value_t = UnitsArg::Bohr)]
    pub units: UnitsArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitsArg {
    Bohr,
    Angstrom,
}

impl From<UnitsArg> for Units {
    fn from(units: UnitsArg) -> Self {
        match units {
            UnitsArg::Bohr => Units::Bohr,
            UnitsArg::Angstrom => Units::Angstrom,
        }
    }
}
