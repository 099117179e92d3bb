mod defaults;

use crate::cli::DetectArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use molsym::engine::config::{SymmetryConfig, SymmetryConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PartialSymmetryConfig {
    tolerance: Option<f64>,
    #[serde(rename = "max-fold")]
    max_fold: Option<u32>,
}

impl PartialSymmetryConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("Invalid TOML in '{}': {}", path.display(), e))
        })
    }

    /// Loads the file named by `--config`, or an empty partial config when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Combines file values with command-line overrides; the command line wins.
    pub fn merge_with_cli(self, args: &DetectArgs) -> Result<SymmetryConfig> {
        let defaults = DefaultsConfig::default();
        SymmetryConfigBuilder::new()
            .tolerance(
                args.tolerance
                    .or(self.tolerance)
                    .unwrap_or(defaults.tolerance),
            )
            .max_fold(args.max_fold.or(self.max_fold).unwrap_or(defaults.max_fold))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn detect_args(extra: &[&str]) -> DetectArgs {
        let mut argv = vec!["molsym", "detect", "-i", "in.xyz"];
        argv.extend_from_slice(extra);
        let Commands::Detect(args) = Cli::parse_from(argv).command;
        args
    }

    #[test]
    fn missing_file_and_flags_fall_back_to_defaults() {
        let config = PartialSymmetryConfig::load(None)
            .unwrap()
            .merge_with_cli(&detect_args(&[]))
            .unwrap();
        assert_eq!(config, SymmetryConfig::default());
    }

    #[test]
    fn file_values_are_used_when_flags_are_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("molsym.toml");
        fs::write(&path, "tolerance = 0.01\nmax-fold = 6\n").unwrap();

        let config = PartialSymmetryConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&detect_args(&[]))
            .unwrap();
        assert_eq!(config.tolerance, 0.01);
        assert_eq!(config.max_fold, 6);
    }

    #[test]
    fn cli_arguments_override_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("molsym.toml");
        fs::write(&path, "tolerance = 0.01\nmax-fold = 6\n").unwrap();

        let config = PartialSymmetryConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&detect_args(&["--tolerance", "0.005"]))
            .unwrap();
        assert_eq!(config.tolerance, 0.005);
        assert_eq!(config.max_fold, 6);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("molsym.toml");
        fs::write(&path, "tolerence = 0.01\n").unwrap();

        let result = PartialSymmetryConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("molsym.toml")));
    }

    #[test]
    fn unreadable_file_reports_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = PartialSymmetryConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("absent.toml")));
    }

    #[test]
    fn invalid_merged_values_are_rejected() {
        let result = PartialSymmetryConfig::default().merge_with_cli(&detect_args(&["--max-fold", "1"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
