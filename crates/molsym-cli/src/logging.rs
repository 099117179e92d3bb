use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber: compact events on stderr, plus plain-text events with
/// thread ids in `log_file` when given.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let file_layer = log_file
        .as_deref()
        .map(File::create)
        .transpose()?
        .map(|file| {
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_thread_ids(true)
        });

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install the logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use tracing::{debug, info, warn};

    static INIT: Once = Once::new();

    #[test]
    fn verbosity_maps_to_level_filters() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::ERROR);
    }

    #[test]
    #[serial]
    fn global_logger_installs_once() {
        INIT.call_once(|| {
            setup_logging(3, false, None).unwrap();
        });
        warn!(tolerance = 1e-3, "Logged through the global subscriber.");
        assert!(setup_logging(0, false, None).is_err());
    }

    #[test]
    #[serial]
    fn file_layer_records_fields_and_thread_ids_without_ansi() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("molsym.log");

        let file = File::create(&log_path).unwrap();
        let subscriber = tracing_subscriber::registry().with(LevelFilter::DEBUG).with(
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_thread_ids(true),
        );

        tracing::subscriber::with_default(subscriber, || {
            debug!(rotations = 13, "Rotation search complete.");
            info!(point_group = "O_{h}", "Classified.");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("rotations=13"));
        assert!(content.contains("point_group=\"O_{h}\""));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("ThreadId"));
        assert!(!content.contains("\u{1b}["));
    }

    #[test]
    #[serial]
    fn directory_as_log_file_is_an_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = setup_logging(0, false, Some(temp_dir.path().to_path_buf()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
