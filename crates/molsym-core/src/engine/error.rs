use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot analyse an empty set of nuclei")]
    EmptyInput,

    #[error("Nucleus {index} ({element}) has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize, element: String },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
