use thiserror::Error;

/// Distance and angle tolerance used by every geometric comparison unless overridden.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Highest rotational order tried for each candidate axis unless overridden.
pub const DEFAULT_MAX_FOLD: u32 = 8;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Tolerance must be a finite positive number, got {0}")]
    InvalidTolerance(f64),

    #[error("Maximum fold must be at least 2, got {0}")]
    InvalidMaxFold(u32),
}

/// Parameters shared by every stage of a detection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryConfig {
    /// Epsilon for distance and angle comparisons.
    pub tolerance: f64,
    /// Rotational orders `2..=max_fold` are tested for every candidate axis.
    pub max_fold: u32,
}

impl Default for SymmetryConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_fold: DEFAULT_MAX_FOLD,
        }
    }
}

impl SymmetryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if self.max_fold < 2 {
            return Err(ConfigError::InvalidMaxFold(self.max_fold));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct SymmetryConfigBuilder {
    tolerance: Option<f64>,
    max_fold: Option<u32>,
}

impl SymmetryConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    pub fn max_fold(mut self, max_fold: u32) -> Self {
        self.max_fold = Some(max_fold);
        self
    }

    pub fn build(self) -> Result<SymmetryConfig, ConfigError> {
        let config = SymmetryConfig {
            tolerance: self
                .tolerance
                .ok_or(ConfigError::MissingParameter("tolerance"))?,
            max_fold: self
                .max_fold
                .ok_or(ConfigError::MissingParameter("max_fold"))?,
        };
        config.validate()?;
        Ok(config)
    }
}
