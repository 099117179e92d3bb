use molsym::engine::config::{DEFAULT_MAX_FOLD, DEFAULT_TOLERANCE};

pub struct DefaultsConfig {
    pub tolerance: f64,
    pub max_fold: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_fold: DEFAULT_MAX_FOLD,
        }
    }
}
