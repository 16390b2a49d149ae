//! Hash table configuration.

use super::{parse_env_opt, parse_env_var, Config};
use crate::error::{Result, ZError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sizing and seeding parameters for [`ZMap`](crate::ZMap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Slot count requested for the first allocation (rounded up to a power of two)
    pub initial_capacity: usize,
    /// Maximum fraction of slots that may be occupied or tombstoned
    pub max_load_factor: f32,
    /// Fixed hash seed; a random one is drawn per table when `None`
    pub seed: Option<u32>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            max_load_factor: 0.75,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Same configuration with a fixed seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Config for TableConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(ZError::configuration("initial_capacity must be greater than 0"));
        }
        if self.initial_capacity > usize::MAX / 2 + 1 {
            return Err(ZError::configuration(format!(
                "initial_capacity {} cannot be rounded to a power of two",
                self.initial_capacity
            )));
        }
        // NaN fails both comparisons.
        if !(self.max_load_factor > 0.0 && self.max_load_factor < 1.0) {
            return Err(ZError::configuration(format!(
                "max_load_factor must be in (0, 1), got {}",
                self.max_load_factor
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.initial_capacity = parse_env_var(
            &format!("{}TABLE_INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        config.max_load_factor = parse_env_var(
            &format!("{}TABLE_MAX_LOAD_FACTOR", prefix),
            config.max_load_factor,
        );
        config.seed = parse_env_opt(&format!("{}TABLE_SEED", prefix));
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self { initial_capacity: 64, max_load_factor: 0.5, seed: None }
    }

    fn memory_preset() -> Self {
        Self { initial_capacity: 8, max_load_factor: 0.9, seed: None }
    }

    fn realtime_preset() -> Self {
        Self { initial_capacity: 1024, max_load_factor: 0.5, seed: None }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| ZError::configuration(format!("Failed to serialize table config: {}", e)))?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ZError::configuration(format!("Failed to parse table config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
