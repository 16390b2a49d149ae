//! Configuration APIs for zcontainers
//!
//! The [`Config`] trait gives every configuration type the same surface:
//! validation, initialization from environment variables, presets and JSON
//! persistence.
//!
//! # Core Configuration Types
//!
//! - [`TableConfig`]: sizing, load factor and seeding for [`ZMap`](crate::ZMap)
//!
//! # Preset Configurations
//!
//! ```rust
//! use zcontainers::config::{Config, TableConfig};
//!
//! // Sparse table, short probe sequences
//! let config = TableConfig::performance_preset();
//!
//! // Dense table, fewer empty slots
//! let config = TableConfig::memory_preset();
//! assert!(config.validate().is_ok());
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use zcontainers::config::{Config, TableConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads ZCONTAINERS_TABLE_INITIAL_CAPACITY and friends
//! let config = TableConfig::from_env()?;
//!
//! // Same variables under a custom prefix
//! let config = TableConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod table;

#[cfg(test)]
mod tests;

pub use table::TableConfig;

/// Prefix used by [`Config::from_env`]
pub const ENV_PREFIX: &str = "ZCONTAINERS_";

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `ZCONTAINERS_{COMPONENT}_{FIELD}`,
    /// for example `ZCONTAINERS_TABLE_MAX_LOAD_FACTOR=0.5`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables keep their default value. The result is
    /// validated before it is returned.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset favoring speed over memory.
    fn performance_preset() -> Self;

    /// Preset favoring small memory footprint.
    fn memory_preset() -> Self;

    /// Preset favoring predictable latency (few rehashes after warm-up).
    fn realtime_preset() -> Self;

    /// Balanced preset; the default configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    ///
    /// File system failures are returned as [`ZError::Io`](crate::ZError::Io).
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    ///
    /// A missing or unreadable file is [`ZError::Io`](crate::ZError::Io);
    /// malformed or invalid contents are a configuration error.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse an optional environment variable; `None` when unset or unparsable.
pub fn parse_env_opt<T>(var_name: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(var_name).ok().and_then(|s| s.trim().parse().ok())
}
