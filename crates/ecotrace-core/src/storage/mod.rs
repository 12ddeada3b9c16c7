mod config;

pub use config::{Config, OutputConfig, OutputFormat, WizardConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/ecotrace[-<env>]/` based on ECOTRACE_ENV.
///
/// Set ECOTRACE_ENV=dev (or any other name) to use a separate directory;
/// unset or `production` uses the plain one.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ECOTRACE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env.is_empty() || env == "production" {
        base_dir.join("ecotrace")
    } else {
        base_dir.join(format!("ecotrace-{env}"))
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
