mod schema;

pub use schema::{ComparisonConfig, Config};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::scoring::validate_input;

/// Get the config directory path (~/.config/policy-distance/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("policy-distance"))
}

/// Get the default comparison file path (~/.config/policy-distance/comparisons.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("comparisons.yaml"))
}

/// Load comparisons from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to the file. If None, uses the default path
///   (~/.config/policy-distance/comparisons.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        anyhow::bail!(
            "Comparison file not found at {}. Create it or pass --config",
            config_path.display()
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read comparison file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse comparisons: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Validate every comparison's counts.
/// Returns all validation errors at once, each prefixed with its comparison index.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let errors: Vec<String> = config
        .comparisons
        .iter()
        .enumerate()
        .filter_map(|(i, comparison)| validate_input(&comparison.input()).err().map(|e| (i, e)))
        .flat_map(|(i, errors)| {
            errors
                .into_iter()
                .map(move |e| format!("comparisons[{}].{}", i, e))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
