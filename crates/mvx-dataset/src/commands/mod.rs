use std::error::Error;
use std::fs;
use std::path::Path;

use mvx_extract::ExtractConfig;

pub mod doctor;
pub mod extract;
pub mod version;

/// Loads a YAML configuration, falling back to the reference experiment
/// when no file is given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<ExtractConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(ExtractConfig::default());
    };
    let contents = fs::read_to_string(path)?;
    let config: ExtractConfig = serde_yaml::from_str(&contents)?;
    Ok(config)
}
