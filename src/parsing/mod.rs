pub mod config;
pub mod tonemap;

pub use config::{
    Config, CustomSceneData, OutputFormat, RenderSettings, SceneSettings, TOMLConfig,
    TOMLRenderSettings,
};
pub use tonemap::{parse_tonemapper, TonemapSettings};

use crate::error::RenderError;

use std::fs;
use std::path::Path;

use tracing::info;

pub fn get_settings(filepath: &Path) -> Result<TOMLConfig, RenderError> {
    info!("loading config file at {}", filepath.display());
    let input = fs::read_to_string(filepath).map_err(|source| RenderError::Config {
        path: filepath.to_path_buf(),
        source,
    })?;
    let settings: TOMLConfig = toml::from_str(&input)?;
    Ok(settings)
}

/// Reads and validates a config file.
pub fn load_config(filepath: &Path) -> Result<Config, RenderError> {
    Config::try_from(get_settings(filepath)?)
}
