use crate::error::RenderError;
use crate::geometry::{RootSelection, Sphere};
use crate::materials::Material;
use crate::math::Vec3;
use crate::world::{Scene, ScenePreset};

use super::tonemap::TonemapSettings;

use serde::Deserialize;

pub const DEFAULT_FILENAME: &str = "output";
pub const DEFAULT_MAX_DEPTH: u16 = 10;
pub const DEFAULT_REFLECTION_DECAY: f32 = 0.6;
pub const DEFAULT_AMBIENT: f32 = 0.1;
const DEFAULT_CUSTOM_RESOLUTION: usize = 512;
/// Film and framebuffer take about 19 bytes per pixel, so this is ~1.2 GiB.
pub const MAX_RESOLUTION: usize = 8192;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    TGA,
    PNG,
    Both,
}

impl OutputFormat {
    pub fn writes_tga(self) -> bool {
        matches!(self, OutputFormat::TGA | OutputFormat::Both)
    }
    pub fn writes_png(self) -> bool {
        matches!(self, OutputFormat::PNG | OutputFormat::Both)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CustomSceneData {
    pub spheres: Vec<Sphere>,
    #[serde(default)]
    pub lights: Vec<Vec3>,
    pub material: Option<Material>,
    pub resolution: Option<usize>,
    #[serde(default)]
    pub root_selection: RootSelection,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(tag = "type")]
pub enum SceneSettings {
    #[default]
    Classic,
    Minimal,
    Custom(CustomSceneData),
}

impl SceneSettings {
    fn preset(&self) -> Option<ScenePreset> {
        match self {
            SceneSettings::Classic => Some(ScenePreset::Classic),
            SceneSettings::Minimal => Some(ScenePreset::Minimal),
            SceneSettings::Custom(_) => None,
        }
    }

    pub fn build(&self) -> Result<Scene, RenderError> {
        match self {
            SceneSettings::Classic => ScenePreset::Classic.build(),
            SceneSettings::Minimal => ScenePreset::Minimal.build(),
            SceneSettings::Custom(data) => Scene::new(
                data.spheres.clone(),
                data.lights.clone(),
                data.material,
            )
            .map(|scene| scene.with_root_selection(data.root_selection)),
        }
    }

    fn default_resolution(&self) -> usize {
        match self {
            SceneSettings::Custom(data) => data.resolution.unwrap_or(DEFAULT_CUSTOM_RESOLUTION),
            _ => self
                .preset()
                .map_or(DEFAULT_CUSTOM_RESOLUTION, ScenePreset::default_resolution),
        }
    }

    fn default_tonemap(&self) -> TonemapSettings {
        self.preset()
            .map_or(TonemapSettings::Clamp { exposure: None }, ScenePreset::default_tonemap)
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub format: Option<OutputFormat>,
    pub resolution: Option<usize>,
    pub max_depth: Option<u16>,
    pub reflection_decay: Option<f32>,
    pub ambient: Option<f32>,
    pub tonemap_settings: Option<TonemapSettings>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLConfig {
    pub threads: Option<u16>,
    #[serde(default)]
    pub scene: SceneSettings,
    #[serde(default)]
    pub render_settings: TOMLRenderSettings,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// output path without extension
    pub filename: String,
    pub format: OutputFormat,
    pub resolution: usize,
    pub max_depth: u16,
    pub reflection_decay: f32,
    pub ambient: f32,
    pub tonemap_settings: TonemapSettings,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub threads: usize,
    pub scene: SceneSettings,
    pub render_settings: RenderSettings,
}

fn check_coefficient(name: &str, value: f32) -> Result<f32, RenderError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RenderError::InvalidSettings(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )))
    }
}

impl TryFrom<TOMLConfig> for Config {
    type Error = RenderError;
    fn try_from(data: TOMLConfig) -> Result<Self, RenderError> {
        let settings = data.render_settings;
        let resolution = settings
            .resolution
            .unwrap_or_else(|| data.scene.default_resolution());
        if resolution == 0 || resolution > MAX_RESOLUTION {
            return Err(RenderError::InvalidSettings(format!(
                "resolution must be between 1 and {}, got {}",
                MAX_RESOLUTION, resolution
            )));
        }
        let max_depth = settings.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if max_depth == 0 {
            return Err(RenderError::InvalidSettings(
                "max_depth must be at least 1".to_string(),
            ));
        }
        let threads = match data.threads {
            Some(0) => num_cpus::get(),
            Some(n) => n as usize,
            None => 1,
        };

        let render_settings = RenderSettings {
            filename: settings
                .filename
                .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            format: settings.format.unwrap_or_default(),
            resolution,
            max_depth,
            reflection_decay: check_coefficient(
                "reflection_decay",
                settings.reflection_decay.unwrap_or(DEFAULT_REFLECTION_DECAY),
            )?,
            ambient: check_coefficient("ambient", settings.ambient.unwrap_or(DEFAULT_AMBIENT))?,
            tonemap_settings: settings
                .tonemap_settings
                .unwrap_or_else(|| data.scene.default_tonemap()),
        };
        Ok(Config {
            threads,
            scene: data.scene,
            render_settings,
        })
    }
}
