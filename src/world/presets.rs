use super::Scene;
use crate::error::RenderError;
use crate::geometry::{RootSelection, Sphere};
use crate::materials::Material;
use crate::math::*;
use crate::parsing::TonemapSettings;

const RED: RGBColor = RGBColor::RED;
const YELLOW: RGBColor = RGBColor::new(0.96, 0.94, 0.32);

/// Built-in scenes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScenePreset {
    /// Two spheres, two lights, shared specular, 512x512, clamped output.
    Classic,
    /// Two spheres, one light, diffuse only, one root per sphere, 128x128,
    /// wrapping output.
    Minimal,
}

impl ScenePreset {
    pub fn build(self) -> Result<Scene, RenderError> {
        let spheres = vec![
            Sphere::new(Vec3::new(0.0, 0.3, -1.0), RED),
            Sphere::new(Vec3::new(0.0, -0.3, -1.0), YELLOW),
        ];
        match self {
            ScenePreset::Classic => Scene::new(
                spheres,
                vec![Vec3::new(0.5, 0.5, 0.0), Vec3::new(-0.5, 0.5, 0.0)],
                Some(Material::new(0.5, 30.0)),
            ),
            ScenePreset::Minimal => Scene::new(spheres, vec![Vec3::new(0.5, 0.5, 0.0)], None)
                .map(|scene| scene.with_root_selection(RootSelection::Nearest)),
        }
    }

    pub fn default_resolution(self) -> usize {
        match self {
            ScenePreset::Classic => 512,
            ScenePreset::Minimal => 128,
        }
    }

    pub fn default_tonemap(self) -> TonemapSettings {
        match self {
            ScenePreset::Classic => TonemapSettings::Clamp { exposure: None },
            ScenePreset::Minimal => TonemapSettings::Wrap,
        }
    }
}
