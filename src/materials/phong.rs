use crate::math::*;

use serde::Deserialize;

/// Specular parameters shared by every sphere in a scene.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Material {
    pub spec_value: f32,
    pub spec_power: f32,
}

impl Material {
    pub const fn new(spec_value: f32, spec_power: f32) -> Self {
        Material {
            spec_value,
            spec_power,
        }
    }

    /// Specular highlight seen from `view_origin`.
    ///
    /// The lobe is centered on `normalize(l - v)` where `v` points from the
    /// eye to the surface. This is not the textbook half vector (`l + v` with
    /// `v` pointing toward the eye) and is kept that way on purpose so
    /// renders match the established look.
    pub fn phong(&self, center: Vec3, point: Vec3, light: Vec3, view_origin: Vec3) -> f32 {
        let normal = (point - center).normalized();
        let light_direction = (light - point).normalized();
        let view_direction = (point - view_origin).normalized();
        let blinn = light_direction - view_direction;
        if blinn.norm_squared() == 0.0 {
            return 0.0;
        }
        let cosine = (blinn.normalized() * normal).max(0.0);
        self.spec_value * cosine.powf(self.spec_power)
    }
}
