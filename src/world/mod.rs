mod presets;

pub use presets::ScenePreset;

use crate::error::RenderError;
use crate::geometry::{RootSelection, Sphere};
use crate::hittable::HitRecord;
use crate::materials::Material;
use crate::math::*;

use tracing::debug;

/// Immutable description of everything a render can see.
///
/// Sphere order only matters when two hits are exactly equally distant; the
/// earlier sphere wins.
#[derive(Clone, Debug)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Vec3>,
    pub material: Option<Material>,
    pub root_selection: RootSelection,
}

impl Scene {
    /// Builds a scene, rejecting geometry that shading could not handle.
    pub fn new(
        spheres: Vec<Sphere>,
        lights: Vec<Vec3>,
        material: Option<Material>,
    ) -> Result<Self, RenderError> {
        for (index, sphere) in spheres.iter().enumerate() {
            if !sphere.center.is_finite() || !sphere.albedo.is_finite() {
                return Err(RenderError::DegenerateGeometry(format!(
                    "sphere {} has non-finite center or albedo",
                    index
                )));
            }
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(RenderError::DegenerateGeometry(format!(
                    "sphere {} has radius {}",
                    index, sphere.radius
                )));
            }
            for light in lights.iter() {
                // a light on the surface could coincide with a hit point
                if (*light - sphere.center).norm_squared() <= sphere.radius * sphere.radius {
                    return Err(RenderError::DegenerateGeometry(format!(
                        "light at {:?} is on or inside sphere {}",
                        light, index
                    )));
                }
            }
        }
        if let Some(light) = lights.iter().find(|l| !l.is_finite()) {
            return Err(RenderError::DegenerateGeometry(format!(
                "light at {:?} is not finite",
                light
            )));
        }
        debug!(
            "built scene with {} spheres and {} lights, specular: {:?}",
            spheres.len(),
            lights.len(),
            material
        );
        Ok(Scene {
            spheres,
            lights,
            material,
            root_selection: RootSelection::default(),
        })
    }

    pub fn with_root_selection(mut self, root_selection: RootSelection) -> Self {
        self.root_selection = root_selection;
        self
    }

    pub fn get_sphere(&self, index: usize) -> &Sphere {
        &self.spheres[index]
    }

    /// Nearest hit along `r` over every sphere, counting the roots allowed by
    /// the scene's [`RootSelection`].
    pub fn closest_intersection(&self, r: Ray) -> Option<HitRecord> {
        let mut closest: Option<(usize, f32)> = None;
        for (index, sphere) in self.spheres.iter().enumerate() {
            for t in sphere.roots(r, self.root_selection) {
                if closest.map_or(true, |(_, best)| t < best) {
                    closest = Some((index, t));
                }
            }
        }
        closest.map(|(index, time)| {
            let point = r.point_at_parameter(time);
            let normal = self.spheres[index].normal_at(point);
            HitRecord::new(time, point, normal, index)
        })
    }
}
