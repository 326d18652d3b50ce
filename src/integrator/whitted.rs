use crate::integrator::shading::{ambient, contribution_from_light};
use crate::integrator::Integrator;
use crate::math::*;
use crate::profile::Profile;
use crate::world::Scene;

use std::sync::Arc;

/// Local illumination plus perfect mirror reflection, attenuated
/// geometrically per bounce.
pub struct WhittedIntegrator {
    pub scene: Arc<Scene>,
    pub max_depth: u16,
    pub reflection_decay: f32,
    pub ambient: f32,
}

impl Integrator for WhittedIntegrator {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> PixelValue {
        profile.camera_rays += 1;
        let mut ray = camera_ray;
        let mut sum = RGBColor::BLACK;
        let mut primary_hit = false;
        let mut reflection_factor = 1.0;
        let mut terminated = false;

        for depth in 0..self.max_depth {
            if depth > 0 {
                profile.bounce_rays += 1;
            }
            let Some(hit) = self.scene.closest_intersection(ray) else {
                if depth == 0 {
                    profile.camera_misses += 1;
                }
                terminated = true;
                break;
            };
            let sphere = self.scene.get_sphere(hit.sphere_index);
            if depth == 0 {
                primary_hit = true;
                sum += ambient(sphere, self.ambient);
            }
            for &light in self.scene.lights.iter() {
                sum += contribution_from_light(&self.scene, &hit, light, ray.origin, profile)
                    * reflection_factor;
            }
            debug_assert!(sum.is_finite(), "{:?} at depth {} gave {:?}", camera_ray, depth, sum);

            reflection_factor *= self.reflection_decay;
            ray = Ray::new(hit.point, ray.direction.reflect(hit.normal));
        }
        if !terminated {
            profile.depth_limited += 1;
        }

        if primary_hit {
            PixelValue::Color(sum)
        } else {
            PixelValue::Background
        }
    }
}
