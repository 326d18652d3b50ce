mod shading;
mod whitted;

pub use shading::{ambient, contribution_from_light, is_shadowed, SHADOW_BIAS};
pub use whitted::WhittedIntegrator;

use crate::math::*;
use crate::profile::Profile;

pub trait Integrator: Sync + Send {
    /// Traces one camera ray to completion.
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> PixelValue;
}
