use crate::math::*;

/// Fixed camera on the z = 0 plane looking down -Z, with the film spanning
/// [-1, 1] on both axes.
#[derive(Copy, Clone, Debug)]
pub struct OrthographicCamera {
    resolution: usize,
}

impl OrthographicCamera {
    pub fn new(resolution: usize) -> Self {
        debug_assert!(resolution > 0);
        OrthographicCamera { resolution }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Maps a pixel coordinate in `[0, resolution)` to world space.
    pub fn pixel_to_world(&self, coordinate: usize) -> f32 {
        ((coordinate as f32 / self.resolution as f32) - 0.5) * 2.0
    }

    /// Primary ray through pixel column `x`, row `y`.
    pub fn get_ray(&self, x: usize, y: usize) -> Ray {
        Ray::new(
            Vec3::new(self.pixel_to_world(x), self.pixel_to_world(y), 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        )
    }
}
