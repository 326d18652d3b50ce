mod color;
mod vec;

pub use color::{PixelValue, RGBColor};
pub use vec::Vec3;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// `direction` is expected to already be normalized.
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f32) -> Vec3 {
        self.origin + self.direction * time
    }
}
