use crate::math::RGBColor;

mod clamp;
mod wrap;

pub use clamp::Clamp;
pub use wrap::Wrap;

/// Converts an accumulated linear color to display bytes, in R, G, B order.
pub trait Tonemapper: Send + Sync {
    fn map(&self, color: RGBColor) -> [u8; 3];
}
