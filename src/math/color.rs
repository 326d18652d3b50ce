use std::ops::{Add, AddAssign, Mul};

use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(from = "[f32; 3]")]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const RED: RGBColor = RGBColor::new(1.0, 0.0, 0.0);

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(c: [f32; 3]) -> RGBColor {
        RGBColor::new(c[0], c[1], c[2])
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

/// What the tracer reports for a pixel.
///
/// `Background` means no primary hit: the encoder leaves whatever bytes the
/// framebuffer already holds. `Color` is a shaded pixel, even when every term
/// came out black.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum PixelValue {
    #[default]
    Background,
    Color(RGBColor),
}

impl PixelValue {
    pub fn color(&self) -> Option<RGBColor> {
        match self {
            PixelValue::Background => None,
            PixelValue::Color(c) => Some(*c),
        }
    }
}

impl From<RGBColor> for PixelValue {
    fn from(c: RGBColor) -> Self {
        PixelValue::Color(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_arithmetic() {
        let c = RGBColor::new(0.5, 0.25, 1.0) * 0.5 + RGBColor::new(0.25, 0.0, 0.0);
        assert_eq!(c, RGBColor::new(0.5, 0.125, 0.5));

        let mut acc = RGBColor::BLACK;
        acc += RGBColor::RED;
        acc += 0.5 * RGBColor::RED;
        assert_eq!(acc, RGBColor::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn test_pixel_value() {
        assert_eq!(PixelValue::default(), PixelValue::Background);
        assert_eq!(PixelValue::Background.color(), None);

        let black = PixelValue::from(RGBColor::BLACK);
        assert_eq!(black.color(), Some(RGBColor::BLACK));
    }
}
