use crate::math::RGBColor;

use super::Tonemapper;

/// Scales by 10^exposure and clamps every channel to [0, 1].
#[derive(Clone, Debug)]
pub struct Clamp {
    exposure: f32,
}

impl Clamp {
    pub fn new(exposure: f32) -> Self {
        Self { exposure }
    }
}

impl Tonemapper for Clamp {
    fn map(&self, color: RGBColor) -> [u8; 3] {
        let scale = 10.0f32.powf(self.exposure);
        let to_byte = |c: f32| {
            // NaN would clamp to NaN, treat it as black
            let c = if c.is_nan() { 0.0 } else { c };
            ((c * scale).clamp(0.0, 1.0) * 255.0) as u8
        };
        [to_byte(color.r), to_byte(color.g), to_byte(color.b)]
    }
}
