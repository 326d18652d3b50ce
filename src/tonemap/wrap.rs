use crate::math::RGBColor;

use super::Tonemapper;

/// Keeps only the low byte of `channel * 255`, so overbright channels wrap
/// around instead of saturating. Matches the look of the diffuse-only preset.
#[derive(Copy, Clone, Debug, Default)]
pub struct Wrap;

impl Tonemapper for Wrap {
    fn map(&self, color: RGBColor) -> [u8; 3] {
        let to_byte = |c: f32| ((c * 255.0) as i64 & 0xFF) as u8;
        [to_byte(color.r), to_byte(color.g), to_byte(color.b)]
    }
}
