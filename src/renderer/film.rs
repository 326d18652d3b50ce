use super::Vec2D;
use crate::math::PixelValue;
use crate::tonemap::Tonemapper;

use std::io::{self, Write};

pub const TGA_HEADER_LEN: usize = 18;
const TGA_UNCOMPRESSED_TRUECOLOR: u8 = 2;
const TGA_BITS_PER_PIXEL: u8 = 24;

/// Final 8 bit raster, one `[b, g, r]` triple per pixel, first stored row
/// first. The first stored row is the bottom of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    pub pixels: Vec2D<[u8; 3]>,
}

impl Framebuffer {
    /// Square framebuffer pre-filled with the diagnostic gradient: blue ramps
    /// with the row, green with the column, red stays 0. The per-pixel step
    /// is `255 / resolution` truncated to a byte.
    pub fn with_gradient(resolution: usize) -> Self {
        let mut pixels = Vec2D::new(resolution, resolution, [0u8; 3]);
        let step = (255.0 / resolution as f32) as u8;
        let mut blue = 0u8;
        for y in 0..resolution {
            let mut green = 0u8;
            for x in 0..resolution {
                pixels.write_at(x, y, [blue, green, 0]);
                green = green.wrapping_add(step);
            }
            blue = blue.wrapping_add(step);
        }
        Framebuffer { pixels }
    }

    pub fn width(&self) -> usize {
        self.pixels.width
    }

    pub fn height(&self) -> usize {
        self.pixels.height
    }

    /// `[b, g, r]` at column `x`, row `y`.
    pub fn at(&self, x: usize, y: usize) -> [u8; 3] {
        self.pixels.at(x, y)
    }

    /// Writes every shaded pixel of `film`. Background pixels keep whatever
    /// the framebuffer already holds.
    pub fn develop(&mut self, film: &Vec2D<PixelValue>, tonemapper: &dyn Tonemapper) {
        debug_assert_eq!(film.width, self.pixels.width);
        debug_assert_eq!(film.height, self.pixels.height);
        for (x, y, value) in film.enumerate() {
            if let PixelValue::Color(color) = value {
                let [r, g, b] = tonemapper.map(*color);
                self.pixels.write_at(x, y, [b, g, r]);
            }
        }
    }

    pub fn tga_header(&self) -> [u8; TGA_HEADER_LEN] {
        let mut header = [0u8; TGA_HEADER_LEN];
        header[2] = TGA_UNCOMPRESSED_TRUECOLOR;
        header[12..14].copy_from_slice(&(self.width() as u16).to_le_bytes());
        header[14..16].copy_from_slice(&(self.height() as u16).to_le_bytes());
        header[16] = TGA_BITS_PER_PIXEL;
        header
    }

    /// Uncompressed truecolor TGA: header, then the pixels in stored order.
    pub fn write_tga<W: Write>(&self, mut writer: W) -> io::Result<()> {
        debug_assert!(self.width() <= u16::MAX as usize && self.height() <= u16::MAX as usize);
        writer.write_all(&self.tga_header())?;
        let bytes: Vec<u8> = self.pixels.buffer.iter().flatten().copied().collect();
        writer.write_all(&bytes)?;
        writer.flush()
    }

    /// RGB image with the top row first, matching how the TGA displays.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let height = self.height() as u32;
        image::RgbImage::from_fn(self.width() as u32, height, |x, y| {
            let [b, g, r] = self.at(x as usize, (height - 1 - y) as usize);
            image::Rgb([r, g, b])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::RGBColor;
    use crate::tonemap::Clamp;

    #[test]
    fn test_gradient() {
        let framebuffer = Framebuffer::with_gradient(4);
        // 255 / 4 truncates to 63
        assert_eq!(framebuffer.at(0, 0), [0, 0, 0]);
        assert_eq!(framebuffer.at(3, 0), [0, 189, 0]);
        assert_eq!(framebuffer.at(0, 2), [126, 0, 0]);
        assert_eq!(framebuffer.at(3, 3), [189, 189, 0]);
    }

    #[test]
    fn test_gradient_step_truncates_to_zero_at_large_resolutions() {
        let framebuffer = Framebuffer::with_gradient(512);
        assert!(framebuffer.pixels.buffer.iter().all(|p| *p == [0, 0, 0]));
    }

    #[test]
    fn test_gradient_small() {
        let framebuffer = Framebuffer::with_gradient(2);
        assert_eq!(framebuffer.at(1, 1), [127, 127, 0]);
        let framebuffer = Framebuffer::with_gradient(3);
        assert_eq!(framebuffer.at(2, 0), [0, 170, 0]);
    }

    #[test]
    fn test_develop_keeps_background() {
        let mut framebuffer = Framebuffer::with_gradient(4);
        let mut film = Vec2D::new(4, 4, PixelValue::Background);
        film.write_at(1, 2, PixelValue::Color(RGBColor::new(1.0, 0.5, 0.0)));
        film.write_at(2, 2, PixelValue::Color(RGBColor::BLACK));
        framebuffer.develop(&film, &Clamp::new(0.0));

        assert_eq!(framebuffer.at(1, 2), [0, 127, 255]);
        assert_eq!(framebuffer.at(2, 2), [0, 0, 0]);
        assert_eq!(framebuffer.at(3, 3), [189, 189, 0]);
    }

    #[test]
    fn test_tga_header() {
        for resolution in [4usize, 128, 300, 512] {
            let framebuffer = Framebuffer::with_gradient(resolution);
            let header = framebuffer.tga_header();
            assert_eq!(header[2], 2);
            assert_eq!(header[12], (resolution & 0xFF) as u8);
            assert_eq!(header[13], ((resolution >> 8) & 0xFF) as u8);
            assert_eq!(header[14], header[12]);
            assert_eq!(header[15], header[13]);
            assert_eq!(header[16], 24);
            for (i, byte) in header.iter().enumerate() {
                if ![2, 12, 13, 14, 15, 16].contains(&i) {
                    assert_eq!(*byte, 0, "header byte {}", i);
                }
            }
        }
    }

    #[test]
    fn test_write_tga() {
        let framebuffer = Framebuffer::with_gradient(4);
        let mut bytes = Vec::new();
        framebuffer.write_tga(&mut bytes).unwrap();
        assert_eq!(bytes.len(), TGA_HEADER_LEN + 4 * 4 * 3);
        // second pixel of the first row, b g r
        assert_eq!(&bytes[TGA_HEADER_LEN + 3..TGA_HEADER_LEN + 6], &[0, 63, 0]);
        // first pixel of the second row
        assert_eq!(&bytes[TGA_HEADER_LEN + 12..TGA_HEADER_LEN + 15], &[63, 0, 0]);
    }

    #[test]
    fn test_rgb_image_is_flipped() {
        let framebuffer = Framebuffer::with_gradient(4);
        let img = framebuffer.to_rgb_image();
        // bottom stored row is the top of the png
        assert_eq!(img.get_pixel(3, 0).0, [0, 189, 189]);
        assert_eq!(img.get_pixel(3, 3).0, [0, 189, 0]);
    }
}
