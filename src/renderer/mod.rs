mod film;
mod naive;
mod vec2d;

pub use film::{Framebuffer, TGA_HEADER_LEN};
pub use naive::NaiveRenderer;
pub use vec2d::Vec2D;

use crate::error::RenderError;
use crate::parsing::{Config, RenderSettings};
use crate::world::Scene;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

pub trait Renderer {
    fn render(&self, scene: Arc<Scene>, config: &Config) -> Result<Framebuffer, RenderError>;
}

/// Writes the framebuffer in every format the settings ask for and returns
/// the paths written.
pub fn output_film(
    render_settings: &RenderSettings,
    framebuffer: &Framebuffer,
) -> Result<Vec<PathBuf>, RenderError> {
    let now = Instant::now();
    let base = PathBuf::from(&render_settings.filename);
    if let Some(parent) = base.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut written = Vec::new();
    if render_settings.format.writes_tga() {
        let path = base.with_extension("tga");
        info!("saving tga image to {}", path.display());
        framebuffer.write_tga(BufWriter::new(File::create(&path)?))?;
        written.push(path);
    }
    if render_settings.format.writes_png() {
        let path = base.with_extension("png");
        info!("saving png image to {}", path.display());
        framebuffer
            .to_rgb_image()
            .save_with_format(&path, image::ImageFormat::Png)?;
        written.push(path);
    }
    info!("took {}s to output", now.elapsed().as_secs_f32());
    Ok(written)
}
