use super::{Framebuffer, Renderer, Vec2D};

use crate::camera::OrthographicCamera;
use crate::error::RenderError;
use crate::integrator::{Integrator, WhittedIntegrator};
use crate::math::PixelValue;
use crate::parsing::{parse_tonemapper, Config, RenderSettings};
use crate::profile::Profile;
use crate::world::Scene;

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

/// One camera ray per pixel, pixels spread over a rayon pool.
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    /// Traces every pixel of a square film. Pixels are independent and land
    /// at their own index, so the result does not depend on scheduling.
    pub fn render_film<I: Integrator>(
        integrator: &I,
        camera: &OrthographicCamera,
    ) -> (Vec2D<PixelValue>, Profile) {
        let resolution = camera.resolution();
        let mut film = Vec2D::new(resolution, resolution, PixelValue::Background);
        let stats = film
            .buffer
            .par_iter_mut()
            .enumerate()
            .map(|(pixel_index, pixel_ref)| {
                let mut profile = Profile::default();
                let y = pixel_index / resolution;
                let x = pixel_index - resolution * y;
                *pixel_ref = integrator.color(camera.get_ray(x, y), &mut profile);
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b));
        (film, stats)
    }

    pub fn render_with_settings(
        &self,
        scene: Arc<Scene>,
        settings: &RenderSettings,
        threads: usize,
    ) -> Result<Framebuffer, RenderError> {
        let resolution = settings.resolution;
        info!(
            "starting render with film resolution {}x{} on {} threads",
            resolution, resolution, threads
        );
        let integrator = WhittedIntegrator {
            scene,
            max_depth: settings.max_depth,
            reflection_decay: settings.reflection_decay,
            ambient: settings.ambient,
        };
        let camera = OrthographicCamera::new(resolution);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;

        let now = Instant::now();
        let (film, stats) = pool.install(|| Self::render_film(&integrator, &camera));
        let elapsed = now.elapsed().as_secs_f32();
        info!("took {}s", elapsed);
        stats.pretty_print(elapsed, threads);

        let mut framebuffer = Framebuffer::with_gradient(resolution);
        let tonemapper = parse_tonemapper(settings.tonemap_settings);
        framebuffer.develop(&film, &*tonemapper);
        debug!("developed film with {:?}", settings.tonemap_settings);
        Ok(framebuffer)
    }
}

impl Default for NaiveRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, scene: Arc<Scene>, config: &Config) -> Result<Framebuffer, RenderError> {
        self.render_with_settings(scene, &config.render_settings, config.threads)
    }
}
