use tracing::info;

/// Ray counters gathered per pixel and summed after a render.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,  // primary rays, one per pixel
    pub bounce_rays: usize,  // reflected rays that were traced
    pub shadow_rays: usize,  // visibility tests toward lights
    pub camera_misses: usize, // primary rays that hit nothing
    pub depth_limited: usize, // paths still bouncing when max_depth ran out
}

impl Profile {
    pub fn combine(&self, other: Self) -> Self {
        Profile {
            camera_rays: self.camera_rays + other.camera_rays,
            bounce_rays: self.bounce_rays + other.bounce_rays,
            shadow_rays: self.shadow_rays + other.shadow_rays,
            camera_misses: self.camera_misses + other.camera_misses,
            depth_limited: self.depth_limited + other.depth_limited,
        }
    }

    pub fn total_rays(&self) -> usize {
        self.camera_rays + self.bounce_rays + self.shadow_rays
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let per_second = |n: usize| n as f32 / elapsed;
        info!(
            "{} camera rays, {} missed everything",
            self.camera_rays, self.camera_misses
        );
        info!(
            "{} bounce rays at {} per second",
            self.bounce_rays,
            per_second(self.bounce_rays)
        );
        info!(
            "{} shadow rays at {} per second",
            self.shadow_rays,
            per_second(self.shadow_rays)
        );
        if self.depth_limited > 0 {
            info!("{} paths were cut off by the depth limit", self.depth_limited);
        }
        let total = self.total_rays();
        info!(
            "{} total rays at {} per second and {} per second per thread",
            total,
            per_second(total),
            per_second(total) / (threads as f32)
        );
    }
}
