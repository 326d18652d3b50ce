//! Offline Whitted-style ray tracer for scenes of spheres lit by point lights.
//!
//! Rendering produces a [`renderer::Framebuffer`] which is written out as an
//! uncompressed TGA and, optionally, a PNG.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod hittable;
pub mod integrator;
pub mod materials;
pub mod math;
pub mod parsing;
pub mod profile;
pub mod renderer;
pub mod tonemap;
pub mod world;

pub use error::RenderError;
