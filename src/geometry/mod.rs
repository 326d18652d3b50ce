mod sphere;

pub use sphere::{RootSelection, Sphere, DEFAULT_RADIUS, EPSILON};
