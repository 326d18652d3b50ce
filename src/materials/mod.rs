mod lambertian;
mod phong;

pub use lambertian::lambert;
pub use phong::Material;
