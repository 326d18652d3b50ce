use crate::math::*;

/// Diffuse term at `point` on a sphere centered at `center`, lit from
/// `light`. Light arriving from behind the surface contributes nothing.
pub fn lambert(center: Vec3, point: Vec3, light: Vec3) -> f32 {
    let light_direction = (light - point).normalized();
    let normal = (point - center).normalized();
    (light_direction * normal).max(0.0)
}
