use crate::math::*;

#[derive(Copy, Clone, Debug)]
pub struct HitRecord {
    pub time: f32,
    pub point: Vec3,
    pub normal: Vec3,
    /// index of the hit sphere in its scene
    pub sphere_index: usize,
}

impl HitRecord {
    pub fn new(time: f32, point: Vec3, normal: Vec3, sphere_index: usize) -> Self {
        HitRecord {
            time,
            point,
            normal,
            sphere_index,
        }
    }
}
