use crate::math::*;

use serde::Deserialize;
use smallvec::SmallVec;

/// Roots closer than this are treated as the ray grazing its own origin.
pub const EPSILON: f32 = 0.00001;
pub const DEFAULT_RADIUS: f32 = 0.5;

/// Which roots of a sphere count as hits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Deserialize)]
pub enum RootSelection {
    /// every root past [`EPSILON`]
    #[default]
    All,
    /// only the root picked by [`Sphere::nearest_root`]
    Nearest,
}

fn default_radius() -> f32 {
    DEFAULT_RADIUS
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub albedo: RGBColor,
    #[serde(default = "default_radius")]
    pub radius: f32,
}

/// Projection of the sphere center onto a ray, shared by both root finders.
struct Projection {
    s: f32,
    l_squared: f32,
    q: f32,
}

impl Sphere {
    pub fn new(center: Vec3, albedo: RGBColor) -> Sphere {
        Sphere {
            center,
            albedo,
            radius: DEFAULT_RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Sphere {
        self.radius = radius;
        self
    }

    fn radius_squared(&self) -> f32 {
        self.radius * self.radius
    }

    fn project(&self, r: Ray) -> Option<Projection> {
        let l = self.center - r.origin;
        let s = l * r.direction;
        let l_squared = l * l;
        let r_squared = self.radius_squared();
        if s < 0.0 && l_squared > r_squared {
            // origin outside and sphere behind it
            return None;
        }
        let m_squared = l_squared - s * s;
        if m_squared > r_squared {
            return None;
        }
        Some(Projection {
            s,
            l_squared,
            q: (r_squared - m_squared).sqrt(),
        })
    }

    /// Every parametric distance along `r` where it crosses the sphere, in
    /// ascending order, keeping only those past [`EPSILON`].
    pub fn intersections(&self, r: Ray) -> SmallVec<[f32; 2]> {
        let mut roots = SmallVec::new();
        if let Some(Projection { s, q, .. }) = self.project(r) {
            for t in [s - q, s + q] {
                if t > EPSILON {
                    roots.push(t);
                }
            }
        }
        roots
    }

    /// Single root selection: the entry point when the origin is outside the
    /// sphere, the forward exit point when it is inside.
    pub fn nearest_root(&self, r: Ray) -> Option<f32> {
        let Projection { s, l_squared, q } = self.project(r)?;
        let t = if l_squared > self.radius_squared() {
            s - q
        } else {
            s + q
        };
        (t > EPSILON).then_some(t)
    }

    pub fn roots(&self, r: Ray, selection: RootSelection) -> SmallVec<[f32; 2]> {
        match selection {
            RootSelection::All => self.intersections(r),
            RootSelection::Nearest => self.nearest_root(r).into_iter().collect(),
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_red_at(center: Vec3) -> Sphere {
        Sphere::new(center, RGBColor::RED)
    }

    #[test]
    fn test_hit_from_outside() {
        let sphere = unit_red_at(Vec3::new(0.0, 0.0, -1.0));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let roots = sphere.intersections(ray);
        assert_eq!(roots.as_slice(), &[0.5, 1.5]);
        assert_eq!(sphere.nearest_root(ray), Some(0.5));
        assert_eq!(sphere.normal_at(ray.point_at_parameter(0.5)), Vec3::Z);
    }

    #[test]
    fn test_pointing_away_misses() {
        let sphere = unit_red_at(Vec3::new(0.0, 0.0, -1.0));
        for direction in [Vec3::Z, Vec3::X, Vec3::new(0.3, 0.4, 0.5).normalized()] {
            let ray = Ray::new(Vec3::ZERO, direction);
            assert!(sphere.intersections(ray).is_empty(), "{:?}", direction);
            assert_eq!(sphere.nearest_root(ray), None);
        }
    }

    #[test]
    fn test_passing_beside_misses() {
        let sphere = unit_red_at(Vec3::new(0.0, 0.0, -1.0));
        let ray = Ray::new(Vec3::new(0.6, 0.0, 0.0), -Vec3::Z);
        assert!(sphere.intersections(ray).is_empty());
    }

    #[test]
    fn test_tangent_ray_hits_once() {
        let sphere = unit_red_at(Vec3::new(0.0, 0.0, -1.0));
        let ray = Ray::new(Vec3::new(0.5, 0.0, 0.0), -Vec3::Z);
        assert_eq!(sphere.intersections(ray).as_slice(), &[1.0, 1.0]);
        assert_eq!(sphere.nearest_root(ray), Some(1.0));
    }

    #[test]
    fn test_from_center_forward_distance_is_radius() {
        let center = Vec3::new(0.2, -0.3, -2.0);
        let sphere = unit_red_at(center);
        for direction in [-Vec3::Z, Vec3::Y, Vec3::new(1.0, 1.0, 1.0).normalized()] {
            let ray = Ray::new(center, direction);
            let roots = sphere.intersections(ray);
            assert_eq!(roots.len(), 1);
            assert!((roots[0] - 0.5).abs() < 1e-6);
            let t = sphere.nearest_root(ray).unwrap();
            assert!((t - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_origin_on_surface_ignores_self() {
        let sphere = unit_red_at(Vec3::new(0.0, 0.0, -1.0));
        // leaving the surface outward
        let ray = Ray::new(Vec3::new(0.0, 0.0, -0.5), Vec3::Z);
        assert!(sphere.intersections(ray).is_empty());
        // entering the surface finds only the far side
        let ray = Ray::new(Vec3::new(0.0, 0.0, -0.5), -Vec3::Z);
        assert_eq!(sphere.intersections(ray).as_slice(), &[1.0]);
    }

    #[test]
    fn test_root_selection_just_outside_surface() {
        let sphere = unit_red_at(Vec3::new(0.0, 0.0, -1.0));
        // entry root falls under EPSILON, exit root does not
        let ray = Ray::new(Vec3::new(0.0, 0.0, -0.499995), -Vec3::Z);
        let all = sphere.roots(ray, RootSelection::All);
        assert_eq!(all.len(), 1);
        assert!((all[0] - 1.0).abs() < 1e-4);
        assert!(sphere.roots(ray, RootSelection::Nearest).is_empty());

        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert_eq!(sphere.roots(ray, RootSelection::Nearest).as_slice(), &[0.5]);
    }
}
