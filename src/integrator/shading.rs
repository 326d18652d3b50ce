use crate::geometry::{Sphere, EPSILON};
use crate::hittable::HitRecord;
use crate::materials::lambert;
use crate::math::*;
use crate::profile::Profile;
use crate::world::Scene;

/// How far shadow rays start off the surface, along the outward normal.
pub const SHADOW_BIAS: f32 = 10.0 * EPSILON;

pub fn ambient(sphere: &Sphere, coefficient: f32) -> RGBColor {
    sphere.albedo * coefficient
}

/// Whether anything in the scene blocks the path from `hit` toward `light`.
/// Any sphere along the ray counts, the hit sphere included.
pub fn is_shadowed(scene: &Scene, hit: &HitRecord, light: Vec3, profile: &mut Profile) -> bool {
    profile.shadow_rays += 1;
    let origin = hit.point + hit.normal * SHADOW_BIAS;
    let shadow_ray = Ray::new(origin, (light - origin).normalized());
    scene.closest_intersection(shadow_ray).is_some()
}

/// Direct lighting from one light at `hit`, seen from `view_origin`.
pub fn contribution_from_light(
    scene: &Scene,
    hit: &HitRecord,
    light: Vec3,
    view_origin: Vec3,
    profile: &mut Profile,
) -> RGBColor {
    if is_shadowed(scene, hit, light, profile) {
        return RGBColor::BLACK;
    }
    let sphere = scene.get_sphere(hit.sphere_index);
    let diffuse = sphere.albedo * lambert(sphere.center, hit.point, light);
    match scene.material {
        Some(material) => {
            diffuse + sphere.albedo * material.phong(sphere.center, hit.point, light, view_origin)
        }
        None => diffuse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;

    fn target_and_occluder(material: Option<Material>) -> Scene {
        Scene::new(
            vec![
                Sphere::new(Vec3::new(0.0, 0.0, -1.0), RGBColor::new(1.0, 1.0, 1.0)),
                // behind the camera, between the target and the overhead light
                Sphere::new(Vec3::new(0.0, 0.0, 1.0), RGBColor::RED),
            ],
            vec![Vec3::new(0.0, 0.0, 2.0), Vec3::new(2.0, 0.0, 0.0)],
            material,
        )
        .unwrap()
    }

    fn primary_hit(scene: &Scene) -> HitRecord {
        let hit = scene
            .closest_intersection(Ray::new(Vec3::ZERO, -Vec3::Z))
            .unwrap();
        assert_eq!(hit.sphere_index, 0);
        hit
    }

    #[test]
    fn test_occluded_light_is_black_other_light_contributes() {
        let scene = target_and_occluder(None);
        let hit = primary_hit(&scene);
        let mut profile = Profile::default();

        let blocked =
            contribution_from_light(&scene, &hit, scene.lights[0], Vec3::ZERO, &mut profile);
        assert_eq!(blocked, RGBColor::BLACK);

        let lit = contribution_from_light(&scene, &hit, scene.lights[1], Vec3::ZERO, &mut profile);
        let expected = lambert(Vec3::new(0.0, 0.0, -1.0), hit.point, scene.lights[1]);
        assert!(expected > 0.0);
        assert!((lit.r - expected).abs() < 1e-6);
        assert_eq!(lit.r, lit.g);
        assert_eq!(profile.shadow_rays, 2);
    }

    #[test]
    fn test_light_behind_surface_is_shadowed_by_own_sphere() {
        let scene = Scene::new(
            vec![Sphere::new(Vec3::new(0.0, 0.0, -1.0), RGBColor::RED)],
            vec![Vec3::new(0.0, 0.0, -3.0)],
            None,
        )
        .unwrap();
        let hit = primary_hit(&scene);
        let mut profile = Profile::default();
        assert!(is_shadowed(&scene, &hit, scene.lights[0], &mut profile));
    }

    #[test]
    fn test_sphere_beyond_the_light_still_shadows() {
        let target = Sphere::new(Vec3::new(0.0, 0.0, -1.0), RGBColor::new(1.0, 1.0, 1.0));
        let light = Vec3::new(0.0, 0.0, 1.0);
        let mut profile = Profile::default();

        let open = Scene::new(vec![target], vec![light], None).unwrap();
        let hit = primary_hit(&open);
        assert!(!is_shadowed(&open, &hit, light, &mut profile));

        // the far sphere sits on the shadow ray past the light
        let far = Sphere::new(Vec3::new(0.0, 0.0, 3.0), RGBColor::RED);
        let blocked = Scene::new(vec![target, far], vec![light], None).unwrap();
        let hit = primary_hit(&blocked);
        assert!(is_shadowed(&blocked, &hit, light, &mut profile));
        assert_eq!(
            contribution_from_light(&blocked, &hit, light, Vec3::ZERO, &mut profile),
            RGBColor::BLACK
        );
    }

    #[test]
    fn test_specular_adds_to_diffuse() {
        let diffuse_only = target_and_occluder(None);
        let shiny = target_and_occluder(Some(Material::new(0.5, 4.0)));
        let hit = primary_hit(&shiny);
        let mut profile = Profile::default();
        let light = shiny.lights[1];
        let eye = Vec3::ZERO;

        let plain = contribution_from_light(&diffuse_only, &hit, light, eye, &mut profile);
        let highlighted = contribution_from_light(&shiny, &hit, light, eye, &mut profile);
        let specular = Material::new(0.5, 4.0).phong(Vec3::new(0.0, 0.0, -1.0), hit.point, light, eye);
        assert!(specular > 0.0);
        assert!((highlighted.r - (plain.r + specular)).abs() < 1e-6);
    }

    #[test]
    fn test_ambient() {
        let sphere = Sphere::new(Vec3::ZERO, RGBColor::new(1.0, 0.5, 0.0));
        assert_eq!(ambient(&sphere, 0.1), RGBColor::new(0.1, 0.05, 0.0));
    }
}
