//! Screen-space picking
//!
//! Turns a cursor position into a world ray and resolves which object or
//! gizmo body the ray is over. Queries are read-only: nothing here moves
//! objects.

use glam::Vec4;
use sk_core::{Aabb, Scene};
use uuid::Uuid;

use crate::camera::Camera;
use crate::config::{PickPolicy, ViewportConfig};
use crate::gizmo::GizmoSet;
use crate::ray::{Ray, ray_aabb_entry};

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_config(&ViewportConfig::default())
    }
}

impl Viewport {
    /// Create a viewport. Sizes below one pixel are raised to one.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Viewport with the configured initial size
    pub fn from_config(config: &ViewportConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Apply a window resize
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Unproject a pixel into a world-space ray starting at the camera.
    ///
    /// The pixel is placed on the far plane in clip space, taken back
    /// through the inverse view-projection and the ray aims at it.
    pub fn screen_to_ray(&self, camera: &Camera, x: f32, y: f32) -> Ray {
        let ndc_x = (2.0 * x - self.width) / self.width;
        let ndc_y = (self.height - 2.0 * y) / self.height;

        let view_proj = camera.projection_matrix(self.aspect()) * camera.view_matrix();
        let world = view_proj.inverse() * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let world = world.truncate() / world.w;

        Ray::new(camera.position, world - camera.position)
    }
}

/// Pick among `(key, box)` candidates under `policy`.
///
/// `LastHit` returns the last hit in iteration order. `Nearest` returns the
/// box entered first along the ray, later candidates winning exact ties.
pub fn resolve<K>(
    ray: &Ray,
    candidates: impl IntoIterator<Item = (K, Aabb)>,
    policy: PickPolicy,
) -> Option<K> {
    let hits = candidates
        .into_iter()
        .filter_map(|(key, bbox)| ray_aabb_entry(ray.origin, ray.direction, &bbox).map(|t| (key, t)));

    match policy {
        PickPolicy::LastHit => hits.last().map(|(key, _)| key),
        PickPolicy::Nearest => hits
            .fold(None, |best: Option<(K, f32)>, (key, t)| match best {
                Some((_, best_t)) if best_t < t => best,
                _ => Some((key, t)),
            })
            .map(|(key, _)| key),
    }
}

/// Object under the ray, never `excluded`.
///
/// The currently selected object is passed as `excluded` so that it cannot
/// become its own hover target.
pub fn pick_object(
    ray: &Ray,
    scene: &Scene,
    excluded: Option<Uuid>,
    policy: PickPolicy,
) -> Option<Uuid> {
    let candidates = scene
        .iter()
        .filter(|o| Some(o.id) != excluded)
        .map(|o| (o.id, *o.bbox()));
    resolve(ray, candidates, policy)
}

/// Name of the active gizmo under the ray
pub fn pick_gizmo<'a>(ray: &Ray, gizmos: &'a GizmoSet, policy: PickPolicy) -> Option<&'a str> {
    let candidates = gizmos.active().map(|g| (g.name(), *g.body().bbox()));
    resolve(ray, candidates, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraConfig;
    use glam::Vec3;
    use sk_core::{Primitive, SceneObject, Transform};

    fn cube_at(position: Vec3) -> SceneObject {
        SceneObject::new(
            Primitive::Cube,
            Transform::from_position(position),
            Vec3::ONE,
            85.0,
        )
    }

    #[test]
    fn test_centre_pixel_looks_forward_for_any_fov() {
        let viewport = Viewport::new(800.0, 600.0);
        for fov_degrees in [10.0, 45.0, 90.0, 130.0] {
            let mut camera = Camera::new(&CameraConfig {
                fov_degrees,
                ..Default::default()
            });
            camera.process_mouse(37.0, -12.0);
            let ray = viewport.screen_to_ray(&camera, 400.0, 300.0);
            assert_eq!(ray.origin, camera.position);
            assert!(
                ray.direction.abs_diff_eq(camera.forward(), 1e-4),
                "fov {fov_degrees}: {:?} vs {:?}",
                ray.direction,
                camera.forward()
            );
        }
    }

    #[test]
    fn test_corner_pixels_point_to_matching_sides() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = Camera::default();
        let top_left = viewport.screen_to_ray(&camera, 0.0, 0.0);
        assert!(top_left.direction.x < 0.0 && top_left.direction.y > 0.0);
        let bottom_right = viewport.screen_to_ray(&camera, 800.0, 600.0);
        assert!(bottom_right.direction.x > 0.0 && bottom_right.direction.y < 0.0);
    }

    #[test]
    fn test_degenerate_viewport_is_clamped() {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.resize(0.0, 0.0);
        assert_eq!(viewport.aspect(), 1.0);
    }

    #[test]
    fn test_last_hit_wins_by_default() {
        let mut scene = Scene::default();
        let near = scene.add(cube_at(Vec3::new(0.0, 0.0, 1.0)));
        let far = scene.add(cube_at(Vec3::new(0.0, 0.0, -4.0)));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);

        assert_eq!(pick_object(&ray, &scene, None, PickPolicy::LastHit), Some(far));
        assert_eq!(pick_object(&ray, &scene, None, PickPolicy::Nearest), Some(near));
    }

    #[test]
    fn test_selected_object_is_never_hovered() {
        let mut scene = Scene::default();
        let a = scene.add(cube_at(Vec3::ZERO));
        let b = scene.add(cube_at(Vec3::new(0.0, 0.0, -3.0)));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);

        assert_eq!(pick_object(&ray, &scene, Some(b), PickPolicy::LastHit), Some(a));
        assert_eq!(pick_object(&ray, &scene, Some(a), PickPolicy::Nearest), Some(b));
    }

    #[test]
    fn test_miss_returns_none() {
        let mut scene = Scene::default();
        scene.add(cube_at(Vec3::ZERO));
        let ray = Ray::new(Vec3::new(5.0, 0.0, 10.0), -Vec3::Z);
        assert_eq!(pick_object(&ray, &scene, None, PickPolicy::LastHit), None);
    }

    #[test]
    fn test_only_active_gizmos_are_picked() {
        let mut gizmos = GizmoSet::standard();
        gizmos.update_for_target(&cube_at(Vec3::ZERO));

        // Straight down the z axis the plane handles are missed
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z);
        let hit = pick_gizmo(&ray, &gizmos, PickPolicy::LastHit);
        assert_eq!(hit, Some("Z_AXIS_MOVE"));

        gizmos.toggle_all();
        let hit = pick_gizmo(&ray, &gizmos, PickPolicy::LastHit).unwrap();
        assert!(hit.ends_with("_ROTATE"), "{hit}");
    }
}
