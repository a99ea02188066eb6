//! Ray casting utilities
//!
//! Pure functions used by picking and by the gizmo drag math: ray-plane
//! intersection, closest point between two rays and the ray-AABB slab test.

use glam::Vec3;
use sk_core::Aabb;

/// Denominators at or below this are treated as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// A half-line starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point of the ray.
    pub origin: Vec3,
    /// Unit direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing the direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Ray-plane intersection.
///
/// Solves `t = dot(plane_point - ray_origin, normal) / dot(normal, ray_dir)`.
/// `ray_dir` and `plane_normal` must be normalized.
///
/// # Returns
///
/// * `Some(t)` - The ray parameter of the hit, `t >= 0`.
/// * `None` - If the ray is parallel to the plane or the plane is behind
///   the ray origin.
pub fn ray_plane_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    plane_normal: Vec3,
    plane_point: Vec3,
) -> Option<f32> {
    let denom = plane_normal.dot(ray_dir);
    if denom.abs() <= PARALLEL_EPSILON {
        return None;
    }

    let t = (plane_point - ray_origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None;
    }

    Some(t)
}

/// Closest point on ray 1 to ray 2.
///
/// Both rays are treated as infinite lines. With `d = dot(dir1, dir2)` and
/// `s = origin1 - origin2`, the parameter along ray 1 is
///
/// ```text
/// t1 = (-dot(dir1, s) + d * dot(dir2, s)) / (1 - d²)
/// ```
///
/// Directions must be normalized.
///
/// # Returns
///
/// The point `origin1 + t1 * dir1`. When the rays are parallel (`1 - d² == 0`)
/// there is no unique answer and `ray1_origin` is returned. Callers that
/// must tell the two apart use [`closest_point_between_rays`].
pub fn closest_point_on_ray1_between_skew_rays(
    ray1_origin: Vec3,
    ray1_dir: Vec3,
    ray2_origin: Vec3,
    ray2_dir: Vec3,
) -> Vec3 {
    closest_point_between_rays(ray1_origin, ray1_dir, ray2_origin, ray2_dir).unwrap_or_else(|| {
        tracing::warn!("Closest point requested between parallel rays");
        ray1_origin
    })
}

/// Same as [`closest_point_on_ray1_between_skew_rays`], returning `None`
/// for parallel rays.
pub fn closest_point_between_rays(
    ray1_origin: Vec3,
    ray1_dir: Vec3,
    ray2_origin: Vec3,
    ray2_dir: Vec3,
) -> Option<Vec3> {
    let s = ray1_origin - ray2_origin;

    let d = ray1_dir.dot(ray2_dir);
    let d1s = ray1_dir.dot(s);
    let d2s = ray2_dir.dot(s);
    let denom = 1.0 - d * d;

    if denom == 0.0 {
        return None;
    }

    Some(ray1_origin + ray1_dir * ((-d1s + d * d2s) / denom))
}

/// Ray-AABB slab test.
///
/// Returns true when the ray hits the box at or in front of its origin.
/// Zero direction components produce infinite reciprocals, which the
/// min/max folding handles under IEEE rules.
pub fn ray_aabb_intersection(ray_origin: Vec3, ray_dir: Vec3, bbox: &Aabb) -> bool {
    slab_range(ray_origin, ray_dir, bbox).is_some()
}

/// Distance to the first hit of the ray with the box, if any.
///
/// Returns `0.0` when the origin lies inside the box.
pub fn ray_aabb_entry(ray_origin: Vec3, ray_dir: Vec3, bbox: &Aabb) -> Option<f32> {
    slab_range(ray_origin, ray_dir, bbox).map(|(tmin, _)| tmin.max(0.0))
}

fn slab_range(ray_origin: Vec3, ray_dir: Vec3, bbox: &Aabb) -> Option<(f32, f32)> {
    let inv = ray_dir.recip();

    let t1 = ((bbox.min() - ray_origin) * inv).to_array();
    let t2 = ((bbox.max() - ray_origin) * inv).to_array();

    let mut tmin = f32::NEG_INFINITY;
    let mut tmax = f32::INFINITY;
    for (a, b) in t1.into_iter().zip(t2) {
        // 0 * inf: the ray runs inside a slab face, so this axis never clips it
        if a.is_nan() || b.is_nan() {
            continue;
        }
        tmin = tmin.max(a.min(b));
        tmax = tmax.min(a.max(b));
    }

    // The whole box is behind the origin
    if tmax < 0.0 {
        return None;
    }

    if tmin > tmax {
        return None;
    }

    Some((tmin, tmax))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Aabb {
        Aabb::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0)
    }

    #[test]
    fn test_ray_hits_plane_in_front() {
        let t = ray_plane_intersection(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, Vec3::Z, Vec3::ZERO);
        assert_relative_eq!(t.unwrap(), 5.0);
    }

    #[test]
    fn test_ray_misses_plane_behind() {
        let t = ray_plane_intersection(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::Z, Vec3::ZERO);
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_parallel_to_plane() {
        let t = ray_plane_intersection(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::Z, Vec3::ZERO);
        assert!(t.is_none());
    }

    #[test]
    fn test_closest_point_of_intersecting_rays_is_intersection() {
        let hit = Vec3::new(2.0, 3.0, -1.0);
        let dir1 = Vec3::new(1.0, 1.0, 0.0).normalize();
        let dir2 = Vec3::new(0.0, -1.0, 2.0).normalize();
        let p = closest_point_on_ray1_between_skew_rays(hit - dir1 * 4.0, dir1, hit + dir2 * 3.0, dir2);
        assert!(p.abs_diff_eq(hit, 1e-4), "{p:?}");
    }

    #[test]
    fn test_closest_point_of_skew_rays_lies_on_ray1() {
        // x axis and a line parallel to y through (3, 0, 2)
        let p = closest_point_on_ray1_between_skew_rays(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(3.0, 5.0, 2.0),
            Vec3::Y,
        );
        assert!(p.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_closest_point_of_parallel_rays_is_origin() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let p = closest_point_on_ray1_between_skew_rays(origin, Vec3::X, Vec3::ZERO, Vec3::X);
        assert_eq!(p, origin);
        assert_eq!(
            closest_point_between_rays(origin, Vec3::X, Vec3::ZERO, -Vec3::X),
            None
        );
    }

    #[test]
    fn test_ray_hits_box() {
        assert!(ray_aabb_intersection(Vec3::new(0.5, 0.2, 5.0), -Vec3::Z, &unit_box()));
    }

    #[test]
    fn test_ray_misses_box_to_the_side() {
        assert!(!ray_aabb_intersection(Vec3::new(3.0, 0.0, 5.0), -Vec3::Z, &unit_box()));
    }

    #[test]
    fn test_box_behind_ray_is_not_hit() {
        assert!(!ray_aabb_intersection(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, &unit_box()));
    }

    #[test]
    fn test_ray_from_inside_box_hits() {
        assert!(ray_aabb_intersection(Vec3::ZERO, Vec3::X, &unit_box()));
        assert_eq!(ray_aabb_entry(Vec3::ZERO, Vec3::X, &unit_box()), Some(0.0));
    }

    #[test]
    fn test_axis_aligned_ray_with_zero_components() {
        // Two zero components give infinite reciprocals on x and y
        assert!(ray_aabb_intersection(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, &unit_box()));
        assert!(!ray_aabb_intersection(Vec3::new(2.0, 0.0, 5.0), -Vec3::Z, &unit_box()));
    }

    #[test]
    fn test_ray_grazing_box_face() {
        // Origin exactly on the x = 1 slab face, travelling along -z
        assert!(ray_aabb_intersection(Vec3::new(1.0, 0.0, 5.0), -Vec3::Z, &unit_box()));
    }

    #[test]
    fn test_entry_distance() {
        let t = ray_aabb_entry(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, &unit_box());
        assert_relative_eq!(t.unwrap(), 4.0);
    }

    #[test]
    fn test_slab_test_is_translation_invariant() {
        let offsets = [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(-3.5, 7.25, 1.0),
            Vec3::new(0.0, -100.0, 42.0),
        ];
        let rays = [
            (Vec3::new(0.5, 0.2, 5.0), -Vec3::Z),
            (Vec3::new(3.0, 0.0, 5.0), -Vec3::Z),
            (Vec3::new(-4.0, -4.0, -4.0), Vec3::ONE.normalize()),
            (Vec3::new(-4.0, 4.0, 0.0), Vec3::new(1.0, -0.2, 0.0).normalize()),
        ];
        for (origin, dir) in rays {
            let expected = ray_aabb_intersection(origin, dir, &unit_box());
            for offset in offsets {
                let moved = unit_box().translate(offset);
                assert_eq!(ray_aabb_intersection(origin + offset, dir, &moved), expected);
            }
        }
    }
}
