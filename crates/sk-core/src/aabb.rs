//! World-space axis-aligned bounding box.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box stored as six scalars.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
    pub zmin: f32,
    pub zmax: f32,
}

impl Aabb {
    /// Creates a box from its six extents.
    pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32, zmin: f32, zmax: f32) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
            zmin,
            zmax,
        }
    }

    /// Creates a box from its minimum and maximum corners.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::new(min.x, max.x, min.y, max.y, min.z, max.z)
    }

    /// Creates the smallest box containing all given points.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::from_min_max(min, max))
    }

    /// Transforms the eight local corners by `model` and bounds the result.
    ///
    /// The returned box contains every transformed corner, so rotated
    /// objects get a looser fit than their true extent.
    pub fn from_local_corners(corners: &[Vec3; 8], model: &Mat4) -> Self {
        let transformed = corners.map(|c| model.transform_point3(c));
        let (min, max) = transformed[1..]
            .iter()
            .fold((transformed[0], transformed[0]), |(min, max), &p| {
                (min.min(p), max.max(p))
            });
        Self::from_min_max(min, max)
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.xmin, self.ymin, self.zmin)
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.xmax, self.ymax, self.zmax)
    }

    /// Returns the center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min() + self.max()) * 0.5
    }

    /// Returns the full extents of the box.
    pub fn size(&self) -> Vec3 {
        self.max() - self.min()
    }

    /// Returns true if the box contains the given point.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.xmin
            && point.x <= self.xmax
            && point.y >= self.ymin
            && point.y <= self.ymax
            && point.z >= self.zmin
            && point.z <= self.zmax
    }

    /// Returns a copy moved by `offset`.
    pub fn translate(&self, offset: Vec3) -> Aabb {
        Self::from_min_max(self.min() + offset, self.max() + offset)
    }

    /// Returns true if min <= max on every axis.
    pub fn is_valid(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax && self.zmin <= self.zmax
    }
}

/// Returns the eight corners of the box `[-half, half]`, offset along z.
pub fn box_corners(half_x: f32, half_y: f32, z_min: f32, z_max: f32) -> [Vec3; 8] {
    [
        Vec3::new(-half_x, -half_y, z_min),
        Vec3::new(half_x, -half_y, z_min),
        Vec3::new(-half_x, half_y, z_min),
        Vec3::new(half_x, half_y, z_min),
        Vec3::new(-half_x, -half_y, z_max),
        Vec3::new(half_x, -half_y, z_max),
        Vec3::new(-half_x, half_y, z_max),
        Vec3::new(half_x, half_y, z_max),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_center_and_size() {
        let bbox = Aabb::new(-1.0, 1.0, -2.0, 2.0, -3.0, 3.0);
        assert_eq!(bbox.center(), Vec3::ZERO);
        assert_eq!(bbox.size(), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_aabb_contains_point() {
        let bbox = Aabb::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        assert!(bbox.contains_point(Vec3::ZERO));
        assert!(bbox.contains_point(Vec3::new(0.5, 0.5, 0.5)));
        assert!(!bbox.contains_point(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_aabb_from_points() {
        let bbox = Aabb::from_points([
            Vec3::new(1.0, -2.0, 0.0),
            Vec3::new(-1.0, 3.0, 0.5),
            Vec3::new(0.0, 0.0, -4.0),
        ])
        .unwrap();
        assert_eq!(bbox, Aabb::new(-1.0, 1.0, -2.0, 3.0, -4.0, 0.5));
        assert!(Aabb::from_points([]).is_none());
    }

    #[test]
    fn test_symmetric_corners_at_origin_give_symmetric_box() {
        let corners = box_corners(0.5, 0.5, -0.5, 0.5);
        let bbox = Aabb::from_local_corners(&corners, &Mat4::IDENTITY);
        assert_eq!(bbox.xmin, -bbox.xmax);
        assert_eq!(bbox.ymin, -bbox.ymax);
        assert_eq!(bbox.zmin, -bbox.zmax);
        assert!(bbox.is_valid());
    }

    #[test]
    fn test_translated_corners_follow_translation() {
        let corners = box_corners(0.5, 0.5, -0.5, 0.5);
        let offset = Vec3::new(8.0, -2.0, 1.0);
        let bbox = Aabb::from_local_corners(&corners, &Mat4::from_translation(offset));
        let expected = Aabb::from_local_corners(&corners, &Mat4::IDENTITY).translate(offset);
        assert_eq!(bbox, expected);
    }

    #[test]
    fn test_default_is_zero_box() {
        let bbox = Aabb::default();
        assert_eq!(bbox.min(), Vec3::ZERO);
        assert_eq!(bbox.max(), Vec3::ZERO);
        assert!(bbox.is_valid());
    }
}
