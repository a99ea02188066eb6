//! Gizmo kinds and their drag math

use glam::Vec3;
use sk_core::SceneObject;

use super::{DragState, GizmoError, GizmoMode};
use crate::constants::gizmo::MIN_ARM_LENGTH;
use crate::ray::{Ray, closest_point_between_rays, ray_plane_intersection};

/// World axis a handle is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// World x
    X,
    /// World y
    Y,
    /// World z
    Z,
}

impl Axis {
    /// Unit vector along the axis
    pub fn direction(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Label used in gizmo names
    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    fn parse(label: &str) -> Option<Self> {
        match label {
            "X" => Some(Axis::X),
            "Y" => Some(Axis::Y),
            "Z" => Some(Axis::Z),
            _ => None,
        }
    }
}

/// World plane spanned by two axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Spanned by x and y
    XY,
    /// Spanned by x and z
    XZ,
    /// Spanned by y and z
    YZ,
}

impl Plane {
    /// The two spanning axes, in order
    pub fn axes(&self) -> [Vec3; 2] {
        match self {
            Plane::XY => [Vec3::X, Vec3::Y],
            Plane::XZ => [Vec3::X, Vec3::Z],
            Plane::YZ => [Vec3::Y, Vec3::Z],
        }
    }

    /// Label used in gizmo names
    pub fn label(&self) -> &'static str {
        match self {
            Plane::XY => "XY",
            Plane::XZ => "XZ",
            Plane::YZ => "YZ",
        }
    }

    fn parse(label: &str) -> Option<Self> {
        match label {
            "XY" => Some(Plane::XY),
            "XZ" => Some(Plane::XZ),
            "YZ" => Some(Plane::YZ),
            _ => None,
        }
    }
}

/// What a gizmo does to its target while dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoKind {
    /// Translate along one axis
    AxisMove(Axis),
    /// Translate within a plane
    PlaneMove(Plane),
    /// Rotate about an axis, tracking the cursor in the perpendicular plane
    Rotate(Axis),
    /// Built from a bad label. Never moves anything.
    Inert(GizmoMode),
}

/// Change applied to the target by one drag step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoDelta {
    /// Added to the target position
    Translate(Vec3),
    /// Added to the target's Euler angles (radians)
    Rotate(Vec3),
}

impl GizmoKind {
    /// Parse an axis-move label (`"X"`, `"Y"`, `"Z"`)
    pub fn axis_move(label: &str) -> Result<Self, GizmoError> {
        Axis::parse(label)
            .map(GizmoKind::AxisMove)
            .ok_or_else(|| GizmoError::UnknownLabel {
                family: "axis move",
                label: label.to_string(),
            })
    }

    /// Parse a plane-move label (`"XY"`, `"XZ"`, `"YZ"`)
    pub fn plane_move(label: &str) -> Result<Self, GizmoError> {
        Plane::parse(label)
            .map(GizmoKind::PlaneMove)
            .ok_or_else(|| GizmoError::UnknownLabel {
                family: "plane move",
                label: label.to_string(),
            })
    }

    /// Parse a rotation label (`"X"`, `"Y"`, `"Z"`)
    pub fn rotate(label: &str) -> Result<Self, GizmoError> {
        Axis::parse(label)
            .map(GizmoKind::Rotate)
            .ok_or_else(|| GizmoError::UnknownLabel {
                family: "rotate",
                label: label.to_string(),
            })
    }

    /// Parse a label for the given mode.
    ///
    /// In [`GizmoMode::Move`] single-axis labels give axis handles and
    /// two-axis labels give plane handles.
    pub fn parse(mode: GizmoMode, label: &str) -> Result<Self, GizmoError> {
        match mode {
            GizmoMode::Move if label.len() == 2 => Self::plane_move(label),
            GizmoMode::Move => Self::axis_move(label),
            GizmoMode::Rotate => Self::rotate(label),
        }
    }

    /// Mode in which this kind is pickable
    pub fn mode(&self) -> GizmoMode {
        match self {
            GizmoKind::AxisMove(_) | GizmoKind::PlaneMove(_) => GizmoMode::Move,
            GizmoKind::Rotate(_) => GizmoMode::Rotate,
            GizmoKind::Inert(mode) => *mode,
        }
    }

    /// Constraint axes: one for a line, two for a plane, and for rotation
    /// the two plane axes followed by the rotation axis.
    pub fn axes(&self) -> Vec<Vec3> {
        match self {
            GizmoKind::AxisMove(axis) => vec![axis.direction()],
            GizmoKind::PlaneMove(plane) => plane.axes().to_vec(),
            GizmoKind::Rotate(axis) => {
                let [a, b] = rotation_plane(*axis);
                vec![a, b, axis.direction()]
            }
            GizmoKind::Inert(_) => Vec::new(),
        }
    }

    /// Advance a drag by one cursor ray.
    ///
    /// `handle` is the world position of the gizmo body, which anchors the
    /// constraint line or plane. The first call of a drag only seeds
    /// `drag` and returns `None`; later calls apply the step to `target`
    /// and return it. Degenerate geometry leaves everything untouched.
    pub fn drag(
        &self,
        ray: &Ray,
        handle: Vec3,
        target: &mut SceneObject,
        drag: &mut DragState,
    ) -> Option<GizmoDelta> {
        match *self {
            GizmoKind::AxisMove(axis) => {
                let point = axis_hit(ray, axis, handle)?;
                let delta = drag.advance(point)?;
                target.translate(delta);
                Some(GizmoDelta::Translate(delta))
            }
            GizmoKind::PlaneMove(plane) => {
                let point = plane_hit(ray, plane.axes(), handle)?;
                let delta = drag.advance(point)?;
                target.translate(delta);
                Some(GizmoDelta::Translate(delta))
            }
            GizmoKind::Rotate(axis) => {
                let point = plane_hit(ray, rotation_plane(axis), handle)?;
                if !drag.is_dragging {
                    drag.seed(point);
                    return None;
                }

                let centre = target.position();
                let arm_from = drag.anchor - centre;
                let arm_to = point - centre;
                drag.anchor = point;

                let angle = signed_angle(arm_from, arm_to, axis.direction())?;
                let delta = axis.direction() * angle;
                target.rotate(delta);
                Some(GizmoDelta::Rotate(delta))
            }
            GizmoKind::Inert(_) => None,
        }
    }
}

fn rotation_plane(axis: Axis) -> [Vec3; 2] {
    match axis {
        Axis::X => [Vec3::Y, Vec3::Z],
        Axis::Y => [Vec3::X, Vec3::Z],
        Axis::Z => [Vec3::X, Vec3::Y],
    }
}

fn axis_hit(ray: &Ray, axis: Axis, through: Vec3) -> Option<Vec3> {
    let point = closest_point_between_rays(through, axis.direction(), ray.origin, ray.direction);
    if point.is_none() {
        tracing::debug!("Cursor ray runs along the drag axis, skipping frame");
    }
    point
}

fn plane_hit(ray: &Ray, axes: [Vec3; 2], through: Vec3) -> Option<Vec3> {
    let normal = axes[0].cross(axes[1]).normalize();
    match ray_plane_intersection(ray.origin, ray.direction, normal, through) {
        Some(t) => Some(ray.at(t)),
        None => {
            tracing::debug!("Cursor ray misses the drag plane, skipping frame");
            None
        }
    }
}

/// Angle from `a` to `b`, negative when `cross(a, b)` opposes `axis`.
fn signed_angle(a: Vec3, b: Vec3, axis: Vec3) -> Option<f32> {
    let (len_a, len_b) = (a.length(), b.length());
    if len_a < MIN_ARM_LENGTH || len_b < MIN_ARM_LENGTH {
        tracing::warn!("Rotation arm has zero length, skipping frame");
        return None;
    }

    // Rounding can push the cosine just past 1
    let cos = (a.dot(b) / (len_a * len_b)).clamp(-1.0, 1.0);
    let angle = cos.acos();

    if a.cross(b).dot(axis) < 0.0 {
        Some(-angle)
    } else {
        Some(angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sk_core::{Primitive, Transform};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn cube_at(position: Vec3) -> SceneObject {
        SceneObject::new(
            Primitive::Cube,
            Transform::from_position(position),
            Vec3::ONE,
            32.0,
        )
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            GizmoKind::parse(GizmoMode::Move, "X").unwrap(),
            GizmoKind::AxisMove(Axis::X)
        );
        assert_eq!(
            GizmoKind::parse(GizmoMode::Move, "YZ").unwrap(),
            GizmoKind::PlaneMove(Plane::YZ)
        );
        assert_eq!(
            GizmoKind::parse(GizmoMode::Rotate, "Z").unwrap(),
            GizmoKind::Rotate(Axis::Z)
        );
    }

    #[test]
    fn test_unknown_labels_are_rejected() {
        assert!(matches!(
            GizmoKind::axis_move("W"),
            Err(GizmoError::UnknownLabel { label, .. }) if label == "W"
        ));
        assert!(GizmoKind::plane_move("XX").is_err());
        assert!(GizmoKind::parse(GizmoMode::Rotate, "XY").is_err());
    }

    #[test]
    fn test_rotation_axes_end_with_rotation_axis() {
        assert_eq!(
            GizmoKind::Rotate(Axis::X).axes(),
            vec![Vec3::Y, Vec3::Z, Vec3::X]
        );
        assert!(GizmoKind::Inert(GizmoMode::Move).axes().is_empty());
    }

    #[test]
    fn test_signed_angle() {
        assert_relative_eq!(signed_angle(Vec3::X, Vec3::Y, Vec3::Z).unwrap(), FRAC_PI_2);
        assert_relative_eq!(signed_angle(Vec3::Y, Vec3::X, Vec3::Z).unwrap(), -FRAC_PI_2);
        assert_relative_eq!(signed_angle(Vec3::X, Vec3::X * 3.0, Vec3::Z).unwrap(), 0.0);
        assert!(signed_angle(Vec3::ZERO, Vec3::X, Vec3::Z).is_none());
    }

    #[test]
    fn test_axis_move_advances_by_delta() {
        let kind = GizmoKind::AxisMove(Axis::X);
        let start = Vec3::new(1.0, 2.0, 3.0);
        let mut target = cube_at(start);
        let handle = start + Vec3::new(0.25, 0.0, 0.0);
        let mut drag = DragState::default();

        // Camera above the x axis looking straight down, sliding along x
        let step = 0.75;
        let ray_at = |x: f32| Ray::new(Vec3::new(x, 12.0, 3.0), -Vec3::Y);

        assert_eq!(kind.drag(&ray_at(0.0), handle, &mut target, &mut drag), None);
        assert!(drag.is_dragging);
        assert_eq!(target.position(), start);

        for i in 1..=4 {
            let delta = kind.drag(&ray_at(i as f32 * step), handle, &mut target, &mut drag);
            match delta {
                Some(GizmoDelta::Translate(d)) => {
                    assert!(d.abs_diff_eq(Vec3::new(step, 0.0, 0.0), 1e-5), "{d:?}")
                }
                other => panic!("unexpected delta {other:?}"),
            }
        }

        let moved = target.position();
        assert_relative_eq!(moved.x, start.x + 4.0 * step, epsilon = 1e-4);
        assert_eq!(moved.y, start.y);
        assert_eq!(moved.z, start.z);
    }

    #[test]
    fn test_plane_move_follows_cursor_in_plane() {
        let kind = GizmoKind::PlaneMove(Plane::XY);
        let mut target = cube_at(Vec3::ZERO);
        let mut drag = DragState::default();
        let ray_at = |x: f32, y: f32| Ray::new(Vec3::new(x, y, 10.0), -Vec3::Z);

        kind.drag(&ray_at(0.0, 0.0), Vec3::ZERO, &mut target, &mut drag);
        kind.drag(&ray_at(2.0, -1.0), Vec3::ZERO, &mut target, &mut drag);

        assert!(target.position().abs_diff_eq(Vec3::new(2.0, -1.0, 0.0), 1e-5));
        assert_eq!(drag.anchor, Vec3::new(2.0, -1.0, 0.0));
    }

    #[test]
    fn test_plane_move_parallel_ray_is_a_no_op() {
        let kind = GizmoKind::PlaneMove(Plane::XY);
        let mut target = cube_at(Vec3::ZERO);
        let mut drag = DragState {
            is_dragging: true,
            anchor: Vec3::new(1.0, 1.0, 0.0),
        };
        let before = drag;

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
        assert_eq!(kind.drag(&ray, Vec3::ZERO, &mut target, &mut drag), None);
        assert_eq!(drag, before);
        assert_eq!(target.position(), Vec3::ZERO);
    }

    #[test]
    fn test_axis_move_ray_along_axis_is_a_no_op() {
        let kind = GizmoKind::AxisMove(Axis::X);
        let mut target = cube_at(Vec3::ZERO);
        let handle = Vec3::new(0.25, 0.0, 0.0);
        let mut drag = DragState::default();

        let seed = Ray::new(Vec3::new(3.0, 12.0, 0.0), -Vec3::Y);
        assert_eq!(kind.drag(&seed, handle, &mut target, &mut drag), None);
        let before = drag;

        let along = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
        assert_eq!(kind.drag(&along, handle, &mut target, &mut drag), None);
        assert_eq!(drag, before);
        assert_eq!(target.position(), Vec3::ZERO);
    }

    fn sweep_half_circle(direction: f32) -> f32 {
        let kind = GizmoKind::Rotate(Axis::Z);
        let mut target = cube_at(Vec3::ZERO);
        let mut drag = DragState::default();
        let steps = 36;

        for i in 0..=steps {
            let theta = direction * PI * i as f32 / steps as f32;
            let ray = Ray::new(Vec3::new(theta.cos(), theta.sin(), 5.0), -Vec3::Z);
            kind.drag(&ray, Vec3::ZERO, &mut target, &mut drag);
        }

        assert_eq!(target.orientation().x, 0.0);
        assert_eq!(target.orientation().y, 0.0);
        target.orientation().z
    }

    #[test]
    fn test_rotate_half_circle_counter_clockwise() {
        assert_relative_eq!(sweep_half_circle(1.0), PI, epsilon = 1e-4);
    }

    #[test]
    fn test_rotate_half_circle_clockwise() {
        assert_relative_eq!(sweep_half_circle(-1.0), -PI, epsilon = 1e-4);
    }

    #[test]
    fn test_rotate_seed_applies_nothing() {
        let kind = GizmoKind::Rotate(Axis::Y);
        let mut target = cube_at(Vec3::ZERO);
        let mut drag = DragState::default();
        let ray = Ray::new(Vec3::new(1.0, 5.0, 0.0), -Vec3::Y);

        assert_eq!(kind.drag(&ray, Vec3::ZERO, &mut target, &mut drag), None);
        assert!(drag.is_dragging);
        assert_eq!(drag.anchor, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(target.orientation(), Vec3::ZERO);
    }

    #[test]
    fn test_rotate_through_centre_is_skipped() {
        let kind = GizmoKind::Rotate(Axis::Z);
        let mut target = cube_at(Vec3::ZERO);
        let mut drag = DragState {
            is_dragging: true,
            anchor: Vec3::X,
        };

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        assert_eq!(kind.drag(&ray, Vec3::ZERO, &mut target, &mut drag), None);
        assert_eq!(target.orientation(), Vec3::ZERO);
        assert!(!target.orientation().is_nan());
    }

    #[test]
    fn test_inert_kind_never_drags() {
        let kind = GizmoKind::Inert(GizmoMode::Move);
        let mut target = cube_at(Vec3::ZERO);
        let mut drag = DragState::default();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);

        assert_eq!(kind.drag(&ray, Vec3::ZERO, &mut target, &mut drag), None);
        assert!(!drag.is_dragging);
    }
}
