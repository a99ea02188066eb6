//! Transform gizmos
//!
//! A gizmo is a manipulation handle bound to the selected object. Each one
//! owns a body [`SceneObject`] that is drawn and picked but never inserted
//! into the scene, and a [`GizmoKind`] that turns cursor rays into
//! translation or rotation of the target.
//!
//! Dragging is a two-phase protocol carried by [`DragState`]: the first ray
//! of a drag seeds the anchor point, every following ray moves the target by
//! the change from the anchor and moves the anchor along.

mod kind;
mod set;

pub use kind::{Axis, GizmoDelta, GizmoKind, Plane};
pub use set::GizmoSet;

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use sk_core::{Primitive, SceneObject, Transform};

use crate::constants::gizmo as constants;
use crate::ray::Ray;

/// Which family of gizmos is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GizmoMode {
    /// Axis and plane translation handles
    #[default]
    Move,
    /// Rotation rings
    Rotate,
}

impl GizmoMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            GizmoMode::Move => GizmoMode::Rotate,
            GizmoMode::Rotate => GizmoMode::Move,
        }
    }
}

/// Gizmo construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GizmoError {
    /// The label names no axis or plane of the requested family
    #[error("Unknown {family} gizmo label: {label:?}")]
    UnknownLabel {
        /// Gizmo family being parsed
        family: &'static str,
        /// The rejected label
        label: String,
    },
}

/// Running state of a gizmo drag
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Set by the seeding ray, cleared on button release
    pub is_dragging: bool,
    /// Last resolved point on the constraint line or plane
    pub anchor: Vec3,
}

impl DragState {
    /// Start a drag at `point`
    pub fn seed(&mut self, point: Vec3) {
        self.anchor = point;
        self.is_dragging = true;
    }

    /// Move the anchor to `point`.
    ///
    /// Returns the offset from the previous anchor, or `None` when this
    /// call seeded the drag.
    pub fn advance(&mut self, point: Vec3) -> Option<Vec3> {
        if !self.is_dragging {
            self.seed(point);
            return None;
        }

        let delta = point - self.anchor;
        self.anchor = point;
        Some(delta)
    }

    /// End the drag
    pub fn release(&mut self) {
        self.is_dragging = false;
    }
}

/// A single manipulation handle
#[derive(Debug, Clone)]
pub struct Gizmo {
    kind: GizmoKind,
    body: SceneObject,
    position_offset: Vec3,
    orientation_offset: Vec3,
    active: bool,
}

impl Gizmo {
    /// Axis-move handle from `"X"`, `"Y"` or `"Z"`.
    ///
    /// Unknown labels are logged and produce an inert handle.
    pub fn axis_move(label: &str) -> Self {
        let kind = GizmoKind::axis_move(label).unwrap_or_else(|e| {
            tracing::warn!("{e}, using an inert handle");
            GizmoKind::Inert(GizmoMode::Move)
        });
        Self::from_kind(kind)
    }

    /// Plane-move handle from `"XY"`, `"XZ"` or `"YZ"`
    pub fn plane_move(label: &str) -> Self {
        let kind = GizmoKind::plane_move(label).unwrap_or_else(|e| {
            tracing::warn!("{e}, using an inert handle");
            GizmoKind::Inert(GizmoMode::Move)
        });
        Self::from_kind(kind)
    }

    /// Rotation ring from `"X"`, `"Y"` or `"Z"`
    pub fn rotate(label: &str) -> Self {
        let kind = GizmoKind::rotate(label).unwrap_or_else(|e| {
            tracing::warn!("{e}, using an inert handle");
            GizmoKind::Inert(GizmoMode::Rotate)
        });
        Self::from_kind(kind)
    }

    /// Build a handle with its standard body, inactive
    pub fn from_kind(kind: GizmoKind) -> Self {
        let zero = Vec3::ZERO;
        let intensity = constants::COLOUR_INTENSITY;
        let offset = constants::HANDLE_OFFSET;

        // (primitive, position offset, orientation offset, scale, colour)
        let (primitive, position_offset, orientation_offset, scale, colour) = match kind {
            GizmoKind::AxisMove(axis) => {
                let orientation = match axis {
                    Axis::X => Vec3::new(0.0, FRAC_PI_2, 0.0),
                    Axis::Y => Vec3::new(3.0 * FRAC_PI_2, 0.0, 0.0),
                    Axis::Z => zero,
                };
                (
                    Primitive::Arrow,
                    axis.direction() * offset,
                    orientation,
                    constants::AXIS_MOVE_SCALE,
                    axis.direction() * intensity,
                )
            }
            GizmoKind::PlaneMove(plane) => {
                let [a, b] = plane.axes();
                let orientation = match plane {
                    Plane::XY => zero,
                    Plane::XZ => Vec3::new(FRAC_PI_2, 0.0, 0.0),
                    Plane::YZ => Vec3::new(0.0, FRAC_PI_2, 0.0),
                };
                (
                    Primitive::Cube,
                    (a + b) * offset,
                    orientation,
                    constants::PLANE_MOVE_SCALE,
                    (a + b) * intensity,
                )
            }
            GizmoKind::Rotate(axis) => {
                let (orientation, scale) = match axis {
                    Axis::X => (Vec3::new(0.0, FRAC_PI_2, 0.0), constants::X_ROTATE_SCALE),
                    Axis::Y => (Vec3::new(FRAC_PI_2, 0.0, 0.0), constants::Y_ROTATE_SCALE),
                    Axis::Z => (zero, constants::Z_ROTATE_SCALE),
                };
                (
                    Primitive::HollowCylinder,
                    zero,
                    orientation,
                    scale,
                    axis.direction() * intensity,
                )
            }
            GizmoKind::Inert(GizmoMode::Move) => {
                (Primitive::Arrow, zero, zero, constants::AXIS_MOVE_SCALE, zero)
            }
            GizmoKind::Inert(GizmoMode::Rotate) => {
                (Primitive::HollowCylinder, zero, zero, Vec3::ONE, zero)
            }
        };

        // Rings take their orientation from the target on every update
        let body_orientation = match kind.mode() {
            GizmoMode::Move => orientation_offset,
            GizmoMode::Rotate => zero,
        };

        let body = SceneObject::new(
            primitive,
            Transform::new(zero, body_orientation, scale),
            colour,
            constants::SHININESS,
        )
        .with_name(Self::name_for(kind));

        Self {
            kind,
            body,
            position_offset,
            orientation_offset,
            active: false,
        }
    }

    fn name_for(kind: GizmoKind) -> String {
        match kind {
            GizmoKind::AxisMove(axis) => format!("{}_AXIS_MOVE", axis.label()),
            GizmoKind::PlaneMove(plane) => format!("{}_PLANE_MOVE", plane.label()),
            GizmoKind::Rotate(axis) => format!("{}_AXIS_ROTATE", axis.label()),
            GizmoKind::Inert(GizmoMode::Move) => "INERT_MOVE".to_string(),
            GizmoKind::Inert(GizmoMode::Rotate) => "INERT_ROTATE".to_string(),
        }
    }

    /// Name the gizmo is keyed by, e.g. `X_AXIS_MOVE`
    pub fn name(&self) -> &str {
        &self.body.name
    }

    /// What dragging this gizmo does
    pub fn kind(&self) -> GizmoKind {
        self.kind
    }

    /// Mode in which this gizmo is shown
    pub fn mode(&self) -> GizmoMode {
        self.kind.mode()
    }

    /// Visual and pickable body
    pub fn body(&self) -> &SceneObject {
        &self.body
    }

    /// Body position relative to the target
    pub fn position_offset(&self) -> Vec3 {
        self.position_offset
    }

    /// Fixed Euler offset of the body (radians)
    pub fn orientation_offset(&self) -> Vec3 {
        self.orientation_offset
    }

    /// Visible and pickable
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Show a hidden gizmo or hide a shown one
    pub fn toggle_activity(&mut self) {
        self.active = !self.active;
    }

    /// Scale factor the renderer applies while this gizmo is hovered
    pub fn hovered_scale(&self) -> f32 {
        match self.mode() {
            GizmoMode::Move => constants::MOVE_HOVER_SCALE,
            GizmoMode::Rotate => constants::ROTATE_HOVER_SCALE,
        }
    }

    /// Place the body relative to `target`.
    ///
    /// Move handles keep a fixed orientation. Rings follow the target's
    /// angles about their own two plane axes, plus their offset.
    pub fn update_pos_and_orientation(&mut self, target: &SceneObject) {
        let position = target.position() + self.position_offset;
        let orientation = match self.kind {
            GizmoKind::Rotate(_) => {
                let axes = self.kind.axes();
                target.orientation() * (axes[0] + axes[1]) + self.orientation_offset
            }
            _ => self.body.orientation(),
        };

        self.body.update_transform(|t| {
            t.position = position;
            t.orientation = orientation;
        });
    }

    /// Recompute the body's world AABB
    pub fn update_bounding_box(&mut self) {
        self.body.update_bounding_box();
    }

    /// Apply one drag step to `target`. See [`GizmoKind::drag`].
    pub fn transform(
        &self,
        ray: &Ray,
        target: &mut SceneObject,
        drag: &mut DragState,
    ) -> Option<GizmoDelta> {
        self.kind.drag(ray, self.body.position(), target, drag)
    }
}

/// The sphere drawn at the target's origin while something is selected
pub fn centre_marker() -> SceneObject {
    SceneObject::new(
        Primitive::Sphere,
        Transform::new(Vec3::ZERO, Vec3::ZERO, constants::CENTRE_SCALE),
        constants::CENTRE_COLOUR,
        constants::SHININESS,
    )
    .with_name(constants::CENTRE_NAME)
}
