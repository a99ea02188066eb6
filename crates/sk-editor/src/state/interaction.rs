//! Selection, hover and drag state

use sk_viewport::{DragState, GizmoMode};
use uuid::Uuid;

/// Coarse interaction phase, derived from [`InteractionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    /// Nothing under the cursor, button up
    Idle,
    /// An object or gizmo is under the cursor, button up
    Hovering,
    /// Button down with no gizmo under the cursor; release selects
    DraggingObjectSelect,
    /// Button down on a gizmo of the selected object
    DraggingGizmo,
}

/// Per-frame interaction state.
///
/// Object references are IDs into the scene, so a removed object can only
/// linger here until [`forget`](Self::forget) runs.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Persists until replaced or the object is removed
    pub selected_object: Option<Uuid>,
    /// Object under the cursor, never the selected one
    pub hovered_object: Option<Uuid>,
    /// Name of the active gizmo under the cursor
    pub hovered_gizmo: Option<String>,
    /// Left button is held
    pub mouse_pressed: bool,
    /// Gizmo drag anchor and flag
    pub drag: DragState,
    /// Which gizmo family is shown
    pub active_gizmo_mode: GizmoMode,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    pub fn phase(&self) -> InteractionPhase {
        if self.mouse_pressed {
            if self.hovered_gizmo.is_some() && self.selected_object.is_some() {
                InteractionPhase::DraggingGizmo
            } else {
                InteractionPhase::DraggingObjectSelect
            }
        } else if self.hovered_object.is_some() || self.hovered_gizmo.is_some() {
            InteractionPhase::Hovering
        } else {
            InteractionPhase::Idle
        }
    }

    /// Left button released: end any drag and commit the hovered object
    pub fn release(&mut self) {
        self.drag.release();
        self.mouse_pressed = false;
        if let Some(hovered) = self.hovered_object.take() {
            tracing::debug!("Selected {hovered}");
            self.selected_object = Some(hovered);
        }
    }

    /// Switch gizmo family. Hover on the old family is stale afterwards.
    pub fn toggle_gizmo_mode(&mut self) {
        self.active_gizmo_mode = self.active_gizmo_mode.toggled();
        self.hovered_gizmo = None;
        self.drag.release();
    }

    /// Drop every reference to `id`
    pub fn forget(&mut self, id: Uuid) {
        if self.selected_object == Some(id) {
            self.selected_object = None;
            self.hovered_gizmo = None;
            self.drag.release();
        }
        if self.hovered_object == Some(id) {
            self.hovered_object = None;
        }
    }

    /// Clear selection, hover and drag. The gizmo mode is kept.
    pub fn reset(&mut self) {
        *self = Self {
            active_gizmo_mode: self.active_gizmo_mode,
            ..Self::default()
        };
    }
}
