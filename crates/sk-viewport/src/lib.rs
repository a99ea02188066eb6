//! Viewport interaction for the sk scene editor
//!
//! Everything between a cursor position and a moved object:
//!
//! - [`camera::Camera`] - Free-fly camera producing view and projection matrices
//! - [`picking::Viewport`] - Unprojects pixels into world rays
//! - [`picking`] - Resolves the object or gizmo under a ray
//! - [`gizmo::GizmoSet`] - Move and rotate handles bound to the selection
//! - [`ray`] - Ray-plane, ray-ray and ray-box primitives
//!
//! # Module Structure
//!
//! ```text
//! sk-viewport/
//! ├── camera.rs      # Camera and GPU uniform
//! ├── config.rs      # Camera and viewport settings
//! ├── constants.rs   # Gizmo placement constants
//! ├── gizmo/         # Gizmo kinds, drag protocol, standard set
//! ├── picking.rs     # Unprojection and hover resolution
//! └── ray.rs         # Intersection math
//! ```

pub mod camera;
pub mod config;
pub mod constants;
pub mod gizmo;
pub mod picking;
pub mod ray;

pub use camera::{Camera, CameraMovement, CameraUniform};
pub use config::{CameraConfig, PickPolicy, ViewportConfig};
pub use gizmo::{DragState, Gizmo, GizmoDelta, GizmoError, GizmoKind, GizmoMode, GizmoSet};
pub use picking::{Viewport, pick_gizmo, pick_object};
pub use ray::Ray;
