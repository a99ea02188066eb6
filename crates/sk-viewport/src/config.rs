//! Viewport configuration structures
//!
//! Settings for the camera and the picker that can be serialized and
//! loaded from configuration files.

use serde::{Deserialize, Serialize};

/// How the picker chooses between several boxes under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PickPolicy {
    /// The last candidate in iteration order wins
    #[default]
    LastHit,
    /// The candidate whose box the ray enters first wins
    Nearest,
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial camera position
    pub position: [f32; 3],
    /// Initial yaw in degrees (-90 looks down -z)
    pub yaw_degrees: f32,
    /// Initial pitch in degrees
    pub pitch_degrees: f32,
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
    /// Movement speed in units per second
    pub speed: f32,
    /// Degrees of rotation per pixel of mouse movement
    pub mouse_sensitivity: f32,
    /// Degrees of field of view per scroll step
    pub scroll_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw_degrees: -90.0,
            pitch_degrees: 0.0,
            fov_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 100.0,
            speed: 5.0,
            mouse_sensitivity: 0.1,
            scroll_sensitivity: 1.0,
        }
    }
}

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Initial width in pixels
    pub width: f32,
    /// Initial height in pixels
    pub height: f32,
    /// Tie-break used when the cursor ray hits several boxes
    pub pick_policy: PickPolicy,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            pick_policy: PickPolicy::default(),
        }
    }
}
