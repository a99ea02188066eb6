//! Global constants for sk-core

/// Radius of the arrow shaft
pub const ARROW_TAIL_RADIUS: f32 = 0.02;

/// Length of the arrow shaft
pub const ARROW_TAIL_HEIGHT: f32 = 1.0;

/// Radius of the arrow cone base
pub const ARROW_HEAD_RADIUS: f32 = 0.1;

/// Length of the arrow cone
pub const ARROW_HEAD_HEIGHT: f32 = 0.25;

/// Radius of the unit sphere mesh
pub const SPHERE_RADIUS: f32 = 1.0;

/// Half edge length of the unit cube mesh
pub const CUBE_HALF_EXTENT: f32 = 0.5;

/// Outer radius of the hollow cylinder mesh
pub const HOLLOW_CYLINDER_RADIUS: f32 = 1.0;

/// Half height of the hollow cylinder mesh
pub const HOLLOW_CYLINDER_HALF_HEIGHT: f32 = 0.5;

/// Default specular shininess
pub const DEFAULT_SHININESS: f32 = 85.0;

/// Maximum number of point lights the shaders accept
pub const MAX_LIGHTS: usize = 16;
