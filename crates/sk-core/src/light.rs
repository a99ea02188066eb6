//! Point light parameters attached to scene objects

use serde::{Deserialize, Serialize};

/// Phong factors and attenuation coefficients of a point light.
///
/// Only carried for the renderer; nothing here evaluates lighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self::point()
    }
}

impl Light {
    pub fn new(
        ambient: f32,
        diffuse: f32,
        specular: f32,
        constant: f32,
        linear: f32,
        quadratic: f32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            constant,
            linear,
            quadratic,
        }
    }

    /// Default point light with a roughly 50 unit falloff
    pub fn point() -> Self {
        Self::new(0.1, 0.8, 1.0, 1.0, 0.09, 0.032)
    }
}
