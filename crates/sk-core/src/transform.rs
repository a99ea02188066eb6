//! Object placement

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Position, Euler orientation and non-uniform scale of an object.
///
/// Orientation is in radians and applied as rotations about x, then y,
/// then z in the object's own frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub orientation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, orientation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            orientation,
            scale,
        }
    }

    /// Identity transform moved to `position`.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Model matrix `T * Rx * Ry * Rz * S`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.orientation.x)
            * Mat4::from_rotation_y(self.orientation.y)
            * Mat4::from_rotation_z(self.orientation.z)
            * Mat4::from_scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_model_matrix() {
        assert_eq!(Transform::IDENTITY.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_scale_applied_before_translation() {
        let t = Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::splat(2.0));
        let p = t.model_matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(3.0, 2.0, 3.0), 1e-6));
    }

    #[test]
    fn test_rotation_order_x_then_y_then_z() {
        // Rz is applied to the point first, so +x goes to +y, then Ry leaves y alone,
        // then Rx maps +y to +z.
        let t = Transform::new(Vec3::ZERO, Vec3::new(FRAC_PI_2, 0.0, FRAC_PI_2), Vec3::ONE);
        let p = t.model_matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::Z, 1e-6));
    }
}
