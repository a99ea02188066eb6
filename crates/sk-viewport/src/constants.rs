//! Viewport constants

/// Gizmo placement and appearance
pub mod gizmo {
    use glam::Vec3;
    use sk_core::constants::ARROW_TAIL_HEIGHT;

    /// Distance of move handles from the target's origin
    pub const HANDLE_OFFSET: f32 = 0.25 * ARROW_TAIL_HEIGHT;

    /// Colour channel intensity of handle colours
    pub const COLOUR_INTENSITY: f32 = 0.8;

    /// Shininess of every handle body
    pub const SHININESS: f32 = 32.0;

    /// Arrow body scale of an axis-move handle
    pub const AXIS_MOVE_SCALE: Vec3 = Vec3::splat(0.5);
    /// Flat cube scale of a plane-move handle
    pub const PLANE_MOVE_SCALE: Vec3 = Vec3::new(0.15, 0.15, 0.005);
    /// Ring scales. Radii differ so the three rings never overlap.
    pub const X_ROTATE_SCALE: Vec3 = Vec3::new(0.8, 0.8, 0.05);
    /// See [`X_ROTATE_SCALE`]
    pub const Y_ROTATE_SCALE: Vec3 = Vec3::new(0.9, 0.9, 0.05);
    /// See [`X_ROTATE_SCALE`]
    pub const Z_ROTATE_SCALE: Vec3 = Vec3::new(1.0, 1.0, 0.05);

    /// Scale factor applied to a hovered move handle
    pub const MOVE_HOVER_SCALE: f32 = 1.2;
    /// Scale factor applied to a hovered rotation ring
    pub const ROTATE_HOVER_SCALE: f32 = 1.05;

    /// Name of the marker drawn at the target's origin
    pub const CENTRE_NAME: &str = "CENTRE_GIZMO";
    /// Grey of the centre marker
    pub const CENTRE_COLOUR: Vec3 = Vec3::splat(0.8);
    /// Sphere scale of the centre marker
    pub const CENTRE_SCALE: Vec3 = Vec3::splat(0.05);

    /// Rotation arms shorter than this produce no rotation
    pub const MIN_ARM_LENGTH: f32 = 1e-6;
}
