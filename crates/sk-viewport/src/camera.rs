//! Free-fly camera for the 3D viewport

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined projection * view matrix
    pub view_proj: [[f32; 4]; 4],
    /// View matrix
    pub view: [[f32; 4]; 4],
    /// Projection matrix
    pub proj: [[f32; 4]; 4],
    /// Camera position (w = 1)
    pub eye: [f32; 4],
}

/// Keyboard driven movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    /// Along the view direction
    Forward,
    /// Against the view direction
    Backward,
    /// Strafe left
    Left,
    /// Strafe right
    Right,
    /// Along the camera's up vector
    Up,
    /// Against the camera's up vector
    Down,
}

/// First-person camera driven by keyboard, mouse look and scroll zoom
pub struct Camera {
    /// World-space eye position
    pub position: Vec3,
    /// Unit view direction
    pub front: Vec3,
    /// World up
    pub up: Vec3,
    /// Field of view in radians
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Heading in degrees
    pub yaw: f32,
    /// Elevation in degrees, clamped to +-89
    pub pitch: f32,
    /// Units per second
    pub speed: f32,
    /// Degrees per pixel of mouse movement
    pub mouse_sensitivity: f32,
    /// Degrees of fov per scroll step
    pub scroll_sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl Camera {
    /// Smallest field of view reachable by zooming, in degrees
    pub const MIN_FOV_DEGREES: f32 = 5.0;
    /// Largest field of view reachable by zooming, in degrees
    pub const MAX_FOV_DEGREES: f32 = 140.0;
    /// Pitch limit in degrees
    pub const MAX_PITCH_DEGREES: f32 = 89.0;

    /// Create a camera from configuration
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(config.position),
            front: -Vec3::Z,
            up: Vec3::Y,
            fov: config
                .fov_degrees
                .clamp(Self::MIN_FOV_DEGREES, Self::MAX_FOV_DEGREES)
                .to_radians(),
            near: config.near_plane,
            far: config.far_plane,
            yaw: config.yaw_degrees,
            pitch: config
                .pitch_degrees
                .clamp(-Self::MAX_PITCH_DEGREES, Self::MAX_PITCH_DEGREES),
            speed: config.speed,
            mouse_sensitivity: config.mouse_sensitivity,
            scroll_sensitivity: config.scroll_sensitivity,
        };
        camera.update_front_from_angles();
        camera
    }

    /// Unit view direction
    pub fn forward(&self) -> Vec3 {
        self.front
    }

    /// Unit vector pointing to the camera's right
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    /// Move the camera for `delta_time` seconds
    pub fn process_movement(&mut self, direction: CameraMovement, delta_time: f32) {
        let step = self.speed * delta_time;
        let right = self.right();
        let up = right.cross(self.front).normalize();

        match direction {
            CameraMovement::Forward => self.position += self.front * step,
            CameraMovement::Backward => self.position -= self.front * step,
            CameraMovement::Left => self.position -= right * step,
            CameraMovement::Right => self.position += right * step,
            CameraMovement::Up => self.position += up * step,
            CameraMovement::Down => self.position -= up * step,
        }
    }

    /// Rotate the view by a mouse offset in pixels
    pub fn process_mouse(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += self.mouse_sensitivity * x_offset;
        self.pitch = (self.pitch - self.mouse_sensitivity * y_offset)
            .clamp(-Self::MAX_PITCH_DEGREES, Self::MAX_PITCH_DEGREES);
        self.update_front_from_angles();
    }

    /// Zoom by narrowing or widening the field of view
    pub fn process_scroll(&mut self, _x_offset: f32, y_offset: f32) {
        self.set_fov_degrees(self.fov_degrees() - y_offset * self.scroll_sensitivity);
    }

    /// Set field of view in degrees, clamped to the zoom range
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees
            .clamp(Self::MIN_FOV_DEGREES, Self::MAX_FOV_DEGREES)
            .to_radians();
    }

    /// Get field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    fn update_front_from_angles(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Get projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// Get camera uniform data
    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix(aspect);
        let view_proj = proj * view;

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }
}
