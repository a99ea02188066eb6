//! Scene objects and their primitive shapes

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aabb::{Aabb, box_corners};
use crate::constants::{
    ARROW_HEAD_HEIGHT, ARROW_HEAD_RADIUS, ARROW_TAIL_HEIGHT, ARROW_TAIL_RADIUS, CUBE_HALF_EXTENT,
    HOLLOW_CYLINDER_HALF_HEIGHT, HOLLOW_CYLINDER_RADIUS, SPHERE_RADIUS,
};
use crate::light::Light;
use crate::scene::SceneError;
use crate::transform::Transform;

/// Primitive mesh an object is drawn with.
///
/// Variants only differ in their mesh; picking works on the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Primitive {
    #[default]
    Cube,
    Sphere,
    Arrow,
    HollowCylinder,
}

impl Primitive {
    /// Upper-case label used by the object adder
    pub fn label(&self) -> &'static str {
        match self {
            Primitive::Cube => "CUBE",
            Primitive::Sphere => "SPHERE",
            Primitive::Arrow => "ARROW",
            Primitive::HollowCylinder => "HOLLOW_CYLINDER",
        }
    }

    /// All primitives for UI lists
    pub fn all() -> &'static [Primitive] {
        &[
            Primitive::Cube,
            Primitive::Sphere,
            Primitive::Arrow,
            Primitive::HollowCylinder,
        ]
    }

    /// Corners of the mesh's bounding box in object space.
    pub fn local_corners(&self) -> [Vec3; 8] {
        match self {
            Primitive::Cube => box_corners(
                CUBE_HALF_EXTENT,
                CUBE_HALF_EXTENT,
                -CUBE_HALF_EXTENT,
                CUBE_HALF_EXTENT,
            ),
            Primitive::Sphere => {
                box_corners(SPHERE_RADIUS, SPHERE_RADIUS, -SPHERE_RADIUS, SPHERE_RADIUS)
            }
            // The shaft is centered on the origin and the head sits on its +z end
            Primitive::Arrow => {
                let half = 0.5 * ARROW_HEAD_RADIUS.max(ARROW_TAIL_RADIUS);
                box_corners(
                    half,
                    half,
                    -0.5 * ARROW_TAIL_HEIGHT,
                    ARROW_HEAD_HEIGHT + 0.5 * ARROW_TAIL_HEIGHT,
                )
            }
            Primitive::HollowCylinder => box_corners(
                HOLLOW_CYLINDER_RADIUS,
                HOLLOW_CYLINDER_RADIUS,
                -HOLLOW_CYLINDER_HALF_HEIGHT,
                HOLLOW_CYLINDER_HALF_HEIGHT,
            ),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Primitive {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Primitive::all()
            .iter()
            .copied()
            .find(|p| p.label() == s)
            .ok_or_else(|| SceneError::UnknownPrimitive(s.to_string()))
    }
}

/// An object placed in the scene (or used as a gizmo body).
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub id: Uuid,
    pub name: String,
    pub primitive: Primitive,
    /// Material colour (RGB)
    pub colour: Vec3,
    pub shininess: f32,
    /// Present when the object also acts as a point light
    pub light: Option<Light>,
    pub visible: bool,
    transform: Transform,
    bbox: Aabb,
}

impl SceneObject {
    /// Create an object and compute its bounding box
    pub fn new(primitive: Primitive, transform: Transform, colour: Vec3, shininess: f32) -> Self {
        let mut object = Self {
            id: Uuid::new_v4(),
            name: "NO_NAME".to_string(),
            primitive,
            colour,
            shininess,
            light: None,
            visible: true,
            transform,
            bbox: Aabb::default(),
        };
        object.update_bounding_box();
        object
    }

    /// Builder-style name override
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn orientation(&self) -> Vec3 {
        self.transform.orientation
    }

    pub fn scale(&self) -> Vec3 {
        self.transform.scale
    }

    /// World-space bounding box, always consistent with the transform
    pub fn bbox(&self) -> &Aabb {
        &self.bbox
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.update_bounding_box();
    }

    /// Edit the transform in place; the bounding box is refreshed afterwards
    pub fn update_transform(&mut self, f: impl FnOnce(&mut Transform)) {
        f(&mut self.transform);
        self.update_bounding_box();
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.update_transform(|t| t.position = position);
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.update_transform(|t| t.position += delta);
    }

    pub fn set_orientation(&mut self, orientation: Vec3) {
        self.update_transform(|t| t.orientation = orientation);
    }

    /// Add Euler angles (radians) to the orientation
    pub fn rotate(&mut self, delta: Vec3) {
        self.update_transform(|t| t.orientation += delta);
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.update_transform(|t| t.scale = scale);
    }

    /// Recompute the bounding box from the primitive's corners.
    pub fn update_bounding_box(&mut self) {
        self.bbox =
            Aabb::from_local_corners(&self.primitive.local_corners(), &self.transform.model_matrix());
    }

    /// Turn the object into a point light
    pub fn add_light(&mut self, light: Light) {
        self.light = Some(light);
    }

    pub fn is_light(&self) -> bool {
        self.light.is_some()
    }
}
