//! Scene object list

use glam::Vec3;
use uuid::Uuid;

use crate::constants::{DEFAULT_SHININESS, MAX_LIGHTS};
use crate::light::Light;
use crate::object::{Primitive, SceneObject};
use crate::transform::Transform;

/// Scene management errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("Object not found: {0}")]
    ObjectNotFound(Uuid),
    #[error("Light limit reached ({0} lights)")]
    LightLimit(usize),
    #[error("Unknown primitive type: {0}")]
    UnknownPrimitive(String),
}

/// Insertion-ordered list of scene objects.
///
/// Iteration order is the order objects were added, which the picker
/// relies on to break ties deterministically.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    max_lights: usize,
    // Never reused, so names stay unique across removals
    next_index: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(MAX_LIGHTS)
    }
}

impl Scene {
    /// Create an empty scene accepting at most `max_lights` light objects
    pub fn new(max_lights: usize) -> Self {
        Self {
            objects: Vec::new(),
            max_lights,
            next_index: 0,
        }
    }

    /// Scene with two cubes and a white point light at the origin
    pub fn demo(max_lights: usize) -> Self {
        let mut scene = Self::new(max_lights);
        scene.add(SceneObject::new(
            Primitive::Cube,
            Transform::from_position(Vec3::new(8.0, -2.0, 1.0)),
            Vec3::new(0.0, 0.8, 0.0),
            DEFAULT_SHININESS,
        ));
        scene.add(SceneObject::new(
            Primitive::Cube,
            Transform::from_position(Vec3::new(-2.0, -2.0, 1.0)),
            Vec3::new(0.0, 0.0, 0.6),
            DEFAULT_SHININESS,
        ));
        let light = SceneObject::new(
            Primitive::Cube,
            Transform::new(Vec3::ZERO, Vec3::ZERO, Vec3::splat(0.2)),
            Vec3::ONE,
            DEFAULT_SHININESS,
        );
        if let Err(e) = scene.add_light(light, Light::point()) {
            tracing::warn!("Demo light not added: {e}");
        }
        scene
    }

    /// Add an object under the next free `Object_<n>` name. Returns the object ID.
    pub fn add(&mut self, mut object: SceneObject) -> Uuid {
        object.name = format!("Object_{}", self.next_index);
        self.next_index += 1;
        let id = object.id;
        tracing::debug!("Added {} ({}) as {}", object.primitive, id, object.name);
        self.objects.push(object);
        id
    }

    /// Add an object that also emits light
    pub fn add_light(&mut self, mut object: SceneObject, light: Light) -> Result<Uuid, SceneError> {
        if self.light_count() >= self.max_lights {
            return Err(SceneError::LightLimit(self.max_lights));
        }
        object.add_light(light);
        Ok(self.add(object))
    }

    /// Remove an object by ID
    pub fn remove(&mut self, id: Uuid) -> Result<SceneObject, SceneError> {
        let index = self.position_of(id).ok_or(SceneError::ObjectNotFound(id))?;
        Ok(self.objects.remove(index))
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn get(&self, id: Uuid) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Index of the object in iteration order
    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn light_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_light()).count()
    }

    pub fn max_lights(&self) -> usize {
        self.max_lights
    }
}
