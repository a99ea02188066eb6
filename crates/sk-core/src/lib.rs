//! Scene object model for the sk scene editor
//!
//! Objects are plain data: a primitive shape, a [`Transform`], material
//! parameters and a world-space [`Aabb`] that is recomputed whenever the
//! transform changes. The [`Scene`] owns them in insertion order and hands
//! out `Uuid`s as stable identities.

pub mod aabb;
pub mod constants;
pub mod light;
pub mod object;
pub mod scene;
pub mod transform;

pub use aabb::Aabb;
pub use light::Light;
pub use object::{Primitive, SceneObject};
pub use scene::{Scene, SceneError};
pub use transform::Transform;
