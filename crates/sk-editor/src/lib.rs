//! sk scene editor
//!
//! Input events flow through an [`events::InputTracker`] into the
//! [`state::Editor`], which resolves hover and selection and drives gizmo
//! drags once per tick. Rendering and windowing live outside this crate and
//! read the editor through a [`state::SharedEditor`] after each tick.

pub mod config;
pub mod events;
pub mod state;

pub use config::{ConfigError, EditorConfig, SceneConfig};
pub use events::{Action, Event, InputTracker, Key, MouseButton};
pub use state::{
    Editor, InteractionPhase, InteractionState, SharedEditor, create_shared_editor,
};
