//! Editor state module

mod interaction;

pub use interaction::{InteractionPhase, InteractionState};

use std::sync::Arc;

use glam::{Vec2, Vec3};
use parking_lot::Mutex;
use uuid::Uuid;

use sk_core::constants::DEFAULT_SHININESS;
use sk_core::{Light, Primitive, Scene, SceneError, SceneObject, Transform};
use sk_viewport::{
    Camera, CameraMovement, GizmoMode, GizmoSet, PickPolicy, Ray, Viewport, pick_gizmo,
    pick_object,
};

use crate::config::EditorConfig;
use crate::events::{Action, Event, InputTracker};

/// Scene editor: owns the scene, camera, gizmos and interaction state and
/// advances them one tick per frame.
pub struct Editor {
    /// Viewing camera
    pub camera: Camera,
    /// Window size used for unprojection
    pub viewport: Viewport,
    scene: Scene,
    gizmos: GizmoSet,
    interaction: InteractionState,
    input: InputTracker,
    pick_policy: PickPolicy,
    /// Last cursor position seen by a move or turn event
    last_cursor: Vec2,
    /// Swallow the next turn event
    first_mouse_movement: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor from configuration
    pub fn new(config: &EditorConfig) -> Self {
        let scene = if config.scene.demo_scene {
            Scene::demo(config.scene.max_lights)
        } else {
            Scene::new(config.scene.max_lights)
        };
        Self::with_scene(scene, config)
    }

    /// Create an editor around an existing scene
    pub fn with_scene(scene: Scene, config: &EditorConfig) -> Self {
        tracing::info!(
            "Editor ready: {} objects, pick policy {:?}",
            scene.len(),
            config.viewport.pick_policy
        );
        Self {
            camera: Camera::new(&config.camera),
            viewport: Viewport::from_config(&config.viewport),
            scene,
            gizmos: GizmoSet::standard(),
            interaction: InteractionState::new(),
            input: InputTracker::new(),
            pick_policy: config.viewport.pick_policy,
            last_cursor: Vec2::ZERO,
            first_mouse_movement: true,
        }
    }

    // ============== Accessors ==============

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn gizmos(&self) -> &GizmoSet {
        &self.gizmos
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn selected_object(&self) -> Option<Uuid> {
        self.interaction.selected_object
    }

    pub fn hovered_object(&self) -> Option<Uuid> {
        self.interaction.hovered_object
    }

    pub fn hovered_gizmo(&self) -> Option<&str> {
        self.interaction.hovered_gizmo.as_deref()
    }

    pub fn active_gizmo_mode(&self) -> GizmoMode {
        self.interaction.active_gizmo_mode
    }

    pub fn phase(&self) -> InteractionPhase {
        self.interaction.phase()
    }

    pub fn pick_policy(&self) -> PickPolicy {
        self.pick_policy
    }

    pub fn set_pick_policy(&mut self, policy: PickPolicy) {
        self.pick_policy = policy;
    }

    /// Input tracker fed by the windowing layer
    pub fn input_mut(&mut self) -> &mut InputTracker {
        &mut self.input
    }

    /// Queue an event for the next tick
    pub fn queue_event(&mut self, event: Event) {
        self.input.push(event);
    }

    /// Mutable access to an object, e.g. for property panels.
    /// Its bounding box is refreshed through the object's own setters.
    pub fn object_mut(&mut self, id: Uuid) -> Option<&mut SceneObject> {
        self.scene.get_mut(id)
    }

    // ============== Frame ==============

    /// Advance one frame: handle every queued event in order, then refresh
    /// the selection's bounding box and the gizmo placement.
    pub fn tick(&mut self, delta_time: f32) {
        for event in self.input.take_events() {
            self.handle_event(event, delta_time);
        }
        self.refresh_derived();

        // Held keys and buttons repeat next frame
        self.input.update();
    }

    fn handle_event(&mut self, event: Event, delta_time: f32) {
        match event.action {
            Action::ScreenResize => {
                self.viewport.resize(event.mouse_x, event.mouse_y);
                tracing::debug!("Viewport resized to {}x{}", self.viewport.width, self.viewport.height);
            }
            Action::MoveForward => self.camera.process_movement(CameraMovement::Forward, delta_time),
            Action::MoveLeft => self.camera.process_movement(CameraMovement::Left, delta_time),
            Action::MoveBackward => {
                self.camera.process_movement(CameraMovement::Backward, delta_time)
            }
            Action::MoveRight => self.camera.process_movement(CameraMovement::Right, delta_time),
            Action::MoveUp => self.camera.process_movement(CameraMovement::Up, delta_time),
            Action::MoveDown => self.camera.process_movement(CameraMovement::Down, delta_time),
            Action::Turn => {
                let cursor = Vec2::new(event.mouse_x, event.mouse_y);
                let offset = cursor - self.last_cursor;
                self.last_cursor = cursor;

                if self.first_mouse_movement {
                    self.first_mouse_movement = false;
                } else {
                    self.camera.process_mouse(offset.x, offset.y);
                }
            }
            Action::MoveCursor => {
                self.last_cursor = Vec2::new(event.mouse_x, event.mouse_y);
                self.process_cursor(event.mouse_x, event.mouse_y);
            }
            Action::Zoom => self.camera.process_scroll(event.scroll_x, event.scroll_y),
            Action::LeftClick => self.interaction.release(),
            Action::LeftButtonPressed => self.interaction.mouse_pressed = true,
            Action::RightClick => tracing::debug!("Right click"),
            Action::RightButtonPressed => tracing::trace!("Right button held"),
            Action::ToggleMouse => self.reset_mouse_look(),
            Action::ToggleGizmo => self.toggle_gizmo_mode(),
        }
    }

    /// Resolve hover for the cursor and advance a gizmo drag
    fn process_cursor(&mut self, x: f32, y: f32) {
        let ray = self.viewport.screen_to_ray(&self.camera, x, y);

        // Hover is frozen while a gizmo is being dragged
        if !self.interaction.is_dragging() {
            self.interaction.hovered_object = pick_object(
                &ray,
                &self.scene,
                self.interaction.selected_object,
                self.pick_policy,
            );
        }

        if self.interaction.selected_object.is_some() && !self.interaction.mouse_pressed {
            self.interaction.hovered_gizmo =
                pick_gizmo(&ray, &self.gizmos, self.pick_policy).map(str::to_owned);
        }

        if self.interaction.mouse_pressed {
            self.drag_gizmo(&ray);
        }
    }

    fn drag_gizmo(&mut self, ray: &Ray) {
        let Some(name) = self.interaction.hovered_gizmo.as_deref() else {
            return;
        };
        let Some(target_id) = self.interaction.selected_object else {
            return;
        };
        let Some(gizmo) = self.gizmos.get(name) else {
            tracing::warn!("Hovered gizmo {name} is not in the set");
            return;
        };
        let Some(target) = self.scene.get_mut(target_id) else {
            return;
        };

        if let Some(delta) = gizmo.transform(ray, target, &mut self.interaction.drag) {
            tracing::debug!("{name} moved {} by {delta:?}", target.name);
        }

        if self.interaction.drag.is_dragging {
            self.interaction.hovered_object = None;
        }
    }

    fn refresh_derived(&mut self) {
        let Some(id) = self.interaction.selected_object else {
            return;
        };

        match self.scene.get_mut(id) {
            Some(target) => {
                target.update_bounding_box();
                self.gizmos.update_for_target(target);
            }
            None => {
                tracing::warn!("Selected object {id} no longer exists");
                self.interaction.forget(id);
            }
        }
    }

    /// Flip between move and rotate gizmos
    pub fn toggle_gizmo_mode(&mut self) {
        self.interaction.toggle_gizmo_mode();
        self.gizmos.toggle_all();
        tracing::debug!("Gizmo mode: {:?}", self.interaction.active_gizmo_mode);
    }

    /// The next turn event only records the cursor
    pub fn reset_mouse_look(&mut self) {
        self.first_mouse_movement = true;
    }

    // ============== Scene editing ==============

    /// Add an object and select it
    pub fn add_object(
        &mut self,
        primitive: Primitive,
        transform: Transform,
        colour: Vec3,
        shininess: f32,
    ) -> Uuid {
        let id = self
            .scene
            .add(SceneObject::new(primitive, transform, colour, shininess));
        self.set_selection(Some(id));
        id
    }

    /// Add a light-emitting object and select it
    pub fn add_light_object(
        &mut self,
        primitive: Primitive,
        transform: Transform,
        colour: Vec3,
        light: Light,
    ) -> Result<Uuid, SceneError> {
        let object = SceneObject::new(primitive, transform, colour, DEFAULT_SHININESS);
        let id = self.scene.add_light(object, light)?;
        self.set_selection(Some(id));
        Ok(id)
    }

    /// Select an object, or clear the selection with `None`
    pub fn select(&mut self, id: Option<Uuid>) -> Result<(), SceneError> {
        match id {
            Some(id) if !self.scene.contains(id) => return Err(SceneError::ObjectNotFound(id)),
            _ => {}
        }
        self.set_selection(id);
        Ok(())
    }

    /// Remove an object, dropping any selection or hover on it
    pub fn remove_object(&mut self, id: Uuid) -> Result<SceneObject, SceneError> {
        let object = self.scene.remove(id)?;
        self.interaction.forget(id);
        tracing::debug!("Removed {}", object.name);
        Ok(object)
    }

    /// Remove every object
    pub fn clear_scene(&mut self) {
        self.scene.clear();
        self.interaction.reset();
    }

    fn set_selection(&mut self, id: Option<Uuid>) {
        self.interaction.selected_object = id;
        self.interaction.hovered_object = None;
        self.interaction.hovered_gizmo = None;
        self.interaction.drag.release();
        self.refresh_derived();
    }
}

pub type SharedEditor = Arc<Mutex<Editor>>;

/// Create a new shared editor
pub fn create_shared_editor(config: &EditorConfig) -> SharedEditor {
    Arc::new(Mutex::new(Editor::new(config)))
}
