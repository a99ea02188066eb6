//! Abstract input events
//!
//! The windowing layer reports raw key, button, cursor and scroll changes to
//! an [`InputTracker`], which turns them into an ordered queue of
//! [`Event`]s. The editor drains the queue once per tick.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// What an event asks the editor to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Window resized; `mouse_x`/`mouse_y` carry the new width and height
    ScreenResize,
    MoveForward,
    MoveLeft,
    MoveBackward,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Cursor moved while mouse-look is on
    Turn,
    /// Cursor moved while the pointer is free
    MoveCursor,
    /// Scroll wheel; offsets in `scroll_x`/`scroll_y`
    Zoom,
    /// Left button released
    LeftClick,
    /// Left button held this update
    LeftButtonPressed,
    /// Right button released
    RightClick,
    /// Right button held this update
    RightButtonPressed,
    /// Switch between mouse-look and a free pointer
    ToggleMouse,
    /// Switch between move and rotate gizmos
    ToggleGizmo,
}

/// One queued input event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub action: Action,
    #[serde(default)]
    pub mouse_x: f32,
    #[serde(default)]
    pub mouse_y: f32,
    #[serde(default)]
    pub scroll_x: f32,
    #[serde(default)]
    pub scroll_y: f32,
}

impl Event {
    /// Event without position or scroll payload
    pub fn new(action: Action) -> Self {
        Self {
            action,
            mouse_x: 0.0,
            mouse_y: 0.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn cursor(x: f32, y: f32) -> Self {
        Self {
            mouse_x: x,
            mouse_y: y,
            ..Self::new(Action::MoveCursor)
        }
    }

    pub fn turn(x: f32, y: f32) -> Self {
        Self {
            mouse_x: x,
            mouse_y: y,
            ..Self::new(Action::Turn)
        }
    }

    pub fn resize(width: f32, height: f32) -> Self {
        Self {
            mouse_x: width,
            mouse_y: height,
            ..Self::new(Action::ScreenResize)
        }
    }

    pub fn scroll(x: f32, y: f32) -> Self {
        Self {
            scroll_x: x,
            scroll_y: y,
            ..Self::new(Action::Zoom)
        }
    }
}

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    LeftCtrl,
    Space,
    M,
    G,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Other,
}

/// Tracks held keys and buttons and queues events.
///
/// Movement keys and held buttons emit on every [`update`](Self::update).
/// `M`, `G` and the mouse buttons emit once on release.
#[derive(Debug, Default)]
pub struct InputTracker {
    pressed_keys: HashSet<Key>,
    pressed_buttons: HashSet<MouseButton>,
    events: Vec<Event>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event directly
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Record a key going down (`pressed`) or up
    pub fn key_event(&mut self, key: Key, pressed: bool) {
        let was_pressed = self.set_key(key, pressed);
        let released = was_pressed && !pressed;

        match key {
            Key::M if released => self.push(Event::new(Action::ToggleMouse)),
            Key::G if released => self.push(Event::new(Action::ToggleGizmo)),
            _ => {}
        }
    }

    /// Record a mouse button going down or up
    pub fn mouse_button_event(&mut self, button: MouseButton, pressed: bool) {
        let was_pressed = if pressed {
            !self.pressed_buttons.insert(button)
        } else {
            self.pressed_buttons.remove(&button)
        };

        if was_pressed && !pressed {
            match button {
                MouseButton::Left => self.push(Event::new(Action::LeftClick)),
                MouseButton::Right => self.push(Event::new(Action::RightClick)),
                MouseButton::Other => {}
            }
        }
    }

    /// Cursor moved. `turning` selects mouse-look over pointer movement.
    pub fn mouse_moved(&mut self, x: f32, y: f32, turning: bool) {
        if turning {
            self.push(Event::turn(x, y));
        } else {
            self.push(Event::cursor(x, y));
        }
    }

    pub fn scrolled(&mut self, x: f32, y: f32) {
        self.push(Event::scroll(x, y));
    }

    pub fn screen_resized(&mut self, width: f32, height: f32) {
        self.push(Event::resize(width, height));
    }

    /// Emit the repeating events for everything currently held
    pub fn update(&mut self) {
        const HELD_KEYS: [(Key, Action); 6] = [
            (Key::W, Action::MoveForward),
            (Key::A, Action::MoveLeft),
            (Key::S, Action::MoveBackward),
            (Key::D, Action::MoveRight),
            (Key::LeftCtrl, Action::MoveDown),
            (Key::Space, Action::MoveUp),
        ];
        const HELD_BUTTONS: [(MouseButton, Action); 2] = [
            (MouseButton::Left, Action::LeftButtonPressed),
            (MouseButton::Right, Action::RightButtonPressed),
        ];

        for (key, action) in HELD_KEYS {
            if self.pressed_keys.contains(&key) {
                self.events.push(Event::new(action));
            }
        }
        for (button, action) in HELD_BUTTONS {
            if self.pressed_buttons.contains(&button) {
                self.events.push(Event::new(action));
            }
        }
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Take queued events in arrival order
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    // Returns whether the key was held before
    fn set_key(&mut self, key: Key, pressed: bool) -> bool {
        if pressed {
            !self.pressed_keys.insert(key)
        } else {
            self.pressed_keys.remove(&key)
        }
    }
}

/// Parse a RON list of events
pub fn parse_script(content: &str) -> Result<Vec<Event>, ConfigError> {
    ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
}

/// Load a RON list of events from a file
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<Event>, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    parse_script(&content)
}
