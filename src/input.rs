//! # Input
//!
//! Keyboard and mouse state accumulated from host events.

use std::collections::HashMap;
use std::collections::HashSet;

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::math::DVector2;
use crate::math::IVector2;
use crate::Event;

type Binding = Box<dyn FnMut()>;

/// # Input
///
/// Tracks which keys and mouse buttons are held and where the cursor is, and runs callbacks
/// bound to key presses and releases.
pub struct Input {
    keys: HashSet<KeyCode>,
    mouse_buttons: HashSet<MouseButton>,
    mouse_position: IVector2,
    key_down_bindings: HashMap<KeyCode, Vec<Binding>>,
    key_up_bindings: HashMap<KeyCode, Vec<Binding>>,
}

impl Input {
    /// Returns input with nothing pressed and the cursor at `(-1, -1)`.
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            mouse_buttons: HashSet::new(),
            mouse_position: IVector2::new(-1, -1),
            key_down_bindings: HashMap::new(),
            key_up_bindings: HashMap::new(),
        }
    }

    /// Runs `callback` every time `key` is pressed.
    pub fn bind_key_down(&mut self, key: KeyCode, callback: impl FnMut() + 'static) {
        self.key_down_bindings
            .entry(key)
            .or_default()
            .push(Box::new(callback));
    }

    /// Runs `callback` every time `key` is released.
    pub fn bind_key_up(&mut self, key: KeyCode, callback: impl FnMut() + 'static) {
        self.key_up_bindings
            .entry(key)
            .or_default()
            .push(Box::new(callback));
    }

    /// Returns true while `key` is held down.
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Returns the keys currently held down.
    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys.iter().copied()
    }

    /// Returns true while `button` is held down.
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    /// Returns the cursor position in window pixels.
    pub fn mouse_position(&self) -> IVector2 {
        self.mouse_position
    }

    /// Returns the cursor position as a point for hit-testing.
    pub fn mouse_point(&self) -> DVector2 {
        self.mouse_position.into()
    }

    /// Updates the state from a host event and runs matching key bindings.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::KeyPressed(key) => {
                self.keys.insert(key);
                Self::run_bindings(&mut self.key_down_bindings, key);
            }
            Event::KeyReleased(key) => {
                self.keys.remove(&key);
                Self::run_bindings(&mut self.key_up_bindings, key);
            }
            Event::MouseMoved(position) => {
                self.mouse_position = position;
            }
            Event::MousePressed(button) => {
                self.mouse_buttons.insert(button);
            }
            Event::MouseReleased(button) => {
                self.mouse_buttons.remove(&button);
            }
            Event::CloseRequested => {}
        }
    }

    fn run_bindings(bindings: &mut HashMap<KeyCode, Vec<Binding>>, key: KeyCode) {
        for callback in bindings.get_mut(&key).into_iter().flatten() {
            callback();
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
