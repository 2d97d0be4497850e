// Input manager - turns winit keyboard events into action state

use super::action::{default_bindings, Action};
use super::action_state::ActionState;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Maps physical keys to actions and tracks their state
pub struct InputManager {
    bindings: HashMap<KeyCode, Action>,
    state: ActionState,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    /// Create an input manager from a list of bindings
    pub fn with_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            state: ActionState::new(),
        }
    }

    /// Bind a key to an action, replacing any previous binding of that key
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.bindings.insert(key, action);
    }

    /// Get the action bound to a key
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply one key transition
    pub fn process_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        let Some(action) = self.action_for(key) else {
            return;
        };

        match state {
            // OS key repeat is not a new press
            ElementState::Pressed if !repeat => self.state.press(action),
            ElementState::Pressed => {}
            ElementState::Released => self.state.release(action),
        }
    }

    /// Clear edge events; call after a simulation tick consumed them
    pub fn update(&mut self) {
        self.state.update();
    }

    /// Current action state
    pub fn state(&self) -> &ActionState {
        &self.state
    }

    /// Release every action
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
