// Per-frame action state: held, just pressed, just released

use super::action::Action;
use std::collections::HashSet;

/// Tracks which actions are down and which changed since the last update
#[derive(Debug, Default)]
pub struct ActionState {
    /// Actions that are currently down
    pressed: HashSet<Action>,

    /// Actions that went down since the last update
    just_pressed: HashSet<Action>,

    /// Actions that went up since the last update
    just_released: HashSet<Action>,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently down
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action went down since the last update
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action went up since the last update
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press (repeats of a held action are ignored)
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear the edge events once they have been consumed by a tick
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut state = ActionState::new();
        state.press(Action::Jump);
        assert!(state.is_pressed(Action::Jump));
        assert!(state.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut state = ActionState::new();
        state.press(Action::Jump);
        state.update();
        state.release(Action::Jump);
        assert!(!state.is_pressed(Action::Jump));
        assert!(state.just_released(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut state = ActionState::new();
        state.press(Action::Jump);
        state.update();
        assert!(state.is_pressed(Action::Jump));
        assert!(!state.just_pressed(Action::Jump));
    }

    #[test]
    fn test_press_while_held_is_not_an_edge() {
        let mut state = ActionState::new();
        state.press(Action::Jump);
        state.update();
        state.press(Action::Jump);
        assert!(!state.just_pressed(Action::Jump));
    }

    #[test]
    fn test_tap_within_one_frame() {
        // Pressed and released before any tick ran: the press still counts
        let mut state = ActionState::new();
        state.press(Action::Jump);
        state.release(Action::Jump);
        assert!(state.just_pressed(Action::Jump));
        assert!(state.just_released(Action::Jump));
        assert!(!state.is_pressed(Action::Jump));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut state = ActionState::new();
        state.release(Action::Jump);
        assert!(!state.just_released(Action::Jump));
    }

    #[test]
    fn test_reset() {
        let mut state = ActionState::new();
        state.press(Action::Jump);
        state.press(Action::MoveLeft);
        state.reset();
        assert!(!state.is_pressed(Action::Jump));
        assert!(!state.just_pressed(Action::MoveLeft));
    }
}
