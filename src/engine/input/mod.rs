// Input handling system
//
// Turns winit keyboard events into per-tick action state for the hero.
//
// - `action`: game actions and default key bindings
// - `action_state`: held / just-pressed / just-released tracking
// - `manager`: key → action mapping and event processing
//
// Edge events (just pressed / just released) survive until `update()` is
// called, which the host does after each simulation tick so a press landing
// on a frame with no tick is not lost.

pub mod action;
pub mod action_state;
pub mod manager;

// Re-export commonly used types
pub use action::Action;
pub use action_state::ActionState;
pub use manager::InputManager;
