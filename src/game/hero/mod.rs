// Hero behavior core
//
// Two coupled state machines drive the player character:
// - movement (standing, jumping, flipping, falling, dead) gates physics events
// - animation (idle, running, pivoting, ...) follows velocity and movement
//
// Every tick the controller resolves movement first, then animation, firing
// at most one transition per machine. Side effects come back as `HeroEffect`
// values for the host to dispatch.

pub mod config;
pub mod controller;
pub mod effects;
pub mod hooks;
pub mod predicates;
pub mod state;
pub mod tables;

// Re-export commonly used types
pub use config::HeroConfig;
pub use controller::{HeroController, HeroFrame, HeroInput};
pub use effects::HeroEffect;
