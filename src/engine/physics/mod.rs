// Physics collaborator built on rapier2d
//
// The hero core never talks to rapier directly. The arena reads velocities and
// ground contact from this world and applies the hero's body commands to it.

pub mod arcade;
pub mod body;
mod collision;
mod world;

pub use arcade::ArcadeMotion;
pub use body::{presets, ColliderHandle, RigidBodyHandle};
pub use collision::CollisionLayer;
pub use world::PhysicsWorld;

// Re-export the rapier query filter the arena needs
pub use rapier2d::prelude::QueryFilter;
