// Commands the hero core hands to its collaborators

use glam::Vec2;

/// A single side effect produced during a tick
///
/// Body commands are applied by the physics host in the order they appear.
/// Presentation requests are forwarded to whoever plays clips and sounds.
#[derive(Debug, Clone, PartialEq)]
pub enum HeroEffect {
    /// Set horizontal acceleration
    SetAccelerationX(f32),
    /// Set both acceleration components
    SetAcceleration(Vec2),
    /// Override vertical velocity
    SetVelocityY(f32),
    /// Override the whole velocity
    SetVelocity(Vec2),
    /// Move the collider horizontally inside the sprite frame
    SetBodyOffsetX(f32),
    /// Toggle collision with the world bounds
    SetCollideWorldBounds(bool),
    /// Start an animation clip
    PlayAnimation { clip: String },
    /// Play a one-shot sound
    PlaySound { key: &'static str },
    /// The hero just died (raised once per life)
    Died,
}
