// Arcade-style velocity integration on top of the rigid body solver
//
// rapier2d knows nothing about per-body acceleration, horizontal drag or
// speed caps. These are applied to the body's velocity once per tick before
// the solver steps.

use glam::Vec2;

use crate::core::math::{approach_zero, clamp_abs};

/// Per-body arcade motion parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcadeMotion {
    /// Current acceleration (units/s²)
    pub acceleration: Vec2,
    /// Horizontal deceleration applied only while there is no horizontal acceleration
    pub drag_x: f32,
    /// Speed cap per axis
    pub max_velocity: Vec2,
}

impl ArcadeMotion {
    pub fn new(drag_x: f32, max_velocity: Vec2) -> Self {
        Self {
            acceleration: Vec2::ZERO,
            drag_x,
            max_velocity,
        }
    }

    /// Velocity after `dt` seconds of acceleration, drag and clamping
    ///
    /// Gravity is left to the solver.
    pub fn integrate(&self, velocity: Vec2, dt: f32) -> Vec2 {
        let mut vx = velocity.x;
        if self.acceleration.x != 0.0 {
            vx += self.acceleration.x * dt;
        } else {
            vx = approach_zero(vx, self.drag_x * dt);
        }
        let vy = velocity.y + self.acceleration.y * dt;

        Vec2::new(
            clamp_abs(vx, self.max_velocity.x),
            clamp_abs(vy, self.max_velocity.y),
        )
    }
}
