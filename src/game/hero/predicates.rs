// Transition predicates
//
// Pure functions of one frame's physical and input facts. They say whether a
// transition may be attempted; the tables decide whether it is legal.

use glam::Vec2;

use crate::core::math::sign;

use super::state::{AnimTransition, MoveState, MoveTransition};

/// Physical and input facts of a single resolver pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameSnapshot {
    pub velocity: Vec2,
    pub on_ground: bool,
    pub facing_left: bool,
    pub jump_pressed: bool,
    pub jump_held: bool,
}

impl FrameSnapshot {
    /// Facing as a horizontal sign: -1.0 left, 1.0 right
    pub fn facing(&self) -> f32 {
        if self.facing_left {
            -1.0
        } else {
            1.0
        }
    }
}

/// Movement predicates
///
/// `die` never holds here; it is fired through `HeroController::kill`.
pub fn movement(name: MoveTransition, frame: &FrameSnapshot) -> bool {
    match name {
        MoveTransition::Jump => frame.jump_pressed,
        // Same press; the table only allows it while already jumping
        MoveTransition::Flip => frame.jump_pressed,
        MoveTransition::Fall => !frame.on_ground,
        MoveTransition::Touchdown => frame.on_ground,
        MoveTransition::Die => false,
    }
}

/// Animation predicates
///
/// `movement_state` is the movement machine's state after this tick's
/// movement resolution.
pub fn animation(name: AnimTransition, frame: &FrameSnapshot, movement_state: MoveState) -> bool {
    let vx = sign(frame.velocity.x);
    let vy = frame.velocity.y;

    match name {
        AnimTransition::Idle => frame.on_ground && frame.velocity.x == 0.0,
        AnimTransition::Run => frame.on_ground && vx == frame.facing(),
        AnimTransition::Pivot => frame.on_ground && vx == -frame.facing(),
        AnimTransition::Jump => vy < 0.0,
        AnimTransition::Flip => vy < 0.0 && movement_state == MoveState::Flipping,
        AnimTransition::Fall => vy > 0.0,
        AnimTransition::Die => false,
    }
}
