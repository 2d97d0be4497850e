// Hero states and transition names

use crate::core::fsm::Named;

/// Physical state of the hero's body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveState {
    /// On the ground (idle, running or braking)
    #[default]
    Standing,
    /// Rising after a takeoff
    Jumping,
    /// Airborne after the mid-air flip
    Flipping,
    /// Airborne without having jumped (walked off a ledge)
    Falling,
    /// Dead; ignores input until respawned
    Dead,
}

impl MoveState {
    /// Check if a released jump key should cut the rise short
    pub fn is_rising_from_jump(&self) -> bool {
        matches!(self, Self::Jumping | Self::Flipping)
    }
}

impl Named for MoveState {
    fn name(&self) -> &'static str {
        match self {
            Self::Standing => "standing",
            Self::Jumping => "jumping",
            Self::Flipping => "flipping",
            Self::Falling => "falling",
            Self::Dead => "dead",
        }
    }
}

/// Visual state of the hero; selects the animation clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Running,
    /// Sliding against the facing direction (braking or turning)
    Pivoting,
    Jumping,
    Flipping,
    Falling,
    Dead,
}

impl Named for AnimState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Pivoting => "pivoting",
            Self::Jumping => "jumping",
            Self::Flipping => "flipping",
            Self::Falling => "falling",
            Self::Dead => "dead",
        }
    }
}

/// Transitions of the movement machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTransition {
    Jump,
    Flip,
    Fall,
    Touchdown,
    Die,
}

impl Named for MoveTransition {
    fn name(&self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::Flip => "flip",
            Self::Fall => "fall",
            Self::Touchdown => "touchdown",
            Self::Die => "die",
        }
    }
}

/// Transitions of the animation machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTransition {
    Idle,
    Run,
    Pivot,
    Jump,
    Flip,
    Fall,
    Die,
}

impl Named for AnimTransition {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
            Self::Pivot => "pivot",
            Self::Jump => "jump",
            Self::Flip => "flip",
            Self::Fall => "fall",
            Self::Die => "die",
        }
    }
}
