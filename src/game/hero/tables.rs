// Hero transition tables
//
// Declaration order is the tie-break: the resolver fires the first transition
// whose predicate holds.

use crate::core::fsm::{Sources, Transition};

use super::state::{AnimState, AnimTransition, MoveState, MoveTransition};

pub type MoveTable = &'static [Transition<MoveState, MoveTransition>];
pub type AnimTable = &'static [Transition<AnimState, AnimTransition>];

pub const MOVEMENT_TRANSITIONS: MoveTable = &[
    Transition::new(
        MoveTransition::Jump,
        Sources::Only(&[MoveState::Standing]),
        MoveState::Jumping,
    ),
    Transition::new(
        MoveTransition::Flip,
        Sources::Only(&[MoveState::Jumping]),
        MoveState::Flipping,
    ),
    Transition::new(
        MoveTransition::Fall,
        Sources::Only(&[MoveState::Standing]),
        MoveState::Falling,
    ),
    Transition::new(
        MoveTransition::Touchdown,
        Sources::Only(&[MoveState::Jumping, MoveState::Flipping, MoveState::Falling]),
        MoveState::Standing,
    ),
    // Fired only by `HeroController::kill`
    Transition::imperative(
        MoveTransition::Die,
        Sources::Only(&[
            MoveState::Jumping,
            MoveState::Flipping,
            MoveState::Falling,
            MoveState::Standing,
        ]),
        MoveState::Dead,
    ),
];

pub const ANIMATION_TRANSITIONS: AnimTable = &[
    Transition::new(
        AnimTransition::Idle,
        Sources::Only(&[AnimState::Falling, AnimState::Running, AnimState::Pivoting]),
        AnimState::Idle,
    ),
    Transition::new(
        AnimTransition::Run,
        Sources::Only(&[AnimState::Falling, AnimState::Idle, AnimState::Pivoting]),
        AnimState::Running,
    ),
    Transition::new(
        AnimTransition::Pivot,
        Sources::Only(&[AnimState::Falling, AnimState::Running]),
        AnimState::Pivoting,
    ),
    Transition::new(
        AnimTransition::Jump,
        Sources::Only(&[AnimState::Running, AnimState::Idle, AnimState::Pivoting]),
        AnimState::Jumping,
    ),
    Transition::new(
        AnimTransition::Flip,
        Sources::Only(&[AnimState::Jumping, AnimState::Falling]),
        AnimState::Flipping,
    ),
    Transition::new(
        AnimTransition::Fall,
        Sources::Only(&[
            AnimState::Idle,
            AnimState::Running,
            AnimState::Pivoting,
            AnimState::Jumping,
            AnimState::Flipping,
        ]),
        AnimState::Falling,
    ),
    // Mirrors the movement death, fired right after it
    Transition::imperative(AnimTransition::Die, Sources::Any, AnimState::Dead),
];
