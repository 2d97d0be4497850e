// Small door machine used to exercise the generic engine

use super::{Named, Sources, Transition, TransitionHooks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Door {
    Closed,
    Open,
    Locked,
}

impl Named for Door {
    fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
            Self::Locked => "locked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorAction {
    Open,
    Slam,
    Close,
    Lock,
    Unlock,
    Break,
}

impl Named for DoorAction {
    fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Slam => "slam",
            Self::Close => "close",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Break => "break",
        }
    }
}

/// `slam` and `close` share a source and destination on purpose: whenever both
/// predicates hold, declaration order has to pick `slam`.
pub const DOOR_TABLE: &[Transition<Door, DoorAction>] = &[
    Transition::new(DoorAction::Open, Sources::Only(&[Door::Closed]), Door::Open),
    Transition::new(DoorAction::Slam, Sources::Only(&[Door::Open]), Door::Closed),
    Transition::new(DoorAction::Close, Sources::Only(&[Door::Open]), Door::Closed),
    Transition::new(DoorAction::Lock, Sources::Only(&[Door::Closed]), Door::Locked),
    Transition::new(DoorAction::Unlock, Sources::Only(&[Door::Locked]), Door::Closed),
    Transition::imperative(DoorAction::Break, Sources::Any, Door::Open),
];

/// Records every hook call as a string
#[derive(Debug, Default)]
pub struct Recorder;

impl TransitionHooks<Door, DoorAction> for Recorder {
    type Effect = String;

    fn on_transition(&self, name: DoorAction, effects: &mut Vec<String>) {
        effects.push(format!("via {}", name.name()));
    }

    fn on_enter(&self, state: Door, effects: &mut Vec<String>) {
        effects.push(format!("enter {}", state.name()));
    }
}
