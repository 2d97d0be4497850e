// Static transition tables

use super::{Named, TransitionError};

/// Set of states a transition may start from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sources<S: 'static> {
    /// Legal from every state, including the destination itself
    Any,
    /// Legal only from the listed states
    Only(&'static [S]),
}

impl<S: PartialEq + 'static> Sources<S> {
    /// Check if `state` is an allowed source
    pub fn contains(&self, state: &S) -> bool {
        match self {
            Self::Any => true,
            Self::Only(states) => states.contains(state),
        }
    }
}

/// How a transition gets fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Picked by the tick resolver when its predicate holds
    Predicate,
    /// Never picked by the resolver; only fired explicitly by the owner
    Imperative,
}

/// A named, directed edge of a state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<S: 'static, N> {
    pub name: N,
    pub from: Sources<S>,
    pub to: S,
    pub trigger: Trigger,
}

impl<S: 'static, N> Transition<S, N> {
    /// Transition picked by the tick resolver
    pub const fn new(name: N, from: Sources<S>, to: S) -> Self {
        Self {
            name,
            from,
            to,
            trigger: Trigger::Predicate,
        }
    }

    /// Transition that only fires on an explicit request
    pub const fn imperative(name: N, from: Sources<S>, to: S) -> Self {
        Self {
            name,
            from,
            to,
            trigger: Trigger::Imperative,
        }
    }
}

/// Check that every transition name appears once in a table
pub fn validate<S: 'static, N: Named>(table: &[Transition<S, N>]) -> Result<(), TransitionError> {
    for (i, transition) in table.iter().enumerate() {
        if table[..i].iter().any(|t| t.name == transition.name) {
            return Err(TransitionError::Duplicate(transition.name.name()));
        }
    }
    Ok(())
}
