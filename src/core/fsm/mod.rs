// Table-driven finite state machines
//
// - `table`: static transition declarations (sources, destination, trigger)
// - `machine`: the evaluator holding the current state (`can` / `fire`)
// - `resolver`: per-tick first-match-wins selection against a predicate
//
// Side effects are never performed by the machine itself. Hooks append effect
// values to a caller-supplied list which the owner drains and dispatches.

pub mod machine;
pub mod resolver;
pub mod table;

pub use machine::{StateMachine, TransitionHooks};
pub use resolver::resolve;
pub use table::{validate, Sources, Transition};

use std::fmt::Debug;

/// States and transition names are small closed enums with a stable name
pub trait Named: Copy + Eq + Debug + 'static {
    /// Lowercase name used for logs and clip keys
    fn name(&self) -> &'static str;
}

/// State machine errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Illegal transition '{name}' from state '{from}'")]
    Illegal {
        name: &'static str,
        from: &'static str,
    },

    #[error("Transition '{0}' is declared more than once")]
    Duplicate(&'static str),
}


#[cfg(test)]
pub(crate) mod test_support;
