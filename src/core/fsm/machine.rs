// Table-driven state machine evaluator

use log::debug;

use super::table::Transition;
use super::{Named, TransitionError};

/// Side-effect hooks invoked while a transition fires
///
/// Hooks never touch engine services. They append effect values that the
/// owner of the machine drains and dispatches afterwards.
pub trait TransitionHooks<S, N> {
    type Effect;

    /// Called first, with the name of the transition being fired
    fn on_transition(&self, _name: N, _effects: &mut Vec<Self::Effect>) {}

    /// Called second, with the destination state
    fn on_enter(&self, _state: S, _effects: &mut Vec<Self::Effect>) {}
}

impl<S, N> TransitionHooks<S, N> for () {
    type Effect = ();
}

/// Record of a transition that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<S, N> {
    pub name: N,
    pub from: S,
    pub to: S,
}

/// State machine over a static transition table
#[derive(Debug)]
pub struct StateMachine<S: 'static, N: 'static, H> {
    /// Short label for logs ("movement", "animation", ...)
    label: &'static str,
    table: &'static [Transition<S, N>],
    hooks: H,
    current: S,
    previous: S,
}

impl<S: Named, N: Named, H: TransitionHooks<S, N>> StateMachine<S, N, H> {
    pub fn new(
        label: &'static str,
        table: &'static [Transition<S, N>],
        initial: S,
        hooks: H,
    ) -> Self {
        Self {
            label,
            table,
            hooks,
            current: initial,
            previous: initial,
        }
    }

    /// Get the current state
    pub fn current(&self) -> S {
        self.current
    }

    /// Get the state held before the last transition
    pub fn previous(&self) -> S {
        self.previous
    }

    /// Check if the machine is in `state`
    pub fn is(&self, state: S) -> bool {
        self.current == state
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Look up a transition by name
    pub fn transition(&self, name: N) -> Option<&'static Transition<S, N>> {
        self.table.iter().find(|t| t.name == name)
    }

    /// Check if `name` lists the current state among its sources
    pub fn can(&self, name: N) -> bool {
        self.transition(name)
            .is_some_and(|t| t.from.contains(&self.current))
    }

    /// Transitions legal from the current state, in declaration order
    pub fn candidates(&self) -> impl Iterator<Item = &'static Transition<S, N>> {
        let current = self.current;
        self.table.iter().filter(move |t| t.from.contains(&current))
    }

    /// Names of the transitions legal from the current state, in declaration order
    pub fn candidate_transitions(&self) -> impl Iterator<Item = N> {
        self.candidates().map(|t| t.name)
    }

    /// Fire a transition
    ///
    /// On success the state moves to the declared destination, then the
    /// transition hook and the destination's entry hook append their effects.
    /// An illegal request leaves the state untouched and appends nothing.
    pub fn fire(
        &mut self,
        name: N,
        effects: &mut Vec<H::Effect>,
    ) -> Result<Fired<S, N>, TransitionError> {
        let transition = self
            .transition(name)
            .filter(|t| t.from.contains(&self.current))
            .ok_or(TransitionError::Illegal {
                name: name.name(),
                from: self.current.name(),
            })?;

        let fired = Fired {
            name,
            from: self.current,
            to: transition.to,
        };
        self.previous = self.current;
        self.current = transition.to;

        debug!(
            "{}: {} --{}--> {}",
            self.label,
            fired.from.name(),
            name.name(),
            fired.to.name()
        );

        self.hooks.on_transition(name, effects);
        self.hooks.on_enter(fired.to, effects);

        Ok(fired)
    }
}
