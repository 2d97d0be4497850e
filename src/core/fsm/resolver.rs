// Per-tick transition resolution

use log::error;

use super::machine::{Fired, StateMachine, TransitionHooks};
use super::table::Trigger;
use super::Named;

/// Fire at most one transition on `machine`
///
/// Scans the transitions legal from the current state in declaration order and
/// fires the first predicate-driven one whose predicate holds. Imperative
/// transitions are skipped. Returns the fired transition, or `None` when the
/// state stays as it is this tick.
pub fn resolve<S, N, H>(
    machine: &mut StateMachine<S, N, H>,
    predicate: impl Fn(N) -> bool,
    effects: &mut Vec<H::Effect>,
) -> Option<Fired<S, N>>
where
    S: Named,
    N: Named,
    H: TransitionHooks<S, N>,
{
    let selected = machine
        .candidates()
        .find(|t| t.trigger == Trigger::Predicate && predicate(t.name))?;

    match machine.fire(selected.name, effects) {
        Ok(fired) => Some(fired),
        Err(err) => {
            // Candidates are validated against the current state above
            debug_assert!(
                false,
                "{}: resolver fired an invalid candidate: {}",
                machine.label(),
                err
            );
            error!("{}: {}", machine.label(), err);
            None
        }
    }
}
