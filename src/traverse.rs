//! This module provides read-only traversal of the states of an automaton.

use std::hash::Hash;

use crate::{Automaton, StateID};

/// A visitor that is called once for every state reachable from an initial state.
///
/// Closures of the form `FnMut(StateID, &Automaton<L>)` implement this trait.
pub trait Traverser<L> {
    /// Visit a state of `automaton`.
    fn traverse(&mut self, state: StateID, automaton: &Automaton<L>);
}

impl<L, F> Traverser<L> for F
where
    F: FnMut(StateID, &Automaton<L>),
{
    fn traverse(&mut self, state: StateID, automaton: &Automaton<L>) {
        self(state, automaton)
    }
}

impl<L> Automaton<L>
where
    L: Clone + Eq + Hash,
{
    /// Visit every state reachable from an initial state via any transitions, each exactly once,
    /// in breadth-first discovery order.
    pub fn traverse<T>(&self, traverser: &mut T)
    where
        T: Traverser<L>,
    {
        for state in self.reachable_states() {
            traverser.traverse(state, self);
        }
    }

    /// Returns true if the automaton accepts no input at all, i.e. no final state is reachable
    /// from an initial state.
    pub fn is_empty(&self) -> bool {
        !self
            .reachable_states()
            .iter()
            .any(|state| self.finals.contains(state))
    }
}
