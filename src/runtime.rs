//! This module contains the incremental recognition of input.
//!
//! The automaton is run directly, one symbol at a time, on the set of states it may currently be
//! in. No deterministic automaton is built for this.
//!
//! The frontier is private to one automaton value and is not synchronized. To match the same
//! language in several places at once, run independent copies (see [`Automaton::copy`]).

use std::hash::Hash;

use log::trace;

use crate::Automaton;

impl<L> Automaton<L>
where
    L: Clone + Eq + Hash,
{
    /// Start a new match: the frontier becomes the epsilon closure of the initial states.
    pub fn reset(&mut self) {
        self.head = Some(self.epsilon_closure_from(self.initials.iter().copied()));
    }

    /// Advance the match by one symbol.
    ///
    /// A match is started first if none is in progress. Once no state is left in the frontier
    /// every further symbol keeps it empty, and the automaton stays non-accepting.
    pub fn consume(&mut self, symbol: &L) {
        let head = match self.head.take() {
            Some(head) => head,
            None => self.epsilon_closure_from(self.initials.iter().copied()),
        };
        let next = self.epsilon_closure_from(self.destinations(&head, Some(symbol)));
        trace!("Consumed symbol: frontier {:?} -> {:?}", head, next);
        self.head = Some(next);
    }

    /// Returns true if the input consumed so far is accepted.
    ///
    /// A match is started first if none is in progress, so a fresh automaton reports whether
    /// it accepts the empty input.
    pub fn is_accepting(&mut self) -> bool {
        if self.head.is_none() {
            self.reset();
        }
        let Some(head) = &self.head else {
            return false;
        };
        // The frontier is already closed, closing it again does not change it.
        self.epsilon_closure_from(head.iter().copied())
            .iter()
            .any(|s| self.finals.contains(s))
    }

    /// Reset, consume all `symbols` and return whether the whole input is accepted.
    pub fn accepts<'a, I>(&mut self, symbols: I) -> bool
    where
        I: IntoIterator<Item = &'a L>,
        L: 'a,
    {
        self.reset();
        for symbol in symbols {
            self.consume(symbol);
        }
        self.is_accepting()
    }
}
