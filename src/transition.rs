//! This module contains the transition type shared by all automata.
//! A transition whose label is `None` is an epsilon transition.

use std::fmt::Display;

use crate::StateID;

/// An edge of an automaton.
///
/// Transitions are compared and hashed structurally over the whole triple, so inserting the same
/// edge twice into an automaton collapses to one edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition<L> {
    source: StateID,
    // `None` encodes an epsilon transition. Real labels are always `Some`.
    label: Option<L>,
    destination: StateID,
}

impl<L> Transition<L> {
    /// Create a new transition.
    pub fn new(source: StateID, label: Option<L>, destination: StateID) -> Self {
        Transition {
            source,
            label,
            destination,
        }
    }

    /// Create a new epsilon transition.
    pub fn epsilon(source: StateID, destination: StateID) -> Self {
        Transition::new(source, None, destination)
    }

    /// Get the source state.
    #[inline]
    pub fn source(&self) -> StateID {
        self.source
    }

    /// Get the label. `None` denotes epsilon.
    #[inline]
    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// Get the destination state.
    #[inline]
    pub fn destination(&self) -> StateID {
        self.destination
    }

    /// Returns true if the transition can be taken without consuming a symbol.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        self.label.is_none()
    }

    /// Returns true if the transition carries exactly the given label.
    #[inline]
    pub(crate) fn has_label(&self, label: Option<&L>) -> bool
    where
        L: PartialEq,
    {
        self.label.as_ref() == label
    }

    /// The same edge with source and destination swapped.
    pub fn reversed(&self) -> Self
    where
        L: Clone,
    {
        Transition::new(self.destination, self.label.clone(), self.source)
    }

    /// The same edge with both endpoints mapped through `f`.
    pub(crate) fn map_states<F>(&self, mut f: F) -> Self
    where
        L: Clone,
        F: FnMut(StateID) -> StateID,
    {
        Transition::new(f(self.source), self.label.clone(), f(self.destination))
    }
}

impl<L: Display> Display for Transition<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} -{}-> {}", self.source, label, self.destination),
            None => write!(f, "{} -ε-> {}", self.source, self.destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;

    use super::*;

    #[test]
    fn test_structural_equality() {
        let t1 = Transition::new(StateID::new(0), Some('a'), StateID::new(1));
        let t2 = Transition::new(StateID::new(0), Some('a'), StateID::new(1));
        let t3 = Transition::new(StateID::new(0), Some('b'), StateID::new(1));
        assert_eq!(t1, t2);
        assert_ne!(t1, t3);

        let set: IndexSet<_> = [t1, t2, t3].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_epsilon_and_reversed() {
        let t = Transition::<char>::epsilon(StateID::new(2), StateID::new(5));
        assert!(t.is_epsilon());
        assert!(t.has_label(None));
        assert_eq!(t.to_string(), "2 -ε-> 5");

        let r = t.reversed();
        assert_eq!(r.source(), StateID::new(5));
        assert_eq!(r.destination(), StateID::new(2));
        assert!(r.is_epsilon());
    }

    #[test]
    fn test_display_labeled() {
        let t = Transition::new(StateID::new(0), Some(42), StateID::new(1));
        assert_eq!(t.to_string(), "0 -42-> 1");
        assert!(t.has_label(Some(&42)));
        assert!(!t.has_label(None));
    }
}
