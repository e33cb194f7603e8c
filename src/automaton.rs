//! This module contains the automaton container.
//! An automaton owns its initial states, its transitions and its final states. There is no
//! separate list of states: every state referenced by one of these sets is part of the automaton.
//! State ids are local to the automaton that allocated them.

use std::fmt::Display;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::{StateID, Transition};

/// An insertion-ordered set of states.
pub type StateSet = IndexSet<StateID>;

/// A finite automaton over labels of type `L`.
///
/// The automaton may be nondeterministic and may contain epsilon transitions. An automaton
/// without initial states is valid and accepts nothing.
#[derive(Debug, Clone)]
pub struct Automaton<L> {
    pub(crate) initials: StateSet,
    pub(crate) transitions: IndexSet<Transition<L>>,
    pub(crate) finals: StateSet,
    // The frontier of an incremental match. `None` until the first reset.
    pub(crate) head: Option<StateSet>,
    // The next free state id.
    pub(crate) next_state: StateID,
}

impl<L> Default for Automaton<L> {
    fn default() -> Self {
        Automaton {
            initials: StateSet::new(),
            transitions: IndexSet::new(),
            finals: StateSet::new(),
            head: None,
            next_state: StateID::default(),
        }
    }
}

impl<L> Automaton<L> {
    /// Create an automaton without any states. It accepts nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh state id.
    pub(crate) fn new_state(&mut self) -> StateID {
        self.next_state.bump()
    }

    /// Get the initial states.
    pub fn initials(&self) -> &StateSet {
        &self.initials
    }

    /// Get the final (accepting) states.
    pub fn finals(&self) -> &StateSet {
        &self.finals
    }

    /// Get the transitions in insertion order.
    pub fn transitions(&self) -> &IndexSet<Transition<L>> {
        &self.transitions
    }

    /// Get the frontier of the incremental match, if one has been started.
    pub fn head(&self) -> Option<&StateSet> {
        self.head.as_ref()
    }

    /// Returns all states of the automaton.
    ///
    /// The order is: initial states, then the endpoints of each transition (source before
    /// destination) in transition order, then the final states.
    pub fn states(&self) -> StateSet {
        let mut states = self.initials.clone();
        for transition in &self.transitions {
            states.insert(transition.source());
            states.insert(transition.destination());
        }
        states.extend(self.finals.iter().copied());
        states
    }

    /// Returns the number of states of the automaton.
    pub fn num_states(&self) -> usize {
        self.states().len()
    }

    /// Returns all transitions leaving one of the given states.
    pub fn transitions_from<I>(&self, sources: I) -> Vec<&Transition<L>>
    where
        I: IntoIterator<Item = StateID>,
    {
        let sources: StateSet = sources.into_iter().collect();
        self.transitions
            .iter()
            .filter(|t| sources.contains(&t.source()))
            .collect()
    }

    /// Returns all transitions entering one of the given states.
    pub fn transitions_to<I>(&self, destinations: I) -> Vec<&Transition<L>>
    where
        I: IntoIterator<Item = StateID>,
    {
        let destinations: StateSet = destinations.into_iter().collect();
        self.transitions
            .iter()
            .filter(|t| destinations.contains(&t.destination()))
            .collect()
    }
}

impl<L> Automaton<L>
where
    L: Clone + Eq + Hash,
{
    /// Add an initial state.
    pub(crate) fn add_initial(&mut self, state: StateID) {
        self.initials.insert(state);
    }

    /// Add a final state.
    pub(crate) fn add_final(&mut self, state: StateID) {
        self.finals.insert(state);
    }

    /// Add a transition. Adding an existing transition has no effect.
    pub(crate) fn add_transition(&mut self, transition: Transition<L>) {
        self.transitions.insert(transition);
    }

    /// Returns the distinct labels of all non-epsilon transitions in first-seen order.
    pub fn symbols(&self) -> IndexSet<&L> {
        self.transitions.iter().filter_map(|t| t.label()).collect()
    }

    /// Returns the destinations of all transitions that leave one of `sources` and carry exactly
    /// `label`. Pass `None` to follow epsilon transitions.
    pub fn destinations(&self, sources: &StateSet, label: Option<&L>) -> StateSet {
        self.transitions
            .iter()
            .filter(|t| sources.contains(&t.source()) && t.has_label(label))
            .map(|t| t.destination())
            .collect()
    }

    /// Add an epsilon transition from every state in `sources` to every state in
    /// `destinations`.
    ///
    /// Any incremental match in progress is discarded, since its frontier may no longer be
    /// closed under epsilon transitions.
    pub fn fuse(&mut self, sources: &StateSet, destinations: &StateSet) {
        itertools::iproduct!(sources, destinations)
            .for_each(|(s, d)| self.add_transition(Transition::epsilon(*s, *d)));
        self.head = None;
    }
}

impl<L: Display> Display for Automaton<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Automaton")?;
        writeln!(f, "Initial states: {:?}", self.initials)?;
        writeln!(f, "Final states: {:?}", self.finals)?;
        writeln!(f, "Transitions:")?;
        for transition in &self.transitions {
            writeln!(f, "{}", transition)?;
        }
        Ok(())
    }
}
