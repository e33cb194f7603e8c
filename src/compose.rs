//! This module contains the structural composition operators.
//!
//! Every operator works on copies of its operands. The copies receive fresh state ids in the
//! result's id space, so the same automaton can be used several times in one expression without
//! its states being shared between the uses.

use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;

use crate::{invalid_argument, Automaton, Result, StateID, StateSet, Transition};

impl<L> Automaton<L>
where
    L: Clone + Eq + Hash,
{
    /// Create an automaton with a single transition on `label` from its only initial state to
    /// its only final state.
    pub fn atom(label: L) -> Self {
        Automaton::from_label(Some(label))
    }

    /// Create an automaton that accepts only the empty input.
    pub fn epsilon() -> Self {
        Automaton::from_label(None)
    }

    /// Create a two-state automaton connected by a single transition.
    ///
    /// Passing `None` creates an epsilon transition, i.e. an automaton that accepts only the
    /// empty input.
    pub fn from_label(label: Option<L>) -> Self {
        let mut automaton = Automaton::new();
        let source = automaton.new_state();
        let destination = automaton.new_state();
        automaton.add_initial(source);
        automaton.add_transition(Transition::new(source, label, destination));
        automaton.add_final(destination);
        automaton
    }

    /// Create an automaton that accepts the union of the languages of all given automata.
    ///
    /// No new transitions are introduced. The result simply has the initial and final states of
    /// all operands. An empty iterator yields an automaton that accepts nothing.
    pub fn union<'a, I>(automata: I) -> Self
    where
        I: IntoIterator<Item = &'a Automaton<L>>,
        L: 'a,
    {
        let mut automaton = Automaton::new();
        for operand in automata {
            let (initials, finals) = operand.embed_into(&mut automaton);
            automaton.initials.extend(initials);
            automaton.finals.extend(finals);
        }
        automaton
    }

    /// Create an automaton that accepts the concatenation of the languages of the given
    /// automata, in order.
    ///
    /// The final states of each operand are connected to the initial states of the next
    /// operand by epsilon transitions.
    ///
    /// # Errors
    /// An error is returned if `automata` is empty.
    pub fn concat<'a, I>(automata: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Automaton<L>>,
        L: 'a,
    {
        let mut automaton = Automaton::new();
        let parts = automata
            .into_iter()
            .map(|operand| operand.embed_into(&mut automaton))
            .collect::<Vec<_>>();

        let (Some((first_initials, _)), Some((_, last_finals))) = (parts.first(), parts.last())
        else {
            return Err(invalid_argument!("Cannot concatenate an empty list of automata"));
        };
        automaton.initials = first_initials.clone();
        automaton.finals = last_finals.clone();

        for ((_, finals), (initials, _)) in parts.iter().tuple_windows() {
            automaton.fuse(finals, initials);
        }
        Ok(automaton)
    }

    /// Concatenation of `self` and `other`.
    pub fn and(&self, other: &Automaton<L>) -> Self {
        let mut automaton = Automaton::new();
        let (initials, finals1) = self.embed_into(&mut automaton);
        let (initials2, finals) = other.embed_into(&mut automaton);
        automaton.fuse(&finals1, &initials2);
        automaton.initials = initials;
        automaton.finals = finals;
        automaton
    }

    /// Union of `self` and `other`.
    pub fn or(&self, other: &Automaton<L>) -> Self {
        Automaton::union([self, other])
    }

    /// Create an automaton that accepts zero or more repetitions of the language of `self`
    /// (Kleene star).
    ///
    /// Every final state is connected to every initial state and vice versa by epsilon
    /// transitions. The result is exactly the Kleene star as long as no initial state of `self`
    /// has incoming transitions and no final state has outgoing transitions, which holds for
    /// atoms and for unions and concatenations of them.
    pub fn repeated(&self) -> Self {
        let mut automaton = self.copy();
        let initials = automaton.initials.clone();
        let finals = automaton.finals.clone();
        automaton.fuse(&initials, &finals);
        automaton.fuse(&finals, &initials);
        automaton
    }

    /// Create an automaton that accepts the reversed words of the language of `self`.
    ///
    /// Initial and final states are swapped and every transition points the other way.
    pub fn reversed(&self) -> Self {
        let copied = self.copy();
        Automaton {
            initials: copied.finals,
            transitions: copied.transitions.iter().map(Transition::reversed).collect(),
            finals: copied.initials,
            head: None,
            next_state: copied.next_state,
        }
    }

    /// Create a structurally identical automaton with fresh state ids.
    ///
    /// States are numbered from zero in the order of [`Automaton::states`]. An incremental
    /// match in progress is not carried over.
    pub fn copy(&self) -> Self {
        let mut automaton = Automaton::new();
        let (initials, finals) = self.embed_into(&mut automaton);
        automaton.initials = initials;
        automaton.finals = finals;
        automaton
    }

    /// Allocate a fresh state in `target` for every state of `self` and insert the renumbered
    /// transitions into `target`.
    ///
    /// The initial and final states of `self` are returned in the id space of `target`; it is
    /// up to the caller to decide what role they play there.
    pub(crate) fn embed_into(&self, target: &mut Automaton<L>) -> (StateSet, StateSet) {
        let map: HashMap<StateID, StateID> = self
            .states()
            .into_iter()
            .map(|state| (state, target.new_state()))
            .collect();
        for transition in &self.transitions {
            target.add_transition(transition.map_states(|s| map[&s]));
        }
        let initials = self.initials.iter().map(|s| map[s]).collect();
        let finals = self.finals.iter().map(|s| map[s]).collect();
        (initials, finals)
    }
}
