//! This module contains the conversion of an automaton to deterministic form.
//! The DFA is generated from the NFA using the subset construction algorithm and minimized by
//! determinizing twice, each time after reversing the automaton.

use std::collections::{BTreeSet, VecDeque};
use std::hash::Hash;
use std::time::Instant;

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use crate::{Automaton, StateID, StateSet, Transition};

// The canonical form of a set of source states. It identifies a state of the determinized
// automaton independently of the order in which the source states were discovered.
pub(crate) type StateGroup = BTreeSet<StateID>;

impl<L> Automaton<L>
where
    L: Clone + Eq + Hash,
{
    /// Create an equivalent automaton without epsilon transitions that has at most one
    /// transition per state and label.
    ///
    /// Every state of the result stands for a set of states of `self`. States are allocated in
    /// the order in which their sets are discovered, labels are tried in first-seen order.
    /// If `self` has no initial states the result is the empty automaton.
    pub fn determinized(&self) -> Self {
        let now = Instant::now();
        let mut dfa = Automaton::new();
        // Maps every discovered subset to the state that represents it.
        let mut state_map: IndexMap<StateGroup, StateID> = IndexMap::new();
        let mut work_list: VecDeque<StateSet> = VecDeque::new();

        let initial = self.epsilon_closure_from(self.initials.iter().copied());
        if !initial.is_empty() {
            let initial_state = dfa.new_state();
            dfa.add_initial(initial_state);
            state_map.insert(Self::group_of(&initial), initial_state);
            work_list.push_back(initial);
        }

        let symbols = self.symbols();

        while let Some(sources) = work_list.pop_front() {
            let source_state = state_map[&Self::group_of(&sources)];
            for symbol in &symbols {
                let targets = self.epsilon_closure_from(self.destinations(&sources, Some(*symbol)));
                if targets.is_empty() {
                    continue;
                }
                let group = Self::group_of(&targets);
                let target_state = match state_map.get(&group) {
                    Some(state) => *state,
                    None => {
                        let state = dfa.new_state();
                        trace!("Add state: {}: {:?}", state, group);
                        state_map.insert(group, state);
                        work_list.push_back(targets);
                        state
                    }
                };
                dfa.add_transition(Transition::new(
                    source_state,
                    Some((*symbol).clone()),
                    target_state,
                ));
            }
        }

        for (group, state) in &state_map {
            if group.iter().any(|s| self.finals.contains(s)) {
                dfa.add_final(*state);
            }
        }

        debug!(
            "Determinized {} states into {} states with {} transitions in {} microseconds.",
            self.num_states(),
            state_map.len(),
            dfa.transitions.len(),
            now.elapsed().as_micros()
        );
        dfa
    }

    /// Create the minimal deterministic automaton that accepts the same language as `self`.
    ///
    /// Determinizing the reversed automaton yields a deterministic automaton in which all
    /// states are reachable from the initial state and co-reachable. Doing it twice merges all
    /// states that accept the same suffixes.
    pub fn minimum_determinized(&self) -> Self {
        let now = Instant::now();
        let minimized = self.reversed().determinized().reversed().determinized();
        debug!(
            "Minimized {} states into {} states in {} microseconds.",
            self.num_states(),
            minimized.num_states(),
            now.elapsed().as_micros()
        );
        minimized
    }

    /// Returns true if the automaton has no epsilon transitions, at most one initial state and
    /// at most one transition per state and label.
    pub fn is_deterministic(&self) -> bool {
        let mut seen: IndexSet<(StateID, &L)> = IndexSet::new();
        self.initials.len() <= 1
            && self.transitions.iter().all(|t| match t.label() {
                Some(label) => seen.insert((t.source(), label)),
                None => false,
            })
    }

    fn group_of(states: &StateSet) -> StateGroup {
        states.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Initialize the logger for the tests
    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn union_of(labels: &[i32]) -> Automaton<i32> {
        let atoms: Vec<Automaton<i32>> = labels.iter().map(|l| Automaton::atom(*l)).collect();
        Automaton::union(&atoms)
    }

    #[test]
    fn test_determinized_union() {
        init();
        let nfa = union_of(&[1, 2]);
        assert!(!nfa.is_deterministic());

        let dfa = nfa.determinized();
        crate::automaton_render_to!(&dfa, "determinized_union");

        assert!(dfa.is_deterministic());
        assert_eq!(dfa.initials().len(), 1);
        assert_eq!(dfa.transitions().len(), 2);
        // {initials}, {final of atom(1)}, {final of atom(2)}
        assert_eq!(dfa.num_states(), 3);
        assert_eq!(dfa.finals().len(), 2);
    }

    #[test]
    fn test_determinized_merges_common_prefix() {
        init();
        // 1 2 | 1 3
        let a = Automaton::concat([&Automaton::atom(1), &Automaton::atom(2)]).unwrap();
        let b = Automaton::concat([&Automaton::atom(1), &Automaton::atom(3)]).unwrap();
        let dfa = a.or(&b).determinized();

        assert!(dfa.is_deterministic());
        assert_eq!(dfa.transitions_from(dfa.initials().iter().copied()).len(), 1);
        assert_eq!(dfa.num_states(), 4);
        assert_eq!(dfa.finals().len(), 2);
    }

    #[test]
    fn test_determinized_initial_state_is_final() {
        let dfa = Automaton::atom(1).repeated().determinized();
        assert!(dfa.is_deterministic());
        assert!(dfa.finals().contains(&dfa.initials()[0]));
    }

    #[test]
    fn test_determinized_without_initials() {
        let mut nfa = Automaton::atom(1);
        nfa.initials.clear();
        let dfa = nfa.determinized();
        assert!(dfa.initials().is_empty());
        assert!(dfa.transitions().is_empty());
        assert!(dfa.finals().is_empty());
    }

    #[test]
    fn test_determinized_epsilon_only() {
        let dfa = Automaton::<i32>::epsilon().determinized();
        assert_eq!(dfa.initials().len(), 1);
        assert!(dfa.transitions().is_empty());
        assert_eq!(dfa.finals().len(), 1);
    }

    #[test]
    fn test_minimum_determinized() {
        init();
        let nfa = Automaton::concat([&union_of(&[1, 2]), &union_of(&[3, 4])]).unwrap();
        crate::automaton_render_to!(&nfa, "minimize_input");

        let dfa = nfa.minimum_determinized();
        crate::automaton_render_to!(&dfa, "minimize_output");

        assert!(dfa.is_deterministic());
        assert_eq!(dfa.initials().len(), 1);
        assert_eq!(dfa.finals().len(), 1);
        assert_eq!(dfa.transitions().len(), 4);
        assert_eq!(dfa.num_states(), 3);
    }

    #[test]
    fn test_minimum_determinized_star() {
        // (1 | 1 1)* is the same language as 1*
        let one = Automaton::atom(1);
        let one_one = one.and(&one);
        let dfa = one.or(&one_one).repeated().minimum_determinized();
        assert_eq!(dfa.num_states(), 1);
        assert_eq!(dfa.transitions().len(), 1);
        assert_eq!(dfa.finals().len(), 1);
    }

    #[test]
    fn test_is_deterministic() {
        assert!(Automaton::atom(1).is_deterministic());
        assert!(!Automaton::<i32>::epsilon().is_deterministic());
        assert!(Automaton::<i32>::new().is_deterministic());
    }
}
