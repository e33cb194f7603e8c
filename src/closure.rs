//! This module contains the epsilon closure algorithms.
//! The forward closure is the core primitive used by determinization and by incremental
//! recognition. The reverse closure is an analysis utility.

use std::collections::VecDeque;
use std::hash::Hash;

use log::trace;

use crate::{Automaton, StateID, StateSet};

impl<L> Automaton<L>
where
    L: Clone + Eq + Hash,
{
    /// Returns the set of states reachable from `core` via zero or more epsilon transitions.
    ///
    /// The result always contains `core` itself.
    pub fn epsilon_closure_from<I>(&self, core: I) -> StateSet
    where
        I: IntoIterator<Item = StateID>,
    {
        let mut closure: StateSet = core.into_iter().collect();
        let mut work_list: VecDeque<StateID> = closure.iter().copied().collect();
        while let Some(state) = work_list.pop_front() {
            for transition in self.transitions.iter() {
                if transition.source() == state
                    && transition.is_epsilon()
                    && closure.insert(transition.destination())
                {
                    work_list.push_back(transition.destination());
                }
            }
        }
        closure
    }

    /// Returns the states whose epsilon closure reaches `core`, restricted to states that are
    /// reachable from an initial state.
    ///
    /// For every reachable state whose forward epsilon closure intersects `core`, the whole
    /// closure is part of the result.
    pub fn epsilon_closure_to<I>(&self, core: I) -> StateSet
    where
        I: IntoIterator<Item = StateID>,
    {
        let core: StateSet = core.into_iter().collect();
        let mut reverse_closure = StateSet::new();
        for state in self.reachable_states() {
            let closure = self.epsilon_closure_from([state]);
            if closure.iter().any(|s| core.contains(s)) {
                reverse_closure.extend(closure);
            }
        }
        trace!(
            "Reverse epsilon closure of {:?}: {:?}",
            core,
            reverse_closure
        );
        reverse_closure
    }

    /// Returns all states reachable from an initial state via any transitions, in breadth-first
    /// discovery order.
    pub(crate) fn reachable_states(&self) -> StateSet {
        let mut reachable = self.initials.clone();
        let mut queue: VecDeque<StateID> = self.initials.iter().copied().collect();
        while let Some(source) = queue.pop_front() {
            for transition in self.transitions.iter() {
                if transition.source() == source && reachable.insert(transition.destination()) {
                    queue.push_back(transition.destination());
                }
            }
        }
        reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transition;

    fn ids(states: &[usize]) -> StateSet {
        states.iter().map(|s| StateID::new(*s)).collect()
    }

    // 0 -ε-> 1 -ε-> 2 -a-> 3 -ε-> 4, 5 -ε-> 2 (5 is unreachable)
    fn chain() -> Automaton<char> {
        let mut automaton = Automaton::new();
        let s: Vec<StateID> = (0..6).map(|_| automaton.new_state()).collect();
        automaton.add_initial(s[0]);
        automaton.add_final(s[4]);
        automaton.add_transition(Transition::epsilon(s[0], s[1]));
        automaton.add_transition(Transition::epsilon(s[1], s[2]));
        automaton.add_transition(Transition::new(s[2], Some('a'), s[3]));
        automaton.add_transition(Transition::epsilon(s[3], s[4]));
        automaton.add_transition(Transition::epsilon(s[5], s[2]));
        automaton
    }

    #[test]
    fn test_epsilon_closure_from() {
        let automaton = chain();
        assert_eq!(automaton.epsilon_closure_from([StateID::new(0)]), ids(&[0, 1, 2]));
        assert_eq!(automaton.epsilon_closure_from([StateID::new(2)]), ids(&[2]));
        assert_eq!(automaton.epsilon_closure_from([StateID::new(3)]), ids(&[3, 4]));
        assert!(automaton.epsilon_closure_from([]).is_empty());
    }

    #[test]
    fn test_epsilon_closure_from_is_idempotent() {
        let automaton = chain();
        let once = automaton.epsilon_closure_from(ids(&[0, 3]));
        let twice = automaton.epsilon_closure_from(once.iter().copied());
        assert_eq!(once, twice);
        assert_eq!(once, ids(&[0, 3, 1, 4, 2]));
    }

    #[test]
    fn test_epsilon_closure_from_cycle() {
        let mut automaton = Automaton::<char>::new();
        let s0 = automaton.new_state();
        let s1 = automaton.new_state();
        automaton.add_transition(Transition::epsilon(s0, s1));
        automaton.add_transition(Transition::epsilon(s1, s0));
        assert_eq!(automaton.epsilon_closure_from([s1]), ids(&[1, 0]));
    }

    #[test]
    fn test_epsilon_closure_to() {
        let automaton = chain();
        // States 0 and 1 reach 2 by epsilon moves, state 5 does too but is unreachable.
        let reverse = automaton.epsilon_closure_to([StateID::new(2)]);
        assert!(reverse.contains(&StateID::new(0)));
        assert!(reverse.contains(&StateID::new(1)));
        assert!(reverse.contains(&StateID::new(2)));
        assert!(!reverse.contains(&StateID::new(5)));
        assert!(!reverse.contains(&StateID::new(3)));
    }

    #[test]
    fn test_epsilon_closure_to_without_initials() {
        let mut automaton = chain();
        automaton.initials.clear();
        assert!(automaton.epsilon_closure_to([StateID::new(2)]).is_empty());
    }

    #[test]
    fn test_reachable_states() {
        let automaton = chain();
        assert_eq!(automaton.reachable_states(), ids(&[0, 1, 2, 3, 4]));
    }
}
