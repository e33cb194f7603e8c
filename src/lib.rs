#![forbid(missing_docs)]
//! The `fsagen` crate provides finite automata over an arbitrary label type.
//!
//! Automata are built by composition of atoms (union, concatenation, repetition and reversal),
//! can be converted to deterministic and minimal deterministic form, and can be run directly,
//! one symbol at a time, without building a deterministic automaton first.
//!
//! ```
//! use fsagen::Automaton;
//!
//! let ab = Automaton::concat([&Automaton::atom('a'), &Automaton::atom('b')]).unwrap();
//! let mut many = ab.repeated().minimum_determinized();
//! assert!(many.accepts(&['a', 'b', 'a', 'b']));
//! assert!(!many.accepts(&['a', 'b', 'a']));
//! ```

/// Module with error definitions
mod errors;
pub use errors::{FsaError, FsaErrorKind, Result};

/// Module that provides the integer id type for states.
mod ids;
pub use ids::StateID;

/// Module that provides the transition type.
mod transition;
pub use transition::Transition;

/// The automaton module contains the automaton container and its read-only queries.
mod automaton;
pub use automaton::{Automaton, StateSet};

/// Module with the forward and reverse epsilon closure.
mod closure;

/// Module with the composition operators that build new automata from existing ones.
mod compose;

/// Module with the subset construction and the minimization.
mod dfa;

/// Module with the incremental, symbol-at-a-time recognition.
mod runtime;

/// Module with the breadth-first traversal of reachable states.
mod traverse;
pub use traverse::Traverser;

/// Module with conversion to graphviz dot format
#[cfg(feature = "dot")]
pub mod dot;

/// Stand-in for the dot rendering test macro when the `dot` feature is disabled.
#[cfg(all(test, not(feature = "dot")))]
#[macro_export]
macro_rules! automaton_render_to {
    ($automaton:expr, $label:expr) => {
        let _ = ($automaton, $label);
    };
}
