//! The `dot` module contains the conversion from an automaton to a graphviz dot format.
//! The functions in this module are used for testing and debugging purposes.

use std::fmt::Display;
use std::io::Write;

use dot_writer::{Attributes, DotWriter, RankDirection};

use crate::{Automaton, StateID};

/// Render the automaton to a graphviz dot format.
///
/// Initial states are drawn blue, final states red. Epsilon transitions are labeled with `ε`.
pub fn render_to<L, W>(automaton: &Automaton<L>, label: &str, output: &mut W)
where
    L: Display,
    W: Write,
{
    let mut writer = DotWriter::from(output);
    writer.set_pretty_print(true);
    let mut digraph = writer.digraph();
    digraph
        .set_label(label)
        .set_rank_direction(RankDirection::LeftRight);
    for state in automaton.states() {
        let mut node = digraph.node_named(node_name(state));
        node.set_label(&state.as_usize().to_string());
        if automaton.initials().contains(&state) {
            node.set_shape(dot_writer::Shape::Circle)
                .set_color(dot_writer::Color::Blue)
                .set_pen_width(3.0);
        }
        if automaton.finals().contains(&state) {
            node.set_shape(dot_writer::Shape::Circle)
                .set_color(dot_writer::Color::Red)
                .set_pen_width(3.0);
        }
    }
    for transition in automaton.transitions() {
        let edge_label = match transition.label() {
            Some(label) => label.to_string().escape_default().to_string(),
            None => "ε".to_string(),
        };
        digraph
            .edge(
                node_name(transition.source()),
                node_name(transition.destination()),
            )
            .attributes()
            .set_label(&edge_label);
    }
}

fn node_name(state: StateID) -> String {
    format!("node_{}", state.as_usize())
}

/// A macro that simplifies the rendering of a dot file for test purposes.
/// The file is written to the temporary directory.
#[cfg(test)]
#[macro_export]
macro_rules! automaton_render_to {
    ($automaton:expr, $label:expr) => {
        let path = std::env::temp_dir().join(format!("{}.dot", $label));
        let mut f = std::fs::File::create(path).unwrap();
        $crate::dot::render_to($automaton, $label, &mut f);
    };
}
