//! Renders a document or rule tree back to text.
//!
//! Output shape is controlled by a [`Compaction`] level: higher levels
//! strip progressively more optional whitespace. Declarations are always
//! emitted in declaration-store order and top-level rules in sorted
//! order, so serialization canonicalizes rather than preserving the
//! original text verbatim.

use crate::style::rule_tree::{Document, RuleId};

/// How aggressively optional whitespace is removed, in increasing order.
///
/// * `None` - indented, one declaration per line, a space before `{`.
/// * `Low` - as `None` but without the space before `{`.
/// * `Med` - one line per rule, no indentation.
/// * `Max` - a single line for the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Compaction {
    None,
    Low,
    Med,
    Max,
}

/// Renders the whole document, top-level rules in their sorted order.
/// Rules are separated by a newline at every level except `Max`.
pub fn render_document(document: &Document, level: Compaction) -> String {
    let mut output = String::new();
    for (index, &id) in document.top_level().iter().enumerate() {
        if index > 0 && level != Compaction::Max {
            output.push('\n');
        }
        render_rule(document, id, 0, level, &mut output);
    }
    output
}

/// Renders one rule and its children recursively at the given depth.
pub fn render_rule(
    document: &Document,
    id: RuleId,
    depth: usize,
    level: Compaction,
    output: &mut String,
) {
    let rule = document.rule(id);

    push_indent(output, depth, level);
    output.push_str(&rule.selector_text);
    if level == Compaction::None {
        output.push(' ');
    }
    output.push('{');
    push_newline(output, level);

    for declaration in &rule.declarations {
        push_indent(output, depth + 1, level);
        output.push_str(declaration.property.name());
        output.push(':');
        output.push_str(&declaration.value);
        output.push(';');
        push_newline(output, level);
    }

    for &child in &rule.children {
        render_rule(document, child, depth + 1, level, output);
    }

    push_indent(output, depth, level);
    output.push('}');
    push_newline(output, level);
}

/// Leading tabs for nesting depth appear only below `Med`.
fn push_indent(output: &mut String, depth: usize, level: Compaction) {
    if level < Compaction::Med {
        for _ in 0..depth {
            output.push('\t');
        }
    }
}

/// Line breaks inside a rule appear only below `Med`.
fn push_newline(output: &mut String, level: Compaction) {
    if level < Compaction::Med {
        output.push('\n');
    }
}
