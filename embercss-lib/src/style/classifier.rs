//! Classifies raw selector text into a [`SelectorKind`] with a
//! specificity score.
//!
//! Classification is an ordered sequence of whole-string pattern tests and
//! the first match wins. The order is load-bearing: a single bare element
//! must be claimed by the ELEMENT pattern before the descendant pattern,
//! which would also match it, gets a look.

use regex::Regex;

use crate::style::rule_tree::{Selector, SelectorKind};

/// A stateless classifier holding only precompiled patterns.
///
/// Carries no per-call state, so a single instance may be shared across
/// threads and reused for any number of classifications.
pub struct SelectorClassifier {
    patterns: Vec<(Regex, SelectorKind)>,
}

impl SelectorClassifier {
    pub fn new() -> Self {
        let table = [
            (r"^[a-z0-9]+$", SelectorKind::Element),
            (r"^[a-z0-9]+(\s+[a-z0-9]+)*$", SelectorKind::ElementDescendent),
            (r"^\.[A-Za-z][A-Za-z0-9_-]*$", SelectorKind::SimpleClass),
            (r"^#[A-Za-z][A-Za-z0-9_-]*$", SelectorKind::SimpleId),
            (
                r"^[a-z0-9]+\.[A-Za-z][A-Za-z0-9_-]*$",
                SelectorKind::ElementClass,
            ),
            (
                r"^[a-z0-9]+#[A-Za-z][A-Za-z0-9_-]*$",
                SelectorKind::ElementId,
            ),
        ];
        let patterns = table
            .into_iter()
            .map(|(pattern, kind)| {
                let regex = Regex::new(pattern).expect("selector pattern is valid");
                (regex, kind)
            })
            .collect();
        SelectorClassifier { patterns }
    }

    /// Classifies one selector, recording its 0-based parse position.
    ///
    /// Anything no pattern claims is `Unknown` — combinators,
    /// pseudo-classes, attribute selectors, comma-separated multi-selector
    /// lists (never split) and at-rules all land there. That is not an
    /// error; unknown shapes simply share the flat non-element score.
    pub fn classify(&self, raw_text: &str, position: usize) -> Selector {
        let text = raw_text.trim();
        let kind = self
            .patterns
            .iter()
            .find(|(regex, _)| regex.is_match(text))
            .map(|(_, kind)| *kind)
            .unwrap_or(SelectorKind::Unknown);
        Selector {
            text: text.to_string(),
            position,
            kind,
            specificity: kind.specificity(),
        }
    }
}

impl Default for SelectorClassifier {
    fn default() -> Self {
        SelectorClassifier::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(text: &str) -> SelectorKind {
        SelectorClassifier::new().classify(text, 0).kind
    }

    #[test]
    fn test_classification_table() {
        assert_eq!(kind_of("td"), SelectorKind::Element);
        assert_eq!(kind_of(".foo"), SelectorKind::SimpleClass);
        assert_eq!(kind_of("#bar"), SelectorKind::SimpleId);
        assert_eq!(kind_of("td.foo"), SelectorKind::ElementClass);
        assert_eq!(kind_of("td#bar"), SelectorKind::ElementId);
        assert_eq!(kind_of("table tbody td"), SelectorKind::ElementDescendent);
        assert_eq!(kind_of("a:hover"), SelectorKind::Unknown);
        assert_eq!(kind_of("h1, h2"), SelectorKind::Unknown);
    }

    #[test]
    fn test_bare_element_is_not_a_descendant() {
        // The descendant pattern would match "td" as well; order decides.
        assert_eq!(kind_of("td"), SelectorKind::Element);
        assert_eq!(kind_of("h1"), SelectorKind::Element);
    }

    #[test]
    fn test_at_rules_and_attribute_selectors_are_unknown() {
        assert_eq!(kind_of("@media screen"), SelectorKind::Unknown);
        assert_eq!(kind_of("input[type=text]"), SelectorKind::Unknown);
        assert_eq!(kind_of("div > p"), SelectorKind::Unknown);
    }

    #[test]
    fn test_specificity_values() {
        let classifier = SelectorClassifier::new();
        assert_eq!(classifier.classify("td", 0).specificity, 1);
        assert_eq!(classifier.classify(".foo", 1).specificity, 100);
        assert_eq!(classifier.classify("#bar", 2).specificity, 100);
        assert_eq!(classifier.classify("a:hover", 3).specificity, 100);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let selector = SelectorClassifier::new().classify("  td  ", 4);
        assert_eq!(selector.kind, SelectorKind::Element);
        assert_eq!(selector.text, "td");
        assert_eq!(selector.position, 4);
    }
}
