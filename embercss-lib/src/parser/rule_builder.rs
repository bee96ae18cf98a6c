//! This module builds the nested rule tree from the lexer's token stream.
//!
//! A single pass walks the tokens with an explicit "current rule" cursor
//! instead of recursion; braces move the cursor down into child rules and
//! back up to parents. The builder is deliberately permissive: nothing a
//! stylesheet can contain makes it fail.

use regex::Regex;

use crate::style::classifier::SelectorClassifier;
use crate::style::properties::Property;
use crate::style::rule_tree::{Declaration, Document, RuleId};

/// Consumes token streams into classified, sorted [`Document`]s.
///
/// Holds only precompiled patterns and no per-call state, so one builder
/// can be shared and reused across any number of parses. The returned
/// document graph, by contrast, belongs to a single caller.
pub struct RuleTreeBuilder {
    declaration: Regex,
    classifier: SelectorClassifier,
}

impl RuleTreeBuilder {
    pub fn new() -> Self {
        RuleTreeBuilder {
            // Optional leading '*' (an old browser-targeting hack), then
            // a lowercase-and-hyphens name, a colon and a value ending in
            // the ';' the lexer kept on the token.
            declaration: Regex::new(r"^\*?([a-z-]+):(.*);$")
                .expect("declaration pattern is valid"),
            classifier: SelectorClassifier::new(),
        }
    }

    pub fn classifier(&self) -> &SelectorClassifier {
        &self.classifier
    }

    /// Builds a document from the token stream, then classifies and sorts
    /// its top-level rules.
    pub fn build(&self, tokens: &[String]) -> Document {
        let mut document = Document::new();
        let mut current: Option<RuleId> = None;
        let mut in_comment = false;

        for raw_token in tokens {
            let token = raw_token.trim();

            if in_comment {
                if token.ends_with("*/") {
                    in_comment = false;
                }
                continue;
            }
            if token.starts_with("//") {
                log::debug!("Skipping line comment: {}", token);
                continue;
            }
            if token.starts_with("/*") {
                // A token may open and close the comment at once, but the
                // close must not reuse the opener's '*' ("/*/" stays open).
                // Block comments do not nest.
                if token.len() < 4 || !token.ends_with("*/") {
                    in_comment = true;
                }
                log::debug!("Skipping block comment: {}", token);
                continue;
            }
            if token.is_empty() {
                continue;
            }
            if token == "{" {
                // Brace-open is implied by rule creation.
                continue;
            }
            if token == "}" {
                match current {
                    Some(id) => {
                        let parent = document.rule(id).parent;
                        match parent {
                            None => {
                                document.attach_top_level(id);
                                current = None;
                            }
                            Some(parent) => current = Some(parent),
                        }
                    }
                    None => log::debug!("Ignoring stray closing brace"),
                }
                continue;
            }

            match current {
                None => {
                    current = Some(document.create_rule(token));
                }
                Some(rule) => {
                    if let Some(captures) = self.declaration.captures(token) {
                        let name = &captures[1];
                        let value = captures[2].trim();
                        match Property::from_name(name) {
                            Some(property) => {
                                document.add_declaration(rule, Declaration::new(property, value));
                            }
                            None => {
                                log::warn!("Dropping declaration with unknown property: {}", name);
                            }
                        }
                    } else {
                        // Any other non-blank token opens a nested rule.
                        current = Some(document.create_child_rule(rule, token));
                    }
                }
            }
        }

        document.classify_top_level(&self.classifier);
        document.sort_top_level();
        document
    }
}

impl Default for RuleTreeBuilder {
    fn default() -> Self {
        RuleTreeBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;

    fn parse(raw: &str) -> Document {
        let tokens = lexer::tokenize(raw);
        RuleTreeBuilder::new().build(&tokens)
    }

    #[test]
    fn test_single_rule_with_declarations() {
        let document = parse("td { color: red; border-width: 1px; }");
        assert_eq!(document.len(), 1);
        let rule = document.top_level_rules().next().unwrap();
        assert_eq!(rule.selector_text, "td");
        assert_eq!(rule.declarations.len(), 2);
    }

    #[test]
    fn test_nested_rule_via_bare_braces() {
        let document = parse("outer { inner { color: black; } }");
        assert_eq!(document.len(), 1);
        let outer = document.top_level_rules().next().unwrap();
        assert_eq!(outer.selector_text, "outer");
        assert!(outer.declarations.is_empty());
        assert_eq!(outer.children.len(), 1);
        let inner = document.rule(outer.children[0]);
        assert_eq!(inner.selector_text, "inner");
        assert_eq!(inner.declarations.len(), 1);
    }

    #[test]
    fn test_unknown_property_is_dropped_without_error() {
        let document = parse("td { foo-bar: 1; color: red; }");
        let rule = document.top_level_rules().next().unwrap();
        assert_eq!(rule.declarations.len(), 1);
        assert_eq!(
            rule.declarations.iter().next().unwrap().to_string(),
            "color:red;"
        );
    }

    #[test]
    fn test_star_hack_prefix_is_tolerated() {
        let document = parse("td { *color: red; }");
        let rule = document.top_level_rules().next().unwrap();
        assert_eq!(rule.declarations.len(), 1);
    }

    #[test]
    fn test_line_comment_token_is_skipped() {
        // Newlines are dropped by the lexer, so a line comment only forms
        // its own token when a ';' or brace terminates it.
        let document = parse("td { // a note; color: red; }");
        let rule = document.top_level_rules().next().unwrap();
        assert_eq!(rule.selector_text, "td");
        assert_eq!(rule.declarations.len(), 1);
    }

    #[test]
    fn test_single_token_block_comment_is_skipped() {
        let document = parse("td { color: red; /* note */ }");
        let rule = document.top_level_rules().next().unwrap();
        assert_eq!(rule.declarations.len(), 1);
        assert!(rule.children.is_empty());
    }

    #[test]
    fn test_block_comment_spanning_tokens_is_skipped() {
        // "/* one;" opens the comment, "two */" (flushed by the brace)
        // closes it; the declarations in between are swallowed.
        let document = parse("td { /* one; color: blue; two */ } .foo { color: red; }");
        assert_eq!(document.len(), 2);
        let td = document.top_level_rules().next().unwrap();
        assert_eq!(td.selector_text, "td");
        assert!(td.declarations.is_empty());
    }

    #[test]
    fn test_unterminated_block_comment_swallows_the_rest() {
        let document = parse("/* never closed td { color: red; }");
        assert!(document.is_empty());
    }

    #[test]
    fn test_stray_closing_brace_is_ignored() {
        let document = parse("} td { color: red; }");
        assert_eq!(document.len(), 1);
    }

    #[test]
    fn test_unclosed_rule_is_dropped() {
        let document = parse("td { color: red;");
        assert!(document.is_empty());
    }

    #[test]
    fn test_top_level_rules_are_sorted_by_specificity() {
        let document = parse(".foo { color: red; } td { color: blue; }");
        let selectors: Vec<&str> = document
            .top_level_rules()
            .map(|rule| rule.selector_text.as_str())
            .collect();
        assert_eq!(selectors, vec!["td", ".foo"]);
    }

    #[test]
    fn test_at_media_block_becomes_rule_with_children() {
        let document = parse("@media screen { td { color: red; } }");
        assert_eq!(document.len(), 1);
        let media = document.top_level_rules().next().unwrap();
        assert_eq!(media.selector_text, "@media screen");
        assert_eq!(media.children.len(), 1);
    }

    #[test]
    fn test_base64_value_survives_parsing() {
        let document = parse(".logo { background: url(data:image/png;base64,AAAA==); }");
        let rule = document.top_level_rules().next().unwrap();
        assert_eq!(rule.declarations.len(), 1);
        let declaration = rule.declarations.iter().next().unwrap();
        assert_eq!(declaration.value, "url(data:image/png;base64,AAAA==)");
    }
}
