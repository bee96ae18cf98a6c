use crate::lexer;
use crate::parser::rule_builder::RuleTreeBuilder;
use crate::serialize::{self, Compaction};
use crate::style::rule_tree::Document;

pub mod ember_css {
    use super::*;

    /// Parses raw CSS-like text into a classified, sorted document.
    ///
    /// The caller is responsible for having read the text into memory;
    /// the engine itself does no I/O.
    pub fn parse(raw_text: &str) -> Document {
        let tokens = lexer::tokenize(raw_text);
        RuleTreeBuilder::new().build(&tokens)
    }

    /// Renders a document back to text at the given compaction level.
    pub fn render(document: &Document, level: Compaction) -> String {
        serialize::render_document(document, level)
    }

    /// Parses `raw_text` and merges its top-level rules into `document`,
    /// then re-classifies and re-sorts the combined top-level list.
    pub fn merge_into(document: &mut Document, raw_text: &str) {
        let parsed = parse(raw_text);
        document.merge(&parsed);
        let builder = RuleTreeBuilder::new();
        document.classify_top_level(builder.classifier());
        document.sort_top_level();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_then_render() {
        let document = ember_css::parse("td { color: red; }");
        assert_eq!(
            ember_css::render(&document, Compaction::Max),
            "td{color:red;}"
        );
    }

    #[test]
    fn test_merge_into_resorts_by_specificity() {
        let mut document = ember_css::parse(".foo { color: red; }");
        ember_css::merge_into(&mut document, "td { color: blue; }");
        assert_eq!(document.len(), 2);
        let selectors: Vec<&str> = document
            .top_level_rules()
            .map(|rule| rule.selector_text.as_str())
            .collect();
        // The bare element sorts ahead of the class rule it was merged after.
        assert_eq!(selectors, vec!["td", ".foo"]);
    }
}
