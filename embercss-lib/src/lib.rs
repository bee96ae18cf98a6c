//! EmberCSS - a permissive CSS-like parsing and serialization engine.
//!
//! The engine consumes one raw text string and returns an in-memory
//! document model plus a reverse serializer; it performs no I/O of its
//! own. Parsing is a single pass: the lexer flattens the text into
//! tokens, the rule builder assembles the nested rule tree, top-level
//! selectors are classified and the rules sorted by their specificity
//! score. The parser is permissive by design and has no hard failure
//! path; malformed input degrades into warnings or `Unknown` selectors.

pub mod ember_generate;
pub mod lexer;
pub mod parser;
pub mod serialize;
pub mod style;

pub use ember_generate::ember_css;
pub use serialize::Compaction;
pub use style::classifier::SelectorClassifier;
pub use style::properties::Property;
pub use style::rule_tree::{Declaration, Document, Rule, RuleId, Selector, SelectorKind};
