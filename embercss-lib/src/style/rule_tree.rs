//! The in-memory document model: rules, declarations and selectors.
//!
//! All rules live in one flat arena owned by the [`Document`]; parent and
//! child relationships are expressed as indices into that arena rather
//! than mutual owning references. Rules and declarations are built once
//! during a parse pass and are read-mostly afterward.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::style::classifier::SelectorClassifier;
use crate::style::properties::Property;

/// Index of a rule inside the document arena.
pub type RuleId = usize;

/// The classification assigned to a top-level rule's raw selector text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// One bare lowercase-alphanumeric token, e.g. `td`.
    Element,
    /// Whitespace-separated bare element tokens, e.g. `table tbody td`.
    ElementDescendent,
    /// `.` followed by a class name, e.g. `.headline`.
    SimpleClass,
    /// `#` followed by an id, e.g. `#footer`.
    SimpleId,
    /// Element token immediately followed by a class, e.g. `td.foo`.
    ElementClass,
    /// Element token immediately followed by an id, e.g. `td#bar`.
    ElementId,
    /// Anything else: combinators, pseudo-classes, comma lists, at-rules.
    Unknown,
}

impl SelectorKind {
    /// The sort-order score for this kind. Only a bare element stands out;
    /// every other category carries the same value, so sorting merely
    /// moves single bare elements ahead of everything else. This is not
    /// real CSS cascade specificity.
    pub fn specificity(&self) -> u32 {
        match self {
            SelectorKind::Element => 1,
            _ => 100,
        }
    }
}

/// The classified form of a rule's raw header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// The raw selector text, trimmed.
    pub text: String,
    /// 0-based original parse-order position, used as the sort tie-break.
    pub position: usize,
    pub kind: SelectorKind,
    pub specificity: u32,
}

/// One `property: value` pair owned by a rule.
///
/// Declarations order and deduplicate on the `(property name, value)`
/// pair. The same property with two different values is deliberately kept
/// twice; both entries are emitted on serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: Property,
    pub value: String,
}

impl Declaration {
    pub fn new(property: Property, value: impl Into<String>) -> Self {
        Declaration {
            property,
            value: value.into(),
        }
    }
}

impl Ord for Declaration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.property
            .name()
            .cmp(other.property.name())
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for Declaration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{};", self.property.name(), self.value)
    }
}

/// A selector plus its declarations and nested child rules.
#[derive(Debug, Clone)]
pub struct Rule {
    /// The raw selector text as first written, before classification.
    pub selector_text: String,
    /// The owning parent, if this is a nested rule.
    pub parent: Option<RuleId>,
    /// Nested child rules, in insertion order.
    pub children: Vec<RuleId>,
    /// Declarations, ordered and deduplicated on (property name, value).
    pub declarations: BTreeSet<Declaration>,
    /// The classified selector. Assigned to top-level rules only.
    pub selector: Option<Selector>,
}

impl Rule {
    fn new(selector_text: &str, parent: Option<RuleId>) -> Self {
        Rule {
            selector_text: selector_text.trim().to_string(),
            parent,
            children: Vec::new(),
            declarations: BTreeSet::new(),
            selector: None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector_text)?;
        for declaration in &self.declarations {
            writeln!(f, "\t{}", declaration)?;
        }
        write!(f, "}}")
    }
}

/// The root container: a flat arena of rules plus the ordered list of
/// top-level rule ids.
#[derive(Debug, Default)]
pub struct Document {
    rules: Vec<Rule>,
    top_level: Vec<RuleId>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Creates a detached top-level rule in the arena.
    ///
    /// The rule does not appear in the top-level list until
    /// [`Document::attach_top_level`] is called; the rule builder attaches
    /// a rule only once its closing brace has been seen, so a rule left
    /// open at end of input is silently dropped from the output.
    pub fn create_rule(&mut self, selector_text: &str) -> RuleId {
        self.rules.push(Rule::new(selector_text, None));
        self.rules.len() - 1
    }

    /// Creates a nested rule attached to `parent`'s child list.
    pub fn create_child_rule(&mut self, parent: RuleId, selector_text: &str) -> RuleId {
        self.rules.push(Rule::new(selector_text, Some(parent)));
        let id = self.rules.len() - 1;
        self.rules[parent].children.push(id);
        id
    }

    /// Appends a finished parentless rule to the top-level list.
    pub fn attach_top_level(&mut self, id: RuleId) {
        self.top_level.push(id);
    }

    /// Creates a top-level rule and appends it in one step.
    pub fn add_rule(&mut self, selector_text: &str) -> RuleId {
        let id = self.create_rule(selector_text);
        self.attach_top_level(id);
        id
    }

    /// Adds a declaration to a rule. Identical (property, value) pairs
    /// collapse to a single stored entry.
    pub fn add_declaration(&mut self, rule: RuleId, declaration: Declaration) {
        self.rules[rule].declarations.insert(declaration);
    }

    /// Rewrites the value of the declaration matching `(property,
    /// old_value)`. Returns false if no such declaration exists.
    pub fn set_declaration_value(
        &mut self,
        rule: RuleId,
        property: Property,
        old_value: &str,
        new_value: &str,
    ) -> bool {
        let target = Declaration::new(property, old_value);
        let rule = &mut self.rules[rule];
        if rule.declarations.remove(&target) {
            rule.declarations.insert(Declaration::new(property, new_value));
            true
        } else {
            false
        }
    }

    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id]
    }

    /// The ids of the top-level rules, in their current order.
    pub fn top_level(&self) -> &[RuleId] {
        &self.top_level
    }

    /// Iterates over the top-level rules in their current order.
    pub fn top_level_rules(&self) -> impl Iterator<Item = &Rule> {
        self.top_level.iter().map(move |&id| &self.rules[id])
    }

    /// Number of top-level rules.
    pub fn len(&self) -> usize {
        self.top_level.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty()
    }

    /// Classifies every top-level rule's raw selector text, assigning each
    /// its 0-based position in the current top-level order. Nested rules
    /// keep their insertion order and are never classified here.
    pub fn classify_top_level(&mut self, classifier: &SelectorClassifier) {
        for position in 0..self.top_level.len() {
            let id = self.top_level[position];
            let selector = classifier.classify(&self.rules[id].selector_text, position);
            self.rules[id].selector = Some(selector);
        }
    }

    /// Stable-sorts the top-level list by specificity ascending, then by
    /// original parse position. Unclassified rules sort last.
    pub fn sort_top_level(&mut self) {
        let rules = &self.rules;
        self.top_level.sort_by_key(|&id| match &rules[id].selector {
            Some(selector) => (selector.specificity, selector.position),
            None => (u32::MAX, usize::MAX),
        });
    }

    /// Appends every top-level rule of `other` (with its whole subtree) to
    /// this document. The caller is expected to re-classify and re-sort
    /// afterwards; see `ember_generate::ember_css::merge_into`.
    pub fn merge(&mut self, other: &Document) {
        for &top in other.top_level() {
            let id = self.copy_subtree(other, top, None);
            self.attach_top_level(id);
        }
    }

    fn copy_subtree(&mut self, other: &Document, id: RuleId, parent: Option<RuleId>) -> RuleId {
        let source = other.rule(id);
        let new_id = match parent {
            None => self.create_rule(&source.selector_text),
            Some(parent) => self.create_child_rule(parent, &source.selector_text),
        };
        for declaration in &source.declarations {
            self.add_declaration(new_id, declaration.clone());
        }
        for &child in &source.children {
            self.copy_subtree(other, child, Some(new_id));
        }
        new_id
    }
}
