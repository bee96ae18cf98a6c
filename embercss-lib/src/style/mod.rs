pub mod classifier;
pub mod properties;
pub mod rule_tree;
