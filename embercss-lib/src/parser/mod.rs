pub mod rule_builder;
