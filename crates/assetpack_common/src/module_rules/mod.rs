pub mod condition;
pub mod loader;
pub mod rule;
pub mod rule_set;
