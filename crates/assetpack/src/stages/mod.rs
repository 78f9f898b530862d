pub mod create_module_rules;
pub mod create_plugins;
pub mod validate_paths;
