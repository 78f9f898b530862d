pub mod build_env;
pub mod mode;
