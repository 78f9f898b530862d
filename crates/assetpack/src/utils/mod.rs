pub mod check_output_sizes;
pub mod explain;
pub mod load_options;
pub mod normalize_options;
