pub mod devtool;
pub mod emitted_asset;
pub mod plugin;
pub mod size_hint;
