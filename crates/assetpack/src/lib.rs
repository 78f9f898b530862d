mod assembler;
mod stages;
mod types;
mod utils;

pub use crate::{
  assembler::ConfigAssembler,
  types::{assemble_output::AssembleOutput, explanation::Explanation},
  utils::{
    check_output_sizes::{check_output_sizes, collect_emitted_assets},
    explain::explain_request,
    load_options::load_options,
  },
};
pub use assetpack_common::*;
pub use assetpack_error::{BuildError, BuildResult, ConfigError};
pub use assetpack_fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use assetpack_resolver::{ResolveError, ResolveReturn, Resolver};

/// Assembles `options` into a build configuration, checking required paths
/// against `fs`.
pub fn assemble<F: FileSystem>(options: BundlerOptions, fs: F) -> BuildResult<AssembleOutput> {
  ConfigAssembler::new(options, fs).assemble()
}
