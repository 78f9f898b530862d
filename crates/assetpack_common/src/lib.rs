mod build_config;
mod bundler_options;
mod module_rules;
mod types;

pub use bundler_options::{
  build_env::BuildEnv,
  filename_template::{FilenameTemplate, Placeholder},
  input_item::InputItem,
  mode::Mode,
  node_shim::NodeShim,
  normalized_bundler_options::{FontOutput, NormalizedBundlerOptions},
  path_table::PathTable,
  performance::{PerformanceBudget, PerformanceHints, PerformanceOptions},
  resolve_options::{NormalizedResolveOptions, ResolveOptions},
  BundlerOptions,
};

pub use crate::{
  build_config::{BuildConfig, OutputOptions},
  module_rules::{
    condition::{Condition, RulePattern},
    loader::{Loader, LoaderStage},
    rule::{split_query, Enforce, Rule},
    rule_set::{ResolvedChain, RuleSet},
  },
  types::{
    devtool::Devtool,
    emitted_asset::EmittedAsset,
    plugin::Plugin,
    size_hint::{SizeHint, SizeHintKind},
  },
};
