use assetpack_common::{NormalizedBundlerOptions, Plugin};

/// Whole-output plugins for the build environment. Source map emission is part
/// of the list only for development builds.
pub fn create_plugins(options: &NormalizedBundlerOptions) -> Vec<Plugin> {
  let extract_css = Plugin::MiniCssExtract { filename: options.css_entry_filenames.clone() };
  let source_maps = options
    .env
    .emits_source_maps()
    .then(|| Plugin::SourceMapDevTool { filename: options.sourcemap_filenames.clone() });

  std::iter::once(extract_css).chain(source_maps).collect()
}
