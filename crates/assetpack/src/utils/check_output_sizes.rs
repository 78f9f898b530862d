use std::{io, path::Path};

use assetpack_common::{BuildConfig, EmittedAsset, SizeHint};
use assetpack_fs::FileSystem;
use assetpack_utils::path_ext::PathExt;

/// Lists what the engine wrote to the build output, attributing script and
/// stylesheet bundles to their entry. Source maps are left out.
pub fn collect_emitted_assets(
  config: &BuildConfig,
  fs: &impl FileSystem,
) -> io::Result<Vec<EmittedAsset>> {
  let output = config.output.path.as_path();
  let mut files = fs.read_dir_files(output)?;

  let fonts_dir = config.fonts.output_dir(output);
  if fs.is_dir(&fonts_dir) {
    files.extend(fs.read_dir_files(&fonts_dir)?);
  }

  let source_maps =
    config.entry.keys().filter_map(|name| config.source_map_path(name)).collect::<Vec<_>>();

  let mut assets = vec![];
  for file in files.into_iter().filter(|file| !source_maps.contains(file)) {
    let entry = config
      .entry
      .keys()
      .find(|name| {
        config.output_path(name).as_deref() == Some(file.as_path())
          || config.css_output_path(name).as_deref() == Some(file.as_path())
      })
      .cloned();

    assets.push(EmittedAsset {
      filename: relative_filename(output, &file),
      size: fs.file_size(&file)?,
      entry,
    });
  }

  Ok(assets)
}

/// Checks the build output against the configured performance budget.
pub fn check_output_sizes(config: &BuildConfig, fs: &impl FileSystem) -> io::Result<Vec<SizeHint>> {
  let assets = collect_emitted_assets(config, fs)?;
  let hints = config.performance.check(&assets);
  for hint in &hints {
    tracing::warn!("{hint}");
  }
  Ok(hints)
}

fn relative_filename(output: &Path, file: &Path) -> String {
  file.strip_prefix(output).unwrap_or(file).slash_lossy().into_owned()
}
