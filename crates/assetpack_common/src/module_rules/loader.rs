use std::path::PathBuf;

use serde::Serialize;

use crate::FilenameTemplate;

/// What a loader does to a file, coarsely. Used to reason about chains without
/// matching on individual loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoaderStage {
  Lint,
  Compile,
  /// Stylesheet language compilation ahead of plain CSS handling.
  Preprocess,
  /// Vendor prefixing and other PostCSS transforms.
  Prefix,
  RewriteUrls,
  Interpret,
  Inject,
  Extract,
  Emit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "loader", rename_all_fields = "camelCase")]
pub enum Loader {
  #[serde(rename = "eslint-loader")]
  Eslint,
  #[serde(rename = "vue-loader")]
  Vue { js: String, css: String },
  #[serde(rename = "babel-loader")]
  Babel { presets: Vec<String>, compact: bool },
  #[serde(rename = "mini-css-extract-loader")]
  MiniCssExtract { public_path: PathBuf, hmr: bool },
  #[serde(rename = "vue-style-loader")]
  VueStyle,
  #[serde(rename = "style-loader")]
  Style,
  #[serde(rename = "css-loader")]
  Css { import_loaders: u8, source_map: bool },
  #[serde(rename = "postcss-loader")]
  PostCss { source_map: bool, config: PathBuf },
  #[serde(rename = "resolve-url-loader")]
  ResolveUrl,
  #[serde(rename = "sass-loader")]
  Sass,
  #[serde(rename = "url-loader")]
  Url,
  #[serde(rename = "file-loader")]
  File { name: FilenameTemplate, public_path: String, output_path: String },
  #[serde(rename = "svg-url-loader")]
  SvgUrl,
}

impl Loader {
  pub fn name(&self) -> &'static str {
    match self {
      Self::Eslint => "eslint-loader",
      Self::Vue { .. } => "vue-loader",
      Self::Babel { .. } => "babel-loader",
      Self::MiniCssExtract { .. } => "mini-css-extract-loader",
      Self::VueStyle => "vue-style-loader",
      Self::Style => "style-loader",
      Self::Css { .. } => "css-loader",
      Self::PostCss { .. } => "postcss-loader",
      Self::ResolveUrl => "resolve-url-loader",
      Self::Sass => "sass-loader",
      Self::Url => "url-loader",
      Self::File { .. } => "file-loader",
      Self::SvgUrl => "svg-url-loader",
    }
  }

  pub fn stage(&self) -> LoaderStage {
    match self {
      Self::Eslint => LoaderStage::Lint,
      Self::Vue { .. } | Self::Babel { .. } => LoaderStage::Compile,
      Self::Sass => LoaderStage::Preprocess,
      Self::PostCss { .. } => LoaderStage::Prefix,
      Self::ResolveUrl => LoaderStage::RewriteUrls,
      Self::Css { .. } => LoaderStage::Interpret,
      Self::VueStyle | Self::Style => LoaderStage::Inject,
      Self::MiniCssExtract { .. } => LoaderStage::Extract,
      Self::Url | Self::File { .. } | Self::SvgUrl => LoaderStage::Emit,
    }
  }

  pub fn is_preprocessor(&self) -> bool {
    matches!(self.stage(), LoaderStage::Preprocess)
  }

  /// Whether this loader was configured to produce source maps.
  pub fn source_map(&self) -> bool {
    match self {
      Self::Css { source_map, .. } | Self::PostCss { source_map, .. } => *source_map,
      _ => false,
    }
  }
}

#[test]
fn test_loader_serialization() {
  let css = serde_json::to_value(Loader::Css { import_loaders: 2, source_map: true }).unwrap();
  assert_eq!(css, serde_json::json!({ "loader": "css-loader", "importLoaders": 2, "sourceMap": true }));

  let sass = serde_json::to_value(Loader::Sass).unwrap();
  assert_eq!(sass, serde_json::json!({ "loader": "sass-loader" }));
}
