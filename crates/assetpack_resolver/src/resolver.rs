use std::path::{Path, PathBuf};

use arcstr::ArcStr;
use dashmap::DashMap;
use sugar_path::SugarPath;

use oxc_resolver::{AliasValue, ResolveError, ResolveOptions as OxcResolverOptions};

use assetpack_common::{BuildConfig, NodeShim, NormalizedResolveOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveReturn {
  Path(ArcStr),
  /// The request is shimmed to an empty module.
  Empty,
}

#[derive(Debug)]
pub struct Resolver {
  cwd: PathBuf,
  inner: oxc_resolver::Resolver,
  cache: DashMap<(PathBuf, String), ResolveReturn>,
}

impl Resolver {
  pub fn new<'a>(
    options: &NormalizedResolveOptions,
    node: impl IntoIterator<Item = (&'a String, &'a NodeShim)>,
    cwd: PathBuf,
  ) -> Self {
    let mut alias = options
      .alias
      .iter()
      .map(|(from, to)| (from.clone(), vec![AliasValue::Path(to.clone())]))
      .collect::<Vec<_>>();

    alias.extend(node.into_iter().filter_map(|(module, shim)| match shim {
      NodeShim::Empty => Some((module.clone(), vec![AliasValue::Ignore])),
      NodeShim::Native => None,
    }));

    let resolve_options = OxcResolverOptions {
      alias,
      modules: options.modules.iter().map(|dir| dir.to_string_lossy().into_owned()).collect(),
      extensions: options.extensions.clone(),
      main_fields: vec!["browser".to_string(), "module".to_string(), "main".to_string()],
      alias_fields: vec![vec!["browser".to_string()]],
      condition_names: vec!["browser".to_string(), "import".to_string(), "default".to_string()],
      ..Default::default()
    };

    Self { cwd, inner: oxc_resolver::Resolver::new(resolve_options), cache: DashMap::default() }
  }

  pub fn from_config(config: &BuildConfig) -> Self {
    Self::new(&config.resolve, &config.node, config.paths.root.clone())
  }

  pub fn cwd(&self) -> &PathBuf {
    &self.cwd
  }

  pub fn resolve(
    &self,
    importer: Option<&Path>,
    specifier: &str,
  ) -> Result<ResolveReturn, ResolveError> {
    let dir = importer
      .and_then(|importer| importer.parent())
      .filter(|inner| inner.components().next().is_some())
      .unwrap_or(self.cwd.as_path())
      .normalize();

    let key = (dir, specifier.to_string());
    if let Some(cached) = self.cache.get(&key) {
      return Ok(cached.value().clone());
    }

    let resolved = match self.inner.resolve(&key.0, specifier) {
      Ok(resolution) => ResolveReturn::Path(resolution.full_path().to_string_lossy().as_ref().into()),
      Err(ResolveError::Ignored(_)) => ResolveReturn::Empty,
      Err(err) => return Err(err),
    };

    tracing::trace!(specifier, dir = %key.0.display(), resolved = ?resolved, "resolved request");
    self.cache.insert(key, resolved.clone());
    Ok(resolved)
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use assetpack_utils::indexmap::FxIndexMap;

  use super::*;

  fn fixture() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    for file in ["src/app.js", "src/util.js", "node_modules/vue/dist/vue.js"] {
      let path = root.join(file);
      fs::create_dir_all(path.parent().unwrap()).unwrap();
      fs::write(path, "export default 1;\n").unwrap();
    }
    (dir, root)
  }

  fn resolver(root: &Path) -> Resolver {
    let mut alias = FxIndexMap::default();
    alias.insert("vue".to_string(), "vue/dist/vue.js".to_string());
    let options = NormalizedResolveOptions {
      modules: vec![root.join("src"), root.join("node_modules")],
      alias,
      extensions: vec![".js".to_string(), ".json".to_string()],
    };
    let mut node = FxIndexMap::default();
    node.insert("fs".to_string(), NodeShim::Empty);
    Resolver::new(&options, &node, root.to_path_buf())
  }

  #[test]
  fn resolves_relative_and_module_directory_requests() {
    let (_dir, root) = fixture();
    let resolver = resolver(&root);
    let importer = root.join("src/app.js");
    let util = ResolveReturn::Path(root.join("src/util.js").to_string_lossy().as_ref().into());

    assert_eq!(resolver.resolve(Some(&importer), "./util").unwrap(), util);
    assert_eq!(resolver.resolve(Some(&importer), "util").unwrap(), util);
    // Served from the cache the second time.
    assert_eq!(resolver.resolve(Some(&importer), "util").unwrap(), util);
  }

  #[test]
  fn applies_alias_and_node_shims() {
    let (_dir, root) = fixture();
    let resolver = resolver(&root);
    let importer = root.join("src/app.js");

    assert_eq!(
      resolver.resolve(Some(&importer), "vue").unwrap(),
      ResolveReturn::Path(root.join("node_modules/vue/dist/vue.js").to_string_lossy().as_ref().into())
    );
    assert_eq!(resolver.resolve(Some(&importer), "fs").unwrap(), ResolveReturn::Empty);
    assert!(resolver.resolve(Some(&importer), "./missing").is_err());
  }
}
