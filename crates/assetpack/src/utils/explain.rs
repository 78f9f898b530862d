use std::path::Path;

use assetpack_common::{split_query, BuildConfig};
use assetpack_resolver::{ResolveError, ResolveReturn, Resolver};
use assetpack_utils::path_ext::PathExt;
use itertools::Itertools;

use crate::types::explanation::Explanation;

/// Works out which rules and loaders apply to `request`.
///
/// Relative and absolute paths are taken relative to the project root and need
/// not exist. Bare module requests go through the resolver first, so aliases and
/// shims are reflected.
pub fn explain_request(
  config: &BuildConfig,
  resolver: &Resolver,
  request: &str,
) -> Result<Explanation, ResolveError> {
  let (path, query) = split_query(request);

  let resource = if path.starts_with('.') || Path::new(path).is_absolute() {
    Some(Path::new(path).absolutize_from(&config.paths.root).slash_lossy().into_owned())
  } else {
    match resolver.resolve(None, path)? {
      ResolveReturn::Path(resolved) => Some(resolved.to_string()),
      ResolveReturn::Empty => None,
    }
  };

  let Some(resource) = resource else {
    return Ok(Explanation { request: request.to_string(), resource: None, rules: vec![], loaders: vec![] });
  };

  let full_request = match query {
    Some(query) => format!("{resource}?{query}"),
    None => resource.clone(),
  };

  let (rules, loaders) = config.resolve_chain(&full_request).map_or_else(
    || (vec![], vec![]),
    |chain| {
      (
        chain.rule_names().into_iter().map(ToString::to_string).collect_vec(),
        chain.application_order().into_iter().map(|loader| loader.name().to_string()).collect_vec(),
      )
    },
  );

  Ok(Explanation { request: request.to_string(), resource: Some(resource), rules, loaders })
}
