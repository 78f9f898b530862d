use itertools::Itertools;
use serde::Serialize;

use crate::{Enforce, Loader, Rule};

/// Ordered module rules with first-match-wins semantics for normal rules.
///
/// Rules with `enforce` are not subject to first-match: every matching `pre`
/// and `post` rule contributes its loaders in addition to the selected normal
/// rule. The combined chain follows the engine's layout, post then normal then
/// pre, so that applying it last to first runs pre loaders before all others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
  rules: Vec<Rule>,
}

impl RuleSet {
  pub fn new(rules: Vec<Rule>) -> Self {
    Self { rules }
  }

  pub fn rules(&self) -> &[Rule] {
    &self.rules
  }

  pub fn get(&self, name: &str) -> Option<&Rule> {
    self.rules.iter().find(|rule| rule.name == name)
  }

  /// The chain for `request`, or `None` when no rule applies and the engine's
  /// default handling is used.
  pub fn resolve(&self, request: &str) -> Option<ResolvedChain<'_>> {
    let matching = |enforce: Option<Enforce>| {
      self.rules.iter().filter(move |rule| rule.enforce == enforce && rule.matches(request))
    };

    let post = matching(Some(Enforce::Post)).collect_vec();
    let normal = matching(None).next();
    let pre = matching(Some(Enforce::Pre)).collect_vec();

    let rules = post.into_iter().chain(normal).chain(pre).collect_vec();
    if rules.is_empty() {
      return None;
    }

    Some(ResolvedChain { normal, rules })
  }
}

#[derive(Debug)]
pub struct ResolvedChain<'a> {
  /// The first normal rule that matched, if any.
  pub normal: Option<&'a Rule>,
  /// Every contributing rule, in chain order.
  pub rules: Vec<&'a Rule>,
}

impl<'a> ResolvedChain<'a> {
  /// Loaders in declaration order; the engine applies them last to first.
  pub fn loaders(&self) -> impl DoubleEndedIterator<Item = &'a Loader> + '_ {
    self.rules.iter().copied().flat_map(|rule: &'a Rule| rule.uses.iter())
  }

  /// Loaders in the order they transform the file.
  pub fn application_order(&self) -> Vec<&'a Loader> {
    self.loaders().rev().collect()
  }

  pub fn rule_names(&self) -> Vec<&'a str> {
    self.rules.iter().map(|rule| rule.name.as_str()).collect()
  }

  pub fn preprocessor_count(&self) -> usize {
    self.loaders().filter(|loader| loader.is_preprocessor()).count()
  }
}
