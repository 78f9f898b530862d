use assetpack_common::{
  Condition, Enforce, Loader, NormalizedBundlerOptions, Rule, RulePattern, RuleSet,
};
use assetpack_error::{BuildResult, ConfigError};

const NODE_MODULES: &str = "node_modules";

struct RuleBuilder<'a> {
  errors: &'a mut Vec<ConfigError>,
}

impl RuleBuilder<'_> {
  fn pattern(&mut self, rule: &str, source: &str) -> Option<RulePattern> {
    RulePattern::new(source)
      .map_err(|err| {
        self.errors.push(ConfigError::InvalidPattern {
          rule: rule.to_string(),
          pattern: source.to_string(),
          reason: err.to_string(),
        });
      })
      .ok()
  }

  fn rule(
    &mut self,
    name: &str,
    test: &str,
    include: Vec<Condition>,
    exclude: Vec<Condition>,
    uses: Vec<Loader>,
  ) -> Option<Rule> {
    Some(Rule {
      name: name.to_string(),
      test: self.pattern(name, test)?,
      include,
      exclude,
      enforce: None,
      uses,
    })
  }

  fn node_modules(&mut self, rule: &str) -> Vec<Condition> {
    self.pattern(rule, NODE_MODULES).map(Condition::Pattern).into_iter().collect()
  }
}

/// The ordered rule list. Normal rules are matched first-wins, so the style
/// rules are arranged from most to least specific:
///
/// - `styles`: first-party stylesheets under the style root, extracted to a
///   file and run through sass.
/// - `vendor-styles`: plain CSS from dependencies, injected at runtime and
///   never run through sass.
/// - `component-styles`: sass anywhere else outside dependencies.
///
/// All three share the same postcss step.
pub fn create_module_rules(options: &NormalizedBundlerOptions) -> BuildResult<RuleSet> {
  let mut errors = vec![];
  let mut builder = RuleBuilder { errors: &mut errors };
  let source_map = options.env.emits_source_maps();
  let paths = &options.paths;

  let postcss = || Loader::PostCss { source_map, config: paths.postcss_config.clone() };
  let css = |import_loaders| Loader::Css { import_loaders, source_map };

  let lint = builder.rule(
    "lint",
    r"\.js$",
    paths.entries.values().cloned().map(Condition::Path).collect(),
    vec![],
    vec![Loader::Eslint],
  );
  let lint = lint.map(|rule| Rule { enforce: Some(Enforce::Pre), ..rule });

  let vue = builder.rule(
    "vue",
    r"\.vue$",
    vec![],
    vec![],
    vec![Loader::Vue { js: "babel-loader".to_string(), css: "css-loader".to_string() }],
  );

  let exclude = builder.node_modules("scripts");
  let scripts = builder.rule(
    "scripts",
    r"\.js$",
    vec![],
    exclude,
    vec![Loader::Babel { presets: options.babel_presets.clone(), compact: false }],
  );

  let exclude = builder.node_modules("styles");
  let styles = builder.rule(
    "styles",
    r"\.(css|s[ac]ss)$",
    vec![Condition::Path(paths.css_root.clone())],
    exclude,
    vec![
      Loader::MiniCssExtract { public_path: paths.build_output.clone(), hmr: false },
      css(2),
      postcss(),
      Loader::ResolveUrl,
      Loader::Sass,
    ],
  );

  let include = builder.node_modules("vendor-styles");
  let vendor_styles = builder.rule(
    "vendor-styles",
    r"\.css$",
    include,
    vec![],
    vec![Loader::VueStyle, Loader::Style, css(1), postcss(), Loader::ResolveUrl],
  );

  let exclude = builder.node_modules("component-styles");
  let component_styles = builder.rule(
    "component-styles",
    r"\.s[ac]ss$",
    vec![],
    exclude,
    vec![Loader::VueStyle, Loader::Style, css(2), postcss(), Loader::ResolveUrl, Loader::Sass],
  );

  let images = builder.rule("images", r"\.(png|jpg|jpeg|gif)$", vec![], vec![], vec![Loader::Url]);

  let fonts = builder.rule(
    "fonts",
    r"\.(woff(2)?|ttf|eot)(\?v=\d+\.\d+\.\d+)?$",
    vec![],
    vec![],
    vec![Loader::File {
      name: options.fonts.name.clone(),
      public_path: options.fonts.public_path.clone(),
      output_path: options.fonts.output_path.clone(),
    }],
  );

  let svg = builder.rule("svg", r"\.svg", vec![], vec![], vec![Loader::SvgUrl]);

  let rules = [lint, vue, scripts, styles, vendor_styles, component_styles, images, fonts, svg];
  if !errors.is_empty() {
    return Err(errors.into());
  }

  tracing::debug!(count = rules.len(), "created module rules");
  Ok(RuleSet::new(rules.into_iter().flatten().collect()))
}
