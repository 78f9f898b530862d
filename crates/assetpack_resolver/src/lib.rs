// A wrapper around the `oxc_resolver` crate that feeds it the resolve options of an
// assembled build configuration.

mod resolver;

pub use crate::resolver::{ResolveReturn, Resolver};

pub use oxc_resolver::ResolveError;
