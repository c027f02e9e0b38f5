//! Environment-variable indirection for hook arguments.
//!
//! Any argument value starting with `$` names an environment variable. The
//! variable's value replaces the argument; an unset variable resolves to the
//! empty string.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

/// Source of environment variable values.
pub trait EnvSource {
    /// Look up a variable, `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Resolve a single argument value.
///
/// `$NAME` becomes the value of `NAME` (or `""` when unset); anything else is
/// returned unchanged.
pub fn resolve_value(raw: &str, env: &dyn EnvSource) -> String {
    match raw.strip_prefix('$') {
        Some(name) => {
            let value = env.var(name);
            if value.is_none() {
                debug!("Environment variable {} is not set, using empty value", name);
            }
            value.unwrap_or_default()
        }
        None => raw.to_string(),
    }
}

/// Resolve a repeatable, comma-separated argument into a set.
///
/// Each raw value is resolved with [`resolve_value`], split on `,`, and the
/// non-empty pieces of all values are unioned.
pub fn resolve_list<S: AsRef<str>>(raw: &[S], env: &dyn EnvSource) -> BTreeSet<String> {
    raw.iter()
        .map(|value| resolve_value(value.as_ref(), env))
        .flat_map(|resolved| {
            resolved
                .split(',')
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
