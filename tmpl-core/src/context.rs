//! Context building — resolves every declaration into one key → value map.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ResolveError;
use crate::resolver::Resolver;
use crate::types::ConfigDeclaration;

/// Resolved key → value mapping handed to the renderer.
///
/// Only keys whose resolution succeeded are present. There are no public
/// mutators: a context is built once by [`build_context`] and read thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedContext(HashMap<String, String>);

impl ResolvedContext {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResolvedContext {
    /// Later pairs overwrite earlier ones with the same key.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A declaration that could not be resolved.
#[derive(Debug)]
pub struct ItemFailure {
    pub key: String,
    pub error: ResolveError,
}

/// Outcome of [`build_context`]: the context plus every dropped item.
#[derive(Debug, Default)]
pub struct ContextBuild {
    pub context: ResolvedContext,
    pub failures: Vec<ItemFailure>,
}

/// Resolve `declarations` in order into a [`ResolvedContext`].
///
/// Never fails as a whole. A failed item is logged, recorded in
/// [`ContextBuild::failures`], and left out of the context; an earlier
/// successful value for the same key is kept. Duplicate keys: last
/// successful write wins.
pub fn build_context(declarations: &[ConfigDeclaration], resolver: &Resolver<'_>) -> ContextBuild {
    let mut values = HashMap::with_capacity(declarations.len());
    let mut failures = Vec::new();

    for decl in declarations {
        match resolver.resolve(decl) {
            Ok(value) => {
                if values.insert(decl.key.clone(), value).is_some() {
                    tracing::debug!("config item '{}' overrides an earlier value", decl.key);
                }
            }
            Err(error) => {
                tracing::warn!("error processing config item '{}': {}", decl.key, error);
                failures.push(ItemFailure {
                    key: decl.key.clone(),
                    error,
                });
            }
        }
    }

    ContextBuild {
        context: ResolvedContext(values),
        failures,
    }
}
