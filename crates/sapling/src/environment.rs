//! Persistent environment mapping names to values
//!
//! Every mutating operation returns a *new* environment and leaves the
//! receiver untouched, so any number of holders can keep old environments
//! (for rollback, display, or independent sessions) without coordination.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::value::Value;

/// An ordered mapping from identifier to value with unique keys.
///
/// Backed by an [`IndexMap`], so lookups stay cheap while insertion order
/// is preserved for deterministic rendering. The map is used persistently:
/// [`extend`], [`update`], and [`remove`] clone into a derived environment
/// rather than mutating in place.
///
/// # Example
///
/// ```
/// use sapling::{Environment, Value};
///
/// let base = Environment::new();
/// let env = base.extend("x", Value::int(1));
///
/// assert_eq!(env.get("x"), Some(&Value::int(1)));
/// assert!(base.is_empty()); // the original is untouched
/// ```
///
/// [`extend`]: Environment::extend
/// [`update`]: Environment::update
/// [`remove`]: Environment::remove
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: IndexMap<String, Value>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Check if a binding exists (bound or unbound).
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Persistent Update
    // ═══════════════════════════════════════════════════════════════════

    /// Derive an environment with a new binding appended.
    ///
    /// The caller must have already checked that `name` is absent; this
    /// primitive does not re-check uniqueness.
    #[must_use]
    pub fn extend(&self, name: impl Into<String>, value: Value) -> Environment {
        let name = name.into();
        debug!(name = %name, value = %value, "extend");
        let mut bindings = self.bindings.clone();
        bindings.insert(name, value);
        Environment { bindings }
    }

    /// Derive an environment with the binding for `name` rewritten.
    ///
    /// A pure rewrite, not a validated operation: if `name` is absent the
    /// result is identical to `self`. Validation lives in the evaluator.
    #[must_use]
    pub fn update(&self, name: &str, value: Value) -> Environment {
        if !self.contains(name) {
            return self.clone();
        }
        debug!(name = %name, value = %value, "update");
        let mut bindings = self.bindings.clone();
        bindings.insert(name.to_string(), value);
        Environment { bindings }
    }

    /// Derive an environment with the binding for `name` deleted.
    ///
    /// Absent names are a no-op at this layer. Removal preserves the
    /// relative order of the remaining bindings.
    #[must_use]
    pub fn remove(&self, name: &str) -> Environment {
        if !self.contains(name) {
            return self.clone();
        }
        debug!(name = %name, "remove");
        let mut bindings = self.bindings.clone();
        bindings.shift_remove(name);
        Environment { bindings }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over all bindings in insertion order (for drivers/tests).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All binding names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}
