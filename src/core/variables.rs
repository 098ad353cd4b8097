use std::f64::consts::{E, PI};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Reserved name bound to π in a default table.
pub const PI_NAME: &str = "pi";
/// Reserved name bound to Euler's number in a default table.
pub const E_NAME: &str = "e";

const DEFAULT_ZEROED: [&str; 7] = ["x", "y", "a", "b", "c", "r", "t"];

/// Named numeric values visible to expressions.
///
/// Names are case-sensitive. `IndexMap` keeps listing order stable for
/// snapshots; lookup semantics do not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableTable {
    values: IndexMap<String, f64>,
}

impl VariableTable {
    /// Empty table without reserved constants.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table holding `x, y, a, b, c, r, t = 0` plus `pi` and `e`.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut table = Self::with_constants();
        for name in DEFAULT_ZEROED {
            table.values.insert(name.to_owned(), 0.0);
        }
        table
    }

    /// Table holding only the reserved constants.
    #[must_use]
    pub fn with_constants() -> Self {
        let mut table = Self::empty();
        table.values.insert(PI_NAME.to_owned(), PI);
        table.values.insert(E_NAME.to_owned(), E);
        table
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: f64) -> PlotResult<()> {
        if !is_valid_name(name) {
            return Err(PlotError::InvalidName(name.to_owned()));
        }
        self.insert_unchecked(name, value);
        Ok(())
    }

    pub(crate) fn insert_unchecked(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.to_owned(), value);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.shift_remove(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Accepts identifiers of the form `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_binds_pi_and_zeroed_names() {
        let table = VariableTable::with_defaults();
        assert_eq!(table.get(PI_NAME), Some(PI));
        for name in DEFAULT_ZEROED {
            assert_eq!(table.get(name), Some(0.0), "{name}");
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut table = VariableTable::empty();
        table.set("A", 1.0).expect("valid name");
        assert_eq!(table.get("A"), Some(1.0));
        assert_eq!(table.get("a"), None);
    }

    #[test]
    fn name_validation() {
        assert!(is_valid_name("_tmp1"));
        assert!(is_valid_name("theta"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("1x"));
        assert!(!is_valid_name("a-b"));
        assert!(!is_valid_name("θ"));
    }

    #[test]
    fn invalid_name_is_rejected_without_mutation() {
        let mut table = VariableTable::empty();
        let result = table.set("9lives", 9.0);
        assert!(matches!(result, Err(PlotError::InvalidName(_))));
        assert!(table.is_empty());
    }
}
