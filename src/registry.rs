//! Named assertion registry.
//!
//! Every registered assertion is stored next to its inversion, so the base
//! and inverted namespaces always hold the same set of names.

use std::collections::BTreeMap;

use crate::assertion::Assertion;
use crate::error::{InsureError, Result};

/// Append-only mapping from name to [`Assertion`] and its inversion.
#[derive(Debug)]
pub struct Registry<T> {
    base: BTreeMap<String, Assertion<T>>,
    inverted: BTreeMap<String, Assertion<T>>,
}

impl<T> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            base: BTreeMap::new(),
            inverted: BTreeMap::new(),
        }
    }

    /// Look up a registered assertion.
    pub fn get(&self, name: &str) -> Option<&Assertion<T>> {
        self.base.get(name)
    }

    /// Look up the inversion of a registered assertion.
    pub fn get_inverted(&self, name: &str) -> Option<&Assertion<T>> {
        self.inverted.get(name)
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.base.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.base.keys().map(String::as_str)
    }

    /// Number of registered assertions, not counting inversions.
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

impl<T: 'static> Registry<T> {
    /// Register an assertion and its inversion under the assertion's name.
    ///
    /// Fails without touching the registry if the name is blank or already
    /// taken.
    pub fn insert(&mut self, assertion: Assertion<T>) -> Result<()> {
        let name = assertion.name();
        if name.trim().is_empty() {
            return Err(InsureError::InvalidName {
                name: name.to_string(),
            });
        }
        if self.base.contains_key(name) {
            return Err(InsureError::DuplicateName {
                name: name.to_string(),
            });
        }

        let name = name.to_string();
        self.inverted.insert(name.clone(), assertion.invert());
        self.base.insert(name, assertion);
        Ok(())
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn number() -> Assertion<Value> {
        Assertion::new("number", |v: &Value| v.is_number())
    }

    #[test]
    fn test_insert_registers_pair() {
        let mut registry = Registry::new();
        registry.insert(number()).unwrap();

        let base = registry.get("number").unwrap();
        let inverted = registry.get_inverted("number").unwrap();
        assert_eq!(base.display_name(), "number");
        assert_eq!(inverted.display_name(), "not number");
        assert!(inverted.is_inverted());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_leaves_existing_entry() {
        let mut registry = Registry::new();
        registry.insert(number()).unwrap();

        let err = registry
            .insert(Assertion::new("number", |_: &Value| false).with_display_name("fake"))
            .unwrap_err();
        assert_eq!(
            err,
            InsureError::DuplicateName {
                name: "number".to_string()
            }
        );

        let kept = registry.get("number").unwrap();
        assert_eq!(kept.display_name(), "number");
        assert!(kept.test(&Value::from(1)));
        assert_eq!(registry.get_inverted("number").unwrap().display_name(), "not number");
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut registry: Registry<Value> = Registry::new();
        for name in ["", "   "] {
            let err = registry
                .insert(Assertion::new(name, |_: &Value| true))
                .unwrap_err();
            assert!(matches!(err, InsureError::InvalidName { .. }));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_sorted_and_namespaces_match() {
        let mut registry = Registry::new();
        for name in ["string", "boolean", "number"] {
            registry
                .insert(Assertion::new(name, |_: &Value| true))
                .unwrap();
        }
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["boolean", "number", "string"]);
        for name in names {
            assert!(registry.get_inverted(name).is_some());
        }
    }

    #[test]
    fn test_missing_lookup() {
        let registry: Registry<Value> = Registry::default();
        assert!(registry.get("number").is_none());
        assert!(registry.get_inverted("number").is_none());
        assert!(!registry.contains("number"));
    }
}
