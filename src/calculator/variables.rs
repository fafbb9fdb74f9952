//! Named numeric slots referenced by variable operands.

use std::collections::HashMap;

/// Name of the memory variable dropped by `AC`.
pub const MEMORY_VARIABLE: &str = "M";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableStore {
    values: HashMap<String, f64>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite (or create) a variable.
    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Read a variable, creating it at `0.0` if it does not exist yet.
    pub fn resolve(&mut self, name: &str) -> f64 {
        *self.values.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(name, "Creating variable on first read");
            0.0
        })
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        let mut entries: Vec<_> = self.values.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_creates_at_zero() {
        let mut store = VariableStore::new();
        assert_eq!(store.get("x"), None);
        assert_eq!(store.resolve("x"), 0.0);
        assert_eq!(store.get("x"), Some(0.0));
    }

    #[test]
    fn test_resolve_keeps_existing_value() {
        let mut store = VariableStore::new();
        store.set("x", 3.5);
        assert_eq!(store.resolve("x"), 3.5);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = VariableStore::new();
        store.set("M", 1.0);
        store.set("M", 2.0);
        assert_eq!(store.get("M"), Some(2.0));
        assert_eq!(store.remove("M"), Some(2.0));
        assert!(store.is_empty());
    }

    #[test]
    fn test_iter_sorted() {
        let mut store = VariableStore::new();
        store.set("y", 2.0);
        store.set("M", 1.0);
        store.set("x", 3.0);
        let names: Vec<_> = store.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["M", "x", "y"]);
    }
}
