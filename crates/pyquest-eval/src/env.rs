//! Per-run symbol table.

use pyquest_types::Value;
use std::collections::BTreeMap;

/// Identifier → value bindings for a single evaluation run.
///
/// There is one flat scope: the editor language has no blocks. A table is
/// created per run and dropped with the evaluator, so nothing leaks between
/// runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    bindings: BTreeMap<String, Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous value.
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_overwrites() {
        let mut table = SymbolTable::new();
        assert!(table.is_empty());
        table.define("x", Value::Number(1.0));
        table.define("x", Value::String("one".into()));
        assert_eq!(table.get("x"), Some(&Value::String("one".into())));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_lookup_is_exact() {
        let mut table = SymbolTable::new();
        table.define("Name", Value::Number(1.0));
        assert!(table.contains("Name"));
        assert!(!table.contains("name"));
        assert!(table.get("Name ").is_none());
    }
}
