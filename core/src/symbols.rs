//! Per-evaluation variable storage.

use hashbrown::HashMap;

/// Mapping from variable name to its current value.
///
/// Keys borrow from the source line, so a table never outlives the line it
/// was built for.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable<'a> {
    values: HashMap<&'a str, i64>,
}

impl<'a> SymbolTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `name` with value 0. Re-declaring resets the value.
    pub fn declare(&mut self, name: &'a str) {
        self.values.insert(name, 0);
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Value of `name`, or `None` if it was never declared or written.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Value of `name`, reading unknown names as 0.
    pub fn get_or_zero(&self, name: &str) -> i64 {
        self.get(name).unwrap_or(0)
    }

    /// Set `name`, creating it if needed.
    pub fn write(&mut self, name: &'a str, value: i64) {
        self.values.insert(name, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_resets_value() {
        let mut table = SymbolTable::new();
        table.declare("x");
        table.write("x", 5);
        assert_eq!(table.get("x"), Some(5));
        table.declare("x");
        assert_eq!(table.get("x"), Some(0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn unknown_names() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert!(!table.is_declared("y"));
        assert_eq!(table.get("y"), None);
        assert_eq!(table.get_or_zero("y"), 0);
    }

    #[test]
    fn write_creates_entry() {
        let mut table = SymbolTable::new();
        table.write("z", -3);
        assert!(table.is_declared("z"));
        assert_eq!(table.get_or_zero("z"), -3);
    }
}
