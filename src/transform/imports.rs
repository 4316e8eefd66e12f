//! Distinct expression symbols referenced by migrated rules.

use std::collections::HashSet;

use super::normalize::expression_symbol;

/// Filter expressions seen during one run, and the symbols they introduced.
///
/// Deduplication is by full expression text, so `f(1)` and `f(2)` both
/// report `f`.
#[derive(Debug, Default, Clone)]
pub struct ImportRefs {
    seen: HashSet<String>,
    symbols: Vec<String>,
}

impl ImportRefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expression; returns its symbol the first time it is seen.
    pub fn record(&mut self, expression: &str) -> Option<&str> {
        if !self.seen.insert(expression.to_string()) {
            return None;
        }
        self.symbols
            .push(expression_symbol(expression).to_string());
        self.symbols.last().map(String::as_str)
    }

    /// Symbols in first-seen order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Number of distinct expressions.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
        self.symbols.clear();
    }
}
