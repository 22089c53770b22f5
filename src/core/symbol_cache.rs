// src/core/symbol_cache.rs - Name-keyed fallback symbol lookup
use std::collections::HashMap;

use super::symbol::{Symbol, SymbolId};

/// Best-effort mapping from a normalized short name to the most recently
/// registered symbol under that name.
///
/// Strictly a fallback resolution strategy, never a primary source of truth:
/// unrelated declarations sharing a short name collide, and the last write
/// wins. Not synchronized - use one instance per concurrent analysis.
#[derive(Debug, Default, Clone)]
pub struct SymbolIdentityCache {
    entries: HashMap<String, SymbolId>,
}

impl SymbolIdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized short name: trimmed, truncated at the first `<` or `(`.
    fn normalize(name: &str) -> &str {
        let name = name.trim();
        match name.find(['<', '(']) {
            Some(pos) => &name[..pos],
            None => name,
        }
    }

    pub fn register(&mut self, symbol: &Symbol) {
        self.register_name(&symbol.name, symbol.id);
    }

    pub fn register_name(&mut self, name: &str, id: SymbolId) {
        self.entries.insert(Self::normalize(name).to_string(), id);
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.entries.get(Self::normalize(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
