//! Name → definition tables for one parse session.
//!
//! Definitions are registered as their blocks are parsed; a reference can
//! only see names defined before it.

use std::sync::Arc;

use indexmap::IndexMap;
use rowan::TextRange;

use crate::ast::{Duration, Intensity};

#[derive(Debug, Clone)]
pub struct Symbol<T> {
    pub value: Arc<T>,
    /// Span of the defining name.
    pub span: TextRange,
}

/// One namespace of definitions, in definition order.
#[derive(Debug, Clone)]
pub struct Namespace<T> {
    symbols: IndexMap<String, Symbol<T>>,
}

impl<T> Default for Namespace<T> {
    fn default() -> Self {
        Self {
            symbols: IndexMap::new(),
        }
    }
}

impl<T> Namespace<T> {
    /// Registers `name`. On a duplicate, returns the span of the first definition.
    pub fn define(
        &mut self,
        name: &str,
        value: Arc<T>,
        span: TextRange,
    ) -> Result<(), TextRange> {
        if let Some(existing) = self.symbols.get(name) {
            return Err(existing.span);
        }
        self.symbols.insert(name.to_string(), Symbol { value, span });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<T>> {
        self.symbols.get(name).map(|s| &s.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    pub durations: Namespace<Duration>,
    pub intensities: Namespace<Intensity>,
}
