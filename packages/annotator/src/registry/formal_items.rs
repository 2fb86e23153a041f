//! Formal-item registry: formal items grouped by kind.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::annotated::FormalItem;
use crate::number::FormalItemNumber;

/// Formal items by kind, each kind ordered by structural number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormalItemRegistry {
    kinds: HashMap<String, BTreeMap<FormalItemNumber, Arc<FormalItem>>>,
}

impl FormalItemRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a formal item under `kind`.
    pub fn insert(&mut self, kind: &str, item: Arc<FormalItem>) {
        let number = item.number();
        tracing::debug!(kind, number = %number, "Registered formal item");
        let previous = self
            .kinds
            .entry(kind.to_string())
            .or_default()
            .insert(number, item);
        debug_assert!(previous.is_none(), "formal item {number} of kind {kind} registered twice");
    }

    /// Items of `kind` in structural-number order; empty for an unused kind.
    pub fn by_kind(&self, kind: &str) -> impl Iterator<Item = &Arc<FormalItem>> + '_ {
        self.kinds.get(kind).into_iter().flat_map(BTreeMap::values)
    }

    /// Kinds in use, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Total number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
