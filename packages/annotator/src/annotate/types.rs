//! Counters used while walking one scope.

use std::num::NonZeroU32;

/// Sequential counter yielding 1, 2, 3, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Counter {
    next: NonZeroU32,
}

impl Counter {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            next: NonZeroU32::MIN,
        }
    }

    /// Take the current value and advance.
    pub(crate) fn advance(&mut self) -> NonZeroU32 {
        let current = self.next;
        self.next = current.saturating_add(1);
        current
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

/// The two independent local counters of a scope that directly holds
/// paragraphs and formal items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScopeCounters {
    pub paragraphs: Counter,
    pub formal_items: Counter,
}
