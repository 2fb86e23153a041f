//! Footnote registry: the append-only, document-wide footnote sequence.

use std::sync::Arc;

use crate::annotated::{Footnote, InlineContent};
use crate::number::FootnoteNumber;

/// Append-only sequence of annotated footnotes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FootnoteRegistry {
    footnotes: Vec<Arc<Footnote>>,
}

impl FootnoteRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the footnote with the current registry length and append it.
    ///
    /// `content` must already be annotated, so footnotes nested in it are
    /// already registered and hold lower numbers.
    pub fn append(&mut self, content: Vec<InlineContent>) -> Arc<Footnote> {
        let number = FootnoteNumber::new(self.footnotes.len());
        let footnote = Arc::new(Footnote::new(number, content));
        tracing::trace!(footnote = %number, "Appended footnote");
        self.footnotes.push(Arc::clone(&footnote));
        footnote
    }

    /// All footnotes, in number order.
    #[must_use]
    pub fn all(&self) -> &[Arc<Footnote>] {
        &self.footnotes
    }

    /// Footnotes appended since the registry held `mark` entries.
    #[must_use]
    pub fn since(&self, mark: usize) -> &[Arc<Footnote>] {
        self.footnotes.get(mark..).unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, number: FootnoteNumber) -> Option<&Footnote> {
        self.footnotes.get(number.get()).map(Arc::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.footnotes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.footnotes.is_empty()
    }
}
