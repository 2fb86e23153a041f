//! The annotated document and its read-only accessors.

use std::sync::Arc;

use super::content::Footnote;
use super::structure::{nth, FormalItem, Part, Section};
use crate::number::{PartNumber, SectionNumber};
use crate::registry::{FootnoteRegistry, FormalItemRegistry, IdTarget, IdentifierRegistry};

/// A fully annotated document, owning the registries of its annotation run.
///
/// Immutable once built; every query is a pure read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) title: String,
    pub(crate) contents: bool,
    pub(crate) style: Option<String>,
    pub(crate) body: DocumentBody,
    pub(crate) identifiers: IdentifierRegistry,
    pub(crate) footnotes: FootnoteRegistry,
    pub(crate) formal_items: FormalItemRegistry,
}

/// Top level of an annotated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBody {
    Parts(Vec<Arc<Part>>),
    Sections(Vec<Arc<Section>>),
}

impl Document {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether a table of contents is requested.
    #[must_use]
    pub fn contents(&self) -> bool {
        self.contents
    }

    /// URI of the stylesheet, if any.
    #[must_use]
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> &DocumentBody {
        &self.body
    }

    /// Whether the top level is divided into parts.
    #[must_use]
    pub fn has_parts(&self) -> bool {
        matches!(self.body, DocumentBody::Parts(_))
    }

    /// Parts, or an empty slice for documents without parts.
    #[must_use]
    pub fn parts(&self) -> &[Arc<Part>] {
        match &self.body {
            DocumentBody::Parts(parts) => parts,
            DocumentBody::Sections(_) => &[],
        }
    }

    /// Every section in document order, across parts.
    pub fn sections(&self) -> impl Iterator<Item = &Arc<Section>> + '_ {
        let top_level: &[Arc<Section>] = match &self.body {
            DocumentBody::Parts(_) => &[],
            DocumentBody::Sections(sections) => sections,
        };
        self.parts()
            .iter()
            .flat_map(|part| part.sections.iter())
            .chain(top_level)
    }

    /// Find a part by number.
    #[must_use]
    pub fn part(&self, number: PartNumber) -> Option<&Part> {
        nth(self.parts(), number.get())
    }

    /// Find a section by number, inside its part if it has one.
    #[must_use]
    pub fn section(&self, number: SectionNumber) -> Option<&Section> {
        match (&self.body, number.part()) {
            (DocumentBody::Parts(_), Some(part)) => self.part(part)?.section(number),
            (DocumentBody::Sections(sections), None) => {
                nth(sections, number.section()).filter(|section| section.number == number)
            }
            _ => None,
        }
    }

    /// Resolve an explicit identifier to the element carrying it.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&IdTarget> {
        self.identifiers.lookup(id)
    }

    /// Formal items of `kind` in structural-number order.
    pub fn formal_items(&self, kind: &str) -> impl Iterator<Item = &Arc<FormalItem>> + '_ {
        self.formal_items.by_kind(kind)
    }

    /// All footnotes of the document, in number order.
    #[must_use]
    pub fn footnotes(&self) -> &[Arc<Footnote>] {
        self.footnotes.all()
    }

    #[must_use]
    pub fn identifier_registry(&self) -> &IdentifierRegistry {
        &self.identifiers
    }

    #[must_use]
    pub fn footnote_registry(&self) -> &FootnoteRegistry {
        &self.footnotes
    }

    #[must_use]
    pub fn formal_item_registry(&self) -> &FormalItemRegistry {
        &self.formal_items
    }
}
