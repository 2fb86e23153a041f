//! Identifier registry: explicit element identifiers to annotated elements.

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::annotated::{FormalItem, Paragraph, Part, Section, Subsection};
use crate::error::DuplicateIdentifier;

/// An explicit element identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An annotated element that can carry an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdTarget {
    Part(Arc<Part>),
    Section(Arc<Section>),
    Subsection(Arc<Subsection>),
    Paragraph(Arc<Paragraph>),
    FormalItem(Arc<FormalItem>),
}

impl IdTarget {
    /// Element class name, e.g. `subsection`.
    #[must_use]
    pub fn element(&self) -> &'static str {
        match self {
            Self::Part(_) => "part",
            Self::Section(_) => "section",
            Self::Subsection(_) => "subsection",
            Self::Paragraph(_) => "paragraph",
            Self::FormalItem(_) => "formal item",
        }
    }

    /// Formatted structural number of the element.
    #[must_use]
    pub fn number(&self) -> String {
        match self {
            Self::Part(part) => part.number().to_string(),
            Self::Section(section) => section.number().to_string(),
            Self::Subsection(subsection) => subsection.number().to_string(),
            Self::Paragraph(paragraph) => paragraph.number().to_string(),
            Self::FormalItem(formal_item) => formal_item.number().to_string(),
        }
    }

    /// Title of the element; paragraphs have none.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Part(part) => Some(part.title()),
            Self::Section(section) => Some(section.title()),
            Self::Subsection(subsection) => Some(subsection.title()),
            Self::Paragraph(_) => None,
            Self::FormalItem(formal_item) => Some(formal_item.title()),
        }
    }

    /// Human-readable site description, e.g. `paragraph 1.3`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} {}", self.element(), self.number())
    }
}

/// Registry of identifier definitions for one annotation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierRegistry {
    entries: HashMap<Identifier, IdTarget>,
}

impl IdentifierRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id` to `target`.
    ///
    /// Fails without modifying the registry if `id` is already bound.
    pub fn define(&mut self, id: Identifier, target: IdTarget) -> Result<(), DuplicateIdentifier> {
        match self.entries.entry(id) {
            Entry::Occupied(existing) => Err(DuplicateIdentifier {
                identifier: existing.key().to_string(),
                existing: existing.get().describe(),
                duplicate: target.describe(),
            }),
            Entry::Vacant(slot) => {
                tracing::debug!(
                    identifier = %slot.key(),
                    element = %target.describe(),
                    "Defined identifier"
                );
                slot.insert(target);
                Ok(())
            }
        }
    }

    /// Resolve an identifier.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&IdTarget> {
        self.entries.get(id)
    }

    /// Number of defined identifiers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// All definitions, sorted by identifier.
    #[must_use]
    pub fn entries(&self) -> Vec<(&Identifier, &IdTarget)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
