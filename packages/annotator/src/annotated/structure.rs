//! Annotated structural elements: parts, sections, subsections, paragraphs
//! and formal items.

use std::sync::Arc;

use super::content::{normalize_space, FormalItemContent, Footnote, ParagraphContent};
use crate::number::{FormalItemNumber, ParagraphNumber, PartNumber, SectionNumber, SubsectionNumber};
use crate::registry::Identifier;

/// An annotated part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub(crate) number: PartNumber,
    pub(crate) title: String,
    pub(crate) id: Option<Identifier>,
    pub(crate) type_tag: Option<String>,
    pub(crate) contents: bool,
    pub(crate) sections: Vec<Arc<Section>>,
}

impl Part {
    #[must_use]
    pub fn number(&self) -> PartNumber {
        self.number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn id(&self) -> Option<&Identifier> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    /// Whether a table of contents is requested for this part.
    #[must_use]
    pub fn contents(&self) -> bool {
        self.contents
    }

    /// Sections of this part, in document order.
    #[must_use]
    pub fn sections(&self) -> &[Arc<Section>] {
        &self.sections
    }

    /// Find a section of this part by number.
    #[must_use]
    pub fn section(&self, number: SectionNumber) -> Option<&Section> {
        if number.part() != Some(self.number) {
            return None;
        }
        nth(&self.sections, number.section()).filter(|section| section.number == number)
    }
}

/// An annotated section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub(crate) number: SectionNumber,
    pub(crate) title: String,
    pub(crate) id: Option<Identifier>,
    pub(crate) type_tag: Option<String>,
    pub(crate) contents: bool,
    pub(crate) body: SectionBody,
    pub(crate) footnotes: Vec<Arc<Footnote>>,
}

impl Section {
    #[must_use]
    pub fn number(&self) -> SectionNumber {
        self.number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn id(&self) -> Option<&Identifier> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    /// Whether a table of contents is requested for this section.
    #[must_use]
    pub fn contents(&self) -> bool {
        self.contents
    }

    #[must_use]
    pub fn body(&self) -> &SectionBody {
        &self.body
    }

    /// Footnotes numbered while this section was annotated, in number order.
    ///
    /// This is a contiguous run of the document's footnote registry and
    /// includes footnotes from all subsections.
    #[must_use]
    pub fn footnotes(&self) -> &[Arc<Footnote>] {
        &self.footnotes
    }

    /// Subsections, or an empty slice if the section holds content directly.
    #[must_use]
    pub fn subsections(&self) -> &[Arc<Subsection>] {
        match &self.body {
            SectionBody::Content(_) => &[],
            SectionBody::Subsections(subsections) => subsections,
        }
    }

    /// Find a subsection by number.
    #[must_use]
    pub fn subsection(&self, number: SubsectionNumber) -> Option<&Subsection> {
        if number.section_number() != self.number {
            return None;
        }
        nth(self.subsections(), number.subsection())
            .filter(|subsection| subsection.number == number)
    }
}

/// The annotated body of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Content(Vec<BlockContent>),
    Subsections(Vec<Arc<Subsection>>),
}

/// An annotated subsection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection {
    pub(crate) number: SubsectionNumber,
    pub(crate) title: String,
    pub(crate) id: Option<Identifier>,
    pub(crate) type_tag: Option<String>,
    pub(crate) content: Vec<BlockContent>,
}

impl Subsection {
    #[must_use]
    pub fn number(&self) -> SubsectionNumber {
        self.number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn id(&self) -> Option<&Identifier> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> &[BlockContent] {
        &self.content
    }
}

/// Annotated content of a section or subsection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    Paragraph(Arc<Paragraph>),
    FormalItem(Arc<FormalItem>),
}

impl BlockContent {
    #[must_use]
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Self::Paragraph(paragraph) => Some(paragraph.as_ref()),
            Self::FormalItem(_) => None,
        }
    }

    #[must_use]
    pub fn as_formal_item(&self) -> Option<&FormalItem> {
        match self {
            Self::Paragraph(_) => None,
            Self::FormalItem(formal_item) => Some(formal_item.as_ref()),
        }
    }
}

/// An annotated paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub(crate) number: ParagraphNumber,
    pub(crate) id: Option<Identifier>,
    pub(crate) type_tag: Option<String>,
    pub(crate) content: Vec<ParagraphContent>,
}

impl Paragraph {
    #[must_use]
    pub fn number(&self) -> ParagraphNumber {
        self.number
    }

    #[must_use]
    pub fn id(&self) -> Option<&Identifier> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> &[ParagraphContent] {
        &self.content
    }

    /// Content as plain text, with footnotes shown as `[n]` markers.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for item in &self.content {
            item.push_text(&mut out);
        }
        normalize_space(&out)
    }
}

/// An annotated formal item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalItem {
    pub(crate) number: FormalItemNumber,
    pub(crate) title: String,
    pub(crate) kind: String,
    pub(crate) id: Option<Identifier>,
    pub(crate) type_tag: Option<String>,
    pub(crate) content: FormalItemContent,
}

impl FormalItem {
    #[must_use]
    pub fn number(&self) -> FormalItemNumber {
        self.number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn id(&self) -> Option<&Identifier> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> &FormalItemContent {
        &self.content
    }
}

/// Element `position` (1-based) of a numbered list.
pub(crate) fn nth<T>(items: &[Arc<T>], position: u32) -> Option<&T> {
    let index = usize::try_from(position).ok()?.checked_sub(1)?;
    items.get(index).map(Arc::as_ref)
}
