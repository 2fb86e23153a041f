//! Unannotated input documents.
//!
//! This is the tree an upstream markup parser hands to the annotator. The
//! parser guarantees that required lists are non-empty and that every formal
//! item has a kind; the annotator trusts those guarantees.
//!
//! ```text
//! Document
//! ├── Part*            (documents with parts)
//! │   └── Section+
//! └── Section*         (documents without parts)
//!     ├── Paragraph | FormalItem +
//!     └── Subsection+
//!         └── Paragraph | FormalItem +
//! ```

mod content;

use serde::Deserialize;

pub use content::{
    Footnote, FormalItemContent, FormalItemList, Image, InlineContent, Link, LinkContent,
    LinkExternal, List, ListItem, ParagraphContent, Table, TableCell, TableHead, TableRow, Term,
    Text, Verbatim,
};

/// A complete input document.
///
/// Carries exactly one of `parts` or `sections`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "DocumentFields")]
pub struct Document {
    pub title: String,

    /// Whether a table of contents is requested.
    pub contents: bool,

    /// URI of a stylesheet.
    pub style: Option<String>,

    pub body: DocumentBody,
}

#[derive(Deserialize)]
struct DocumentFields {
    title: String,
    #[serde(default)]
    contents: bool,
    style: Option<String>,
    parts: Option<Vec<Part>>,
    sections: Option<Vec<Section>>,
}

impl TryFrom<DocumentFields> for Document {
    type Error = String;

    fn try_from(fields: DocumentFields) -> Result<Self, Self::Error> {
        let body = match (fields.parts, fields.sections) {
            (Some(parts), None) => DocumentBody::Parts(parts),
            (None, Some(sections)) => DocumentBody::Sections(sections),
            (parts, _) => {
                return Err(body_conflict(
                    "document",
                    &fields.title,
                    ("parts", "sections"),
                    parts.is_some(),
                ));
            }
        };
        Ok(Self {
            title: fields.title,
            contents: fields.contents,
            style: fields.style,
            body,
        })
    }
}

/// Message for an element carrying both or neither of its two body keys.
fn body_conflict(element: &str, title: &str, keys: (&str, &str), both: bool) -> String {
    let (first, second) = keys;
    if both {
        format!("{element} '{title}' has both '{first}' and '{second}'")
    } else {
        format!("{element} '{title}' has neither '{first}' nor '{second}'")
    }
}

impl Document {
    /// Create a document divided into parts.
    #[must_use]
    pub fn with_parts(title: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            title: title.into(),
            contents: false,
            style: None,
            body: DocumentBody::Parts(parts),
        }
    }

    /// Create a document made of sections.
    #[must_use]
    pub fn with_sections(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            contents: false,
            style: None,
            body: DocumentBody::Sections(sections),
        }
    }
}

/// Top level of a document: parts throughout, or sections throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBody {
    Parts(Vec<Part>),
    Sections(Vec<Section>),
}

/// A part: a group of sections.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Part {
    pub title: String,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    #[serde(default)]
    pub contents: bool,
    pub sections: Vec<Section>,
}

impl Part {
    /// Create a part.
    #[must_use]
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            id: None,
            type_tag: None,
            contents: false,
            sections,
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A section, carrying exactly one of `content` or `subsections`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "SectionFields")]
pub struct Section {
    pub title: String,
    pub id: Option<String>,
    pub type_tag: Option<String>,
    pub contents: bool,
    pub body: SectionBody,
}

#[derive(Deserialize)]
struct SectionFields {
    title: String,
    id: Option<String>,
    #[serde(rename = "type")]
    type_tag: Option<String>,
    #[serde(default)]
    contents: bool,
    content: Option<Vec<BlockContent>>,
    subsections: Option<Vec<Subsection>>,
}

impl TryFrom<SectionFields> for Section {
    type Error = String;

    fn try_from(fields: SectionFields) -> Result<Self, Self::Error> {
        let body = match (fields.content, fields.subsections) {
            (Some(content), None) => SectionBody::Content(content),
            (None, Some(subsections)) => SectionBody::Subsections(subsections),
            (content, _) => {
                return Err(body_conflict(
                    "section",
                    &fields.title,
                    ("content", "subsections"),
                    content.is_some(),
                ));
            }
        };
        Ok(Self {
            title: fields.title,
            id: fields.id,
            type_tag: fields.type_tag,
            contents: fields.contents,
            body,
        })
    }
}

impl Section {
    /// Create a section containing paragraphs and formal items.
    #[must_use]
    pub fn with_content(title: impl Into<String>, content: Vec<BlockContent>) -> Self {
        Self::new(title, SectionBody::Content(content))
    }

    /// Create a section divided into subsections.
    #[must_use]
    pub fn with_subsections(title: impl Into<String>, subsections: Vec<Subsection>) -> Self {
        Self::new(title, SectionBody::Subsections(subsections))
    }

    fn new(title: impl Into<String>, body: SectionBody) -> Self {
        Self {
            title: title.into(),
            id: None,
            type_tag: None,
            contents: false,
            body,
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// The body of a section: direct content, or subsections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Content(Vec<BlockContent>),
    Subsections(Vec<Subsection>),
}

/// A subsection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subsection {
    pub title: String,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    pub content: Vec<BlockContent>,
}

impl Subsection {
    /// Create a subsection.
    #[must_use]
    pub fn new(title: impl Into<String>, content: Vec<BlockContent>) -> Self {
        Self {
            title: title.into(),
            id: None,
            type_tag: None,
            content,
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Content of sections and subsections.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockContent {
    Paragraph(Paragraph),
    FormalItem(FormalItem),
}

impl From<Paragraph> for BlockContent {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<FormalItem> for BlockContent {
    fn from(formal_item: FormalItem) -> Self {
        Self::FormalItem(formal_item)
    }
}

/// A paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Paragraph {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    pub content: Vec<ParagraphContent>,
}

impl Paragraph {
    /// Create a paragraph.
    #[must_use]
    pub fn new(content: Vec<ParagraphContent>) -> Self {
        Self {
            id: None,
            type_tag: None,
            content,
        }
    }

    /// Create a paragraph holding a single text run.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![ParagraphContent::Text(Text::new(text))])
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A titled, numbered item of some kind (figure, table, listing, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormalItem {
    pub title: String,
    /// Free-form kind tag used to group items for separate listings.
    pub kind: String,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    pub content: FormalItemContent,
}

impl FormalItem {
    /// Create a formal item.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        kind: impl Into<String>,
        content: FormalItemContent,
    ) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
            id: None,
            type_tag: None,
            content,
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaml::parse_yaml;

    #[test]
    fn test_document_with_sections_deserializes() {
        let yaml = r"
title: Manual
sections:
  - title: Introduction
    id: intro
    content:
      - paragraph:
          content:
            - text: Hello
      - formal_item:
          title: Overview
          kind: figure
          content:
            image:
              uri: overview.png
              text: Overview
";
        let document: Document = parse_yaml(yaml).unwrap();
        assert_eq!(document.title, "Manual");
        assert!(!document.contents);
        let DocumentBody::Sections(sections) = &document.body else {
            panic!("expected sections");
        };
        assert_eq!(sections[0].id.as_deref(), Some("intro"));
        let SectionBody::Content(content) = &sections[0].body else {
            panic!("expected content");
        };
        assert!(matches!(content[0], BlockContent::Paragraph(_)));
        assert!(matches!(content[1], BlockContent::FormalItem(_)));
    }

    #[test]
    fn test_document_with_parts_deserializes() {
        let yaml = r"
title: Book
contents: true
style: book.css
parts:
  - title: One
    sections:
      - title: First
        subsections:
          - title: Detail
            type: aside
            content:
              - paragraph:
                  content:
                    - text: Body
";
        let document: Document = parse_yaml(yaml).unwrap();
        assert!(document.contents);
        assert_eq!(document.style.as_deref(), Some("book.css"));
        let DocumentBody::Parts(parts) = &document.body else {
            panic!("expected parts");
        };
        let SectionBody::Subsections(subsections) = &parts[0].sections[0].body else {
            panic!("expected subsections");
        };
        assert_eq!(subsections[0].type_tag.as_deref(), Some("aside"));
    }

    #[test]
    fn test_document_with_both_bodies_rejected() {
        let yaml = r"
title: Both
sections:
  - title: A
    content:
      - paragraph:
          content:
            - text: a
parts:
  - title: One
    sections:
      - title: B
        content:
          - paragraph:
              content:
                - text: b
";
        let err = parse_yaml::<Document>(yaml).unwrap_err();
        assert!(err
            .to_string()
            .contains("document 'Both' has both 'parts' and 'sections'"));
    }

    #[test]
    fn test_document_without_body_rejected() {
        let err = parse_yaml::<Document>("title: Bare\n").unwrap_err();
        assert!(err
            .to_string()
            .contains("document 'Bare' has neither 'parts' nor 'sections'"));
    }

    #[test]
    fn test_section_with_both_bodies_rejected() {
        let yaml = r"
title: Mixed
content:
  - paragraph:
      content:
        - text: a
subsections:
  - title: Detail
    content:
      - paragraph:
          content:
            - text: b
";
        let err = parse_yaml::<Section>(yaml).unwrap_err();
        assert!(err
            .to_string()
            .contains("section 'Mixed' has both 'content' and 'subsections'"));
    }

    #[test]
    fn test_builders() {
        let section = Section::with_content(
            "Intro",
            vec![Paragraph::text("Hello").with_id("p1").into()],
        )
        .with_id("intro");
        assert_eq!(section.id.as_deref(), Some("intro"));

        let document = Document::with_sections("Doc", vec![section]);
        assert!(matches!(document.body, DocumentBody::Sections(ref s) if s.len() == 1));
    }
}
