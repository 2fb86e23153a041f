//! Inline and block-level content of the input tree.
//!
//! The leaf types here (text, terms, links, images, verbatim blocks, formal
//! item lists) carry nothing that annotation changes, so the annotated tree
//! reuses them as-is.

use serde::Deserialize;

/// A run of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Text(pub String);

impl Text {
    /// Create a new text run.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A term: a word or phrase with a semantic type (e.g. "command").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Term {
    pub text: String,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
}

/// Content allowed inside a link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkContent {
    Text(Text),
    Image(Image),
}

/// A link to an element of the same document, by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    /// Identifier of the target element.
    pub target: String,
    pub content: Vec<LinkContent>,
}

/// A link to an external resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkExternal {
    /// URI of the target.
    pub target: String,
    pub content: Vec<LinkContent>,
}

/// An image reference with alternative text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Image {
    pub uri: String,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Alternative text.
    pub text: String,
}

/// Preformatted text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verbatim {
    pub text: String,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
}

/// A placeholder for the list of all formal items of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormalItemList {
    pub kind: String,
}

/// Column names of a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableHead {
    pub columns: Vec<String>,
}

/// An ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct List {
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    pub items: Vec<ListItem>,
}

/// One item of a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListItem {
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    pub content: Vec<InlineContent>,
}

/// A table with an optional header row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Table {
    pub summary: String,
    pub head: Option<TableHead>,
    pub body: Vec<TableRow>,
}

/// A row of table cells.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// A table cell. Cells may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub content: Vec<InlineContent>,
}

/// A footnote. Footnotes may contain further footnotes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Footnote {
    pub content: Vec<InlineContent>,
}

impl Footnote {
    /// Create a footnote with the given content.
    #[must_use]
    pub fn new(content: Vec<InlineContent>) -> Self {
        Self { content }
    }
}

/// Content of footnotes, list items and table cells.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineContent {
    Text(Text),
    Term(Term),
    Link(Link),
    LinkExternal(LinkExternal),
    Image(Image),
    ListOrdered(List),
    ListUnordered(List),
    Footnote(Footnote),
    Verbatim(Verbatim),
}

/// Content of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphContent {
    Text(Text),
    Term(Term),
    Link(Link),
    LinkExternal(LinkExternal),
    Image(Image),
    ListOrdered(List),
    ListUnordered(List),
    Table(Table),
    Footnote(Footnote),
    Verbatim(Verbatim),
    FormalItemList(FormalItemList),
}

/// The single content element of a formal item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormalItemContent {
    FormalItemList(FormalItemList),
    Image(Image),
    ListOrdered(List),
    ListUnordered(List),
    Table(Table),
    Verbatim(Verbatim),
}

impl From<Text> for InlineContent {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Footnote> for InlineContent {
    fn from(footnote: Footnote) -> Self {
        Self::Footnote(footnote)
    }
}

impl From<Text> for ParagraphContent {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Footnote> for ParagraphContent {
    fn from(footnote: Footnote) -> Self {
        Self::Footnote(footnote)
    }
}
