//! Annotated inline content.
//!
//! Mirrors [`crate::input`] content, except that every footnote has been
//! numbered and is shared with the document's footnote registry.

use std::sync::Arc;

use crate::input::{
    FormalItemList, Image, Link, LinkContent, LinkExternal, TableHead, Term, Text, Verbatim,
};
use crate::number::FootnoteNumber;

/// An annotated footnote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    number: FootnoteNumber,
    content: Vec<InlineContent>,
}

impl Footnote {
    pub(crate) fn new(number: FootnoteNumber, content: Vec<InlineContent>) -> Self {
        Self { number, content }
    }

    /// The document-unique sequence number.
    #[must_use]
    pub fn number(&self) -> FootnoteNumber {
        self.number
    }

    /// The annotated content, in document order.
    #[must_use]
    pub fn content(&self) -> &[InlineContent] {
        &self.content
    }

    /// Content as plain text, with nested footnotes shown as `[n]` markers.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for item in &self.content {
            item.push_text(&mut out);
        }
        normalize_space(&out)
    }
}

/// An annotated ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub type_tag: Option<String>,
    pub items: Vec<ListItem>,
}

/// One annotated list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub type_tag: Option<String>,
    pub content: Vec<InlineContent>,
}

/// An annotated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub summary: String,
    pub head: Option<TableHead>,
    pub body: Vec<TableRow>,
}

/// An annotated table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// An annotated table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub content: Vec<InlineContent>,
}

/// Annotated content of footnotes, list items and table cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineContent {
    Text(Text),
    Term(Term),
    Link(Link),
    LinkExternal(LinkExternal),
    Image(Image),
    ListOrdered(List),
    ListUnordered(List),
    Footnote(Arc<Footnote>),
    Verbatim(Verbatim),
}

/// Annotated content of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphContent {
    Text(Text),
    Term(Term),
    Link(Link),
    LinkExternal(LinkExternal),
    Image(Image),
    ListOrdered(List),
    ListUnordered(List),
    Table(Table),
    Footnote(Arc<Footnote>),
    Verbatim(Verbatim),
    FormalItemList(FormalItemList),
}

/// Annotated content of a formal item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormalItemContent {
    FormalItemList(FormalItemList),
    Image(Image),
    ListOrdered(List),
    ListUnordered(List),
    Table(Table),
    Verbatim(Verbatim),
}

impl InlineContent {
    /// Footnote directly held by this content, if any.
    #[must_use]
    pub fn as_footnote(&self) -> Option<&Footnote> {
        match self {
            Self::Footnote(footnote) => Some(footnote.as_ref()),
            _ => None,
        }
    }

    pub(crate) fn push_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => push_word(out, text.as_str()),
            Self::Term(term) => push_word(out, &term.text),
            Self::Link(link) => push_link_text(out, &link.content),
            Self::LinkExternal(link) => push_link_text(out, &link.content),
            Self::Image(image) => push_word(out, &image.text),
            Self::ListOrdered(list) | Self::ListUnordered(list) => list.push_text(out),
            Self::Footnote(footnote) => push_word(out, &format!("[{}]", footnote.number())),
            Self::Verbatim(verbatim) => push_word(out, &verbatim.text),
        }
    }
}

impl ParagraphContent {
    /// Footnote directly held by this content, if any.
    #[must_use]
    pub fn as_footnote(&self) -> Option<&Footnote> {
        match self {
            Self::Footnote(footnote) => Some(footnote.as_ref()),
            _ => None,
        }
    }

    pub(crate) fn push_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => push_word(out, text.as_str()),
            Self::Term(term) => push_word(out, &term.text),
            Self::Link(link) => push_link_text(out, &link.content),
            Self::LinkExternal(link) => push_link_text(out, &link.content),
            Self::Image(image) => push_word(out, &image.text),
            Self::ListOrdered(list) | Self::ListUnordered(list) => list.push_text(out),
            Self::Table(table) => table.push_text(out),
            Self::Footnote(footnote) => push_word(out, &format!("[{}]", footnote.number())),
            Self::Verbatim(verbatim) => push_word(out, &verbatim.text),
            Self::FormalItemList(_) => {}
        }
    }
}

impl List {
    fn push_text(&self, out: &mut String) {
        for item in &self.items {
            for content in &item.content {
                content.push_text(out);
            }
        }
    }
}

impl Table {
    fn push_text(&self, out: &mut String) {
        for row in &self.body {
            for cell in &row.cells {
                for content in &cell.content {
                    content.push_text(out);
                }
            }
        }
    }
}

fn push_link_text(out: &mut String, content: &[LinkContent]) {
    for item in content {
        match item {
            LinkContent::Text(text) => push_word(out, text.as_str()),
            LinkContent::Image(image) => push_word(out, &image.text),
        }
    }
}

fn push_word(out: &mut String, text: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(text);
}

/// Collapse runs of whitespace into single spaces.
pub(crate) fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
