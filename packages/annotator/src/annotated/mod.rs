//! Annotated documents.
//!
//! Each element of the input tree is rewritten into an annotated
//! counterpart carrying its structural number. Elements are shared through
//! `Arc` between the tree and the registries that index them.

mod content;
mod document;
mod structure;

pub use content::{
    Footnote, FormalItemContent, InlineContent, List, ListItem, ParagraphContent, Table,
    TableCell, TableRow,
};
pub use document::{Document, DocumentBody};
pub use structure::{BlockContent, FormalItem, Paragraph, Part, Section, SectionBody, Subsection};
