//! Annotation: numbering an input tree and indexing its elements.

mod engine;
mod types;

pub use engine::Annotator;

use crate::annotated::Document;
use crate::error::DuplicateIdentifier;
use crate::input;

/// Annotate `document` in a fresh annotation run.
pub fn annotate(document: &input::Document) -> Result<Document, DuplicateIdentifier> {
    Annotator::new().annotate(document)
}
