//! Structural numbers for annotated documents.
//!
//! Every numbered element class has its own closed family of number shapes:
//!
//! ```text
//! part        p
//! section     s        | p.s
//! subsection  s.ss     | p.s.ss
//! paragraph   s.n      | p.s.n  | s.ss.n | p.s.ss.n
//! formal item s.n      | p.s.n  | s.ss.n | p.s.ss.n
//! ```
//!
//! All components are positive. Numbers format as dot-separated decimal
//! components in declaration order, which renderers use verbatim in anchors
//! and titles.

mod content;
mod division;
mod segment;

use std::fmt;
use std::num::NonZeroU32;

use thiserror::Error;

pub use content::{ContentScope, FormalItemNumber, ParagraphNumber};
pub use division::{PartNumber, SectionNumber, SubsectionNumber};
pub use segment::SegmentNumber;

/// Error raised when a number is constructed from a non-positive component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{component} number must be positive, got {value}")]
pub struct NumberError {
    /// Name of the offending component (e.g. "section").
    pub component: &'static str,
    /// The rejected value.
    pub value: u32,
}

/// Check that a raw component is positive.
pub(crate) fn component(name: &'static str, value: u32) -> Result<NonZeroU32, NumberError> {
    NonZeroU32::new(value).ok_or(NumberError {
        component: name,
        value,
    })
}

/// Common surface of the structural number families.
pub trait StructuralNumber: Copy + Ord + fmt::Display {
    /// Components in declaration order, outermost first.
    fn components(&self) -> Vec<u32>;

    /// Number of components in this shape.
    fn depth(&self) -> usize {
        self.components().len()
    }
}

/// Write components joined by dots.
pub(crate) fn write_dotted(f: &mut fmt::Formatter<'_>, components: &[u32]) -> fmt::Result {
    for (index, value) in components.iter().enumerate() {
        if index > 0 {
            f.write_str(".")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

/// Sequence number of a footnote within one document.
///
/// Footnote numbers are dense and start at 0, in the order in which the
/// annotator finished annotating each footnote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FootnoteNumber(usize);

impl FootnoteNumber {
    /// Create a footnote number from its index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The zero-based index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for FootnoteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
