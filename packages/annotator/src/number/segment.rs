//! Numbers of navigable top-level divisions.

use std::fmt;

use super::{PartNumber, SectionNumber};

/// Number of a segment: a part, or a section.
///
/// In documents without parts every segment is a section. In documents with
/// parts both the parts and the sections inside them are segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentNumber {
    Part(PartNumber),
    Section(SectionNumber),
}

impl SegmentNumber {
    /// The part number, if this segment is a part.
    #[must_use]
    pub const fn as_part(self) -> Option<PartNumber> {
        match self {
            Self::Part(number) => Some(number),
            Self::Section(_) => None,
        }
    }

    /// The section number, if this segment is a section.
    #[must_use]
    pub const fn as_section(self) -> Option<SectionNumber> {
        match self {
            Self::Part(_) => None,
            Self::Section(number) => Some(number),
        }
    }
}

impl From<PartNumber> for SegmentNumber {
    fn from(number: PartNumber) -> Self {
        Self::Part(number)
    }
}

impl From<SectionNumber> for SegmentNumber {
    fn from(number: SectionNumber) -> Self {
        Self::Section(number)
    }
}

impl fmt::Display for SegmentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Part(number) => number.fmt(f),
            Self::Section(number) => number.fmt(f),
        }
    }
}
