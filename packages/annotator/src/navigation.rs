//! Segment navigation over an annotated document.
//!
//! In a document without parts the segments are its sections, with no
//! enclosing segment. In a document with parts both parts and their
//! sections are segments, visited in reading order:
//!
//! ```text
//! 1, 1.1, 1.2, 2, 2.1, ...
//! ```
//!
//! A section's enclosing segment is its part. Numbers of the wrong shape for
//! the document, or that name no existing segment, have no neighbours.

use std::num::NonZeroU32;

use crate::annotated::{Document, Part, Section};
use crate::number::{PartNumber, SectionNumber, SegmentNumber};

/// A resolved segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Part(&'a Part),
    Section(&'a Section),
}

impl Segment<'_> {
    #[must_use]
    pub fn number(&self) -> SegmentNumber {
        match self {
            Self::Part(part) => part.number().into(),
            Self::Section(section) => section.number().into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Part(part) => part.title(),
            Self::Section(section) => section.title(),
        }
    }
}

impl Document {
    /// The first segment: part 1, or section 1 in a document without parts.
    #[must_use]
    pub fn first(&self) -> SegmentNumber {
        if self.has_parts() {
            SegmentNumber::Part(PartNumber::FIRST)
        } else {
            SegmentNumber::Section(SectionNumber::WithoutPart {
                section: NonZeroU32::MIN,
            })
        }
    }

    /// The segment following `segment` in reading order.
    #[must_use]
    pub fn next(&self, segment: SegmentNumber) -> Option<SegmentNumber> {
        match self.segment(segment)? {
            Segment::Part(part) => match part.sections().first() {
                Some(section) => Some(section.number().into()),
                None => self.following_part(part.number()),
            },
            Segment::Section(section) => {
                let number = section.number();
                let next = successor(number);
                if self.section(next).is_some() {
                    return Some(next.into());
                }
                number.part().and_then(|part| self.following_part(part))
            }
        }
    }

    /// The segment preceding `segment` in reading order.
    #[must_use]
    pub fn previous(&self, segment: SegmentNumber) -> Option<SegmentNumber> {
        match self.segment(segment)? {
            Segment::Part(part) => {
                let previous = self.part(part.number().predecessor()?)?;
                Some(match previous.sections().last() {
                    Some(section) => section.number().into(),
                    None => previous.number().into(),
                })
            }
            Segment::Section(section) => {
                let number = section.number();
                match predecessor(number) {
                    Some(previous) => Some(previous.into()),
                    None => number.part().map(SegmentNumber::Part),
                }
            }
        }
    }

    /// The segment enclosing `segment`: a section's part, otherwise none.
    #[must_use]
    pub fn up(&self, segment: SegmentNumber) -> Option<SegmentNumber> {
        match self.segment(segment)? {
            Segment::Part(_) => None,
            Segment::Section(section) => section.number().part().map(SegmentNumber::Part),
        }
    }

    /// Resolve a segment number to the segment it names.
    #[must_use]
    pub fn segment(&self, segment: SegmentNumber) -> Option<Segment<'_>> {
        match segment {
            SegmentNumber::Part(number) => self.part(number).map(Segment::Part),
            SegmentNumber::Section(number) => self.section(number).map(Segment::Section),
        }
    }

    /// Every segment in reading order.
    #[must_use]
    pub fn segments(&self) -> Vec<SegmentNumber> {
        let mut segments = Vec::new();
        let mut current =
            Some(self.first()).filter(|first| self.segment(*first).is_some());
        while let Some(segment) = current {
            segments.push(segment);
            current = self.next(segment);
        }
        segments
    }

    fn following_part(&self, part: PartNumber) -> Option<SegmentNumber> {
        let next = part.successor();
        self.part(next).map(|part| part.number().into())
    }
}

fn successor(number: SectionNumber) -> SectionNumber {
    let section = NonZeroU32::MIN.saturating_add(number.section());
    match number.part() {
        Some(part) => part.section(section),
        None => SectionNumber::WithoutPart { section },
    }
}

fn predecessor(number: SectionNumber) -> Option<SectionNumber> {
    let section = NonZeroU32::new(number.section() - 1)?;
    Some(match number.part() {
        Some(part) => part.section(section),
        None => SectionNumber::WithoutPart { section },
    })
}
