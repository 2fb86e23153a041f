//! Numbers for the structural divisions: parts, sections and subsections.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;

use super::{component, write_dotted, NumberError, StructuralNumber};

/// Number of a part: a single positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartNumber(NonZeroU32);

impl PartNumber {
    /// The first part of a document.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Create a part number, rejecting zero.
    pub fn new(part: u32) -> Result<Self, NumberError> {
        Ok(Self(component("part", part)?))
    }

    /// Create a part number from an already-positive value.
    #[must_use]
    pub const fn from_nonzero(part: NonZeroU32) -> Self {
        Self(part)
    }

    /// The part component.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Number of the `section`th section within this part.
    #[must_use]
    pub const fn section(self, section: NonZeroU32) -> SectionNumber {
        SectionNumber::WithPart {
            part: self.0,
            section,
        }
    }

    /// The part after this one.
    #[must_use]
    pub fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The part before this one, if any.
    #[must_use]
    pub fn predecessor(self) -> Option<Self> {
        NonZeroU32::new(self.0.get() - 1).map(Self)
    }
}

impl StructuralNumber for PartNumber {
    fn components(&self) -> Vec<u32> {
        vec![self.get()]
    }
}

impl fmt::Display for PartNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of a section.
///
/// The shape is fixed per document: either every section lives in a part,
/// or none does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionNumber {
    /// Section of a document without parts (`s`).
    WithoutPart { section: NonZeroU32 },
    /// Section within a part (`p.s`).
    WithPart { part: NonZeroU32, section: NonZeroU32 },
}

impl SectionNumber {
    /// Create a section number for a document without parts.
    pub fn new(section: u32) -> Result<Self, NumberError> {
        Ok(Self::WithoutPart {
            section: component("section", section)?,
        })
    }

    /// Create a section number for a section within a part.
    pub fn in_part(part: u32, section: u32) -> Result<Self, NumberError> {
        Ok(Self::WithPart {
            part: component("part", part)?,
            section: component("section", section)?,
        })
    }

    /// The enclosing part, if the document is divided into parts.
    #[must_use]
    pub const fn part(self) -> Option<PartNumber> {
        match self {
            Self::WithoutPart { .. } => None,
            Self::WithPart { part, .. } => Some(PartNumber::from_nonzero(part)),
        }
    }

    /// The section component.
    #[must_use]
    pub const fn section(self) -> u32 {
        match self {
            Self::WithoutPart { section } | Self::WithPart { section, .. } => section.get(),
        }
    }

    /// Number of the `subsection`th subsection within this section.
    #[must_use]
    pub const fn subsection(self, subsection: NonZeroU32) -> SubsectionNumber {
        match self {
            Self::WithoutPart { section } => SubsectionNumber::WithoutPart {
                section,
                subsection,
            },
            Self::WithPart { part, section } => SubsectionNumber::WithPart {
                part,
                section,
                subsection,
            },
        }
    }

    fn sort_key(self) -> (Option<u32>, u32) {
        (self.part().map(PartNumber::get), self.section())
    }
}

impl Ord for SectionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for SectionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl StructuralNumber for SectionNumber {
    fn components(&self) -> Vec<u32> {
        match *self {
            Self::WithoutPart { section } => vec![section.get()],
            Self::WithPart { part, section } => vec![part.get(), section.get()],
        }
    }
}

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.components())
    }
}

/// Number of a subsection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubsectionNumber {
    /// Subsection of a section without part (`s.ss`).
    WithoutPart {
        section: NonZeroU32,
        subsection: NonZeroU32,
    },
    /// Subsection of a section within a part (`p.s.ss`).
    WithPart {
        part: NonZeroU32,
        section: NonZeroU32,
        subsection: NonZeroU32,
    },
}

impl SubsectionNumber {
    /// Create a subsection number for a document without parts.
    pub fn new(section: u32, subsection: u32) -> Result<Self, NumberError> {
        Ok(Self::WithoutPart {
            section: component("section", section)?,
            subsection: component("subsection", subsection)?,
        })
    }

    /// Create a subsection number for a document with parts.
    pub fn in_part(part: u32, section: u32, subsection: u32) -> Result<Self, NumberError> {
        Ok(Self::WithPart {
            part: component("part", part)?,
            section: component("section", section)?,
            subsection: component("subsection", subsection)?,
        })
    }

    /// The number of the enclosing section.
    #[must_use]
    pub const fn section_number(self) -> SectionNumber {
        match self {
            Self::WithoutPart { section, .. } => SectionNumber::WithoutPart { section },
            Self::WithPart { part, section, .. } => SectionNumber::WithPart { part, section },
        }
    }

    /// The enclosing part, if any.
    #[must_use]
    pub const fn part(self) -> Option<PartNumber> {
        self.section_number().part()
    }

    /// The section component.
    #[must_use]
    pub const fn section(self) -> u32 {
        self.section_number().section()
    }

    /// The subsection component.
    #[must_use]
    pub const fn subsection(self) -> u32 {
        match self {
            Self::WithoutPart { subsection, .. } | Self::WithPart { subsection, .. } => {
                subsection.get()
            }
        }
    }

    fn sort_key(self) -> (Option<u32>, u32, u32) {
        (
            self.part().map(PartNumber::get),
            self.section(),
            self.subsection(),
        )
    }
}

impl Ord for SubsectionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for SubsectionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl StructuralNumber for SubsectionNumber {
    fn components(&self) -> Vec<u32> {
        let mut components = self.section_number().components();
        components.push(self.subsection());
        components
    }
}

impl fmt::Display for SubsectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.components())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn test_part_number_rejects_zero() {
        assert!(PartNumber::new(0).is_err());
        assert_eq!(PartNumber::new(4).unwrap().to_string(), "4");
    }

    #[test]
    fn test_part_number_neighbours() {
        let first = PartNumber::FIRST;
        assert_eq!(first.get(), 1);
        assert_eq!(first.predecessor(), None);
        assert_eq!(first.successor().predecessor(), Some(first));
    }

    #[test]
    fn test_section_number_format() {
        assert_eq!(SectionNumber::new(3).unwrap().to_string(), "3");
        assert_eq!(SectionNumber::in_part(1, 4).unwrap().to_string(), "1.4");
    }

    #[test]
    fn test_section_number_rejects_zero_components() {
        let err = SectionNumber::in_part(0, 1).unwrap_err();
        assert_eq!(err.component, "part");
        let err = SectionNumber::in_part(1, 0).unwrap_err();
        assert_eq!(err.component, "section");
    }

    #[test]
    fn test_part_composes_section() {
        let part = PartNumber::new(2).unwrap();
        let section = part.section(nz(5));
        assert_eq!(section.part(), Some(part));
        assert_eq!(section.section(), 5);
        assert_eq!(section.to_string(), "2.5");
    }

    #[test]
    fn test_section_ordering_within_shape() {
        let a = SectionNumber::in_part(1, 9).unwrap();
        let b = SectionNumber::in_part(2, 1).unwrap();
        let c = SectionNumber::in_part(2, 3).unwrap();
        assert!(a < b);
        assert!(b < c);

        let mut flat = vec![
            SectionNumber::new(3).unwrap(),
            SectionNumber::new(1).unwrap(),
            SectionNumber::new(2).unwrap(),
        ];
        flat.sort();
        let formatted: Vec<String> = flat.iter().map(ToString::to_string).collect();
        assert_eq!(formatted, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_subsection_number_format() {
        assert_eq!(SubsectionNumber::new(3, 2).unwrap().to_string(), "3.2");
        assert_eq!(
            SubsectionNumber::in_part(1, 2, 3).unwrap().to_string(),
            "1.2.3"
        );
    }

    #[test]
    fn test_section_composes_subsection() {
        let section = SectionNumber::in_part(1, 2).unwrap();
        let subsection = section.subsection(nz(7));
        assert_eq!(subsection.section_number(), section);
        assert_eq!(subsection.subsection(), 7);
        assert_eq!(subsection.depth(), 3);
    }

    #[test]
    fn test_subsection_ordering() {
        let a = SubsectionNumber::new(1, 2).unwrap();
        let b = SubsectionNumber::new(1, 10).unwrap();
        let c = SubsectionNumber::new(2, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }
}
