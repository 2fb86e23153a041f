//! Numbers for the content of sections and subsections.
//!
//! Paragraphs and formal items share the same four shapes; the shape is
//! selected by whether the document has parts and whether the enclosing
//! section is divided into subsections. The final component is a local
//! sequence counted separately for each element kind.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;

use super::{
    component, write_dotted, NumberError, PartNumber, SectionNumber, StructuralNumber,
    SubsectionNumber,
};

/// A division that directly contains paragraphs and formal items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentScope {
    /// A section whose content is paragraphs and formal items.
    Section(SectionNumber),
    /// A subsection.
    Subsection(SubsectionNumber),
}

impl ContentScope {
    /// The enclosing part, if any.
    #[must_use]
    pub const fn part(self) -> Option<PartNumber> {
        match self {
            Self::Section(number) => number.part(),
            Self::Subsection(number) => number.part(),
        }
    }

    /// The enclosing section number.
    #[must_use]
    pub const fn section_number(self) -> SectionNumber {
        match self {
            Self::Section(number) => number,
            Self::Subsection(number) => number.section_number(),
        }
    }

    /// The subsection component, if the scope is a subsection.
    #[must_use]
    pub const fn subsection(self) -> Option<u32> {
        match self {
            Self::Section(_) => None,
            Self::Subsection(number) => Some(number.subsection()),
        }
    }

    /// Number of the `paragraph`th paragraph in this scope.
    #[must_use]
    pub fn paragraph(self, paragraph: NonZeroU32) -> ParagraphNumber {
        let (part, section, subsection) = self.raw();
        ParagraphNumber::from_parts(part, section, subsection, paragraph)
    }

    /// Number of the `formal_item`th formal item in this scope.
    #[must_use]
    pub fn formal_item(self, formal_item: NonZeroU32) -> FormalItemNumber {
        let (part, section, subsection) = self.raw();
        FormalItemNumber::from_parts(part, section, subsection, formal_item)
    }

    fn raw(self) -> (Option<NonZeroU32>, NonZeroU32, Option<NonZeroU32>) {
        match self {
            Self::Section(SectionNumber::WithoutPart { section }) => (None, section, None),
            Self::Section(SectionNumber::WithPart { part, section }) => {
                (Some(part), section, None)
            }
            Self::Subsection(SubsectionNumber::WithoutPart {
                section,
                subsection,
            }) => (None, section, Some(subsection)),
            Self::Subsection(SubsectionNumber::WithPart {
                part,
                section,
                subsection,
            }) => (Some(part), section, Some(subsection)),
        }
    }
}

impl fmt::Display for ContentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section(number) => number.fmt(f),
            Self::Subsection(number) => number.fmt(f),
        }
    }
}

/// Generates one content-number family.
///
/// Ordering compares `(part, section, subsection, local)` where an absent
/// component sorts before a present one. Numbers of one shape therefore
/// compare exactly component by component.
macro_rules! content_number {
    ($(#[$meta:meta])* $name:ident, $local:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            /// `s.n`: section content in a document without parts.
            Section {
                section: NonZeroU32,
                $local: NonZeroU32,
            },
            /// `p.s.n`: section content in a document with parts.
            PartSection {
                part: NonZeroU32,
                section: NonZeroU32,
                $local: NonZeroU32,
            },
            /// `s.ss.n`: subsection content in a document without parts.
            SectionSubsection {
                section: NonZeroU32,
                subsection: NonZeroU32,
                $local: NonZeroU32,
            },
            /// `p.s.ss.n`: subsection content in a document with parts.
            PartSectionSubsection {
                part: NonZeroU32,
                section: NonZeroU32,
                subsection: NonZeroU32,
                $local: NonZeroU32,
            },
        }

        impl $name {
            /// Create a number from raw components, rejecting zeros.
            ///
            /// The shape follows from which optional components are present.
            pub fn new(
                part: Option<u32>,
                section: u32,
                subsection: Option<u32>,
                $local: u32,
            ) -> Result<Self, NumberError> {
                let part = part.map(|value| component("part", value)).transpose()?;
                let section = component("section", section)?;
                let subsection = subsection
                    .map(|value| component("subsection", value))
                    .transpose()?;
                let $local = component($label, $local)?;
                Ok(Self::from_parts(part, section, subsection, $local))
            }

            const fn from_parts(
                part: Option<NonZeroU32>,
                section: NonZeroU32,
                subsection: Option<NonZeroU32>,
                $local: NonZeroU32,
            ) -> Self {
                match (part, subsection) {
                    (None, None) => Self::Section { section, $local },
                    (Some(part), None) => Self::PartSection {
                        part,
                        section,
                        $local,
                    },
                    (None, Some(subsection)) => Self::SectionSubsection {
                        section,
                        subsection,
                        $local,
                    },
                    (Some(part), Some(subsection)) => Self::PartSectionSubsection {
                        part,
                        section,
                        subsection,
                        $local,
                    },
                }
            }

            /// The section or subsection this number belongs to.
            #[must_use]
            pub const fn scope(self) -> ContentScope {
                match self {
                    Self::Section { section, .. } => {
                        ContentScope::Section(SectionNumber::WithoutPart { section })
                    }
                    Self::PartSection { part, section, .. } => {
                        ContentScope::Section(SectionNumber::WithPart { part, section })
                    }
                    Self::SectionSubsection {
                        section,
                        subsection,
                        ..
                    } => ContentScope::Subsection(SubsectionNumber::WithoutPart {
                        section,
                        subsection,
                    }),
                    Self::PartSectionSubsection {
                        part,
                        section,
                        subsection,
                        ..
                    } => ContentScope::Subsection(SubsectionNumber::WithPart {
                        part,
                        section,
                        subsection,
                    }),
                }
            }

            /// The enclosing part, if any.
            #[must_use]
            pub const fn part(self) -> Option<PartNumber> {
                self.scope().part()
            }

            /// The section component.
            #[must_use]
            pub const fn section(self) -> u32 {
                self.scope().section_number().section()
            }

            /// The subsection component, if any.
            #[must_use]
            pub const fn subsection(self) -> Option<u32> {
                self.scope().subsection()
            }

            /// The local sequence component.
            #[must_use]
            pub const fn $local(self) -> u32 {
                match self {
                    Self::Section { $local, .. }
                    | Self::PartSection { $local, .. }
                    | Self::SectionSubsection { $local, .. }
                    | Self::PartSectionSubsection { $local, .. } => $local.get(),
                }
            }

            fn sort_key(self) -> (Option<u32>, u32, Option<u32>, u32) {
                (
                    self.part().map(PartNumber::get),
                    self.section(),
                    self.subsection(),
                    self.$local(),
                )
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.sort_key().cmp(&other.sort_key())
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl StructuralNumber for $name {
            fn components(&self) -> Vec<u32> {
                let mut components = Vec::with_capacity(4);
                components.extend(self.part().map(PartNumber::get));
                components.push(self.section());
                components.extend(self.subsection());
                components.push(self.$local());
                components
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_dotted(f, &self.components())
            }
        }
    };
}

content_number!(
    /// Number of a paragraph within its section or subsection.
    ParagraphNumber,
    paragraph,
    "paragraph"
);

content_number!(
    /// Number of a formal item (figure, table, listing, ...) within its
    /// section or subsection.
    FormalItemNumber,
    formal_item,
    "formal item"
);

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn test_formal_item_number_full_shape_format() {
        let number = FormalItemNumber::new(Some(2), 3, Some(1), 4).unwrap();
        assert_eq!(number.to_string(), "2.3.1.4");
        assert!(matches!(number, FormalItemNumber::PartSectionSubsection { .. }));
    }

    #[test]
    fn test_paragraph_number_section_only_format() {
        let number = ParagraphNumber::new(None, 5, None, 2).unwrap();
        assert_eq!(number.to_string(), "5.2");
        assert!(matches!(number, ParagraphNumber::Section { .. }));
    }

    #[test]
    fn test_all_paragraph_shapes_format() {
        let cases = [
            (ParagraphNumber::new(None, 1, None, 2), "1.2"),
            (ParagraphNumber::new(Some(3), 1, None, 2), "3.1.2"),
            (ParagraphNumber::new(None, 1, Some(4), 2), "1.4.2"),
            (ParagraphNumber::new(Some(3), 1, Some(4), 2), "3.1.4.2"),
        ];
        for (number, expected) in cases {
            assert_eq!(number.unwrap().to_string(), expected);
        }
    }

    #[test]
    fn test_content_number_rejects_zero_components() {
        assert_eq!(
            ParagraphNumber::new(None, 1, None, 0).unwrap_err().component,
            "paragraph"
        );
        assert_eq!(
            FormalItemNumber::new(None, 1, None, 0).unwrap_err().component,
            "formal item"
        );
        assert_eq!(
            FormalItemNumber::new(Some(0), 1, None, 1).unwrap_err().component,
            "part"
        );
        assert_eq!(
            ParagraphNumber::new(None, 1, Some(0), 1).unwrap_err().component,
            "subsection"
        );
    }

    #[test]
    fn test_accessors() {
        let number = ParagraphNumber::new(Some(2), 3, Some(1), 4).unwrap();
        assert_eq!(number.part().map(PartNumber::get), Some(2));
        assert_eq!(number.section(), 3);
        assert_eq!(number.subsection(), Some(1));
        assert_eq!(number.paragraph(), 4);
        assert_eq!(number.depth(), 4);
    }

    #[test]
    fn test_scope_composition() {
        let section = SectionNumber::in_part(1, 2).unwrap();
        let scope = ContentScope::Section(section);
        assert_eq!(scope.paragraph(nz(3)).to_string(), "1.2.3");
        assert_eq!(scope.formal_item(nz(1)).to_string(), "1.2.1");
        assert_eq!(scope.paragraph(nz(3)).scope(), scope);

        let subsection = ContentScope::Subsection(SubsectionNumber::new(4, 5).unwrap());
        assert_eq!(subsection.formal_item(nz(6)).to_string(), "4.5.6");
        assert_eq!(subsection.to_string(), "4.5");
    }

    #[test]
    fn test_same_shape_ordering_is_componentwise() {
        let mut numbers = vec![
            FormalItemNumber::new(Some(1), 2, Some(1), 1).unwrap(),
            FormalItemNumber::new(Some(1), 1, Some(2), 1).unwrap(),
            FormalItemNumber::new(Some(1), 1, Some(1), 2).unwrap(),
            FormalItemNumber::new(Some(1), 1, Some(1), 1).unwrap(),
        ];
        numbers.sort();
        let formatted: Vec<String> = numbers.iter().map(ToString::to_string).collect();
        assert_eq!(formatted, vec!["1.1.1.1", "1.1.1.2", "1.1.2.1", "1.2.1.1"]);
    }

    #[test]
    fn test_cross_shape_ordering_is_total() {
        // An absent subsection sorts before any present one.
        let without = FormalItemNumber::new(None, 1, None, 9).unwrap();
        let with = FormalItemNumber::new(None, 1, Some(1), 1).unwrap();
        assert!(without < with);
        assert_ne!(without.cmp(&with), Ordering::Equal);
    }
}
