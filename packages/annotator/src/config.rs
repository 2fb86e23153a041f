//! Configuration constants and validation functions for the annotator.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{AnnotatorError, Result};
use crate::number::{PartNumber, SectionNumber, SegmentNumber};

/// Maximum size of an input document in bytes (16 MB).
///
/// Documents come from an upstream parser; anything larger is almost
/// certainly not a hand-written manual.
pub const MAX_DOCUMENT_SIZE: u64 = 16 * 1024 * 1024;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Text wrap width for footnote listings.
pub const TEXT_WRAP_WIDTH: usize = 80;

/// Segment pattern: `N` or `P.S`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SEGMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\.(\d+))?$").expect("valid regex"));

/// Parse a segment number given as `N` or `P.S`.
///
/// A single component is read as a section in documents without parts and
/// as a part otherwise.
///
/// # Examples
/// ```
/// use structura_annotator::config::parse_segment;
///
/// assert_eq!(parse_segment("3", false).unwrap().to_string(), "3");
/// assert_eq!(parse_segment("2.1", true).unwrap().to_string(), "2.1");
/// assert!(parse_segment("0", false).is_err());
/// assert!(parse_segment("2.1", false).is_err());
/// ```
pub fn parse_segment(segment: &str, has_parts: bool) -> Result<SegmentNumber> {
    let invalid = || AnnotatorError::InvalidSegment(segment.to_string());
    let captures = SEGMENT_PATTERN.captures(segment.trim()).ok_or_else(invalid)?;
    let first: u32 = captures[1].parse().map_err(|_| invalid())?;
    let second = captures
        .get(2)
        .map(|m| m.as_str().parse::<u32>().map_err(|_| invalid()))
        .transpose()?;

    let number = match (has_parts, second) {
        (false, None) => SegmentNumber::Section(SectionNumber::new(first)?),
        (true, None) => SegmentNumber::Part(PartNumber::new(first)?),
        (true, Some(section)) => SegmentNumber::Section(SectionNumber::in_part(first, section)?),
        (false, Some(_)) => return Err(invalid()),
    };
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segment_flat() {
        assert_eq!(
            parse_segment("4", false).unwrap(),
            SegmentNumber::Section(SectionNumber::new(4).unwrap())
        );
        assert!(matches!(
            parse_segment("1.2", false),
            Err(AnnotatorError::InvalidSegment(_))
        ));
    }

    #[test]
    fn test_parse_segment_with_parts() {
        assert_eq!(
            parse_segment("2", true).unwrap(),
            SegmentNumber::Part(PartNumber::new(2).unwrap())
        );
        assert_eq!(
            parse_segment(" 2.3 ", true).unwrap(),
            SegmentNumber::Section(SectionNumber::in_part(2, 3).unwrap())
        );
    }

    #[test]
    fn test_parse_segment_rejects_garbage() {
        for input in ["", "a", "1.", ".1", "1.2.3", "-1", "99999999999"] {
            assert!(
                matches!(parse_segment(input, true), Err(AnnotatorError::InvalidSegment(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_segment_rejects_zero() {
        assert!(matches!(parse_segment("0", false), Err(AnnotatorError::Number(_))));
        assert!(matches!(parse_segment("1.0", true), Err(AnnotatorError::Number(_))));
    }

    #[test]
    fn test_limits_are_reasonable() {
        assert!(MAX_DOCUMENT_SIZE >= 1024 * 1024);
        assert!(TEXT_WRAP_WIDTH >= 40);
        assert_ne!(DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER);
    }
}
