//! Segment navigation over documents with and without parts.

use pretty_assertions::assert_eq;

use structura_annotator::input;
use structura_annotator::{annotate, Document, PartNumber, SectionNumber, SegmentNumber};

fn flat(count: usize) -> Document {
    let sections = (1..=count)
        .map(|n| {
            input::Section::with_content(
                format!("Section {n}"),
                vec![input::Paragraph::text("body").into()],
            )
        })
        .collect();
    annotate(&input::Document::with_sections("Flat", sections)).unwrap()
}

fn with_parts(sections_per_part: &[usize]) -> Document {
    let parts = sections_per_part
        .iter()
        .enumerate()
        .map(|(index, &count)| {
            let sections = (1..=count)
                .map(|n| {
                    input::Section::with_content(
                        format!("Section {n}"),
                        vec![input::Paragraph::text("body").into()],
                    )
                })
                .collect();
            input::Part::new(format!("Part {}", index + 1), sections)
        })
        .collect();
    annotate(&input::Document::with_parts("Book", parts)).unwrap()
}

fn section(n: u32) -> SegmentNumber {
    SegmentNumber::Section(SectionNumber::new(n).unwrap())
}

fn part(p: u32) -> SegmentNumber {
    SegmentNumber::Part(PartNumber::new(p).unwrap())
}

fn part_section(p: u32, s: u32) -> SegmentNumber {
    SegmentNumber::Section(SectionNumber::in_part(p, s).unwrap())
}

#[test]
fn test_flat_first_is_section_one() {
    let document = flat(3);
    assert_eq!(document.first(), section(1));
}

#[test]
fn test_flat_next_and_previous_boundaries() {
    let document = flat(4);

    for k in 1..4 {
        assert_eq!(document.next(section(k)), Some(section(k + 1)));
        assert_eq!(document.previous(section(k + 1)), Some(section(k)));
    }
    assert_eq!(document.next(section(4)), None);
    assert_eq!(document.previous(section(1)), None);
}

#[test]
fn test_flat_up_is_always_none() {
    let document = flat(3);
    for k in 1..=3 {
        assert_eq!(document.up(section(k)), None);
    }
}

#[test]
fn test_flat_single_section() {
    let document = flat(1);
    assert_eq!(document.next(document.first()), None);
    assert_eq!(document.previous(document.first()), None);
    assert_eq!(document.segments(), vec![section(1)]);
}

#[test]
fn test_flat_rejects_unknown_or_misshapen_segments() {
    let document = flat(2);
    assert_eq!(document.next(section(3)), None);
    assert_eq!(document.previous(section(3)), None);
    assert_eq!(document.next(part(1)), None);
    assert_eq!(document.next(part_section(1, 1)), None);
    assert!(document.segment(part(1)).is_none());
}

#[test]
fn test_parts_reading_order() {
    let document = with_parts(&[2, 1]);
    assert_eq!(
        document.segments(),
        vec![
            part(1),
            part_section(1, 1),
            part_section(1, 2),
            part(2),
            part_section(2, 1),
        ]
    );
}

#[test]
fn test_parts_previous_mirrors_next() {
    let document = with_parts(&[2, 3, 1]);
    let segments = document.segments();

    assert_eq!(document.previous(segments[0]), None);
    for pair in segments.windows(2) {
        assert_eq!(document.next(pair[0]), Some(pair[1]));
        assert_eq!(document.previous(pair[1]), Some(pair[0]));
    }
    assert_eq!(document.next(segments[segments.len() - 1]), None);
}

#[test]
fn test_parts_up() {
    let document = with_parts(&[2, 1]);
    assert_eq!(document.first(), part(1));
    assert_eq!(document.up(part(1)), None);
    assert_eq!(document.up(part_section(1, 2)), Some(part(1)));
    assert_eq!(document.up(part_section(2, 1)), Some(part(2)));
}

#[test]
fn test_parts_rejects_unknown_or_misshapen_segments() {
    let document = with_parts(&[1]);
    assert_eq!(document.next(section(1)), None);
    assert_eq!(document.next(part(2)), None);
    assert_eq!(document.up(part_section(1, 2)), None);
}

#[test]
fn test_segment_resolves_titles() {
    let document = with_parts(&[1]);
    let segment = document.segment(part_section(1, 1)).unwrap();
    assert_eq!(segment.title(), "Section 1");
    assert_eq!(segment.number(), part_section(1, 1));
    assert_eq!(document.segment(part(1)).unwrap().title(), "Part 1");
}
