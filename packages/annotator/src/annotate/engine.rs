//! Annotation engine that numbers an input tree and fills the registries.

use std::sync::Arc;

use super::types::{Counter, ScopeCounters};
use crate::annotated::{
    BlockContent, Document, DocumentBody, Footnote, FormalItem, FormalItemContent, InlineContent,
    List, ListItem, Paragraph, ParagraphContent, Part, Section, SectionBody, Subsection, Table,
    TableCell, TableRow,
};
use crate::error::DuplicateIdentifier;
use crate::input;
use crate::number::{
    ContentScope, FormalItemNumber, ParagraphNumber, PartNumber, SectionNumber, SubsectionNumber,
};
use crate::registry::{
    FootnoteRegistry, FormalItemRegistry, IdTarget, Identifier, IdentifierRegistry,
};

/// Engine for one annotation run.
///
/// Walks the input tree depth-first. Numbers are assigned in document order
/// as elements are reached; footnotes are numbered after their own content,
/// so nested footnotes receive lower numbers than the footnotes holding
/// them. Each identified element is registered once it is fully built.
#[derive(Debug, Default)]
pub struct Annotator {
    identifiers: IdentifierRegistry,
    footnotes: FootnoteRegistry,
    formal_items: FormalItemRegistry,
}

impl Annotator {
    /// Create an engine with empty registries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotate a document, consuming the engine.
    ///
    /// Fails on the first identifier defined twice; no partial document is
    /// produced.
    pub fn annotate(mut self, document: &input::Document) -> Result<Document, DuplicateIdentifier> {
        let body = match &document.body {
            input::DocumentBody::Parts(parts) => {
                let mut numbers = Counter::new();
                let parts = parts
                    .iter()
                    .map(|part| {
                        self.annotate_part(part, PartNumber::from_nonzero(numbers.advance()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                DocumentBody::Parts(parts)
            }
            input::DocumentBody::Sections(sections) => {
                let mut numbers = Counter::new();
                let sections = sections
                    .iter()
                    .map(|section| {
                        let number = SectionNumber::WithoutPart {
                            section: numbers.advance(),
                        };
                        self.annotate_section(section, number)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                DocumentBody::Sections(sections)
            }
        };

        let part_count = match &body {
            DocumentBody::Parts(parts) => parts.len(),
            DocumentBody::Sections(_) => 0,
        };
        tracing::info!(
            title = %document.title,
            parts = part_count,
            identifiers = self.identifiers.count(),
            footnotes = self.footnotes.len(),
            formal_item_kinds = self.formal_items.kinds().len(),
            "Annotated document"
        );

        Ok(Document {
            title: document.title.clone(),
            contents: document.contents,
            style: document.style.clone(),
            body,
            identifiers: self.identifiers,
            footnotes: self.footnotes,
            formal_items: self.formal_items,
        })
    }

    fn annotate_part(
        &mut self,
        part: &input::Part,
        number: PartNumber,
    ) -> Result<Arc<Part>, DuplicateIdentifier> {
        tracing::debug!(part = %number, title = %part.title, "Annotating part");
        let mut numbers = Counter::new();
        let sections = part
            .sections
            .iter()
            .map(|section| self.annotate_section(section, number.section(numbers.advance())))
            .collect::<Result<Vec<_>, _>>()?;

        let annotated = Arc::new(Part {
            number,
            title: part.title.clone(),
            id: part.id.as_deref().map(Identifier::new),
            type_tag: part.type_tag.clone(),
            contents: part.contents,
            sections,
        });
        self.define(annotated.id.as_ref(), || IdTarget::Part(Arc::clone(&annotated)))?;
        Ok(annotated)
    }

    fn annotate_section(
        &mut self,
        section: &input::Section,
        number: SectionNumber,
    ) -> Result<Arc<Section>, DuplicateIdentifier> {
        let footnote_mark = self.footnotes.len();
        let body = match &section.body {
            input::SectionBody::Content(content) => SectionBody::Content(
                self.annotate_block_content(content, ContentScope::Section(number))?,
            ),
            input::SectionBody::Subsections(subsections) => {
                let mut numbers = Counter::new();
                let subsections = subsections
                    .iter()
                    .map(|subsection| {
                        self.annotate_subsection(subsection, number.subsection(numbers.advance()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                SectionBody::Subsections(subsections)
            }
        };

        let annotated = Arc::new(Section {
            number,
            title: section.title.clone(),
            id: section.id.as_deref().map(Identifier::new),
            type_tag: section.type_tag.clone(),
            contents: section.contents,
            body,
            footnotes: self.footnotes.since(footnote_mark).to_vec(),
        });
        self.define(annotated.id.as_ref(), || IdTarget::Section(Arc::clone(&annotated)))?;
        Ok(annotated)
    }

    fn annotate_subsection(
        &mut self,
        subsection: &input::Subsection,
        number: SubsectionNumber,
    ) -> Result<Arc<Subsection>, DuplicateIdentifier> {
        let content =
            self.annotate_block_content(&subsection.content, ContentScope::Subsection(number))?;
        let annotated = Arc::new(Subsection {
            number,
            title: subsection.title.clone(),
            id: subsection.id.as_deref().map(Identifier::new),
            type_tag: subsection.type_tag.clone(),
            content,
        });
        self.define(annotated.id.as_ref(), || IdTarget::Subsection(Arc::clone(&annotated)))?;
        Ok(annotated)
    }

    /// Annotate the paragraphs and formal items of one scope.
    ///
    /// Paragraphs and formal items are counted separately.
    fn annotate_block_content(
        &mut self,
        content: &[input::BlockContent],
        scope: ContentScope,
    ) -> Result<Vec<BlockContent>, DuplicateIdentifier> {
        let mut counters = ScopeCounters::default();
        content
            .iter()
            .map(|block| match block {
                input::BlockContent::Paragraph(paragraph) => {
                    let number = scope.paragraph(counters.paragraphs.advance());
                    self.annotate_paragraph(paragraph, number).map(BlockContent::Paragraph)
                }
                input::BlockContent::FormalItem(formal_item) => {
                    let number = scope.formal_item(counters.formal_items.advance());
                    self.annotate_formal_item(formal_item, number).map(BlockContent::FormalItem)
                }
            })
            .collect()
    }

    fn annotate_paragraph(
        &mut self,
        paragraph: &input::Paragraph,
        number: ParagraphNumber,
    ) -> Result<Arc<Paragraph>, DuplicateIdentifier> {
        let content = paragraph
            .content
            .iter()
            .map(|item| self.annotate_paragraph_content(item))
            .collect();
        let annotated = Arc::new(Paragraph {
            number,
            id: paragraph.id.as_deref().map(Identifier::new),
            type_tag: paragraph.type_tag.clone(),
            content,
        });
        self.define(annotated.id.as_ref(), || IdTarget::Paragraph(Arc::clone(&annotated)))?;
        Ok(annotated)
    }

    fn annotate_formal_item(
        &mut self,
        formal_item: &input::FormalItem,
        number: FormalItemNumber,
    ) -> Result<Arc<FormalItem>, DuplicateIdentifier> {
        use input::FormalItemContent as Source;

        let content = match &formal_item.content {
            Source::FormalItemList(list) => FormalItemContent::FormalItemList(list.clone()),
            Source::Image(image) => FormalItemContent::Image(image.clone()),
            Source::ListOrdered(list) => FormalItemContent::ListOrdered(self.annotate_list(list)),
            Source::ListUnordered(list) => {
                FormalItemContent::ListUnordered(self.annotate_list(list))
            }
            Source::Table(table) => FormalItemContent::Table(self.annotate_table(table)),
            Source::Verbatim(verbatim) => FormalItemContent::Verbatim(verbatim.clone()),
        };
        let annotated = Arc::new(FormalItem {
            number,
            title: formal_item.title.clone(),
            kind: formal_item.kind.clone(),
            id: formal_item.id.as_deref().map(Identifier::new),
            type_tag: formal_item.type_tag.clone(),
            content,
        });
        self.formal_items.insert(&annotated.kind, Arc::clone(&annotated));
        self.define(annotated.id.as_ref(), || IdTarget::FormalItem(Arc::clone(&annotated)))?;
        Ok(annotated)
    }

    fn annotate_paragraph_content(
        &mut self,
        content: &input::ParagraphContent,
    ) -> ParagraphContent {
        use input::ParagraphContent as Source;

        match content {
            Source::Text(text) => ParagraphContent::Text(text.clone()),
            Source::Term(term) => ParagraphContent::Term(term.clone()),
            Source::Link(link) => ParagraphContent::Link(link.clone()),
            Source::LinkExternal(link) => ParagraphContent::LinkExternal(link.clone()),
            Source::Image(image) => ParagraphContent::Image(image.clone()),
            Source::ListOrdered(list) => ParagraphContent::ListOrdered(self.annotate_list(list)),
            Source::ListUnordered(list) => {
                ParagraphContent::ListUnordered(self.annotate_list(list))
            }
            Source::Table(table) => ParagraphContent::Table(self.annotate_table(table)),
            Source::Footnote(footnote) => {
                ParagraphContent::Footnote(self.annotate_footnote(footnote))
            }
            Source::Verbatim(verbatim) => ParagraphContent::Verbatim(verbatim.clone()),
            Source::FormalItemList(list) => ParagraphContent::FormalItemList(list.clone()),
        }
    }

    fn annotate_inline(&mut self, content: &input::InlineContent) -> InlineContent {
        use input::InlineContent as Source;

        match content {
            Source::Text(text) => InlineContent::Text(text.clone()),
            Source::Term(term) => InlineContent::Term(term.clone()),
            Source::Link(link) => InlineContent::Link(link.clone()),
            Source::LinkExternal(link) => InlineContent::LinkExternal(link.clone()),
            Source::Image(image) => InlineContent::Image(image.clone()),
            Source::ListOrdered(list) => InlineContent::ListOrdered(self.annotate_list(list)),
            Source::ListUnordered(list) => InlineContent::ListUnordered(self.annotate_list(list)),
            Source::Footnote(footnote) => InlineContent::Footnote(self.annotate_footnote(footnote)),
            Source::Verbatim(verbatim) => InlineContent::Verbatim(verbatim.clone()),
        }
    }

    fn annotate_inline_all(&mut self, content: &[input::InlineContent]) -> Vec<InlineContent> {
        content.iter().map(|item| self.annotate_inline(item)).collect()
    }

    /// Annotate the footnote's content, then number and register it.
    fn annotate_footnote(&mut self, footnote: &input::Footnote) -> Arc<Footnote> {
        let content = self.annotate_inline_all(&footnote.content);
        self.footnotes.append(content)
    }

    fn annotate_list(&mut self, list: &input::List) -> List {
        List {
            type_tag: list.type_tag.clone(),
            items: list
                .items
                .iter()
                .map(|item| ListItem {
                    type_tag: item.type_tag.clone(),
                    content: self.annotate_inline_all(&item.content),
                })
                .collect(),
        }
    }

    fn annotate_table(&mut self, table: &input::Table) -> Table {
        Table {
            summary: table.summary.clone(),
            head: table.head.clone(),
            body: table
                .body
                .iter()
                .map(|row| TableRow {
                    cells: row
                        .cells
                        .iter()
                        .map(|cell| TableCell {
                            content: self.annotate_inline_all(&cell.content),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    fn define(
        &mut self,
        id: Option<&Identifier>,
        target: impl FnOnce() -> IdTarget,
    ) -> Result<(), DuplicateIdentifier> {
        match id {
            Some(id) => self.identifiers.define(id.clone(), target()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Footnote as InputFootnote, Text};

    fn text(value: &str) -> input::InlineContent {
        input::InlineContent::Text(Text::new(value))
    }

    #[test]
    fn test_flat_sections_numbered_in_order() {
        let input = input::Document::with_sections(
            "Doc",
            vec![
                input::Section::with_content("A", vec![input::Paragraph::text("a").into()]),
                input::Section::with_content("B", vec![input::Paragraph::text("b").into()]),
            ],
        );
        let document = Annotator::new().annotate(&input).unwrap();
        let numbers: Vec<String> = document
            .sections()
            .map(|s| s.number().to_string())
            .collect();
        assert_eq!(numbers, vec!["1", "2"]);
    }

    #[test]
    fn test_section_numbers_restart_per_part() {
        let section =
            || input::Section::with_content("S", vec![input::Paragraph::text("x").into()]);
        let input = input::Document::with_parts(
            "Book",
            vec![
                input::Part::new("One", vec![section(), section()]),
                input::Part::new("Two", vec![section()]),
            ],
        );
        let document = Annotator::new().annotate(&input).unwrap();
        let numbers: Vec<String> = document
            .sections()
            .map(|s| s.number().to_string())
            .collect();
        assert_eq!(numbers, vec!["1.1", "1.2", "2.1"]);
    }

    #[test]
    fn test_nested_footnote_numbered_first() {
        let inner = InputFootnote::new(vec![text("inner")]);
        let outer = InputFootnote::new(vec![text("outer"), inner.into()]);
        let input = input::Document::with_sections(
            "Doc",
            vec![input::Section::with_content(
                "A",
                vec![input::Paragraph::new(vec![outer.into()]).into()],
            )],
        );
        let document = Annotator::new().annotate(&input).unwrap();

        let footnotes = document.footnotes();
        assert_eq!(footnotes.len(), 2);
        assert_eq!(footnotes[0].plain_text(), "inner");
        assert_eq!(footnotes[1].plain_text(), "outer [0]");
    }

    #[test]
    fn test_section_collects_its_footnotes() {
        let paragraph = |value: &str| -> input::BlockContent {
            input::Paragraph::new(vec![InputFootnote::new(vec![text(value)]).into()]).into()
        };
        let input = input::Document::with_sections(
            "Doc",
            vec![
                input::Section::with_content("A", vec![paragraph("a")]),
                input::Section::with_content("B", vec![paragraph("b"), paragraph("c")]),
            ],
        );
        let document = Annotator::new().annotate(&input).unwrap();
        let second: Vec<usize> = document
            .sections()
            .nth(1)
            .unwrap()
            .footnotes()
            .iter()
            .map(|f| f.number().get())
            .collect();
        assert_eq!(second, vec![1, 2]);
    }

    #[test]
    fn test_section_registers_after_its_content() {
        let input = input::Document::with_sections(
            "Doc",
            vec![input::Section::with_content(
                "A",
                vec![input::Paragraph::text("a").with_id("same").into()],
            )
            .with_id("same")],
        );
        let err = Annotator::new().annotate(&input).unwrap_err();
        assert_eq!(err.identifier, "same");
        assert_eq!(err.existing, "paragraph 1.1");
        assert_eq!(err.duplicate, "section 1");
    }
}
