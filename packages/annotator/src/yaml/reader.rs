//! YAML reader for input documents.
//!
//! Stands in for the upstream markup parser: reads the input tree from YAML
//! and enforces the guarantees the annotator relies on.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::MAX_DOCUMENT_SIZE;
use crate::error::{AnnotatorError, Result};
use crate::input::{
    BlockContent, Document, DocumentBody, FormalItemContent, InlineContent, List, ParagraphContent,
    Section, SectionBody, Table,
};

/// Deserialize YAML written with `variant: value` maps for enums.
///
/// Enum variants of the input tree appear as single-key maps
/// (`- text: Hello`, `- paragraph: {...}`) rather than YAML tags.
pub fn parse_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T> {
    let deserializer = serde_yaml_ng::Deserializer::from_str(yaml);
    Ok(serde_yaml_ng::with::singleton_map_recursive::deserialize(deserializer)?)
}

/// Parse an input document from YAML text.
pub fn parse_document(yaml: &str) -> Result<Document> {
    check_size(yaml.len() as u64)?;
    let document: Document = parse_yaml(yaml)?;
    validate_document(&document)?;
    Ok(document)
}

/// Load an input document from a YAML file.
pub fn load_document(path: &Path) -> Result<Document> {
    check_size(fs::metadata(path)?.len())?;
    let yaml = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = yaml.len(), "Loaded document");
    parse_document(&yaml)
}

fn check_size(size: u64) -> Result<()> {
    if size > MAX_DOCUMENT_SIZE {
        return Err(AnnotatorError::DocumentTooLarge {
            size,
            limit: MAX_DOCUMENT_SIZE,
        });
    }
    Ok(())
}

fn non_empty<T>(items: &[T], element: &str, context: impl FnOnce() -> String) -> Result<()> {
    if items.is_empty() {
        return Err(AnnotatorError::EmptyList {
            element: element.to_string(),
            context: context(),
        });
    }
    Ok(())
}

/// Check the non-empty-list guarantees of the input tree.
fn validate_document(document: &Document) -> Result<()> {
    let context = || format!("document '{}'", document.title);
    match &document.body {
        DocumentBody::Parts(parts) => {
            non_empty(parts, "part", context)?;
            for part in parts {
                non_empty(&part.sections, "section", || format!("part '{}'", part.title))?;
                for section in &part.sections {
                    validate_section(section)?;
                }
            }
        }
        DocumentBody::Sections(sections) => {
            non_empty(sections, "section", context)?;
            for section in sections {
                validate_section(section)?;
            }
        }
    }
    Ok(())
}

fn validate_section(section: &Section) -> Result<()> {
    let context = || format!("section '{}'", section.title);
    match &section.body {
        SectionBody::Content(content) => {
            non_empty(content, "content", context)?;
            validate_blocks(content)
        }
        SectionBody::Subsections(subsections) => {
            non_empty(subsections, "subsection", context)?;
            for subsection in subsections {
                non_empty(&subsection.content, "content", || {
                    format!("subsection '{}'", subsection.title)
                })?;
                validate_blocks(&subsection.content)?;
            }
            Ok(())
        }
    }
}

fn validate_blocks(content: &[BlockContent]) -> Result<()> {
    for block in content {
        match block {
            BlockContent::Paragraph(paragraph) => {
                non_empty(&paragraph.content, "content", || "paragraph".to_string())?;
                for item in &paragraph.content {
                    validate_paragraph_content(item)?;
                }
            }
            BlockContent::FormalItem(formal_item) => {
                let context = || format!("formal item '{}'", formal_item.title);
                match &formal_item.content {
                    FormalItemContent::ListOrdered(list)
                    | FormalItemContent::ListUnordered(list) => validate_list(list, context)?,
                    FormalItemContent::Table(table) => validate_table(table, context)?,
                    FormalItemContent::FormalItemList(_)
                    | FormalItemContent::Image(_)
                    | FormalItemContent::Verbatim(_) => {}
                }
            }
        }
    }
    Ok(())
}

fn validate_paragraph_content(content: &ParagraphContent) -> Result<()> {
    match content {
        ParagraphContent::ListOrdered(list) | ParagraphContent::ListUnordered(list) => {
            validate_list(list, || "paragraph".to_string())
        }
        ParagraphContent::Table(table) => validate_table(table, || "paragraph".to_string()),
        ParagraphContent::Footnote(footnote) => validate_footnote(&footnote.content),
        ParagraphContent::Text(_)
        | ParagraphContent::Term(_)
        | ParagraphContent::Link(_)
        | ParagraphContent::LinkExternal(_)
        | ParagraphContent::Image(_)
        | ParagraphContent::Verbatim(_)
        | ParagraphContent::FormalItemList(_) => Ok(()),
    }
}

fn validate_inline(content: &InlineContent) -> Result<()> {
    match content {
        InlineContent::ListOrdered(list) | InlineContent::ListUnordered(list) => {
            validate_list(list, || "inline content".to_string())
        }
        InlineContent::Footnote(footnote) => validate_footnote(&footnote.content),
        InlineContent::Text(_)
        | InlineContent::Term(_)
        | InlineContent::Link(_)
        | InlineContent::LinkExternal(_)
        | InlineContent::Image(_)
        | InlineContent::Verbatim(_) => Ok(()),
    }
}

fn validate_footnote(content: &[InlineContent]) -> Result<()> {
    non_empty(content, "content", || "footnote".to_string())?;
    content.iter().try_for_each(validate_inline)
}

fn validate_list(list: &List, context: impl FnOnce() -> String) -> Result<()> {
    non_empty(&list.items, "list item", context)?;
    list.items
        .iter()
        .flat_map(|item| item.content.iter())
        .try_for_each(validate_inline)
}

fn validate_table(table: &Table, context: impl FnOnce() -> String) -> Result<()> {
    non_empty(&table.body, "table row", context)?;
    table
        .body
        .iter()
        .flat_map(|row| row.cells.iter())
        .flat_map(|cell| cell.content.iter())
        .try_for_each(validate_inline)
}
