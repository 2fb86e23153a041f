//! Report writer for annotated documents.
//!
//! A report summarises what annotation produced: the numbered outline, the
//! identifier table, the footnotes, and the formal items of every kind.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::annotated::{Document, Part, Section, Subsection};
use crate::error::Result;

/// Full report representation for serialization.
#[derive(Debug, Serialize)]
struct Report {
    title: String,
    contents: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<String>,
    outline: Vec<OutlineEntry>,
    identifiers: Vec<IdentifierEntry>,
    footnotes: Vec<FootnoteEntry>,
    formal_items: BTreeMap<String, Vec<FormalItemEntry>>,
}

/// One numbered division in the outline.
#[derive(Debug, Serialize)]
struct OutlineEntry {
    element: &'static str,
    number: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    footnotes: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<OutlineEntry>,
}

#[derive(Debug, Serialize)]
struct IdentifierEntry {
    id: String,
    element: &'static str,
    number: String,
}

#[derive(Debug, Serialize)]
struct FootnoteEntry {
    number: usize,
    text: String,
}

#[derive(Debug, Serialize)]
struct FormalItemEntry {
    number: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl From<&Part> for OutlineEntry {
    fn from(part: &Part) -> Self {
        Self {
            element: "part",
            number: part.number().to_string(),
            title: part.title().to_string(),
            id: part.id().map(ToString::to_string),
            footnotes: Vec::new(),
            children: part.sections().iter().map(|s| Self::from(s.as_ref())).collect(),
        }
    }
}

impl From<&Section> for OutlineEntry {
    fn from(section: &Section) -> Self {
        Self {
            element: "section",
            number: section.number().to_string(),
            title: section.title().to_string(),
            id: section.id().map(ToString::to_string),
            footnotes: section.footnotes().iter().map(|f| f.number().get()).collect(),
            children: section
                .subsections()
                .iter()
                .map(|s| Self::from(s.as_ref()))
                .collect(),
        }
    }
}

impl From<&Subsection> for OutlineEntry {
    fn from(subsection: &Subsection) -> Self {
        Self {
            element: "subsection",
            number: subsection.number().to_string(),
            title: subsection.title().to_string(),
            id: subsection.id().map(ToString::to_string),
            footnotes: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Build the serializable report for a document.
fn generate_report(document: &Document) -> Report {
    let outline = if document.has_parts() {
        document.parts().iter().map(|p| OutlineEntry::from(p.as_ref())).collect()
    } else {
        document.sections().map(|s| OutlineEntry::from(s.as_ref())).collect()
    };

    let identifiers = document
        .identifier_registry()
        .entries()
        .into_iter()
        .map(|(id, target)| IdentifierEntry {
            id: id.to_string(),
            element: target.element(),
            number: target.number(),
        })
        .collect();

    let footnotes = document
        .footnotes()
        .iter()
        .map(|footnote| FootnoteEntry {
            number: footnote.number().get(),
            text: footnote.plain_text(),
        })
        .collect();

    let registry = document.formal_item_registry();
    let formal_items = registry
        .kinds()
        .into_iter()
        .map(|kind| {
            let items = registry
                .by_kind(kind)
                .map(|item| FormalItemEntry {
                    number: item.number().to_string(),
                    title: item.title().to_string(),
                    id: item.id().map(ToString::to_string),
                })
                .collect();
            (kind.to_string(), items)
        })
        .collect();

    Report {
        title: document.title().to_string(),
        contents: document.contents(),
        style: document.style().map(str::to_string),
        outline,
        identifiers,
        footnotes,
        formal_items,
    }
}

/// Generate the report as YAML.
pub fn generate_yaml(document: &Document) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(&generate_report(document))?;

    // Add document start marker and clean up trailing whitespace
    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Generate the report as pretty-printed JSON.
pub fn generate_json(document: &Document) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&generate_report(document))?;
    json.push('\n');
    Ok(json)
}

/// Write report text to `path`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
pub fn save_report(content: &str, path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), "Saved report");
    Ok(())
}
