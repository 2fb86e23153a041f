//! Command-line interface for the annotator.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use textwrap::{fill, Options};

use crate::annotate::annotate;
use crate::annotated::{Document, FormalItem, Section};
use crate::config::{parse_segment, TEXT_WRAP_WIDTH};
use crate::error::{AnnotatorError, Result};
use crate::number::SegmentNumber;
use crate::yaml::{generate_json, generate_yaml, load_document, save_report};

/// Structura - Number and index structured documents.
#[derive(Parser)]
#[command(name = "structura")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the numbered outline of a document.
    Outline {
        /// Input document (YAML)
        file: PathBuf,
    },

    /// List formal items in structural-number order.
    Formals {
        /// Input document (YAML)
        file: PathBuf,

        /// Only list items of this kind (e.g., figure)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// List footnotes with their sequence numbers.
    Footnotes {
        /// Input document (YAML)
        file: PathBuf,
    },

    /// Resolve an identifier to the element carrying it.
    Lookup {
        /// Input document (YAML)
        file: PathBuf,

        /// Identifier to resolve
        id: String,
    },

    /// Show the neighbours of a segment.
    Navigate {
        /// Input document (YAML)
        file: PathBuf,

        /// Segment as N or P.S (default: the first segment)
        segment: Option<String>,
    },

    /// Write a report of the annotated document.
    Report {
        /// Input document (YAML)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Yaml)]
        format: ReportFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Yaml,
    Json,
}

/// Run the CLI.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Outline { file } => outline_command(&file),
        Commands::Formals { file, kind } => formals_command(&file, kind.as_deref()),
        Commands::Footnotes { file } => footnotes_command(&file),
        Commands::Lookup { file, id } => lookup_command(&file, &id),
        Commands::Navigate { file, segment } => navigate_command(&file, segment.as_deref()),
        Commands::Report {
            file,
            format,
            output,
        } => report_command(&file, format, output.as_deref()),
    }
}

/// Load and annotate a document.
fn load(file: &Path) -> Result<Document> {
    let input = load_document(file)?;
    Ok(annotate(&input)?)
}

/// Execute the outline command.
fn outline_command(file: &Path) -> Result<()> {
    let document = load(file)?;
    println!("{}", style(document.title()).bold());

    if document.has_parts() {
        for part in document.parts() {
            println!(
                "{} {}{}",
                style(part.number()).cyan(),
                part.title(),
                id_suffix(part.id().map(|id| id.as_str()))
            );
            for section in part.sections() {
                print_section(section, 1);
            }
        }
    } else {
        for section in document.sections() {
            print_section(section, 0);
        }
    }
    Ok(())
}

fn print_section(section: &Section, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{indent}{} {}{}",
        style(section.number()).cyan(),
        section.title(),
        id_suffix(section.id().map(|id| id.as_str()))
    );
    for subsection in section.subsections() {
        println!(
            "{indent}  {} {}{}",
            style(subsection.number()).cyan(),
            subsection.title(),
            id_suffix(subsection.id().map(|id| id.as_str()))
        );
    }
}

fn id_suffix(id: Option<&str>) -> String {
    id.map(|id| format!(" {}", style(format!("[{id}]")).dim()))
        .unwrap_or_default()
}

/// Execute the formals command.
fn formals_command(file: &Path, kind: Option<&str>) -> Result<()> {
    let document = load(file)?;
    let registry = document.formal_item_registry();

    match kind {
        Some(kind) => {
            for item in registry.by_kind(kind) {
                print_formal_item(item);
            }
        }
        None => {
            for kind in registry.kinds() {
                println!("{}", style(kind).bold());
                for item in registry.by_kind(kind) {
                    print!("  ");
                    print_formal_item(item);
                }
            }
        }
    }
    Ok(())
}

fn print_formal_item(item: &FormalItem) {
    println!(
        "{} {}{}",
        style(item.number()).cyan(),
        item.title(),
        id_suffix(item.id().map(|id| id.as_str()))
    );
}

/// Execute the footnotes command.
fn footnotes_command(file: &Path) -> Result<()> {
    let document = load(file)?;
    for footnote in document.footnotes() {
        let marker = format!("[{}] ", footnote.number());
        let indent = " ".repeat(marker.len());
        let options = Options::new(TEXT_WRAP_WIDTH)
            .initial_indent(&marker)
            .subsequent_indent(&indent);
        println!("{}", fill(&footnote.plain_text(), options));
    }
    Ok(())
}

/// Execute the lookup command.
fn lookup_command(file: &Path, id: &str) -> Result<()> {
    let document = load(file)?;
    let target = document
        .lookup(id)
        .ok_or_else(|| AnnotatorError::UnknownIdentifier(id.to_string()))?;

    match target.title() {
        Some(title) => println!("{} {}", style(target.describe()).cyan(), title),
        None => println!("{}", style(target.describe()).cyan()),
    }
    Ok(())
}

/// Execute the navigate command.
fn navigate_command(file: &Path, segment: Option<&str>) -> Result<()> {
    let document = load(file)?;
    let number = match segment {
        Some(segment) => parse_segment(segment, document.has_parts())?,
        None => document.first(),
    };
    let current = document
        .segment(number)
        .ok_or_else(|| AnnotatorError::InvalidSegment(number.to_string()))?;

    println!(
        "{} {}",
        style(current.number()).cyan().bold(),
        style(current.title()).bold()
    );
    print_neighbour(&document, "first", Some(document.first()));
    print_neighbour(&document, "previous", document.previous(number));
    print_neighbour(&document, "next", document.next(number));
    print_neighbour(&document, "up", document.up(number));
    Ok(())
}

fn print_neighbour(document: &Document, label: &str, number: Option<SegmentNumber>) {
    match number.and_then(|number| document.segment(number)) {
        Some(segment) => println!(
            "  {label:<9}{} {}",
            style(segment.number()).cyan(),
            segment.title()
        ),
        None => println!("  {label:<9}{}", style("-").dim()),
    }
}

/// Execute the report command.
fn report_command(file: &Path, format: ReportFormat, output: Option<&Path>) -> Result<()> {
    let document = load(file)?;
    let content = match format {
        ReportFormat::Yaml => generate_yaml(&document)?,
        ReportFormat::Json => generate_json(&document)?,
    };

    match output {
        Some(path) => {
            save_report(&content, path)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_outline() {
        let cli = Cli::parse_from(["structura", "outline", "doc.yaml"]);
        assert!(!cli.verbose);
        let Commands::Outline { file } = cli.command else {
            panic!("expected outline command");
        };
        assert_eq!(file, PathBuf::from("doc.yaml"));
    }

    #[test]
    fn test_cli_parse_formals_with_kind() {
        let cli = Cli::parse_from(["structura", "formals", "doc.yaml", "--kind", "figure"]);
        let Commands::Formals { kind, .. } = cli.command else {
            panic!("expected formals command");
        };
        assert_eq!(kind, Some("figure".to_string()));
    }

    #[test]
    fn test_cli_parse_navigate_verbose() {
        let cli = Cli::parse_from(["structura", "navigate", "doc.yaml", "2.1", "-v"]);
        assert!(cli.verbose);
        let Commands::Navigate { segment, .. } = cli.command else {
            panic!("expected navigate command");
        };
        assert_eq!(segment.as_deref(), Some("2.1"));
    }

    #[test]
    fn test_cli_parse_report_defaults() {
        let cli = Cli::parse_from(["structura", "report", "doc.yaml"]);
        let Commands::Report { format, output, .. } = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(format, ReportFormat::Yaml);
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_report_json() {
        let cli = Cli::parse_from([
            "structura", "report", "doc.yaml", "--format", "json", "--output", "out.json",
        ]);
        let Commands::Report { format, output, .. } = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(format, ReportFormat::Json);
        assert_eq!(output, Some(PathBuf::from("out.json")));
    }
}
