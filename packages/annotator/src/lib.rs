//! Structura Annotator - Number and index structured documents.
//!
//! This crate takes the unannotated tree of a structured document (parts,
//! sections, subsections, paragraphs, formal items and footnotes), assigns
//! every element its hierarchical number, and builds the registries a
//! renderer needs: identifiers, footnotes and formal items by kind.
//!
//! # Example
//!
//! ```
//! use structura_annotator::{annotate, parse_document};
//!
//! let input = parse_document(
//!     "title: Manual
//! sections:
//!   - title: Introduction
//!     id: intro
//!     content:
//!       - paragraph:
//!           content:
//!             - text: Hello
//! ",
//! )
//! .unwrap();
//!
//! let document = annotate(&input).unwrap();
//! let section = document.sections().next().unwrap();
//! assert_eq!(section.number().to_string(), "1");
//! assert!(document.lookup("intro").is_some());
//! assert_eq!(document.next(document.first()), None);
//! ```
//!
//! # Architecture
//!
//! The annotator is organized into several modules:
//!
//! - [`number`]: Structural number algebra
//! - [`input`]: Unannotated input tree
//! - [`annotated`]: Annotated tree and document accessors
//! - [`registry`]: Identifier, footnote and formal-item registries
//! - [`annotate`]: Annotation engine
//! - [`navigation`]: Segment navigation
//! - [`yaml`]: YAML input loading and report output
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod annotate;
pub mod annotated;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod navigation;
pub mod number;
pub mod registry;
pub mod yaml;

// Re-export main functions
pub use annotate::{annotate, Annotator};
pub use yaml::{load_document, parse_document};

// Re-export commonly used items
pub use annotated::Document;
pub use error::{AnnotatorError, DuplicateIdentifier, Result};
pub use navigation::Segment;
pub use number::{
    FootnoteNumber, FormalItemNumber, ParagraphNumber, PartNumber, SectionNumber, SegmentNumber,
    StructuralNumber, SubsectionNumber,
};
