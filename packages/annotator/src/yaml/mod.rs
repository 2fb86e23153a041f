//! YAML input loading and report output.

mod reader;
mod writer;

pub use reader::{load_document, parse_document, parse_yaml};
pub use writer::{generate_json, generate_yaml, save_report};
