//! Registries populated during one annotation run.
//!
//! Each run creates fresh registries, fills them while walking the input
//! tree, and hands them to the annotated document, which only reads them
//! from then on.

mod footnotes;
mod formal_items;
mod identifiers;

pub use footnotes::FootnoteRegistry;
pub use formal_items::FormalItemRegistry;
pub use identifiers::{IdTarget, Identifier, IdentifierRegistry};
