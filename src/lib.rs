//! Apothecary: herbal taxonomy and interaction toolkit
//!
//! Multi-tradition herb extraction following a registry-first architecture:
//! - `taxonomy/`: Western, Ayurvedic and TCM tables merged into one alias-indexed registry
//! - `parsers/`: rule tables for Ayurvedic and TCM properties and provenance notes
//! - `extraction/`: herb scanning over plain text, corpus merging across documents
//! - `interactions/`: substance registry and severity-ranked pairwise checks
//! - `formatters/`: JSON export and markdown interaction reports
//!
//! Registries are explicit values built once and passed by reference; there is
//! no global state.

pub mod config;
pub mod error;
pub mod extraction;
pub mod formatters;
pub mod interactions;
pub mod parsers;
pub mod taxonomy;
pub mod utils;

// Re-export commonly used types
pub use config::ExtractionConfig;
pub use error::{ApothecaryError, Result};
pub use extraction::{Corpus, DocumentScanner, ExtractedHerb, ExtractionEngine};
pub use formatters::{JsonFormatter, MarkdownFormatter};
pub use interactions::{Interaction, InteractionRegistry, InteractionReport, Severity, Substance};
pub use parsers::{AyurvedicParser, AyurvedicProperties, DoshaEffect, TcmParser, TcmProperties};
pub use taxonomy::{HerbRecord, HerbRegistry, Taxonomy, Tradition};
