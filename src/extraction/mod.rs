//! Herb extraction from plain text
//!
//! - `engine`: registry-driven name scanning and parser dispatch
//! - `herb`: the extracted record and its cross-document merge
//! - `corpus`: per-document scanning with notes, and the merged corpus
//! - `document`: source-label tradition detection

pub mod corpus;
pub mod document;
pub mod engine;
pub mod herb;

pub use corpus::{Corpus, DocumentScan, DocumentScanner};
pub use document::{DocumentSummary, DocumentTradition, TraditionDetector};
pub use engine::{ExtractionEngine, HerbHit};
pub use herb::ExtractedHerb;
