//! Tradition-specific property parsers
//!
//! Pure functions of a text window and a herb name. Each parser owns its
//! compiled rule tables; the per-field first-match/accumulate policies live
//! in `rules`.

pub mod ayurvedic;
pub mod notes;
pub mod rules;
pub mod tcm;

pub use ayurvedic::{AyurvedicParser, AyurvedicProperties, DoshaEffect};
pub use notes::{NoteExtractor, ProvenanceNotes};
pub use rules::{Emit, FieldRules, MatchPolicy, PatternRule};
pub use tcm::{TcmParser, TcmProperties};
