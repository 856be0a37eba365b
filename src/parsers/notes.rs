//! Free-text provenance notes
//!
//! Scrapes traditional uses, interaction warnings, contraindications and
//! preparation methods from the prose around a herb mention. Every rule in
//! every family runs; captures end at a period, semicolon or line break.

use serde::{Deserialize, Serialize};

use super::rules::{Emit, FieldRules, MatchPolicy};
use crate::config::ExtractionConfig;
use crate::utils::{push_unique, truncate_chars};

const USES: &[(&str, Emit)] = &[
    (r"used\s+for\s+(.+?)(?:\.|;|,\s+and\s+|\n)", Emit::Capture),
    (r"traditional\s+uses?\s*:?\s*(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"medicinal\s+uses?\s*:?\s*(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"therapeutic\s+actions?\s*:?\s*(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"\bindications?\s*:?\s*(.+?)(?:\.|;|\n)", Emit::Capture),
];

const INTERACTIONS: &[(&str, Emit)] = &[
    (r"interactions?\s+with\s+(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"drug\s+interactions?\s*:?\s*(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"contraindicated\s+with\s+(.+?)(?:\.|;|\n)", Emit::Capture),
];

const CONTRAINDICATIONS: &[(&str, Emit)] = &[
    (r"contraindications?\s*:?\s*(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"warnings?\s*:?\s*(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"cautions?\s*:?\s*(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"avoid\s+(.+?)(?:\.|;|\n)", Emit::Capture),
];

const PREPARATIONS: &[(&str, Emit)] = &[
    (r"preparations?\s*:?\s*(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"dosages?\s*:?\s*(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"administered\s+as\s+(.+?)(?:\.|;|\n)", Emit::Capture),
    (r"taken\s+as\s+(.+?)(?:\.|;|\n)", Emit::Capture),
];

/// Notes scraped from one context window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceNotes {
    pub traditional_uses: Vec<String>,
    pub interactions: Vec<String>,
    pub contraindications: Vec<String>,
    pub preparation_methods: Vec<String>,
}

impl ProvenanceNotes {
    pub fn is_empty(&self) -> bool {
        self.traditional_uses.is_empty()
            && self.interactions.is_empty()
            && self.contraindications.is_empty()
            && self.preparation_methods.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct NoteExtractor {
    uses: FieldRules,
    interactions: FieldRules,
    contraindications: FieldRules,
    preparations: FieldRules,
    min_chars: usize,
    max_chars: usize,
}

impl NoteExtractor {
    pub fn new(config: &ExtractionConfig) -> crate::Result<Self> {
        Ok(Self {
            uses: FieldRules::compile("traditional_uses", MatchPolicy::Accumulate, USES)?,
            interactions: FieldRules::compile("interactions", MatchPolicy::Accumulate, INTERACTIONS)?,
            contraindications: FieldRules::compile(
                "contraindications",
                MatchPolicy::Accumulate,
                CONTRAINDICATIONS,
            )?,
            preparations: FieldRules::compile(
                "preparation_methods",
                MatchPolicy::Accumulate,
                PREPARATIONS,
            )?,
            min_chars: config.min_note_chars,
            max_chars: config.max_note_chars,
        })
    }

    pub fn extract(&self, context: &str) -> ProvenanceNotes {
        ProvenanceNotes {
            traditional_uses: self.collect(&self.uses, context),
            interactions: self.collect(&self.interactions, context),
            contraindications: self.collect(&self.contraindications, context),
            preparation_methods: self.collect(&self.preparations, context),
        }
    }

    fn collect(&self, field: &FieldRules, context: &str) -> Vec<String> {
        let mut notes = Vec::new();
        for note in field.apply(context) {
            if note.chars().count() > self.min_chars {
                push_unique(&mut notes, truncate_chars(&note, self.max_chars));
            }
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> NoteExtractor {
        NoteExtractor::new(&ExtractionConfig::default()).unwrap()
    }

    #[test]
    fn test_each_family() {
        let context = "Valerian is used for insomnia and restlessness. \
                       Drug interactions: benzodiazepines. \
                       Contraindications: pregnancy. \
                       Preparation: tea or tincture.";
        let notes = extractor().extract(context);
        assert_eq!(notes.traditional_uses, vec!["insomnia and restlessness"]);
        assert_eq!(notes.interactions, vec!["benzodiazepines"]);
        assert_eq!(notes.contraindications, vec!["pregnancy"]);
        assert_eq!(notes.preparation_methods, vec!["tea or tincture"]);
    }

    #[test]
    fn test_use_stops_at_comma_and() {
        let notes = extractor().extract("Used for anxiety, and as a mild sedative.");
        assert_eq!(notes.traditional_uses, vec!["anxiety"]);
    }

    #[test]
    fn test_short_notes_dropped() {
        let notes = extractor().extract("Avoid sun. Avoid alcohol.");
        assert_eq!(notes.contraindications, vec!["alcohol"]);
    }

    #[test]
    fn test_long_notes_truncated() {
        let config = ExtractionConfig { max_note_chars: 10, ..Default::default() };
        let notes = NoteExtractor::new(&config)
            .unwrap()
            .extract("Taken as a decoction simmered for forty minutes.");
        assert_eq!(notes.preparation_methods, vec!["a decoctio"]);
    }

    #[test]
    fn test_no_notes() {
        assert!(extractor().extract("Kava grows in the Pacific").is_empty());
    }
}
