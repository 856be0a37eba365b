//! Extracted herb record and cross-document merge

use serde::{Deserialize, Serialize};

use crate::parsers::{AyurvedicProperties, ProvenanceNotes, TcmProperties};
use crate::taxonomy::{HerbRecord, Tradition};
use crate::utils::extend_unique;

/// One herb found in one or more documents
///
/// Serializes to the flat export schema: the Ayurvedic and TCM bundles are
/// flattened into the top-level object and every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedHerb {
    pub name: String,
    pub scientific_name: Option<String>,
    pub common_names: Vec<String>,
    pub traditional_uses: Vec<String>,
    pub preparation_methods: Vec<String>,
    pub contraindications: Vec<String>,
    pub interactions: Vec<String>,
    pub source_document: String,
    pub tradition: Tradition,
    #[serde(flatten)]
    pub ayurvedic: AyurvedicProperties,
    #[serde(flatten)]
    pub tcm: TcmProperties,
}

impl ExtractedHerb {
    /// Seed from a registry record; properties start empty
    pub fn from_record(record: &HerbRecord, source: &str) -> Self {
        Self {
            name: record.name.clone(),
            scientific_name: record.scientific_name.clone(),
            common_names: record.aliases.clone(),
            source_document: source.to_string(),
            tradition: record.tradition,
            ..Default::default()
        }
    }

    pub fn apply_notes(&mut self, notes: &ProvenanceNotes) {
        extend_unique(&mut self.traditional_uses, &notes.traditional_uses);
        extend_unique(&mut self.interactions, &notes.interactions);
        extend_unique(&mut self.contraindications, &notes.contraindications);
        extend_unique(&mut self.preparation_methods, &notes.preparation_methods);
    }

    /// Fold another occurrence of the same canonical herb into this one
    ///
    /// Fills a missing scientific name, unions list fields in first-seen
    /// order and appends the other source identifier unless it already occurs
    /// anywhere in this one. Tradition properties
    /// from `other` only fill gaps; values already present are kept.
    pub fn merge_with(&mut self, other: &ExtractedHerb, delimiter: &str) {
        if self.scientific_name.is_none() {
            self.scientific_name = other.scientific_name.clone();
        }

        extend_unique(&mut self.common_names, &other.common_names);
        extend_unique(&mut self.traditional_uses, &other.traditional_uses);
        extend_unique(&mut self.preparation_methods, &other.preparation_methods);
        extend_unique(&mut self.contraindications, &other.contraindications);
        extend_unique(&mut self.interactions, &other.interactions);

        let source = other.source_document.as_str();
        if !source.is_empty() && !self.source_document.contains(source) {
            if !self.source_document.is_empty() {
                self.source_document.push_str(delimiter);
            }
            self.source_document.push_str(source);
        }

        self.merge_ayurvedic(&other.ayurvedic);
        self.merge_tcm(&other.tcm);
    }

    fn merge_ayurvedic(&mut self, other: &AyurvedicProperties) {
        let mine = &mut self.ayurvedic;
        if mine.sanskrit_name.is_none() {
            mine.sanskrit_name = other.sanskrit_name.clone();
        }
        for (dosha, effect) in &other.doshas {
            mine.doshas.entry(dosha.clone()).or_insert(*effect);
        }
        extend_unique(&mut mine.rasa, &other.rasa);
        if mine.virya.is_none() {
            mine.virya = other.virya.clone();
        }
        if mine.vipaka.is_none() {
            mine.vipaka = other.vipaka.clone();
        }
    }

    fn merge_tcm(&mut self, other: &TcmProperties) {
        let mine = &mut self.tcm;
        if mine.pinyin_name.is_none() {
            mine.pinyin_name = other.pinyin_name.clone();
        }
        if mine.chinese_name.is_none() {
            mine.chinese_name = other.chinese_name.clone();
        }
        extend_unique(&mut mine.channels, &other.channels);
        if mine.temperature.is_none() {
            mine.temperature = other.temperature.clone();
        }
        extend_unique(&mut mine.taste, &other.taste);
        extend_unique(&mut mine.actions, &other.actions);
    }
}
