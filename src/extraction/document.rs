//! Document-level tradition detection from source labels

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ApothecaryError;

/// Medical tradition a source document appears to cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentTradition {
    Ayurveda,
    #[serde(rename = "Traditional Chinese Medicine")]
    TraditionalChineseMedicine,
    #[serde(rename = "Mediterranean/European")]
    MediterraneanEuropean,
    African,
    #[serde(rename = "Latin American")]
    LatinAmerican,
    #[serde(rename = "Native American")]
    NativeAmerican,
    #[default]
    General,
}

impl DocumentTradition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentTradition::Ayurveda => "Ayurveda",
            DocumentTradition::TraditionalChineseMedicine => "Traditional Chinese Medicine",
            DocumentTradition::MediterraneanEuropean => "Mediterranean/European",
            DocumentTradition::African => "African",
            DocumentTradition::LatinAmerican => "Latin American",
            DocumentTradition::NativeAmerican => "Native American",
            DocumentTradition::General => "General",
        }
    }
}

impl fmt::Display for DocumentTradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Checked in order against the lower-cased label
static LABEL_PATTERNS: &[(DocumentTradition, &[&str])] = &[
    (DocumentTradition::Ayurveda, &[r"ayurved"]),
    (DocumentTradition::TraditionalChineseMedicine, &[r"tcm", r"chinese\s+medicine", r"chinese"]),
    (DocumentTradition::MediterraneanEuropean, &[r"mediterranean", r"european"]),
    (DocumentTradition::African, &[r"african"]),
    (DocumentTradition::LatinAmerican, &[r"latin", r"mexican", r"dominican", r"south\s+america"]),
    (DocumentTradition::NativeAmerican, &[r"native\s+american"]),
];

/// Classifies source labels (file names, titles) by substring patterns
#[derive(Debug, Clone)]
pub struct TraditionDetector {
    rules: Vec<(DocumentTradition, Regex)>,
}

impl TraditionDetector {
    pub fn new() -> crate::Result<Self> {
        let mut rules = Vec::new();
        for (tradition, patterns) in LABEL_PATTERNS {
            for pattern in *patterns {
                let regex = Regex::new(pattern).map_err(|source| ApothecaryError::Pattern {
                    rule: pattern.to_string(),
                    source,
                })?;
                rules.push((*tradition, regex));
            }
        }
        Ok(Self { rules })
    }

    pub fn detect(&self, label: &str) -> DocumentTradition {
        let lowered = label.to_lowercase();
        self.rules
            .iter()
            .find(|(_, regex)| regex.is_match(&lowered))
            .map(|(tradition, _)| *tradition)
            .unwrap_or_default()
    }
}

/// Per-document ingestion summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub source: String,
    pub tradition: DocumentTradition,
    /// Canonical names found, in registry order
    pub herbs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_file_names() {
        let detector = TraditionDetector::new().unwrap();
        assert_eq!(detector.detect("Ayurvedic_Materia_Medica.pdf"), DocumentTradition::Ayurveda);
        assert_eq!(detector.detect("TCM herbs.txt"), DocumentTradition::TraditionalChineseMedicine);
        assert_eq!(detector.detect("west african remedies"), DocumentTradition::African);
        assert_eq!(detector.detect("Dominican botanicas"), DocumentTradition::LatinAmerican);
        assert_eq!(detector.detect("Native  American plants"), DocumentTradition::NativeAmerican);
        assert_eq!(detector.detect("notes.txt"), DocumentTradition::General);
    }

    #[test]
    fn test_earlier_tradition_wins() {
        let detector = TraditionDetector::new().unwrap();
        assert_eq!(
            detector.detect("ayurveda vs chinese medicine"),
            DocumentTradition::Ayurveda
        );
    }

    #[test]
    fn test_serializes_display_name() {
        let json = serde_json::to_string(&DocumentTradition::MediterraneanEuropean).unwrap();
        assert_eq!(json, "\"Mediterranean/European\"");
        assert_eq!(DocumentTradition::LatinAmerican.to_string(), "Latin American");
    }
}
