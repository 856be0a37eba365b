use serde::{Deserialize, Serialize};
use std::fmt;

use super::data::{StaticInteraction, StaticSubstance};
use crate::extraction::ExtractedHerb;
use crate::utils::{fold_name, truncate_at_word_boundary};

/// Interaction severity, ordered minor < moderate < major < severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Moderate,
    Major,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Major => "major",
            Severity::Severe => "severe",
        }
    }

    /// Major and severe interactions need a provider's sign-off
    pub fn is_critical(&self) -> bool {
        matches!(self, Severity::Major | Severity::Severe)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstanceCategory {
    Herb,
    Supplement,
    Otc,
    Prescription,
}

impl SubstanceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubstanceCategory::Herb => "herb",
            SubstanceCategory::Supplement => "supplement",
            SubstanceCategory::Otc => "otc",
            SubstanceCategory::Prescription => "prescription",
        }
    }
}

/// Herb, supplement or medication known to the interaction registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substance {
    pub name: String,
    pub category: SubstanceCategory,
    #[serde(default)]
    pub common_names: Vec<String>,
    #[serde(default)]
    pub primary_effects: Vec<String>,
    #[serde(default)]
    pub description: String,
}

const MAX_ALIASES: usize = 5;
const MAX_EFFECTS: usize = 3;
const MAX_EFFECT_CHARS: usize = 50;

impl Substance {
    /// Herb substance built from an extraction result
    ///
    /// Aliases are the first five distinct lower-cased names among the herb
    /// name, scientific name, common names, pinyin and Sanskrit names.
    /// Effects are the leading clause of up to three short traditional uses.
    pub fn from_extracted(herb: &ExtractedHerb) -> Self {
        let mut common_names: Vec<String> = Vec::new();
        let candidates = std::iter::once(&herb.name)
            .chain(herb.scientific_name.iter())
            .chain(herb.common_names.iter())
            .chain(herb.tcm.pinyin_name.iter())
            .chain(herb.ayurvedic.sanskrit_name.iter());
        for name in candidates {
            let folded = fold_name(name);
            if !folded.is_empty() && !common_names.contains(&folded) {
                common_names.push(folded);
            }
            if common_names.len() == MAX_ALIASES {
                break;
            }
        }

        let mut primary_effects: Vec<String> = herb
            .traditional_uses
            .iter()
            .take(MAX_EFFECTS)
            .filter_map(|use_| {
                let clause = use_.split(',').next().unwrap_or_default().trim();
                (!clause.is_empty() && clause.chars().count() < MAX_EFFECT_CHARS)
                    .then(|| clause.to_string())
            })
            .collect();
        if primary_effects.is_empty() {
            primary_effects.push("traditional medicine".to_string());
        }

        let description = match herb.traditional_uses.first() {
            Some(first) => format!(
                "Used in {} for {}",
                herb.tradition,
                truncate_at_word_boundary(first, 100)
            ),
            None => format!("Herb from {}", herb.tradition),
        };

        Self {
            name: herb.name.clone(),
            category: SubstanceCategory::Herb,
            common_names,
            primary_effects,
            description: truncate_at_word_boundary(&description, 150).to_string(),
        }
    }
}

impl From<&StaticSubstance> for Substance {
    fn from(s: &StaticSubstance) -> Self {
        Self {
            name: s.name.to_string(),
            category: s.category,
            common_names: s.common_names.iter().map(|n| n.to_string()).collect(),
            primary_effects: s.primary_effects.iter().map(|e| e.to_string()).collect(),
            description: s.description.to_string(),
        }
    }
}

/// Known interaction between an unordered pair of canonical substance names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub substance1: String,
    pub substance2: String,
    pub severity: Severity,
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
}

impl Interaction {
    /// Whether this interaction is between `a` and `b`, in either order
    pub fn involves(&self, a: &str, b: &str) -> bool {
        (self.substance1 == a && self.substance2 == b)
            || (self.substance1 == b && self.substance2 == a)
    }
}

impl From<&StaticInteraction> for Interaction {
    fn from(i: &StaticInteraction) -> Self {
        Self {
            substance1: i.substance1.to_string(),
            substance2: i.substance2.to_string(),
            severity: i.severity,
            effects: i.effects.iter().map(|e| e.to_string()).collect(),
            description: i.description.to_string(),
            recommendation: i.recommendation.to_string(),
        }
    }
}
