//! Herb taxonomies and the merged herb registry
//!
//! Three independent source tables (Western, Ayurvedic, TCM) are merged once
//! at startup into a [`HerbRegistry`]:
//! - `tables`: embedded default tables
//! - `merge`: cross-taxonomy duplicate detection
//! - `registry`: canonical records plus the case-folded alias index

pub mod merge;
pub mod registry;
pub mod tables;

pub use merge::merge_taxonomies;
pub use registry::{HerbRecord, HerbRegistry, RegistryStats};

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::ApothecaryError;
use tables::StaticHerb;

/// Medical tradition of a herb record
///
/// `Mixed` marks records drawn from two or more source taxonomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tradition {
    #[default]
    Western,
    Ayurvedic,
    Tcm,
    Mixed,
}

impl Tradition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tradition::Western => "western",
            Tradition::Ayurvedic => "ayurvedic",
            Tradition::Tcm => "tcm",
            Tradition::Mixed => "mixed",
        }
    }

    /// Whether the Ayurvedic property parser applies
    pub fn uses_ayurvedic(&self) -> bool {
        matches!(self, Tradition::Ayurvedic | Tradition::Mixed)
    }

    /// Whether the TCM property parser applies
    pub fn uses_tcm(&self) -> bool {
        matches!(self, Tradition::Tcm | Tradition::Mixed)
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a source taxonomy table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyEntry {
    pub name: String,
    pub scientific_name: Option<String>,
    pub common_names: Vec<String>,
    pub sanskrit_name: Option<String>,
    pub pinyin_name: Option<String>,
    pub chinese_name: Option<String>,
}

impl From<&StaticHerb> for TaxonomyEntry {
    fn from(herb: &StaticHerb) -> Self {
        Self {
            name: herb.name.to_string(),
            scientific_name: herb.scientific_name.map(str::to_string),
            common_names: herb.common_names.iter().map(|s| s.to_string()).collect(),
            sanskrit_name: herb.sanskrit_name.map(str::to_string),
            pinyin_name: herb.pinyin_name.map(str::to_string),
            chinese_name: herb.chinese_name.map(str::to_string),
        }
    }
}

/// The three source tables, each in merge order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    pub western: Vec<TaxonomyEntry>,
    pub ayurvedic: Vec<TaxonomyEntry>,
    pub tcm: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    /// Embedded default tables
    pub fn builtin() -> Self {
        Self {
            western: tables::WESTERN_HERBS.iter().map(TaxonomyEntry::from).collect(),
            ayurvedic: tables::AYURVEDIC_HERBS.iter().map(TaxonomyEntry::from).collect(),
            tcm: tables::TCM_HERBS.iter().map(TaxonomyEntry::from).collect(),
        }
    }

    /// Load tables from a JSON file shaped `{"western": [...], "ayurvedic": [...], "tcm": [...]}`
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read taxonomy file: {:?}", path))?;

        let taxonomy: Taxonomy = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse taxonomy JSON")?;

        taxonomy
            .validate()
            .with_context(|| format!("Invalid taxonomy in {:?}", path))?;

        Ok(taxonomy)
    }

    /// Tables paired with the tradition they contribute
    pub fn sources(&self) -> [(Tradition, &[TaxonomyEntry]); 3] {
        [
            (Tradition::Western, self.western.as_slice()),
            (Tradition::Ayurvedic, self.ayurvedic.as_slice()),
            (Tradition::Tcm, self.tcm.as_slice()),
        ]
    }

    /// Reject empty or repeated names within a single table
    pub fn validate(&self) -> crate::Result<()> {
        for (tradition, entries) in self.sources() {
            let mut seen = FxHashSet::default();
            for entry in entries {
                if entry.name.trim().is_empty() || !seen.insert(entry.name.as_str()) {
                    return Err(ApothecaryError::DuplicateHerb {
                        name: entry.name.clone(),
                        table: tradition.as_str(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.western.len() + self.ayurvedic.len() + self.tcm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
