//! Extraction settings
//!
//! Loaded from JSON; every field is optional and falls back to the defaults
//! below.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for corpus ingestion and note scraping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Characters of context taken on each side of a herb mention
    pub context_window: usize,
    /// Notes are cut to this many characters
    pub max_note_chars: usize,
    /// Notes must be longer than this many characters to be kept
    pub min_note_chars: usize,
    /// Separator between source identifiers on merged records
    pub source_delimiter: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            context_window: 500,
            max_note_chars: 200,
            min_note_chars: 3,
            source_delimiter: "; ".to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read extraction config: {:?}", path))?;

        let config: ExtractionConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse extraction config JSON")?;

        if config.source_delimiter.is_empty() {
            anyhow::bail!("source_delimiter must not be empty");
        }

        Ok(config)
    }
}
