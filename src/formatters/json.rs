use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::extraction::ExtractedHerb;

/// JSON formatter for herb exports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format herbs as a pretty-printed JSON array
    pub fn format(herbs: &[ExtractedHerb]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(herbs)
    }

    /// Format herbs as compact JSON (no whitespace)
    pub fn format_compact(herbs: &[ExtractedHerb]) -> Result<String, serde_json::Error> {
        serde_json::to_string(herbs)
    }

    /// Parse an export produced by [`JsonFormatter::format`]
    pub fn parse(json: &str) -> crate::Result<Vec<ExtractedHerb>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write a pretty-printed export to `path`
    pub fn write(herbs: &[ExtractedHerb], path: &Path) -> anyhow::Result<()> {
        let json = Self::format(herbs).with_context(|| "Failed to serialize herbs")?;
        fs::write(path, json).with_context(|| format!("Failed to write export: {:?}", path))?;
        Ok(())
    }
}
