//! Herb occurrence scanning
//!
//! One case-insensitive, word-bounded alternation per registry record covers
//! the canonical name and every alias that record owns. Longer names are
//! tried first so "Kava Kava" wins over "Kava" for occurrence spans.

use regex::Regex;
use tracing::{debug, warn};

use super::herb::ExtractedHerb;
use crate::error::ApothecaryError;
use crate::parsers::{AyurvedicParser, TcmParser};
use crate::taxonomy::{HerbRecord, HerbRegistry};

/// A record found in a text, with the byte spans of its mentions
#[derive(Debug, Clone)]
pub struct HerbHit<'a> {
    pub index: usize,
    pub record: &'a HerbRecord,
    pub spans: Vec<(usize, usize)>,
}

fn name_matcher(names: &[String]) -> crate::Result<Option<Regex>> {
    if names.is_empty() {
        return Ok(None);
    }
    let mut sorted: Vec<&str> = names.iter().map(String::as_str).collect();
    sorted.sort_by_key(|n| std::cmp::Reverse(n.chars().count()));
    let alternation = sorted
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)\b(?:{})\b", alternation);
    Regex::new(&pattern)
        .map(Some)
        .map_err(|source| ApothecaryError::Pattern { rule: pattern, source })
}

/// Scans text for every known herb and runs the matching property parsers
#[derive(Debug, Clone)]
pub struct ExtractionEngine<'r> {
    registry: &'r HerbRegistry,
    /// Parallel to `registry.records()`; `None` when a record owns no names
    matchers: Vec<Option<Regex>>,
    ayurvedic: AyurvedicParser,
    tcm: TcmParser,
}

impl<'r> ExtractionEngine<'r> {
    pub fn new(registry: &'r HerbRegistry) -> crate::Result<Self> {
        let matchers = (0..registry.len())
            .map(|i| name_matcher(registry.names_for(i)))
            .collect::<crate::Result<Vec<_>>>()?;

        debug!("Compiled name matchers for {} herbs", matchers.len());

        Ok(Self {
            registry,
            matchers,
            ayurvedic: AyurvedicParser::with_registry(registry)?,
            tcm: TcmParser::with_registry(registry)?,
        })
    }

    pub fn registry(&self) -> &'r HerbRegistry {
        self.registry
    }

    /// Records mentioned in `text`, in registry order
    pub fn scan(&self, text: &str) -> Vec<HerbHit<'r>> {
        if text.is_empty() {
            return Vec::new();
        }

        let records = self.registry.records();
        self.matchers
            .iter()
            .enumerate()
            .filter_map(|(index, matcher)| {
                let matcher = matcher.as_ref()?;
                let spans: Vec<(usize, usize)> =
                    matcher.find_iter(text).map(|m| (m.start(), m.end())).collect();
                if spans.is_empty() {
                    return None;
                }
                Some(HerbHit { index, record: &records[index], spans })
            })
            .collect()
    }

    /// Seed a herb from its record and run the parsers its tradition calls for
    pub fn build_herb(&self, record: &HerbRecord, text: &str, source: &str) -> ExtractedHerb {
        let mut herb = ExtractedHerb::from_record(record, source);
        if record.tradition.uses_ayurvedic() {
            herb.ayurvedic = self.ayurvedic.extract(text, &record.name);
        }
        if record.tradition.uses_tcm() {
            herb.tcm = self.tcm.extract(text, &record.name);
        }
        herb
    }

    /// One herb per mentioned record, in registry order
    pub fn extract(&self, text: &str, source: &str) -> Vec<ExtractedHerb> {
        if text.trim().is_empty() {
            warn!("No text to scan for {:?}", source);
            return Vec::new();
        }

        let herbs: Vec<ExtractedHerb> = self
            .scan(text)
            .into_iter()
            .map(|hit| self.build_herb(hit.record, text, source))
            .collect();

        debug!("Found {} herbs in {:?}", herbs.len(), source);
        herbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::DoshaEffect;
    use crate::taxonomy::Tradition;

    #[test]
    fn test_name_matcher_prefers_longer_names() {
        let names = vec!["Kava".to_string(), "Kava Kava".to_string()];
        let matcher = name_matcher(&names).unwrap().unwrap();
        let m = matcher.find("some kava kava tea").unwrap();
        assert_eq!(m.as_str(), "kava kava");
        assert!(name_matcher(&[]).unwrap().is_none());
    }

    #[test]
    fn test_name_matcher_escapes_punctuation() {
        let names = vec!["St. John's Wort".to_string()];
        let matcher = name_matcher(&names).unwrap().unwrap();
        assert!(matcher.is_match("took st. john's wort daily"));
        assert!(!matcher.is_match("took stX john's wort daily"));
    }

    #[test]
    fn test_extract_western_only() {
        let registry = HerbRegistry::builtin().unwrap();
        let engine = ExtractionEngine::new(&registry).unwrap();
        let herbs = engine.extract(
            "Patient is taking St. John's Wort and Valerian Root for sleep.",
            "intake.txt",
        );
        let names: Vec<&str> = herbs.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["St. John's Wort", "Valerian Root"]);
        assert!(herbs.iter().all(|h| h.tradition == Tradition::Western));
        assert!(herbs.iter().all(|h| h.ayurvedic.doshas.is_empty() && h.tcm.channels.is_empty()));
        assert_eq!(herbs[0].source_document, "intake.txt");
    }

    #[test]
    fn test_alias_mention_finds_canonical_record() {
        let registry = HerbRegistry::builtin().unwrap();
        let engine = ExtractionEngine::new(&registry).unwrap();
        let herbs = engine.extract("Ren Shen is warm and tonifies Qi.", "tcm.txt");
        assert_eq!(herbs.len(), 1);
        let ginseng = &herbs[0];
        assert_eq!(ginseng.name, "Ginseng");
        assert_eq!(ginseng.tradition, Tradition::Mixed);
        assert_eq!(ginseng.tcm.pinyin_name.as_deref(), Some("Rén Shēn"));
        assert_eq!(ginseng.tcm.temperature.as_deref(), Some("Warm"));
        assert_eq!(ginseng.tcm.actions, vec!["tonifies Qi"]);
    }

    #[test]
    fn test_ayurvedic_dispatch() {
        let registry = HerbRegistry::builtin().unwrap();
        let engine = ExtractionEngine::new(&registry).unwrap();
        let herbs = engine.extract("Neem pacifies Pitta and is Shita.", "a.txt");
        assert_eq!(herbs.len(), 1);
        assert_eq!(herbs[0].ayurvedic.doshas["pitta"], DoshaEffect::Pacifies);
        assert_eq!(herbs[0].ayurvedic.virya.as_deref(), Some("Shita (cooling)"));
        assert_eq!(herbs[0].ayurvedic.sanskrit_name.as_deref(), Some("निम्ब"));
        assert!(herbs[0].tcm.temperature.is_none());
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let registry = HerbRegistry::builtin().unwrap();
        let engine = ExtractionEngine::new(&registry).unwrap();
        assert!(engine.extract("", "empty.txt").is_empty());
        assert!(engine.extract("   \n", "blank.txt").is_empty());
        assert!(engine.scan("").is_empty());
    }

    #[test]
    fn test_scan_reports_every_span() {
        let registry = HerbRegistry::builtin().unwrap();
        let engine = ExtractionEngine::new(&registry).unwrap();
        let hits = engine.scan("Kava here, kava kava there");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.name, "Kava");
        assert_eq!(hits[0].spans, vec![(0, 4), (11, 20)]);
    }
}
