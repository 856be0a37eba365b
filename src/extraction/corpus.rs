//! Multi-document corpus ingestion
//!
//! [`DocumentScanner`] turns one document into herbs plus provenance notes;
//! it borrows immutable state only, so documents can be scanned in parallel.
//! [`Corpus`] folds scans together, keyed by case-folded canonical name, in
//! the order documents were supplied.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::document::{DocumentSummary, TraditionDetector};
use super::engine::ExtractionEngine;
use super::herb::ExtractedHerb;
use crate::config::ExtractionConfig;
use crate::parsers::NoteExtractor;
use crate::taxonomy::HerbRegistry;
use crate::utils::{context_windows, fold_name};

/// Result of scanning a single document
#[derive(Debug, Clone)]
pub struct DocumentScan {
    pub summary: DocumentSummary,
    pub herbs: Vec<ExtractedHerb>,
}

/// Engine plus note scraping, configured once per run
#[derive(Debug, Clone)]
pub struct DocumentScanner<'r> {
    engine: ExtractionEngine<'r>,
    notes: NoteExtractor,
    detector: TraditionDetector,
    config: ExtractionConfig,
}

impl<'r> DocumentScanner<'r> {
    pub fn new(registry: &'r HerbRegistry, config: ExtractionConfig) -> crate::Result<Self> {
        Ok(Self {
            engine: ExtractionEngine::new(registry)?,
            notes: NoteExtractor::new(&config)?,
            detector: TraditionDetector::new()?,
            config,
        })
    }

    pub fn engine(&self) -> &ExtractionEngine<'r> {
        &self.engine
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract herbs and the notes around each mention
    pub fn scan(&self, text: &str, source: &str) -> DocumentScan {
        let tradition = self.detector.detect(source);

        if text.trim().is_empty() {
            warn!("No text extracted from {}", source);
        }

        let herbs: Vec<ExtractedHerb> = self
            .engine
            .scan(text)
            .into_iter()
            .map(|hit| {
                let mut herb = self.engine.build_herb(hit.record, text, source);
                let context = context_windows(text, hit.spans, self.config.context_window);
                herb.apply_notes(&self.notes.extract(&context));
                herb
            })
            .collect();

        debug!("{}: {} herbs ({})", source, herbs.len(), tradition);

        DocumentScan {
            summary: DocumentSummary {
                source: source.to_string(),
                tradition,
                herbs: herbs.iter().map(|h| h.name.clone()).collect(),
            },
            herbs,
        }
    }
}

/// Herbs accumulated across documents
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    herbs: Vec<ExtractedHerb>,
    /// fold(canonical name) → position in `herbs`
    index: FxHashMap<String, usize>,
    documents: Vec<DocumentSummary>,
    delimiter: String,
}

impl Corpus {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            delimiter: config.source_delimiter.clone(),
            ..Default::default()
        }
    }

    /// Merge one herb into the corpus
    pub fn add(&mut self, herb: ExtractedHerb) {
        let key = fold_name(&herb.name);
        match self.index.get(&key) {
            Some(&i) => self.herbs[i].merge_with(&herb, &self.delimiter),
            None => {
                self.index.insert(key, self.herbs.len());
                self.herbs.push(herb);
            }
        }
    }

    pub fn absorb(&mut self, scan: DocumentScan) {
        for herb in scan.herbs {
            self.add(herb);
        }
        self.documents.push(scan.summary);
    }

    /// Scan and merge a single document
    pub fn ingest(&mut self, scanner: &DocumentScanner<'_>, text: &str, source: &str) {
        let scan = scanner.scan(text, source);
        info!("Found {} herbs in {}", scan.herbs.len(), source);
        self.absorb(scan);
    }

    /// Scan documents in parallel, then merge in input order
    ///
    /// `documents` holds `(source, text)` pairs. The result is identical to
    /// calling [`Corpus::ingest`] on each pair in turn.
    pub fn ingest_all<S, T>(&mut self, scanner: &DocumentScanner<'_>, documents: &[(S, T)])
    where
        S: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        let scans: Vec<DocumentScan> = documents
            .par_iter()
            .map(|(source, text)| scanner.scan(text.as_ref(), source.as_ref()))
            .collect();

        for scan in scans {
            self.absorb(scan);
        }

        info!(
            "Ingested {} documents; {} unique herbs",
            documents.len(),
            self.herbs.len()
        );
    }

    pub fn get(&self, name: &str) -> Option<&ExtractedHerb> {
        self.index.get(&fold_name(name)).map(|&i| &self.herbs[i])
    }

    /// Herbs in first-seen order
    pub fn herbs(&self) -> &[ExtractedHerb] {
        &self.herbs
    }

    pub fn documents(&self) -> &[DocumentSummary] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.herbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.herbs.is_empty()
    }

    pub fn into_herbs(self) -> Vec<ExtractedHerb> {
        self.herbs
    }
}
