// Scan plain-text documents for herbs and export the merged corpus as JSON
//
// Usage: scan_corpus <file>...
// Env: APOTHECARY_CONFIG, APOTHECARY_TAXONOMY, APOTHECARY_OUTPUT

use anyhow::{bail, Context};
use apothecary::extraction::{Corpus, DocumentScanner};
use apothecary::{ExtractionConfig, HerbRegistry, JsonFormatter, Taxonomy, Tradition};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apothecary=info,scan_corpus=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let files: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if files.is_empty() {
        bail!("Usage: scan_corpus <file>...");
    }

    let config = match std::env::var("APOTHECARY_CONFIG") {
        Ok(path) => ExtractionConfig::load(Path::new(&path))?,
        Err(_) => ExtractionConfig::default(),
    };
    let taxonomy = match std::env::var("APOTHECARY_TAXONOMY") {
        Ok(path) => Taxonomy::load(Path::new(&path))?,
        Err(_) => Taxonomy::builtin(),
    };
    let output = std::env::var("APOTHECARY_OUTPUT")
        .unwrap_or_else(|_| "extracted_herbs.json".to_string());

    tracing::info!("Configuration:");
    tracing::info!("  context_window: {}", config.context_window);
    tracing::info!("  taxonomy entries: {}", taxonomy.len());
    tracing::info!("  output: {}", output);

    let registry = HerbRegistry::build(&taxonomy)?;
    let stats = registry.statistics();
    tracing::info!(
        "Registry: {} herbs ({} western, {} ayurvedic, {} tcm, {} mixed)",
        stats.total_herbs,
        stats.western_herbs,
        stats.ayurvedic_herbs,
        stats.tcm_herbs,
        stats.mixed_tradition
    );

    let mut documents: Vec<(String, String)> = Vec::with_capacity(files.len());
    for path in &files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {:?}", path))?;
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        documents.push((source, text));
    }

    let scanner = DocumentScanner::new(&registry, config)?;
    let mut corpus = Corpus::new(scanner.config());
    corpus.ingest_all(&scanner, &documents);

    for summary in corpus.documents() {
        tracing::info!(
            "  {} [{}]: {} herbs",
            summary.source,
            summary.tradition,
            summary.herbs.len()
        );
    }

    let mut by_tradition: FxHashMap<Tradition, usize> = FxHashMap::default();
    for herb in corpus.herbs() {
        *by_tradition.entry(herb.tradition).or_insert(0) += 1;
    }
    for tradition in [Tradition::Western, Tradition::Ayurvedic, Tradition::Tcm, Tradition::Mixed] {
        tracing::info!(
            "  {}: {}",
            tradition,
            by_tradition.get(&tradition).copied().unwrap_or(0)
        );
    }

    JsonFormatter::write(corpus.herbs(), Path::new(&output))?;
    tracing::info!("Wrote {} herbs to {}", corpus.len(), output);

    Ok(())
}
