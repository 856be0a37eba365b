// Check a list of herbs and medications for known interactions
//
// Usage: check_interactions <name>...
// Env: APOTHECARY_REGISTRY, APOTHECARY_EXTRACTED (herbs exported by scan_corpus)

use anyhow::{bail, Context};
use apothecary::{InteractionRegistry, InteractionReport, JsonFormatter, MarkdownFormatter};
use std::fs;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apothecary=info,check_interactions=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        bail!("Usage: check_interactions <name>...");
    }

    let mut registry = match std::env::var("APOTHECARY_REGISTRY") {
        Ok(path) => InteractionRegistry::load(Path::new(&path))?,
        Err(_) => InteractionRegistry::builtin()?,
    };

    if let Ok(path) = std::env::var("APOTHECARY_EXTRACTED") {
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read extracted herbs: {}", path))?;
        let herbs = JsonFormatter::parse(&json)
            .with_context(|| format!("Failed to parse extracted herbs: {}", path))?;
        registry.register_extracted(&herbs);
    }

    let report = InteractionReport::check(&registry, &names);
    print!("{}", MarkdownFormatter::format(&report));

    Ok(())
}
