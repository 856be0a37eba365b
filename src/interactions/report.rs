use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::registry::InteractionRegistry;
use super::types::{Interaction, Severity, Substance};

/// Outcome of checking a list of raw substance names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionReport {
    /// Resolved substances, first-seen order
    pub substances: Vec<Substance>,
    /// Inputs that matched no name or alias
    pub unresolved: Vec<String>,
    /// Most severe first
    pub interactions: Vec<Interaction>,
    pub has_critical: bool,
}

impl InteractionReport {
    pub fn check<S: AsRef<str>>(registry: &InteractionRegistry, inputs: &[S]) -> Self {
        let (resolved, unresolved) = registry.resolve(inputs);
        if !unresolved.is_empty() {
            warn!("Unresolved substances: {}", unresolved.join(", "));
        }

        let interactions: Vec<Interaction> = if resolved.len() < 2 {
            Vec::new()
        } else {
            let names: Vec<&str> = resolved.iter().map(|s| s.name.as_str()).collect();
            registry.check_interactions(&names).into_iter().cloned().collect()
        };

        let has_critical = interactions.iter().any(|i| i.severity.is_critical());
        debug!(
            "Checked {} substances: {} interactions",
            resolved.len(),
            interactions.len()
        );

        Self {
            substances: resolved.into_iter().cloned().collect(),
            unresolved,
            interactions,
            has_critical,
        }
    }

    /// At least two distinct substances were resolved
    pub fn is_checkable(&self) -> bool {
        self.substances.len() >= 2
    }

    pub fn substance_names(&self) -> Vec<&str> {
        self.substances.iter().map(|s| s.name.as_str()).collect()
    }

    /// Interactions of exactly `severity`, in report order
    pub fn at_severity(&self, severity: Severity) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter().filter(move |i| i.severity == severity)
    }
}
