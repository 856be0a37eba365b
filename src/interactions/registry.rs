//! Substance registry and pairwise interaction matcher

use anyhow::Context;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::data;
use super::types::{Interaction, Substance};
use crate::error::ApothecaryError;
use crate::extraction::ExtractedHerb;
use crate::utils::fold_name;

/// On-disk shape for a custom registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryTables {
    pub substances: Vec<Substance>,
    pub interactions: Vec<Interaction>,
}

/// Curated substances and the interactions between them
///
/// Names resolve through a case-folded index holding every canonical name and
/// declared alias. Registering a name already in the index re-points it: the
/// last registration wins.
#[derive(Debug, Clone, Default)]
pub struct InteractionRegistry {
    substances: Vec<Substance>,
    /// fold(canonical name) → substance position
    canonical: FxHashMap<String, usize>,
    /// fold(name or alias) → substance position
    index: FxHashMap<String, usize>,
    interactions: Vec<Interaction>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in substances and interactions
    pub fn builtin() -> crate::Result<Self> {
        let mut registry = Self::new();
        for substance in data::SUBSTANCES {
            registry.add_substance(Substance::from(substance));
        }
        for interaction in data::INTERACTIONS {
            registry.add_interaction(Interaction::from(interaction))?;
        }
        info!(
            "Interaction registry: {} substances, {} interactions",
            registry.substances.len(),
            registry.interactions.len()
        );
        Ok(registry)
    }

    pub fn from_tables(tables: RegistryTables) -> crate::Result<Self> {
        let mut registry = Self::new();
        for substance in tables.substances {
            registry.add_substance(substance);
        }
        for interaction in tables.interactions {
            registry.add_interaction(interaction)?;
        }
        Ok(registry)
    }

    /// Load a registry from a JSON file shaped `{"substances": [...], "interactions": [...]}`
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read interaction registry: {:?}", path))?;

        let tables: RegistryTables = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse interaction registry JSON")?;

        Self::from_tables(tables)
            .with_context(|| format!("Invalid interaction registry in {:?}", path))
    }

    /// Register a substance under its name and every alias
    ///
    /// A substance whose canonical name is already registered replaces the
    /// earlier one in place, keeping the earlier spelling of the name so
    /// registered interactions still refer to it.
    pub fn add_substance(&mut self, mut substance: Substance) {
        let key = fold_name(&substance.name);
        let position = match self.canonical.get(&key) {
            Some(&i) => {
                debug!("Replacing substance '{}'", substance.name);
                substance.name = self.substances[i].name.clone();
                self.substances[i] = substance;
                i
            }
            None => {
                let i = self.substances.len();
                self.canonical.insert(key.clone(), i);
                self.substances.push(substance);
                i
            }
        };

        self.index.insert(key, position);
        for alias in &self.substances[position].common_names {
            self.index.insert(fold_name(alias), position);
        }
    }

    /// Register an interaction; both endpoints must already be registered
    ///
    /// Endpoint names are stored in their canonical spelling.
    pub fn add_interaction(&mut self, mut interaction: Interaction) -> crate::Result<()> {
        let first = self.canonical_name(&interaction.substance1)?;
        let second = self.canonical_name(&interaction.substance2)?;
        interaction.substance1 = first;
        interaction.substance2 = second;
        self.interactions.push(interaction);
        Ok(())
    }

    fn canonical_name(&self, name: &str) -> crate::Result<String> {
        self.canonical
            .get(&fold_name(name))
            .map(|&i| self.substances[i].name.clone())
            .ok_or_else(|| ApothecaryError::UnknownSubstance(name.to_string()))
    }

    /// Register herbs found by extraction as herb substances
    ///
    /// Returns how many were new to the registry.
    pub fn register_extracted(&mut self, herbs: &[ExtractedHerb]) -> usize {
        let mut added = 0;
        for herb in herbs {
            if !self.canonical.contains_key(&fold_name(&herb.name)) {
                added += 1;
            }
            self.add_substance(Substance::from_extracted(herb));
        }
        info!("Registered {} extracted herbs ({} new)", herbs.len(), added);
        added
    }

    /// Look up a substance by canonical name or alias, case-insensitively
    pub fn find_substance(&self, name: &str) -> Option<&Substance> {
        self.index.get(&fold_name(name)).map(|&i| &self.substances[i])
    }

    /// Unique substances in registration order
    pub fn substances(&self) -> &[Substance] {
        &self.substances
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// Resolve raw names to substances
    ///
    /// Returns the distinct substances in first-seen order and the inputs
    /// that matched nothing.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> (Vec<&Substance>, Vec<String>) {
        let mut seen: FxHashSet<usize> = FxHashSet::default();
        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();

        for name in names {
            let name = name.as_ref();
            match self.index.get(&fold_name(name)) {
                Some(&i) => {
                    if seen.insert(i) {
                        resolved.push(&self.substances[i]);
                    }
                }
                None => unresolved.push(name.to_string()),
            }
        }

        (resolved, unresolved)
    }

    /// Known interactions among `names`, most severe first
    ///
    /// Unknown names are dropped. Fewer than two distinct substances yields
    /// an empty list. Equal severities keep registration order.
    pub fn check_interactions<S: AsRef<str>>(&self, names: &[S]) -> Vec<&Interaction> {
        let (resolved, _) = self.resolve(names);
        if resolved.len() < 2 {
            return Vec::new();
        }

        let present: FxHashSet<&str> = resolved.iter().map(|s| s.name.as_str()).collect();
        let mut found: Vec<&Interaction> = self
            .interactions
            .iter()
            .filter(|i| {
                present.contains(i.substance1.as_str()) && present.contains(i.substance2.as_str())
            })
            .collect();

        found.sort_by(|a, b| b.severity.cmp(&a.severity));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::{Severity, SubstanceCategory};

    fn substance(name: &str, aliases: &[&str]) -> Substance {
        Substance {
            name: name.to_string(),
            category: SubstanceCategory::Herb,
            common_names: aliases.iter().map(|a| a.to_string()).collect(),
            primary_effects: vec![],
            description: String::new(),
        }
    }

    fn interaction(a: &str, b: &str, severity: Severity) -> Interaction {
        Interaction {
            substance1: a.to_string(),
            substance2: b.to_string(),
            severity,
            effects: vec![],
            description: format!("{} + {}", a, b),
            recommendation: String::new(),
        }
    }

    #[test]
    fn test_builtin_counts() {
        let registry = InteractionRegistry::builtin().unwrap();
        assert_eq!(registry.substances().len(), 13);
        assert_eq!(registry.interactions().len(), 11);
    }

    #[test]
    fn test_find_substance_by_alias() {
        let registry = InteractionRegistry::builtin().unwrap();
        assert_eq!(registry.find_substance("Coumadin").unwrap().name, "Warfarin");
        assert_eq!(registry.find_substance("ST JOHNS WORT").unwrap().name, "St. John's Wort");
        assert!(registry.find_substance("melatonin").is_none());
    }

    #[test]
    fn test_severe_pair() {
        let registry = InteractionRegistry::builtin().unwrap();
        let found = registry.check_interactions(&["St. John's Wort", "SSRIs"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::Severe);
    }

    #[test]
    fn test_single_or_duplicate_substance_checks_nothing() {
        let registry = InteractionRegistry::builtin().unwrap();
        assert!(registry.check_interactions(&["Ibuprofen"]).is_empty());
        assert!(registry.check_interactions(&["advil", "Motrin", "ibuprofen"]).is_empty());
        assert!(registry.check_interactions::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_unknown_names_dropped() {
        let registry = InteractionRegistry::builtin().unwrap();
        let (resolved, unresolved) = registry.resolve(&["kava", "unobtainium", "benzos", "Kava Kava"]);
        let names: Vec<&str> = resolved.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Kava", "Benzodiazepines"]);
        assert_eq!(unresolved, vec!["unobtainium"]);
        let found = registry.check_interactions(&["kava", "unobtainium", "benzos"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::Major);
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let registry = InteractionRegistry::builtin().unwrap();
        let found = registry.check_interactions(&["Ginkgo", "Aspirin", "Ibuprofen", "Warfarin"]);
        let pairs: Vec<(&str, &str)> = found
            .iter()
            .map(|i| (i.substance1.as_str(), i.substance2.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Ginkgo Biloba", "Warfarin"),
                ("Ginkgo Biloba", "Aspirin"),
                ("Ginkgo Biloba", "Ibuprofen"),
            ]
        );
    }

    #[test]
    fn test_last_alias_registration_wins() {
        let mut registry = InteractionRegistry::new();
        registry.add_substance(substance("Chamomile", &["manzanilla"]));
        registry.add_substance(substance("Roman Chamomile", &["manzanilla"]));
        assert_eq!(registry.find_substance("manzanilla").unwrap().name, "Roman Chamomile");
        assert_eq!(registry.find_substance("chamomile").unwrap().name, "Chamomile");
        assert_eq!(registry.substances().len(), 2);
    }

    #[test]
    fn test_replacing_substance_keeps_canonical_spelling() {
        let mut registry = InteractionRegistry::builtin().unwrap();
        assert_eq!(registry.check_interactions(&["Kava", "Benzodiazepines"]).len(), 1);

        registry.add_substance(substance("KAVA", &["awa"]));
        assert_eq!(registry.substances().len(), 13);
        assert_eq!(registry.find_substance("awa").unwrap().name, "Kava");
        assert_eq!(registry.check_interactions(&["kava", "Benzodiazepines"]).len(), 1);
        assert_eq!(registry.check_interactions(&["AWA", "benzos"]).len(), 1);
    }

    #[test]
    fn test_interaction_requires_registered_endpoints() {
        let mut registry = InteractionRegistry::new();
        registry.add_substance(substance("Kava", &[]));
        let err = registry
            .add_interaction(interaction("Kava", "Alcohol", Severity::Major))
            .unwrap_err();
        assert!(matches!(err, ApothecaryError::UnknownSubstance(ref n) if n == "Alcohol"));
        assert!(registry.interactions().is_empty());
    }

    #[test]
    fn test_interaction_endpoints_stored_canonically() {
        let mut registry = InteractionRegistry::new();
        registry.add_substance(substance("Kava", &[]));
        registry.add_substance(substance("Alcohol", &["ethanol"]));
        registry
            .add_interaction(interaction("kava", "ALCOHOL", Severity::Major))
            .unwrap();
        assert_eq!(registry.interactions()[0].substance1, "Kava");
        assert_eq!(registry.interactions()[0].substance2, "Alcohol");
        assert_eq!(registry.check_interactions(&["ethanol", "Kava"]).len(), 1);
    }

    #[test]
    fn test_register_extracted_herbs() {
        let mut registry = InteractionRegistry::builtin().unwrap();
        let herbs = vec![
            ExtractedHerb { name: "Ashwagandha".to_string(), ..Default::default() },
            ExtractedHerb { name: "Kava".to_string(), ..Default::default() },
        ];
        assert_eq!(registry.register_extracted(&herbs), 1);
        assert_eq!(registry.substances().len(), 14);
        assert!(registry.find_substance("ashwagandha").is_some());
        // Replaced in place, interactions still apply
        assert_eq!(registry.check_interactions(&["Kava", "Benzodiazepines"]).len(), 1);
    }

    #[test]
    fn test_from_tables_json() {
        let json = r#"{
            "substances": [
                {"name": "Kava", "category": "herb", "common_names": ["awa"]},
                {"name": "Alcohol", "category": "otc"}
            ],
            "interactions": [
                {"substance1": "Kava", "substance2": "Alcohol", "severity": "severe"}
            ]
        }"#;
        let tables: RegistryTables = serde_json::from_str(json).unwrap();
        let registry = InteractionRegistry::from_tables(tables).unwrap();
        let found = registry.check_interactions(&["Alcohol", "awa"]);
        assert_eq!(found[0].severity, Severity::Severe);
    }
}
