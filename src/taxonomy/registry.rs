//! Merged herb registry
//!
//! Canonical records in insertion order plus a case-folded name index.
//! Index priority: canonical names first, then declared aliases in record
//! order. An alias already claimed by another record stays in that record's
//! `aliases` list for export but never re-points the index, so every indexed
//! name resolves to exactly one canonical record.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{merge_taxonomies, Taxonomy, Tradition};
use crate::utils::{fold_name, push_unique};

/// Canonical herb record after cross-taxonomy merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HerbRecord {
    pub name: String,
    pub tradition: Tradition,
    pub scientific_name: Option<String>,
    pub aliases: Vec<String>,
    pub sanskrit_name: Option<String>,
    pub pinyin_name: Option<String>,
    pub chinese_name: Option<String>,
    /// Source taxonomies that contributed to this record, first contributor first
    pub sources: Vec<Tradition>,
}

impl HerbRecord {
    /// Fresh single-source record
    pub fn new(name: &str, source: Tradition) -> Self {
        Self {
            name: name.to_string(),
            tradition: source,
            scientific_name: None,
            aliases: Vec::new(),
            sanskrit_name: None,
            pinyin_name: None,
            chinese_name: None,
            sources: vec![source],
        }
    }

    /// Record another contributing taxonomy and recompute the tradition
    pub fn add_source(&mut self, source: Tradition) {
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
        self.tradition = match self.sources.as_slice() {
            [single] => *single,
            _ => Tradition::Mixed,
        };
    }

    pub fn add_alias(&mut self, alias: &str) -> bool {
        if alias == self.name {
            return false;
        }
        push_unique(&mut self.aliases, alias)
    }
}

/// Per-tradition record counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_herbs: usize,
    pub western_herbs: usize,
    pub ayurvedic_herbs: usize,
    pub tcm_herbs: usize,
    pub mixed_tradition: usize,
}

/// Immutable registry of merged herb records
#[derive(Debug, Clone)]
pub struct HerbRegistry {
    records: Vec<HerbRecord>,
    /// fold(name) → record index
    index: FxHashMap<String, usize>,
    /// Names each record owns in the index, canonical name first
    owned: Vec<Vec<String>>,
}

impl HerbRegistry {
    /// Merge the given taxonomy tables
    pub fn build(taxonomy: &Taxonomy) -> crate::Result<Self> {
        let records = merge_taxonomies(taxonomy)?;
        Ok(Self::from_records(records))
    }

    /// Registry over the embedded default tables
    pub fn builtin() -> crate::Result<Self> {
        Self::build(&Taxonomy::builtin())
    }

    /// Index already-merged records
    pub fn from_records(records: Vec<HerbRecord>) -> Self {
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut owned: Vec<Vec<String>> = vec![Vec::new(); records.len()];

        for (i, record) in records.iter().enumerate() {
            let key = fold_name(&record.name);
            if let Some(&other) = index.get(&key) {
                warn!(
                    "Canonical name '{}' folds onto '{}'; keeping the earlier record",
                    record.name, records[other].name
                );
                continue;
            }
            index.insert(key, i);
            owned[i].push(record.name.clone());
        }

        let mut shadowed = 0usize;
        for (i, record) in records.iter().enumerate() {
            for alias in &record.aliases {
                let key = fold_name(alias);
                match index.get(&key) {
                    Some(&holder) if holder != i => shadowed += 1,
                    Some(_) => {}
                    None => {
                        index.insert(key, i);
                        owned[i].push(alias.clone());
                    }
                }
            }
        }

        debug!("{} declared aliases already claimed by other records", shadowed);

        let registry = Self { records, index, owned };
        let stats = registry.statistics();
        info!(
            "Herb registry: {} records ({} western, {} ayurvedic, {} tcm, {} mixed), {} indexed names",
            stats.total_herbs,
            stats.western_herbs,
            stats.ayurvedic_herbs,
            stats.tcm_herbs,
            stats.mixed_tradition,
            registry.index.len()
        );
        registry
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[HerbRecord] {
        &self.records
    }

    /// Resolve a canonical name or alias, case-insensitively
    pub fn resolve(&self, name: &str) -> Option<&HerbRecord> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Record index for a canonical name or alias
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&fold_name(name)).copied()
    }

    /// Names that resolve to the record at `index`, canonical first
    pub fn names_for(&self, index: usize) -> &[String] {
        self.owned.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every indexed name paired with the record it resolves to
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &HerbRecord)> + '_ {
        self.owned
            .iter()
            .zip(&self.records)
            .flat_map(|(names, record)| names.iter().map(move |n| (n.as_str(), record)))
    }

    pub fn statistics(&self) -> RegistryStats {
        let mut stats = RegistryStats {
            total_herbs: self.records.len(),
            ..Default::default()
        };
        for record in &self.records {
            match record.tradition {
                Tradition::Western => stats.western_herbs += 1,
                Tradition::Ayurvedic => stats.ayurvedic_herbs += 1,
                Tradition::Tcm => stats.tcm_herbs += 1,
                Tradition::Mixed => stats.mixed_tradition += 1,
            }
        }
        stats
    }
}
