//! Cross-taxonomy merge
//!
//! 1. Western entries seed the accumulator.
//! 2. Ayurvedic entries merge by exact name.
//! 3. TCM entries merge into the first record (insertion order) with an
//!    identical scientific name, and the TCM name becomes an alias.
//!
//! Name matching is only used for the Ayurvedic pass and scientific-name
//! matching only for the TCM pass. Native names are attached from the first
//! contributor; later matches never overwrite them.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::registry::HerbRecord;
use super::{Taxonomy, TaxonomyEntry, Tradition};

fn record_from_entry(entry: &TaxonomyEntry, source: Tradition) -> HerbRecord {
    let mut record = HerbRecord::new(&entry.name, source);
    record.scientific_name = entry.scientific_name.clone();
    for alias in &entry.common_names {
        record.add_alias(alias);
    }
    record.sanskrit_name = entry.sanskrit_name.clone();
    record.pinyin_name = entry.pinyin_name.clone();
    record.chinese_name = entry.chinese_name.clone();
    record
}

/// Merge the three source tables into canonical records
pub fn merge_taxonomies(taxonomy: &Taxonomy) -> crate::Result<Vec<HerbRecord>> {
    taxonomy.validate()?;

    let mut records: Vec<HerbRecord> = Vec::with_capacity(taxonomy.len());
    let mut by_name: FxHashMap<String, usize> = FxHashMap::default();

    for entry in &taxonomy.western {
        by_name.insert(entry.name.clone(), records.len());
        records.push(record_from_entry(entry, Tradition::Western));
    }

    for entry in &taxonomy.ayurvedic {
        match by_name.get(&entry.name) {
            Some(&i) => {
                let record = &mut records[i];
                record.add_source(Tradition::Ayurvedic);
                if record.sanskrit_name.is_none() {
                    record.sanskrit_name = entry.sanskrit_name.clone();
                }
                debug!("Ayurvedic '{}' merged by name", entry.name);
            }
            None => {
                by_name.insert(entry.name.clone(), records.len());
                records.push(record_from_entry(entry, Tradition::Ayurvedic));
            }
        }
    }

    for entry in &taxonomy.tcm {
        let matched = entry.scientific_name.as_deref().and_then(|sci| {
            records
                .iter()
                .position(|r| r.scientific_name.as_deref() == Some(sci))
        });

        match matched {
            Some(i) => {
                let record = &mut records[i];
                record.add_source(Tradition::Tcm);
                if record.pinyin_name.is_none() {
                    record.pinyin_name = entry.pinyin_name.clone();
                }
                if record.chinese_name.is_none() {
                    record.chinese_name = entry.chinese_name.clone();
                }
                record.add_alias(&entry.name);
                debug!("TCM '{}' merged into '{}'", entry.name, record.name);
            }
            None => {
                let mut record = record_from_entry(entry, Tradition::Tcm);
                if by_name.contains_key(&entry.name) {
                    // Same name, different plant: keep both under distinct keys
                    let qualifier = entry.scientific_name.as_deref().unwrap_or("tcm");
                    record.name = format!("{} ({})", entry.name, qualifier);
                    record.add_alias(&entry.name);
                    warn!(
                        "TCM '{}' shares a name with an unrelated herb; registered as '{}'",
                        entry.name, record.name
                    );
                }
                by_name.insert(record.name.clone(), records.len());
                records.push(record);
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, sci: Option<&str>, common: &[&str]) -> TaxonomyEntry {
        TaxonomyEntry {
            name: name.to_string(),
            scientific_name: sci.map(str::to_string),
            common_names: common.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn find<'a>(records: &'a [HerbRecord], name: &str) -> &'a HerbRecord {
        records.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_ayurvedic_name_match_becomes_mixed() {
        let mut ashwa = entry("Ashwagandha", Some("Withania somnifera"), &[]);
        ashwa.sanskrit_name = Some("अश्वगंधा".to_string());
        let taxonomy = Taxonomy {
            western: vec![entry("Ashwagandha", Some("Withania somnifera"), &["Winter Cherry"])],
            ayurvedic: vec![ashwa],
            tcm: vec![],
        };
        let records = merge_taxonomies(&taxonomy).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tradition, Tradition::Mixed);
        assert_eq!(records[0].sanskrit_name.as_deref(), Some("अश्वगंधा"));
        assert_eq!(records[0].aliases, vec!["Winter Cherry"]);
    }

    #[test]
    fn test_tcm_scientific_match_adds_alias_and_native_names() {
        let mut ren_shen = entry("Ren Shen", Some("Panax ginseng"), &["Ginseng"]);
        ren_shen.pinyin_name = Some("Rén Shēn".to_string());
        ren_shen.chinese_name = Some("人参".to_string());
        let taxonomy = Taxonomy {
            western: vec![entry("Ginseng", Some("Panax ginseng"), &["Asian Ginseng"])],
            ayurvedic: vec![],
            tcm: vec![ren_shen],
        };
        let records = merge_taxonomies(&taxonomy).unwrap();
        assert_eq!(records.len(), 1);
        let ginseng = &records[0];
        assert_eq!(ginseng.tradition, Tradition::Mixed);
        assert_eq!(ginseng.pinyin_name.as_deref(), Some("Rén Shēn"));
        assert_eq!(ginseng.chinese_name.as_deref(), Some("人参"));
        assert_eq!(ginseng.aliases, vec!["Asian Ginseng", "Ren Shen"]);
    }

    #[test]
    fn test_first_scientific_match_wins_and_keeps_first_native_names() {
        let mut sheng = entry("Sheng Jiang", Some("Zingiber officinale"), &[]);
        sheng.pinyin_name = Some("Shēng Jiāng".to_string());
        let mut gan = entry("Gan Jiang", Some("Zingiber officinale"), &[]);
        gan.pinyin_name = Some("Gān Jiāng".to_string());
        let taxonomy = Taxonomy {
            western: vec![],
            ayurvedic: vec![entry("Ginger", Some("Zingiber officinale"), &[])],
            tcm: vec![sheng, gan],
        };
        let records = merge_taxonomies(&taxonomy).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].aliases, vec!["Sheng Jiang", "Gan Jiang"]);
        assert_eq!(records[0].pinyin_name.as_deref(), Some("Shēng Jiāng"));
        assert_eq!(records[0].tradition, Tradition::Mixed);
    }

    #[test]
    fn test_tcm_only_match_stays_tcm() {
        let taxonomy = Taxonomy {
            western: vec![],
            ayurvedic: vec![],
            tcm: vec![
                entry("Rou Gui", Some("Cinnamomum cassia"), &[]),
                entry("Gui Zhi", Some("Cinnamomum cassia"), &[]),
            ],
        };
        let records = merge_taxonomies(&taxonomy).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tradition, Tradition::Tcm);
        assert_eq!(records[0].aliases, vec!["Gui Zhi"]);
    }

    #[test]
    fn test_missing_scientific_name_never_matches() {
        let taxonomy = Taxonomy {
            western: vec![entry("Kava", None, &[])],
            ayurvedic: vec![],
            tcm: vec![entry("Mystery Root", None, &[])],
        };
        let records = merge_taxonomies(&taxonomy).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].tradition, Tradition::Tcm);
    }

    #[test]
    fn test_tcm_name_collision_with_different_plant() {
        let taxonomy = Taxonomy {
            western: vec![entry("Ma Huang", Some("Something else"), &[])],
            ayurvedic: vec![],
            tcm: vec![entry("Ma Huang", Some("Ephedra sinica"), &["Ephedra"])],
        };
        let records = merge_taxonomies(&taxonomy).unwrap();
        assert_eq!(records.len(), 2);
        let tcm = find(&records, "Ma Huang (Ephedra sinica)");
        assert_eq!(tcm.tradition, Tradition::Tcm);
        assert!(tcm.aliases.contains(&"Ma Huang".to_string()));
        assert_eq!(find(&records, "Ma Huang").tradition, Tradition::Western);
    }

    #[test]
    fn test_builtin_cross_references() {
        let records = merge_taxonomies(&Taxonomy::builtin()).unwrap();
        let mixed: Vec<&str> = records
            .iter()
            .filter(|r| r.tradition == Tradition::Mixed)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(mixed, vec!["Ginseng", "Dong Quai", "Schisandra", "Astragalus", "Ginger"]);
        // Tulsi and Holy Basil share a scientific name but are only compared by name
        assert_eq!(find(&records, "Tulsi").tradition, Tradition::Ayurvedic);
        assert_eq!(find(&records, "Holy Basil").tradition, Tradition::Western);
    }
}
