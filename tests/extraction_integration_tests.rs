//! Extraction Integration Tests
//!
//! Runs the full pipeline over the built-in taxonomy: table merge, alias
//! resolution, tradition-aware property parsing, corpus merge and JSON export.

use apothecary::extraction::{Corpus, DocumentScanner, DocumentTradition};
use apothecary::taxonomy::TaxonomyEntry;
use apothecary::{
    DoshaEffect, ExtractionConfig, ExtractionEngine, HerbRegistry, JsonFormatter, Taxonomy,
    Tradition,
};

const ASHWAGANDHA_SAMPLE: &str = "Ashwagandha (Withania somnifera) is a powerful adaptogen. \
    It balances Vata and Kapha doshas. The rasa is bitter, astringent, and sweet. \
    Virya is heating (Ushna).";

fn entry(name: &str, scientific: &str) -> TaxonomyEntry {
    TaxonomyEntry {
        name: name.to_string(),
        scientific_name: Some(scientific.to_string()),
        ..Default::default()
    }
}

#[test]
fn every_alias_resolves_to_its_record() {
    let registry = HerbRegistry::builtin().unwrap();
    let mut checked = 0;
    for (name, record) in registry.aliases() {
        let by_name = registry.resolve(name).unwrap();
        assert!(std::ptr::eq(by_name, record), "{} resolved elsewhere", name);
        let shouted = registry.resolve(&name.to_uppercase()).unwrap();
        assert!(std::ptr::eq(shouted, record));
        let canonical = registry.resolve(&record.name).unwrap();
        assert!(std::ptr::eq(canonical, record));
        checked += 1;
    }
    assert!(checked > registry.len());
}

#[test]
fn same_scientific_name_merges_into_mixed_record() {
    let mut licorice = entry("Licorice", "Glycyrrhiza glabra");
    licorice.common_names = vec!["Sweet Root".to_string()];
    let mut gan_cao = entry("Gan Cao", "Glycyrrhiza glabra");
    gan_cao.pinyin_name = Some("Gān Cǎo".to_string());
    gan_cao.chinese_name = Some("甘草".to_string());

    let taxonomy = Taxonomy {
        western: vec![licorice],
        ayurvedic: vec![],
        tcm: vec![gan_cao],
    };
    let registry = HerbRegistry::build(&taxonomy).unwrap();

    assert_eq!(registry.len(), 1);
    let record = registry.resolve("gan cao").unwrap();
    assert_eq!(record.name, "Licorice");
    assert_eq!(record.tradition, Tradition::Mixed);
    assert_eq!(record.sources, vec![Tradition::Western, Tradition::Tcm]);
    assert_eq!(record.pinyin_name.as_deref(), Some("Gān Cǎo"));
    assert_eq!(record.chinese_name.as_deref(), Some("甘草"));
    assert!(record.aliases.contains(&"Sweet Root".to_string()));
    assert!(record.aliases.contains(&"Gan Cao".to_string()));
}

#[test]
fn builtin_ginger_collects_all_three_traditions_of_names() {
    let registry = HerbRegistry::builtin().unwrap();
    let ginger = registry.resolve("Ginger").unwrap();
    assert_eq!(ginger.tradition, Tradition::Mixed);
    assert_eq!(ginger.sanskrit_name.as_deref(), Some("शुण्ठी"));
    assert_eq!(ginger.pinyin_name.as_deref(), Some("Shēng Jiāng"));
    assert_eq!(registry.resolve("sheng jiang").unwrap().name, "Ginger");
    assert_eq!(registry.resolve("Gan Jiang").unwrap().name, "Ginger");
}

#[test]
fn tulsi_and_holy_basil_stay_distinct() {
    let registry = HerbRegistry::builtin().unwrap();
    let holy_basil = registry.resolve("Holy Basil").unwrap();
    let tulsi = registry.resolve("Tulsi").unwrap();
    assert_eq!(holy_basil.tradition, Tradition::Western);
    assert_eq!(tulsi.tradition, Tradition::Ayurvedic);
    assert!(!std::ptr::eq(holy_basil, tulsi));
}

#[test]
fn western_sentence_yields_two_western_records() {
    let registry = HerbRegistry::builtin().unwrap();
    let engine = ExtractionEngine::new(&registry).unwrap();
    let herbs = engine.extract(
        "Patient is taking St. John's Wort and Valerian Root for sleep.",
        "intake_form.txt",
    );

    assert_eq!(herbs.len(), 2);
    assert_eq!(herbs[0].name, "St. John's Wort");
    assert_eq!(herbs[1].name, "Valerian Root");
    for herb in &herbs {
        assert_eq!(herb.tradition, Tradition::Western);
        assert_eq!(herb.source_document, "intake_form.txt");
    }
}

#[test]
fn ashwagandha_properties() {
    let registry = HerbRegistry::builtin().unwrap();
    let engine = ExtractionEngine::new(&registry).unwrap();
    let herbs = engine.extract(ASHWAGANDHA_SAMPLE, "materia_medica_ayurveda.txt");

    let ashwagandha = herbs.iter().find(|h| h.name == "Ashwagandha").unwrap();
    assert_eq!(ashwagandha.tradition, Tradition::Ayurvedic);
    assert_eq!(ashwagandha.ayurvedic.doshas.get("vata"), Some(&DoshaEffect::Pacifies));
    assert_eq!(ashwagandha.ayurvedic.virya.as_deref(), Some("Ushna (heating)"));
    assert_eq!(ashwagandha.ayurvedic.sanskrit_name.as_deref(), Some("अश्वगंधा"));
    assert!(ashwagandha.tcm.temperature.is_none());
    assert!(ashwagandha.tcm.channels.is_empty());
}

#[test]
fn empty_document_yields_no_herbs() {
    let registry = HerbRegistry::builtin().unwrap();
    let engine = ExtractionEngine::new(&registry).unwrap();
    assert!(engine.extract("", "empty.txt").is_empty());
}

#[test]
fn corpus_export_round_trips_through_json() {
    let registry = HerbRegistry::builtin().unwrap();
    let scanner = DocumentScanner::new(&registry, ExtractionConfig::default()).unwrap();
    let documents = vec![
        ("ayurveda_notes.txt", ASHWAGANDHA_SAMPLE.to_string()),
        (
            "tcm_herbal.txt",
            "Ren Shen is warm and sweet. It enters the Spleen and Lung channels and tonifies Qi."
                .to_string(),
        ),
        (
            "western_intake.txt",
            "Ashwagandha is used for stress. Kava is contraindicated with alcohol.".to_string(),
        ),
    ];

    let mut corpus = Corpus::new(scanner.config());
    corpus.ingest_all(&scanner, &documents);

    let json = JsonFormatter::format(corpus.herbs()).unwrap();
    let parsed = JsonFormatter::parse(&json).unwrap();
    assert_eq!(parsed.as_slice(), corpus.herbs());

    let ashwagandha = corpus.get("ashwagandha").unwrap();
    assert_eq!(ashwagandha.source_document, "ayurveda_notes.txt; western_intake.txt");

    let ginseng = corpus.get("Ginseng").unwrap();
    assert_eq!(ginseng.tradition, Tradition::Mixed);
    assert_eq!(ginseng.tcm.temperature.as_deref(), Some("Warm"));

    assert_eq!(corpus.documents()[0].tradition, DocumentTradition::Ayurveda);
    assert_eq!(
        corpus.documents()[1].tradition,
        DocumentTradition::TraditionalChineseMedicine
    );
}

#[test]
fn export_objects_carry_every_field() {
    let registry = HerbRegistry::builtin().unwrap();
    let engine = ExtractionEngine::new(&registry).unwrap();
    let herbs = engine.extract("Kava tea.", "a.txt");

    let value: serde_json::Value =
        serde_json::from_str(&JsonFormatter::format_compact(&herbs).unwrap()).unwrap();
    let object = value[0].as_object().unwrap();
    for key in [
        "name",
        "scientific_name",
        "common_names",
        "traditional_uses",
        "preparation_methods",
        "contraindications",
        "interactions",
        "source_document",
        "tradition",
        "sanskrit_name",
        "doshas",
        "rasa",
        "virya",
        "vipaka",
        "pinyin_name",
        "chinese_name",
        "channels",
        "tcm_temperature",
        "tcm_taste",
        "tcm_actions",
    ] {
        assert!(object.contains_key(key), "missing {}", key);
    }
    assert_eq!(object.len(), 20);
}

#[test]
fn taxonomy_file_with_duplicate_names_is_rejected() {
    let path = std::env::temp_dir().join("apothecary_duplicate_taxonomy.json");
    std::fs::write(
        &path,
        r#"{"ayurvedic": [{"name": "Neem"}, {"name": "Neem"}]}"#,
    )
    .unwrap();
    let result = Taxonomy::load(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
}
