//! Ayurvedic property parser
//!
//! | Field  | Policy                                             |
//! |--------|----------------------------------------------------|
//! | virya  | first match: Ushna, then Shita                     |
//! | vipaka | first match: Madhura, Amla, Katu                   |
//! | rasa   | accumulate over the fixed taste vocabulary         |
//! | doshas | pacify rules, then aggravate rules (later wins)    |

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::rules::{Emit, FieldRules, MatchPolicy};
use crate::taxonomy::HerbRegistry;
use crate::utils::fold_name;

/// Effect of a herb on a dosha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoshaEffect {
    Pacifies,
    Aggravates,
}

/// Ayurvedic bundle of an extracted herb
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AyurvedicProperties {
    pub sanskrit_name: Option<String>,
    /// Lower-cased dosha name → effect
    pub doshas: BTreeMap<String, DoshaEffect>,
    pub rasa: Vec<String>,
    pub virya: Option<String>,
    pub vipaka: Option<String>,
}

const DOSHA_PACIFY: &[(&str, Emit)] = &[
    (r"(?:Balances?|Pacifies?)\s+(Vata|Pitta|Kapha)", Emit::Capture),
    (r"(Vata|Pitta|Kapha)[- ](?:balancing|pacifying)", Emit::Capture),
];

const DOSHA_AGGRAVATE: &[(&str, Emit)] = &[
    (r"(?:Aggravates?|Increases?)\s+(Vata|Pitta|Kapha)", Emit::Capture),
    (r"(Vata|Pitta|Kapha)[- ](?:aggravating|increasing)", Emit::Capture),
];

const RASA_TERMS: &[&str] = &[
    "Madhura", "Sweet", "Amla", "Sour", "Lavana", "Salty",
    "Katu", "Pungent", "Tikta", "Bitter", "Kashaya", "Astringent",
];

const VIRYA: &[(&str, Emit)] = &[
    (r"\b(?:Ushna|Heating|Hot\s+potency)\b", Emit::Label("Ushna (heating)")),
    (r"\b(?:Shita|Cooling|Cool\s+potency)\b", Emit::Label("Shita (cooling)")),
];

const VIPAKA: &[(&str, Emit)] = &[
    (r"Vipaka:\s*Madhura", Emit::Label("Madhura (sweet)")),
    (r"Vipaka:\s*Amla", Emit::Label("Amla (sour)")),
    (r"Vipaka:\s*Katu", Emit::Label("Katu (pungent)")),
];

#[derive(Debug, Clone)]
pub struct AyurvedicParser {
    pacify: FieldRules,
    aggravate: FieldRules,
    rasa: FieldRules,
    virya: FieldRules,
    vipaka: FieldRules,
    /// fold(canonical name) → Sanskrit name
    sanskrit_names: FxHashMap<String, String>,
}

impl AyurvedicParser {
    /// Parser without native-name lookup
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            pacify: FieldRules::compile("doshas", MatchPolicy::Accumulate, DOSHA_PACIFY)?,
            aggravate: FieldRules::compile("doshas", MatchPolicy::Accumulate, DOSHA_AGGRAVATE)?,
            rasa: FieldRules::vocabulary("rasa", MatchPolicy::Accumulate, RASA_TERMS)?,
            virya: FieldRules::compile("virya", MatchPolicy::FirstMatch, VIRYA)?,
            vipaka: FieldRules::compile("vipaka", MatchPolicy::FirstMatch, VIPAKA)?,
            sanskrit_names: FxHashMap::default(),
        })
    }

    /// Parser that fills Sanskrit names from merged registry records
    pub fn with_registry(registry: &HerbRegistry) -> crate::Result<Self> {
        let mut parser = Self::new()?;
        parser.sanskrit_names = registry
            .records()
            .iter()
            .filter_map(|r| {
                r.sanskrit_name
                    .as_ref()
                    .map(|s| (fold_name(&r.name), s.clone()))
            })
            .collect();
        Ok(parser)
    }

    /// Extract every Ayurvedic field from `text`
    pub fn extract(&self, text: &str, herb_name: &str) -> AyurvedicProperties {
        AyurvedicProperties {
            sanskrit_name: self.sanskrit_names.get(&fold_name(herb_name)).cloned(),
            doshas: self.parse_doshas(text),
            rasa: self.parse_rasa(text),
            virya: self.parse_virya(text),
            vipaka: self.parse_vipaka(text),
        }
    }

    pub fn parse_doshas(&self, text: &str) -> BTreeMap<String, DoshaEffect> {
        let mut doshas = BTreeMap::new();
        for dosha in self.pacify.apply(text) {
            doshas.insert(dosha.to_lowercase(), DoshaEffect::Pacifies);
        }
        for dosha in self.aggravate.apply(text) {
            doshas.insert(dosha.to_lowercase(), DoshaEffect::Aggravates);
        }
        doshas
    }

    pub fn parse_rasa(&self, text: &str) -> Vec<String> {
        self.rasa.apply(text)
    }

    pub fn parse_virya(&self, text: &str) -> Option<String> {
        self.virya.first(text)
    }

    pub fn parse_vipaka(&self, text: &str) -> Option<String> {
        self.vipaka.first(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> AyurvedicParser {
        AyurvedicParser::new().unwrap()
    }

    #[test]
    fn test_ashwagandha_sample() {
        let text = "Ashwagandha (Withania somnifera) is a powerful adaptogen. \
                    It balances Vata and Kapha doshas. The rasa is bitter, astringent, and sweet. \
                    Virya is heating (Ushna).";
        let props = parser().extract(text, "Ashwagandha");
        assert_eq!(props.doshas.get("vata"), Some(&DoshaEffect::Pacifies));
        assert_eq!(props.doshas.len(), 1);
        assert_eq!(props.virya.as_deref(), Some("Ushna (heating)"));
        assert_eq!(props.rasa, vec!["Sweet", "Bitter", "Astringent"]);
        assert!(props.vipaka.is_none());
        assert!(props.sanskrit_name.is_none());
    }

    #[test]
    fn test_pacify_verb_form_is_not_a_rule() {
        let doshas = parser().parse_doshas("Used to pacify Vata. Pacifies Kapha.");
        assert_eq!(doshas.get("vata"), None);
        assert_eq!(doshas.get("kapha"), Some(&DoshaEffect::Pacifies));
    }

    #[test]
    fn test_aggravate_overwrites_pacify() {
        let doshas = parser().parse_doshas("Pacifies Pitta. Aggravates pitta. Kapha-balancing.");
        assert_eq!(doshas.get("pitta"), Some(&DoshaEffect::Aggravates));
        assert_eq!(doshas.get("kapha"), Some(&DoshaEffect::Pacifies));
    }

    #[test]
    fn test_virya_prefers_ushna() {
        assert_eq!(parser().parse_virya("cooling, yet Ushna").as_deref(), Some("Ushna (heating)"));
        assert_eq!(parser().parse_virya("Cool potency").as_deref(), Some("Shita (cooling)"));
        assert_eq!(parser().parse_virya("no potency stated"), None);
    }

    #[test]
    fn test_vipaka_labels() {
        assert_eq!(parser().parse_vipaka("Vipaka: Katu").as_deref(), Some("Katu (pungent)"));
        assert_eq!(parser().parse_vipaka("vipaka:madhura").as_deref(), Some("Madhura (sweet)"));
        assert_eq!(parser().parse_vipaka("Katu taste"), None);
    }

    #[test]
    fn test_sanskrit_name_from_registry() {
        let registry = HerbRegistry::builtin().unwrap();
        let parser = AyurvedicParser::with_registry(&registry).unwrap();
        let props = parser.extract("", "ashwagandha");
        assert_eq!(props.sanskrit_name.as_deref(), Some("अश्वगंधा"));
        assert!(props.doshas.is_empty() && props.rasa.is_empty());
    }
}
