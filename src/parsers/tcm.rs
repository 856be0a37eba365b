//! Traditional Chinese Medicine property parser

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::rules::{Emit, FieldRules, MatchPolicy, PatternRule};
use crate::taxonomy::HerbRegistry;
use crate::utils::fold_name;

/// TCM bundle of an extracted herb
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcmProperties {
    pub pinyin_name: Option<String>,
    pub chinese_name: Option<String>,
    pub channels: Vec<String>,
    #[serde(rename = "tcm_temperature")]
    pub temperature: Option<String>,
    #[serde(rename = "tcm_taste")]
    pub taste: Vec<String>,
    #[serde(rename = "tcm_actions")]
    pub actions: Vec<String>,
}

const CHANNEL_TERMS: &[&str] = &[
    "Liver", "Heart", "Spleen", "Lung", "Kidney", "Stomach",
    "Large Intestine", "Small Intestine", "Bladder", "Gallbladder",
    "Pericardium", "Triple Burner",
];

// Checked hottest to coldest; the first hit wins
const TEMPERATURE: &[(&str, Emit)] = &[
    (r"\b(?:Hot|热)\b", Emit::Label("Hot")),
    (r"\b(?:Warm|温)\b", Emit::Label("Warm")),
    (r"\b(?:Neutral|平)\b", Emit::Label("Neutral")),
    (r"\b(?:Cool|凉)\b", Emit::Label("Cool")),
    (r"\b(?:Cold|寒)\b", Emit::Label("Cold")),
];

const TASTE_TERMS: &[&str] = &[
    "Pungent", "Sweet", "Sour", "Bitter", "Salty", "辛", "甘", "酸", "苦", "咸",
];

const ACTIONS: &[(&str, Emit)] = &[
    (r"Tonif(?:y|ies)\s+(?:Qi|Blood|Yin|Yang)", Emit::Matched),
    (r"Clears?\s+(?:Heat|Damp|Phlegm|Wind)", Emit::Matched),
    (r"Moves?\s+(?:Qi|Blood)", Emit::Matched),
    (r"Transforms?\s+Phlegm", Emit::Matched),
    (r"Nourishes?\s+(?:Blood|Yin)", Emit::Matched),
];

/// Native names looked up by canonical herb name
#[derive(Debug, Clone)]
struct NativeNames {
    pinyin: Option<String>,
    chinese: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TcmParser {
    channels: FieldRules,
    temperature: FieldRules,
    taste: FieldRules,
    actions: FieldRules,
    native_names: FxHashMap<String, NativeNames>,
}

impl TcmParser {
    pub fn new() -> crate::Result<Self> {
        // A channel counts only when "channel"/"meridian" follows on the same line
        let channel_rules = CHANNEL_TERMS
            .iter()
            .map(|&term| {
                PatternRule::new(
                    &format!(r"\b{}\b.*(?:channel|meridian)", regex::escape(term)),
                    Emit::Label(term),
                )
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Self {
            channels: FieldRules::new("channels", MatchPolicy::Accumulate, channel_rules),
            temperature: FieldRules::compile("tcm_temperature", MatchPolicy::FirstMatch, TEMPERATURE)?,
            taste: FieldRules::vocabulary("tcm_taste", MatchPolicy::Accumulate, TASTE_TERMS)?,
            actions: FieldRules::compile("tcm_actions", MatchPolicy::Accumulate, ACTIONS)?,
            native_names: FxHashMap::default(),
        })
    }

    /// Parser that fills pinyin and Chinese names from merged registry records
    pub fn with_registry(registry: &HerbRegistry) -> crate::Result<Self> {
        let mut parser = Self::new()?;
        parser.native_names = registry
            .records()
            .iter()
            .filter(|r| r.pinyin_name.is_some() || r.chinese_name.is_some())
            .map(|r| {
                (
                    fold_name(&r.name),
                    NativeNames {
                        pinyin: r.pinyin_name.clone(),
                        chinese: r.chinese_name.clone(),
                    },
                )
            })
            .collect();
        Ok(parser)
    }

    pub fn extract(&self, text: &str, herb_name: &str) -> TcmProperties {
        let native = self.native_names.get(&fold_name(herb_name));
        TcmProperties {
            pinyin_name: native.and_then(|n| n.pinyin.clone()),
            chinese_name: native.and_then(|n| n.chinese.clone()),
            channels: self.channels.apply(text),
            temperature: self.temperature.first(text),
            taste: self.taste.apply(text),
            actions: self.actions.apply(text),
        }
    }

    pub fn parse_channels(&self, text: &str) -> Vec<String> {
        self.channels.apply(text)
    }

    pub fn parse_temperature(&self, text: &str) -> Option<String> {
        self.temperature.first(text)
    }

    pub fn parse_taste(&self, text: &str) -> Vec<String> {
        self.taste.apply(text)
    }

    pub fn parse_actions(&self, text: &str) -> Vec<String> {
        self.actions.apply(text)
    }
}
