//! Built-in substances and pairwise interactions
//!
//! Informational reference data only; not medical advice.

use super::types::{Severity, SubstanceCategory};

#[derive(Debug, Clone, Copy)]
pub struct StaticSubstance {
    pub name: &'static str,
    pub category: SubstanceCategory,
    pub common_names: &'static [&'static str],
    pub primary_effects: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct StaticInteraction {
    pub substance1: &'static str,
    pub substance2: &'static str,
    pub severity: Severity,
    pub effects: &'static [&'static str],
    pub description: &'static str,
    pub recommendation: &'static str,
}

// ============================================================================
// SUBSTANCES
// ============================================================================

pub static SUBSTANCES: &[StaticSubstance] = &[
    StaticSubstance {
        name: "St. John's Wort",
        category: SubstanceCategory::Herb,
        common_names: &["st johns wort", "hypericum", "hypericum perforatum"],
        primary_effects: &["mood elevation", "antidepressant"],
        description: "Popular herbal supplement used for mild to moderate depression",
    },
    StaticSubstance {
        name: "Valerian Root",
        category: SubstanceCategory::Herb,
        common_names: &["valerian", "valerian root"],
        primary_effects: &["relaxation", "sedation", "sleep aid"],
        description: "Herbal supplement commonly used for relaxation and sleep",
    },
    StaticSubstance {
        name: "Kava",
        category: SubstanceCategory::Herb,
        common_names: &["kava", "kava kava", "piper methysticum"],
        primary_effects: &["relaxation", "anxiety relief"],
        description: "Herb used for anxiety and relaxation",
    },
    StaticSubstance {
        name: "Ginseng",
        category: SubstanceCategory::Herb,
        common_names: &["ginseng", "panax ginseng", "asian ginseng"],
        primary_effects: &["energy", "stimulation", "cognitive enhancement"],
        description: "Popular herb used for energy and mental clarity",
    },
    StaticSubstance {
        name: "Chamomile",
        category: SubstanceCategory::Herb,
        common_names: &["chamomile", "chamomile tea"],
        primary_effects: &["relaxation", "mild sedation", "digestive aid"],
        description: "Gentle herb commonly used in teas for relaxation",
    },
    StaticSubstance {
        name: "Ginkgo Biloba",
        category: SubstanceCategory::Herb,
        common_names: &["ginkgo", "ginkgo biloba", "maidenhair tree"],
        primary_effects: &["cognitive enhancement", "circulation"],
        description: "Herb used for memory and circulation support",
    },
    StaticSubstance {
        name: "Passionflower",
        category: SubstanceCategory::Herb,
        common_names: &["passionflower", "passiflora"],
        primary_effects: &["relaxation", "anxiety relief", "sleep aid"],
        description: "Herb used for anxiety and sleep support",
    },
    StaticSubstance {
        name: "Warfarin",
        category: SubstanceCategory::Prescription,
        common_names: &["warfarin", "coumadin"],
        primary_effects: &["blood thinner", "anticoagulant"],
        description: "Prescription blood thinner",
    },
    StaticSubstance {
        name: "SSRIs",
        category: SubstanceCategory::Prescription,
        common_names: &["ssri", "ssris", "selective serotonin reuptake inhibitor"],
        primary_effects: &["antidepressant"],
        description: "Common class of antidepressant medications",
    },
    StaticSubstance {
        name: "Benzodiazepines",
        category: SubstanceCategory::Prescription,
        common_names: &["benzodiazepine", "benzodiazepines", "benzos"],
        primary_effects: &["sedation", "anxiety relief"],
        description: "Prescription medications for anxiety and sedation",
    },
    StaticSubstance {
        name: "Ibuprofen",
        category: SubstanceCategory::Otc,
        common_names: &["ibuprofen", "advil", "motrin"],
        primary_effects: &["pain relief", "anti-inflammatory"],
        description: "Common over-the-counter pain reliever",
    },
    StaticSubstance {
        name: "Aspirin",
        category: SubstanceCategory::Otc,
        common_names: &["aspirin", "acetylsalicylic acid"],
        primary_effects: &["pain relief", "blood thinner"],
        description: "Common over-the-counter pain reliever and blood thinner",
    },
    StaticSubstance {
        name: "Diphenhydramine",
        category: SubstanceCategory::Otc,
        common_names: &["diphenhydramine", "benadryl"],
        primary_effects: &["antihistamine", "sedation"],
        description: "Common over-the-counter antihistamine and sleep aid",
    },
];

// ============================================================================
// INTERACTIONS (unordered pairs; insertion order breaks severity ties)
// ============================================================================

pub static INTERACTIONS: &[StaticInteraction] = &[
    StaticInteraction {
        substance1: "St. John's Wort",
        substance2: "SSRIs",
        severity: Severity::Severe,
        effects: &["serotonin syndrome", "confusion", "agitation", "rapid heart rate"],
        description: "St. John's Wort can increase serotonin levels dangerously when combined with SSRIs",
        recommendation: "DO NOT COMBINE. Consult healthcare provider immediately if taking both.",
    },
    StaticInteraction {
        substance1: "Valerian Root",
        substance2: "Benzodiazepines",
        severity: Severity::Major,
        effects: &["excessive sedation", "drowsiness", "impaired coordination"],
        description: "Both substances have sedative effects that can be dangerously enhanced",
        recommendation: "Avoid combination. If needed, consult healthcare provider for proper dosing.",
    },
    StaticInteraction {
        substance1: "Valerian Root",
        substance2: "Diphenhydramine",
        severity: Severity::Moderate,
        effects: &["excessive drowsiness", "sedation"],
        description: "Combining sedative herbs with antihistamines can cause excessive drowsiness",
        recommendation: "Avoid driving or operating machinery. Consider reducing doses or timing separately.",
    },
    StaticInteraction {
        substance1: "Kava",
        substance2: "Benzodiazepines",
        severity: Severity::Major,
        effects: &["excessive sedation", "liver damage risk"],
        description: "Kava combined with benzodiazepines increases sedation and liver toxicity risk",
        recommendation: "Avoid combination. Consult healthcare provider.",
    },
    StaticInteraction {
        substance1: "Ginkgo Biloba",
        substance2: "Warfarin",
        severity: Severity::Major,
        effects: &["increased bleeding risk", "bruising"],
        description: "Ginkgo has blood-thinning properties that enhance warfarin's effects",
        recommendation: "Avoid combination. Requires close monitoring if used together.",
    },
    StaticInteraction {
        substance1: "Ginkgo Biloba",
        substance2: "Aspirin",
        severity: Severity::Moderate,
        effects: &["increased bleeding risk"],
        description: "Both substances have blood-thinning effects",
        recommendation: "Use caution. Monitor for unusual bleeding or bruising.",
    },
    StaticInteraction {
        substance1: "Ginkgo Biloba",
        substance2: "Ibuprofen",
        severity: Severity::Moderate,
        effects: &["increased bleeding risk"],
        description: "Ginkgo may enhance the blood-thinning effects of NSAIDs",
        recommendation: "Use caution. Monitor for unusual bleeding or bruising.",
    },
    StaticInteraction {
        substance1: "Ginseng",
        substance2: "Warfarin",
        severity: Severity::Moderate,
        effects: &["altered blood clotting", "reduced warfarin effectiveness"],
        description: "Ginseng may interfere with warfarin's anticoagulant effects",
        recommendation: "Avoid or use with close medical supervision.",
    },
    StaticInteraction {
        substance1: "Chamomile",
        substance2: "Warfarin",
        severity: Severity::Minor,
        effects: &["potential increased bleeding risk"],
        description: "Chamomile may have mild blood-thinning effects",
        recommendation: "Generally safe in tea form, but monitor if using concentrated extracts.",
    },
    StaticInteraction {
        substance1: "Chamomile",
        substance2: "Benzodiazepines",
        severity: Severity::Minor,
        effects: &["mild additional sedation"],
        description: "Chamomile has mild sedative effects that may add to benzodiazepines",
        recommendation: "Generally safe in moderate amounts. Avoid excessive use.",
    },
    StaticInteraction {
        substance1: "Passionflower",
        substance2: "Benzodiazepines",
        severity: Severity::Moderate,
        effects: &["excessive sedation", "drowsiness"],
        description: "Both have sedative effects that can be enhanced when combined",
        recommendation: "Use caution. May need to adjust dosages. Consult healthcare provider.",
    },
];
