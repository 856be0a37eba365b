use crate::interactions::{Interaction, InteractionReport, Severity};

const SEVERITY_ORDER: [Severity; 4] = [
    Severity::Severe,
    Severity::Major,
    Severity::Moderate,
    Severity::Minor,
];

/// Markdown formatter for interaction reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format an interaction report as markdown
    pub fn format(report: &InteractionReport) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str("# Interaction Check\n\n");

        // Substances
        if report.substances.is_empty() {
            md.push_str("No known substances.\n\n");
        } else {
            md.push_str("**Substances:** ");
            md.push_str(&report.substance_names().join(", "));
            md.push_str("\n\n");
        }

        if !report.unresolved.is_empty() {
            md.push_str(&format!("*Not recognized:* {}\n\n", report.unresolved.join(", ")));
        }

        if !report.is_checkable() {
            md.push_str("At least two known substances are needed to check interactions.\n");
            return md;
        }

        if report.interactions.is_empty() {
            md.push_str("✅ No known interactions found.\n\n");
            md.push_str(
                "This does not guarantee safety. Always consult a healthcare provider.\n",
            );
            return md;
        }

        if report.has_critical {
            md.push_str("⚠️ **Critical interactions found. Consult a healthcare provider.**\n\n");
        }

        for severity in SEVERITY_ORDER {
            let mut group = report.at_severity(severity).peekable();
            if group.peek().is_none() {
                continue;
            }
            md.push_str(&format!("## {}\n\n", Self::severity_heading(severity)));
            for interaction in group {
                Self::format_interaction(&mut md, interaction);
            }
        }

        md
    }

    fn severity_heading(severity: Severity) -> &'static str {
        match severity {
            Severity::Severe => "🔴 Severe",
            Severity::Major => "🟠 Major",
            Severity::Moderate => "🟡 Moderate",
            Severity::Minor => "🟢 Minor",
        }
    }

    fn format_interaction(md: &mut String, interaction: &Interaction) {
        md.push_str(&format!(
            "### {} + {}\n\n",
            interaction.substance1, interaction.substance2
        ));
        if !interaction.description.is_empty() {
            md.push_str(&format!("{}  \n", interaction.description));
        }
        if !interaction.effects.is_empty() {
            md.push_str(&format!("*Effects:* {}  \n", interaction.effects.join(", ")));
        }
        if !interaction.recommendation.is_empty() {
            md.push_str(&format!("*Recommendation:* {}\n", interaction.recommendation));
        }
        md.push('\n');
    }
}
