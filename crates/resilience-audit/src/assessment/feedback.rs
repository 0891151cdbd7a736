//! Immediate per-answer feedback for the form layer.

use serde::{Deserialize, Serialize};

use super::answers::{AnswerStore, AnswerValue};
use super::rules::matching::{matches_ignore_case, select_tier, TierSelection};
use super::rules::RuleSet;

const CRITICAL_HINTS: &[&str] = &["no", "nessun", "mai", "assent"];
const WARNING_HINTS: &[&str] = &["parzial", "informal", "alcuni", "limitato"];
const GOOD_HINTS: &[&str] = &["sì", "yes", "completo", "ottimo", "certificat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackLevel {
    Critical,
    Warning,
    Good,
    Neutral,
}

impl FeedbackLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICO",
            Self::Warning => "ATTENZIONE",
            Self::Good => "OTTIMO",
            Self::Neutral => "INFO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub question: String,
    pub level: FeedbackLevel,
    pub message: String,
    pub best_practice: Option<String>,
    /// Concrete remediation steps, when the catalog carries any for this answer.
    pub advice: Option<String>,
}

/// Classifies one answer, preferring the rule table over keyword heuristics.
pub fn feedback(rule_set: &RuleSet, question: &str, value: &AnswerValue) -> AnswerFeedback {
    let mut result = classify(rule_set, question, value);
    result.advice = match value.options().as_slice() {
        [answer] => rule_set.catalog().advice(question, answer).map(str::to_string),
        _ => None,
    };
    result
}

fn classify(rule_set: &RuleSet, question: &str, value: &AnswerValue) -> AnswerFeedback {
    let scored = rule_set
        .rule_for(question)
        .zip(rule_set.catalog().question(question))
        .filter(|_| !value.is_empty());

    if let Some((rule, catalog_question)) = scored {
        let answers = AnswerStore::new().with_value(question, value.clone());
        let (level, best_practice) = match select_tier(rule, catalog_question, &answers) {
            TierSelection::Applied { index: 0, tier } => {
                (FeedbackLevel::Critical, tier.recommendation.map(str::to_string))
            }
            TierSelection::Applied { tier, .. } => {
                (FeedbackLevel::Warning, tier.recommendation.map(str::to_string))
            }
            TierSelection::NoMatch => (
                FeedbackLevel::Good,
                Some("Continua a mantenere questo livello di conformità con review periodiche.".to_string()),
            ),
            TierSelection::Skipped | TierSelection::OutOfCatalog => (FeedbackLevel::Neutral, None),
        };
        let message = match level {
            FeedbackLevel::Critical => {
                "Gap significativo di conformità. Azione immediata richiesta."
            }
            FeedbackLevel::Warning => "Miglioramento necessario a breve termine.",
            FeedbackLevel::Good => "Conforme alle best practice!",
            FeedbackLevel::Neutral => "Risposta registrata.",
        };
        return AnswerFeedback {
            question: question.to_string(),
            level,
            message: message.to_string(),
            best_practice,
            advice: None,
        };
    }

    heuristic(question, value)
}

fn heuristic(question: &str, value: &AnswerValue) -> AnswerFeedback {
    let text = value.options().join(" ");
    let (level, message, best_practice) = if text.is_empty() {
        (FeedbackLevel::Neutral, "Risposta registrata.", None)
    } else if matches_ignore_case(&text, CRITICAL_HINTS) {
        (
            FeedbackLevel::Critical,
            "Questa risposta indica una potenziale non conformità.",
            Some("Implementare controlli adeguati secondo le normative NIS2/DORA/GDPR/AI Act applicabili."),
        )
    } else if matches_ignore_case(&text, WARNING_HINTS) {
        (
            FeedbackLevel::Warning,
            "Implementazione parziale - completare per piena conformità.",
            Some("Formalizzare e completare i processi esistenti con documentazione e test periodici."),
        )
    } else if matches_ignore_case(&text, GOOD_HINTS) {
        (
            FeedbackLevel::Good,
            "Risposta positiva!",
            Some("Mantenere questo livello con audit periodici."),
        )
    } else {
        (FeedbackLevel::Neutral, "Risposta registrata.", None)
    };

    AnswerFeedback {
        question: question.to_string(),
        level,
        message: message.to_string(),
        best_practice: best_practice.map(str::to_string),
        advice: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::RuleSetVersion;

    fn rule_set() -> RuleSet {
        RuleSet::load(RuleSetVersion::V130).expect("rule set loads")
    }

    #[test]
    fn scored_questions_follow_their_tiers() {
        let rules = rule_set();

        let worst = feedback(
            &rules,
            "mfa_zerotrust",
            &AnswerValue::choice("No - Nessuna MFA implementata"),
        );
        assert_eq!(worst.level, FeedbackLevel::Critical);
        assert!(worst
            .best_practice
            .as_deref()
            .is_some_and(|text| text.starts_with("CRITICO")));

        let partial = feedback(
            &rules,
            "mfa_zerotrust",
            &AnswerValue::choice("Parziale - MFA solo per VPN o admin"),
        );
        assert_eq!(partial.level, FeedbackLevel::Warning);

        let best = feedback(
            &rules,
            "mfa_zerotrust",
            &AnswerValue::choice("Eccellente - MFA phishing-resistant (FIDO2) + Zero Trust completo"),
        );
        assert_eq!(best.level, FeedbackLevel::Good);
    }

    #[test]
    fn weak_baseline_answers_carry_practical_advice() {
        let rules = RuleSet::load(RuleSetVersion::V100).expect("rule set loads");

        let short = feedback(&rules, "log_retention", &AnswerValue::choice("6-12 months"));
        assert_eq!(short.level, FeedbackLevel::Critical);
        assert!(short
            .advice
            .as_deref()
            .is_some_and(|text| text.starts_with("NON CONFORME")));

        let long = feedback(&rules, "log_retention", &AnswerValue::choice("24+ months"));
        assert_eq!(long.level, FeedbackLevel::Good);
        assert_eq!(long.advice, None);

        let graduated = feedback(
            &rule_set(),
            "mfa_zerotrust",
            &AnswerValue::choice("No - Nessuna MFA implementata"),
        );
        assert_eq!(graduated.advice, None);
    }

    #[test]
    fn unscored_questions_use_keyword_heuristics() {
        let rules = rule_set();

        let size = feedback(
            &rules,
            "organization_size",
            &AnswerValue::choice("Ente pubblico/PA"),
        );
        assert_eq!(size.level, FeedbackLevel::Neutral);

        let systems = feedback(
            &rules,
            "ai_systems_in_use",
            &AnswerValue::selections(["Nessun sistema IA in uso"]),
        );
        assert_eq!(systems.level, FeedbackLevel::Critical);
    }
}
