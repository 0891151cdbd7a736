use super::super::answers::{AnswerStore, AnswerValue};
use super::super::catalog::{Question, QuestionKind};
use super::{Applicability, Guard, Matcher, Rule, Tier};

/// True when at least one keyword is a case-sensitive substring of `value`.
pub fn matches(value: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| value.contains(keyword))
}

/// Case-insensitive variant used by answer feedback heuristics.
pub fn matches_ignore_case(value: &str, keywords: &[&str]) -> bool {
    let value = value.to_lowercase();
    keywords
        .iter()
        .any(|keyword| value.contains(&keyword.to_lowercase()))
}

/// Outcome of resolving one rule against the answer store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TierSelection<'r> {
    /// Guard did not hold; the rule is not evaluated.
    Skipped,
    /// Answer is not drawn from the question's options.
    OutOfCatalog,
    Applied { index: usize, tier: &'r Tier },
    NoMatch,
}

impl Matcher {
    pub(crate) fn accepts(&self, selected: &[&str]) -> bool {
        match self {
            Self::Contains(keywords) => selected.iter().any(|option| matches(option, keywords)),
            Self::Except(allowed) => !selected.iter().any(|option| allowed.contains(option)),
            Self::Unanswered => false,
        }
    }
}

impl Guard {
    /// Selections counted towards the guard threshold.
    pub(crate) fn selected(&self, answers: &AnswerStore) -> usize {
        match *self {
            Self::SelectedAtLeast {
                question,
                excluding,
                ..
            } => answers
                .options(question)
                .into_iter()
                .filter(|option| *option != excluding)
                .count(),
        }
    }

    pub(crate) fn holds(&self, answers: &AnswerStore) -> bool {
        match *self {
            Self::SelectedAtLeast { count, .. } => self.selected(answers) >= count,
        }
    }
}

impl Applicability {
    pub(crate) fn applies(&self, answers: &AnswerStore) -> bool {
        match *self {
            Self::Always => true,
            Self::RequiresSelection {
                question, sentinel, ..
            } => {
                let selected = answers.options(question);
                !selected.is_empty() && !selected.contains(&sentinel)
            }
        }
    }
}

/// Whether a recorded value only uses the question's literal options.
pub(crate) fn within_catalog(question: &Question, value: &AnswerValue) -> bool {
    let selected = value.options();
    let shape_ok = match question.kind {
        QuestionKind::SingleChoice => selected.len() <= 1,
        QuestionKind::MultipleChoice => true,
    };
    shape_ok && selected.iter().all(|option| question.has_option(option))
}

/// Picks the tier a rule applies: unanswered takes the first tier, otherwise
/// the first tier whose matcher accepts the selection wins.
pub(crate) fn select_tier<'r>(
    rule: &'r Rule,
    question: &Question,
    answers: &AnswerStore,
) -> TierSelection<'r> {
    if let Some(guard) = &rule.guard {
        if !guard.holds(answers) {
            return TierSelection::Skipped;
        }
    }

    let value = answers.get(rule.question);
    let answered = value.filter(|value| !value.is_empty());

    let Some(value) = answered else {
        return match rule.tiers.first() {
            Some(tier) => TierSelection::Applied { index: 0, tier },
            None => TierSelection::NoMatch,
        };
    };

    if !within_catalog(question, value) {
        return TierSelection::OutOfCatalog;
    }

    let selected = value.options();
    rule.tiers
        .iter()
        .enumerate()
        .find(|(_, tier)| tier.matcher.accepts(&selected))
        .map_or(TierSelection::NoMatch, |(index, tier)| {
            TierSelection::Applied { index, tier }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::QuestionCatalog;
    use crate::assessment::domain::RuleSetVersion;

    #[test]
    fn keyword_match_is_case_sensitive_substring() {
        assert!(matches("No - Nessuna MFA implementata", &["Nessuna MFA"]));
        assert!(!matches("No - Nessuna MFA implementata", &["nessuna mfa"]));
        assert!(matches_ignore_case("No - Nessuna MFA implementata", &["nessuna mfa"]));
        assert!(!matches("", &["Parziale"]));
    }

    #[test]
    fn first_accepting_tier_wins_even_when_later_tiers_match() {
        let catalog = QuestionCatalog::for_version(RuleSetVersion::V130);
        let question = catalog.question("business_continuity_rto").expect("present");
        let rule = Rule::new(
            "business_continuity_rto",
            vec![
                Tier::contains(&["Immediatamente"], 4),
                Tier::contains(&["Poche ore", "1 giorno"], 3),
                Tier::contains(&["ore"], 2),
            ],
        );
        let answers = AnswerStore::new().with_choice(
            "business_continuity_rto",
            "Poche ore - Possiamo lavorare 2-4 ore poi stop",
        );

        match select_tier(&rule, question, &answers) {
            TierSelection::Applied { index, tier } => {
                assert_eq!(index, 1);
                assert_eq!(tier.points, 3);
            }
            other => panic!("unexpected selection {other:?}"),
        }
    }

    #[test]
    fn values_outside_the_catalog_are_flagged() {
        let catalog = QuestionCatalog::for_version(RuleSetVersion::V130);
        let question = catalog.question("encryption").expect("present");
        let rule = Rule::new("encryption", vec![Tier::contains(&["Nessuna crittografia"], 4)]);

        let typo = AnswerStore::new().with_choice("encryption", "Nessuna crittografia");
        assert_eq!(select_tier(&rule, question, &typo), TierSelection::OutOfCatalog);

        let unanswered = AnswerStore::new();
        assert!(matches!(
            select_tier(&rule, question, &unanswered),
            TierSelection::Applied { index: 0, .. }
        ));
    }

    #[test]
    fn guard_ignores_the_sentinel_selection() {
        let guard = Guard::SelectedAtLeast {
            question: "cloud_usage",
            count: 2,
            excluding: "None",
        };
        let one_plus_none = AnswerStore::new().with_selections("cloud_usage", &["PaaS", "None"]);
        let two = AnswerStore::new().with_selections("cloud_usage", &["PaaS", "SaaS (M365, Salesforce, etc.)"]);

        assert!(!guard.holds(&one_plus_none));
        assert!(guard.holds(&two));
        assert!(!guard.holds(&AnswerStore::new()));
    }
}
