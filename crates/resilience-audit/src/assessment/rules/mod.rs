//! Rule schema shared by every rule-set version, plus load-time validation.
//!
//! A rule set bundles one question catalog with the per-area rule tables that
//! score it. Tables are plain data; [`RuleSet::load`] checks that every
//! keyword still pairs with an option of the catalog it was written against.

mod audit2026;
mod baseline;
pub(crate) mod matching;

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use super::catalog::{QuestionCatalog, QuestionKind};
use super::domain::{AreaKind, RuleSetVersion};

pub use audit2026::Edition;

/// Separator used when a multi-select answer is flattened into one text cell.
pub const SELECTION_SEPARATOR: &str = "; ";

/// How a tier decides whether it applies to the selected options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Matcher {
    /// Any selected option contains any keyword (case-sensitive).
    Contains(&'static [&'static str]),
    /// No selected option is exactly one of the listed options.
    Except(&'static [&'static str]),
    /// Only the unanswered state; answered values never match.
    Unanswered,
}

/// One deduction level of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub matcher: Matcher,
    pub points: i32,
    pub finding: Option<&'static str>,
    pub gap: Option<&'static str>,
    pub recommendation: Option<&'static str>,
}

impl Tier {
    pub const fn contains(keywords: &'static [&'static str], points: i32) -> Self {
        Self::with_matcher(Matcher::Contains(keywords), points)
    }

    pub const fn except(allowed: &'static [&'static str], points: i32) -> Self {
        Self::with_matcher(Matcher::Except(allowed), points)
    }

    pub const fn unanswered(points: i32) -> Self {
        Self::with_matcher(Matcher::Unanswered, points)
    }

    const fn with_matcher(matcher: Matcher, points: i32) -> Self {
        Self {
            matcher,
            points,
            finding: None,
            gap: None,
            recommendation: None,
        }
    }

    /// Finding text; may reference `{answer}` or `{selected}`.
    pub const fn finding(mut self, text: &'static str) -> Self {
        self.finding = Some(text);
        self
    }

    pub const fn gap(mut self, text: &'static str) -> Self {
        self.gap = Some(text);
        self
    }

    pub const fn recommend(mut self, text: &'static str) -> Self {
        self.recommendation = Some(text);
        self
    }
}

/// Cross-question precondition for evaluating a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Guard {
    /// `question` holds at least `count` selections other than `excluding`.
    SelectedAtLeast {
        question: &'static str,
        count: usize,
        excluding: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub question: &'static str,
    pub guard: Option<Guard>,
    pub tiers: Vec<Tier>,
}

impl Rule {
    pub fn new(question: &'static str, tiers: Vec<Tier>) -> Self {
        Self {
            question,
            guard: None,
            tiers,
        }
    }

    pub fn guarded(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Deduction applied when the bound question is unanswered.
    pub fn worst_case_points(&self) -> i32 {
        self.tiers.first().map_or(0, |tier| tier.points)
    }
}

/// Decides whether an area is scored at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Applicability {
    Always,
    /// Not applicable when `question` is empty or contains `sentinel`; the
    /// area then keeps its maximum and reports `note` as its only
    /// recommendation.
    RequiresSelection {
        question: &'static str,
        sentinel: &'static str,
        note: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaRules {
    pub area: AreaKind,
    pub title: &'static str,
    pub maximum: i32,
    pub applicability: Applicability,
    pub rules: Vec<Rule>,
}

impl AreaRules {
    pub fn rule_for(&self, question: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.question == question)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleSetError {
    #[error("{version}: area maxima add up to {actual}, expected {expected}")]
    MaximumMismatch {
        version: RuleSetVersion,
        expected: i32,
        actual: i32,
    },
    #[error("{version}: area {area:?} has non-positive maximum {maximum}")]
    NonPositiveMaximum {
        version: RuleSetVersion,
        area: AreaKind,
        maximum: i32,
    },
    #[error("{version}: area {area:?} is declared more than once")]
    DuplicateArea {
        version: RuleSetVersion,
        area: AreaKind,
    },
    #[error("{version}: question '{question}' is not in the catalog")]
    UnknownQuestion {
        version: RuleSetVersion,
        question: String,
    },
    #[error("{version}: rule for '{question}' has no tiers")]
    EmptyRule {
        version: RuleSetVersion,
        question: String,
    },
    #[error("{version}: keyword '{keyword}' matches no option of '{question}'")]
    OrphanKeyword {
        version: RuleSetVersion,
        question: String,
        keyword: String,
    },
    #[error("{version}: '{option}' is not an option of '{question}'")]
    UnknownOption {
        version: RuleSetVersion,
        question: String,
        option: String,
    },
    #[error("{version}: '{question}' must be a multiple-choice question")]
    NotMultipleChoice {
        version: RuleSetVersion,
        question: String,
    },
    #[error("{version}: first tier of '{question}' is not the largest deduction")]
    TierOrder {
        version: RuleSetVersion,
        question: String,
    },
    #[error("{version}: option '{option}' of '{question}' contains the selection separator")]
    SeparatorInOption {
        version: RuleSetVersion,
        question: String,
        option: String,
    },
}

/// Validated bundle of catalog and area tables for one version.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSet {
    version: RuleSetVersion,
    catalog: QuestionCatalog,
    areas: Vec<AreaRules>,
}

impl RuleSet {
    /// Builds and validates the tables shipped for `version`.
    pub fn load(version: RuleSetVersion) -> Result<Self, RuleSetError> {
        let areas = match version {
            RuleSetVersion::V100 => baseline::areas(),
            RuleSetVersion::V118 => audit2026::areas(Edition::Base),
            RuleSetVersion::V130 => audit2026::areas(Edition::Graduated),
        };
        let rule_set = Self::new(version, QuestionCatalog::for_version(version), areas)?;
        info!(
            version = %version,
            areas = rule_set.areas.len(),
            rules = rule_set.rule_count(),
            "rule set loaded"
        );
        Ok(rule_set)
    }

    /// Validates an arbitrary table against a catalog.
    pub fn new(
        version: RuleSetVersion,
        catalog: QuestionCatalog,
        areas: Vec<AreaRules>,
    ) -> Result<Self, RuleSetError> {
        validate(version, &catalog, &areas)?;
        Ok(Self {
            version,
            catalog,
            areas,
        })
    }

    pub fn version(&self) -> RuleSetVersion {
        self.version
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn areas(&self) -> &[AreaRules] {
        &self.areas
    }

    pub fn area(&self, area: AreaKind) -> Option<&AreaRules> {
        self.areas.iter().find(|rules| rules.area == area)
    }

    /// Sum of the area maxima.
    pub fn max_possible(&self) -> i32 {
        self.areas.iter().map(|area| area.maximum).sum()
    }

    pub fn rule_for(&self, question: &str) -> Option<&Rule> {
        self.areas.iter().find_map(|area| area.rule_for(question))
    }

    pub fn rule_count(&self) -> usize {
        self.areas.iter().map(|area| area.rules.len()).sum()
    }
}

fn validate(
    version: RuleSetVersion,
    catalog: &QuestionCatalog,
    areas: &[AreaRules],
) -> Result<(), RuleSetError> {
    for question in catalog.questions() {
        if let Some(option) = question
            .options
            .iter()
            .find(|option| option.contains(SELECTION_SEPARATOR))
        {
            return Err(RuleSetError::SeparatorInOption {
                version,
                question: question.id.to_string(),
                option: option.to_string(),
            });
        }
    }

    let mut seen = HashSet::new();
    for area in areas {
        if !seen.insert(area.area) {
            return Err(RuleSetError::DuplicateArea {
                version,
                area: area.area,
            });
        }
        if area.maximum <= 0 {
            return Err(RuleSetError::NonPositiveMaximum {
                version,
                area: area.area,
                maximum: area.maximum,
            });
        }
        if let Applicability::RequiresSelection {
            question, sentinel, ..
        } = area.applicability
        {
            check_selection_question(version, catalog, question, sentinel)?;
        }
        for rule in &area.rules {
            validate_rule(version, catalog, rule)?;
        }
    }

    let actual: i32 = areas.iter().map(|area| area.maximum).sum();
    let expected = version.published_maximum();
    if actual != expected {
        return Err(RuleSetError::MaximumMismatch {
            version,
            expected,
            actual,
        });
    }

    Ok(())
}

fn validate_rule(
    version: RuleSetVersion,
    catalog: &QuestionCatalog,
    rule: &Rule,
) -> Result<(), RuleSetError> {
    let question = catalog
        .question(rule.question)
        .ok_or_else(|| RuleSetError::UnknownQuestion {
            version,
            question: rule.question.to_string(),
        })?;

    let Some(first) = rule.tiers.first() else {
        return Err(RuleSetError::EmptyRule {
            version,
            question: rule.question.to_string(),
        });
    };
    if rule.tiers.iter().any(|tier| tier.points > first.points) {
        return Err(RuleSetError::TierOrder {
            version,
            question: rule.question.to_string(),
        });
    }

    if let Some(Guard::SelectedAtLeast {
        question: guarded,
        excluding,
        ..
    }) = rule.guard
    {
        check_selection_question(version, catalog, guarded, excluding)?;
    }

    for tier in &rule.tiers {
        match tier.matcher {
            Matcher::Contains(keywords) => {
                for keyword in keywords {
                    if !question.options.iter().any(|option| option.contains(keyword)) {
                        return Err(RuleSetError::OrphanKeyword {
                            version,
                            question: question.id.to_string(),
                            keyword: keyword.to_string(),
                        });
                    }
                }
            }
            Matcher::Except(allowed) => {
                for option in allowed {
                    if !question.has_option(option) {
                        return Err(RuleSetError::UnknownOption {
                            version,
                            question: question.id.to_string(),
                            option: option.to_string(),
                        });
                    }
                }
            }
            Matcher::Unanswered => {}
        }
    }

    Ok(())
}

fn check_selection_question(
    version: RuleSetVersion,
    catalog: &QuestionCatalog,
    id: &'static str,
    option: &'static str,
) -> Result<(), RuleSetError> {
    let question = catalog
        .question(id)
        .ok_or_else(|| RuleSetError::UnknownQuestion {
            version,
            question: id.to_string(),
        })?;
    if question.kind != QuestionKind::MultipleChoice {
        return Err(RuleSetError::NotMultipleChoice {
            version,
            question: id.to_string(),
        });
    }
    if !question.has_option(option) {
        return Err(RuleSetError::UnknownOption {
            version,
            question: id.to_string(),
            option: option.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn governance_only(rules: Vec<Rule>, maximum: i32) -> Vec<AreaRules> {
        vec![AreaRules {
            area: AreaKind::Governance,
            title: "Governance",
            maximum,
            applicability: Applicability::Always,
            rules,
        }]
    }

    fn check(areas: Vec<AreaRules>) -> Result<RuleSet, RuleSetError> {
        RuleSet::new(
            RuleSetVersion::V100,
            QuestionCatalog::for_version(RuleSetVersion::V100),
            areas,
        )
    }

    #[test]
    fn shipped_rule_sets_validate() {
        for version in RuleSetVersion::ordered() {
            let rule_set = RuleSet::load(version).expect("shipped tables are consistent");
            assert_eq!(rule_set.max_possible(), version.published_maximum());
            assert!(rule_set.rule_count() > 0);
        }
    }

    #[test]
    fn maxima_must_add_up_to_published_total() {
        let error = check(governance_only(Vec::new(), 25)).expect_err("25 != 100");
        assert_eq!(
            error,
            RuleSetError::MaximumMismatch {
                version: RuleSetVersion::V100,
                expected: 100,
                actual: 25,
            }
        );
    }

    #[test]
    fn keyword_without_matching_option_is_rejected() {
        static KEYWORDS: &[&str] = &["Unknown"];
        let rules = vec![Rule::new("sector", vec![Tier::contains(KEYWORDS, 3)])];
        let error = check(governance_only(rules, 100)).expect_err("orphan keyword");
        assert!(matches!(error, RuleSetError::OrphanKeyword { ref keyword, .. } if keyword == "Unknown"));
    }

    #[test]
    fn structural_defects_are_rejected() {
        let empty = vec![Rule::new("sector", Vec::new())];
        assert!(matches!(
            check(governance_only(empty, 100)),
            Err(RuleSetError::EmptyRule { .. })
        ));

        let unknown = vec![Rule::new("favourite_colour", vec![Tier::unanswered(1)])];
        assert!(matches!(
            check(governance_only(unknown, 100)),
            Err(RuleSetError::UnknownQuestion { .. })
        ));

        static FORMALIZED: &[&str] = &["Yes, formalized"];
        let single_choice_guard = vec![Rule::new("cloud_governance", vec![Tier::except(FORMALIZED, 3)])
            .guarded(Guard::SelectedAtLeast {
                question: "board_oversight",
                count: 1,
                excluding: "No oversight",
            })];
        assert!(matches!(
            check(governance_only(single_choice_guard, 100)),
            Err(RuleSetError::NotMultipleChoice { .. })
        ));

        static PARTIAL: &[&str] = &["Partially documented"];
        static NONE: &[&str] = &["No framework"];
        let inverted = vec![Rule::new(
            "risk_framework",
            vec![Tier::contains(NONE, 2), Tier::contains(PARTIAL, 4)],
        )];
        assert!(matches!(
            check(governance_only(inverted, 100)),
            Err(RuleSetError::TierOrder { .. })
        ));

        let mut duplicated = governance_only(Vec::new(), 50);
        duplicated.extend(governance_only(Vec::new(), 50));
        assert!(matches!(
            check(duplicated),
            Err(RuleSetError::DuplicateArea { .. })
        ));
    }
}
