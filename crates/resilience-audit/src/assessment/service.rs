use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::aggregate::AssessmentResult;
use super::answers::{AnswerStore, AnswerValue};
use super::catalog::QuestionCatalog;
use super::domain::{AreaKind, RuleSetVersion, UnknownRuleSetVersion};
use super::engine::ScoringEngine;
use super::feedback::{feedback, AnswerFeedback};
use super::report::{export_csv, render_text, ExportError};
use super::rules::RuleSetError;

/// Area entry of a rule-set summary.
#[derive(Debug, Clone, Serialize)]
pub struct AreaSummary {
    pub area: AreaKind,
    pub title: &'static str,
    pub maximum: i32,
    pub rules: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleSetSummary {
    pub version: RuleSetVersion,
    pub label: &'static str,
    pub max_possible: i32,
    pub questions: usize,
    pub areas: Vec<AreaSummary>,
}

/// Holds one validated engine per shipped rule-set version.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    engines: BTreeMap<RuleSetVersion, ScoringEngine>,
    default_version: RuleSetVersion,
}

impl AssessmentService {
    /// Loads and validates every version; fails on the first defective table.
    pub fn load(default_version: RuleSetVersion) -> Result<Self, RuleSetError> {
        let engines = RuleSetVersion::ordered()
            .into_iter()
            .map(|version| ScoringEngine::load(version).map(|engine| (version, engine)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self {
            engines,
            default_version,
        })
    }

    pub fn default_version(&self) -> RuleSetVersion {
        self.default_version
    }

    pub fn engine(
        &self,
        version: RuleSetVersion,
    ) -> Result<&ScoringEngine, AssessmentServiceError> {
        self.engines.get(&version).ok_or_else(|| {
            AssessmentServiceError::UnknownRuleSet(UnknownRuleSetVersion(version.to_string()))
        })
    }

    /// Resolves a version key taken from a path or CLI flag.
    pub fn engine_for(&self, key: &str) -> Result<&ScoringEngine, AssessmentServiceError> {
        let version = key.parse::<RuleSetVersion>()?;
        self.engine(version)
    }

    pub fn summaries(&self) -> Vec<RuleSetSummary> {
        self.engines
            .values()
            .map(|engine| {
                let rule_set = engine.rule_set();
                RuleSetSummary {
                    version: rule_set.version(),
                    label: rule_set.version().label(),
                    max_possible: rule_set.max_possible(),
                    questions: rule_set.catalog().questions().len(),
                    areas: rule_set
                        .areas()
                        .iter()
                        .map(|area| AreaSummary {
                            area: area.area,
                            title: area.title,
                            maximum: area.maximum,
                            rules: area.rules.len(),
                        })
                        .collect(),
                }
            })
            .collect()
    }

    pub fn catalog(&self, key: &str) -> Result<&QuestionCatalog, AssessmentServiceError> {
        Ok(self.engine_for(key)?.rule_set().catalog())
    }

    pub fn score(
        &self,
        key: &str,
        answers: &AnswerStore,
    ) -> Result<AssessmentResult, AssessmentServiceError> {
        Ok(self.engine_for(key)?.assess(answers))
    }

    pub fn report(
        &self,
        key: &str,
        answers: &AnswerStore,
        generated_at: DateTime<Utc>,
    ) -> Result<String, AssessmentServiceError> {
        let result = self.score(key, answers)?;
        Ok(render_text(&result, generated_at))
    }

    pub fn export(
        &self,
        key: &str,
        answers: &AnswerStore,
    ) -> Result<String, AssessmentServiceError> {
        let engine = self.engine_for(key)?;
        let result = engine.assess(answers);
        Ok(export_csv(&result, answers, engine.rule_set().catalog())?)
    }

    pub fn feedback(
        &self,
        key: &str,
        question: &str,
        value: &AnswerValue,
    ) -> Result<AnswerFeedback, AssessmentServiceError> {
        let rule_set = self.engine_for(key)?.rule_set();
        if rule_set.catalog().question(question).is_none() {
            return Err(AssessmentServiceError::UnknownQuestion(question.to_string()));
        }
        Ok(feedback(rule_set, question, value))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    UnknownRuleSet(#[from] UnknownRuleSetVersion),
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error(transparent)]
    Export(#[from] ExportError),
}
