//! Versioned question catalogs.
//!
//! Option texts are the wire contract between the form layer and the rule
//! tables: answers carry the literal option strings defined here and rule
//! tiers match keywords against them.

mod advice;
mod audit2026;
mod baseline;

use serde::Serialize;

use super::answers::AnswerStore;
use super::domain::{AreaKind, RuleSetVersion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
}

/// Predicate deciding whether the form layer shows a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum Visibility {
    Always,
    /// Shown once `question` holds at least one selection other than `excluding`.
    Selected {
        question: &'static str,
        excluding: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub area: AreaKind,
    pub label: &'static str,
    pub kind: QuestionKind,
    pub options: Vec<&'static str>,
    pub visibility: Visibility,
}

impl Question {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| *candidate == option)
    }

    pub fn is_visible(&self, answers: &AnswerStore) -> bool {
        match self.visibility {
            Visibility::Always => true,
            Visibility::Selected {
                question,
                excluding,
            } => answers
                .options(question)
                .iter()
                .any(|option| *option != excluding),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionCatalog {
    version: RuleSetVersion,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn for_version(version: RuleSetVersion) -> Self {
        let questions = match version {
            RuleSetVersion::V100 => baseline::questions(),
            RuleSetVersion::V118 | RuleSetVersion::V130 => audit2026::questions(),
        };
        Self { version, questions }
    }

    pub fn version(&self) -> RuleSetVersion {
        self.version
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions_for(&self, area: AreaKind) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.area == area)
            .collect()
    }

    /// Remediation advice for a single answer; only the baseline catalog has any.
    pub fn advice(&self, question: &str, answer: &str) -> Option<&'static str> {
        match self.version {
            RuleSetVersion::V100 => advice::baseline(question, answer),
            RuleSetVersion::V118 | RuleSetVersion::V130 => None,
        }
    }

    /// Questions of an area the form layer should currently display.
    pub fn visible_questions(&self, area: AreaKind, answers: &AnswerStore) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.area == area && question.is_visible(answers))
            .collect()
    }
}
