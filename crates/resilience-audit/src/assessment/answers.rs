use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{QuestionCatalog, QuestionKind};
use super::rules::SELECTION_SEPARATOR;

/// Value recorded for a single question.
///
/// Serialized untagged so a form layer can post `"option"` for single-choice
/// questions and `["a", "b"]` for multi-choice ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Choice(String),
    Selections(BTreeSet<String>),
}

impl AnswerValue {
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    pub fn selections<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selections(values.into_iter().map(Into::into).collect())
    }

    pub fn empty_for(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::SingleChoice => Self::Choice(String::new()),
            QuestionKind::MultipleChoice => Self::Selections(BTreeSet::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Choice(value) => value.trim().is_empty(),
            Self::Selections(values) => values.is_empty(),
        }
    }

    /// Stored strings without trimming or filtering.
    fn raw_entries(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Choice(value) => Box::new(std::iter::once(value.as_str())),
            Self::Selections(values) => Box::new(values.iter().map(String::as_str)),
        }
    }

    /// Selected option texts, ignoring an empty single choice.
    pub fn options(&self) -> Vec<&str> {
        match self {
            Self::Choice(value) if value.trim().is_empty() => Vec::new(),
            Self::Choice(value) => vec![value.as_str()],
            Self::Selections(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Question id to answer mapping collected across all phases of an assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store holding one unanswered entry per catalog question.
    pub fn for_catalog(catalog: &QuestionCatalog) -> Self {
        let values = catalog
            .questions()
            .iter()
            .map(|question| (question.id.to_string(), AnswerValue::empty_for(question.kind)))
            .collect();
        Self { values }
    }

    pub fn set(&mut self, question: impl Into<String>, value: AnswerValue) {
        self.values.insert(question.into(), value);
    }

    pub fn set_choice(&mut self, question: impl Into<String>, option: impl Into<String>) {
        self.set(question, AnswerValue::choice(option));
    }

    pub fn set_selections<I, S>(&mut self, question: impl Into<String>, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(question, AnswerValue::selections(options));
    }

    pub fn with_choice(mut self, question: &str, option: &str) -> Self {
        self.set_choice(question, option);
        self
    }

    pub fn with_value(mut self, question: &str, value: AnswerValue) -> Self {
        self.set(question, value);
        self
    }

    pub fn with_selections(mut self, question: &str, options: &[&str]) -> Self {
        self.set_selections(question, options.iter().copied());
        self
    }

    pub fn get(&self, question: &str) -> Option<&AnswerValue> {
        self.values.get(question)
    }

    /// Selected options for a question; empty when missing or unanswered.
    pub fn options(&self, question: &str) -> Vec<&str> {
        self.get(question)
            .map(AnswerValue::options)
            .unwrap_or_default()
    }

    pub fn is_answered(&self, question: &str) -> bool {
        self.get(question).is_some_and(|value| !value.is_empty())
    }

    /// Copy holding only catalog questions, each in the shape of its kind.
    ///
    /// Unknown keys are dropped. A list posted for a single-choice question
    /// becomes one choice; several entries are joined and so stay outside the
    /// catalog. Text posted for a multiple-choice question is split into
    /// selections.
    pub fn normalized(&self, catalog: &QuestionCatalog) -> Self {
        let mut values = BTreeMap::new();
        for (key, value) in &self.values {
            let Some(question) = catalog.question(key) else {
                debug!(question = %key, "dropping answer outside the catalog");
                continue;
            };
            let value = match (question.kind, value) {
                (QuestionKind::SingleChoice, AnswerValue::Choice(_)) => value.clone(),
                (QuestionKind::SingleChoice, AnswerValue::Selections(options)) => {
                    AnswerValue::Choice(
                        options
                            .iter()
                            .map(String::as_str)
                            .collect::<Vec<_>>()
                            .join(SELECTION_SEPARATOR),
                    )
                }
                (QuestionKind::MultipleChoice, value) => AnswerValue::selections(
                    value
                        .raw_entries()
                        .flat_map(|entry| entry.split(SELECTION_SEPARATOR))
                        .filter(|entry| !entry.trim().is_empty()),
                ),
            };
            values.insert(key.clone(), value);
        }
        Self { values }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::RuleSetVersion;

    #[test]
    fn blank_choice_counts_as_unanswered() {
        let store = AnswerStore::new().with_choice("board_approval", "   ");
        assert!(!store.is_answered("board_approval"));
        assert!(store.options("board_approval").is_empty());
        assert!(!store.is_answered("missing"));
    }

    #[test]
    fn normalized_store_follows_question_kinds() {
        let catalog = QuestionCatalog::for_version(RuleSetVersion::V100);
        let store = AnswerStore::new()
            .with_selections("risk_framework", &[])
            .with_choice("cloud_usage", "IaaS (AWS, Azure, GCP); PaaS")
            .with_choice("unknown_key", "kept nowhere");

        let normalized = store.normalized(&catalog);
        assert_eq!(normalized.get("risk_framework"), Some(&AnswerValue::choice("")));
        assert_eq!(
            normalized.get("cloud_usage"),
            Some(&AnswerValue::selections(["IaaS (AWS, Azure, GCP)", "PaaS"]))
        );
        assert_eq!(normalized.get("unknown_key"), None);
        assert_eq!(normalized.normalized(&catalog), normalized);
    }

    #[test]
    fn json_shape_distinguishes_choices_from_selections() {
        let store: AnswerStore = serde_json::from_str(
            r#"{"board_approval": "No - Nessuna approvazione formale del CdA", "scope": ["B", "A"]}"#,
        )
        .expect("store parses");

        assert_eq!(
            store.get("board_approval"),
            Some(&AnswerValue::choice("No - Nessuna approvazione formale del CdA"))
        );
        assert_eq!(store.options("scope"), vec!["A", "B"]);
    }
}
