//! Versioned NIS2, DORA, and AI Act self-assessment.
//!
//! Answers collected by the form layer are scored against one of the shipped
//! rule sets. Each rule set pins a question catalog, per-area rule tables,
//! and the published maximum the area maxima add up to.

pub mod aggregate;
pub mod answers;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod feedback;
pub mod report;
pub mod router;
pub mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, classify, AssessmentResult};
pub use answers::{AnswerStore, AnswerValue};
pub use catalog::{Question, QuestionCatalog, QuestionKind, Visibility};
pub use domain::{AreaKind, RiskTier, RuleSetVersion, UnknownRuleSetVersion};
pub use engine::{AreaResult, ScoreComponent, ScoringEngine};
pub use feedback::{feedback, AnswerFeedback, FeedbackLevel};
pub use report::{export_csv, import_answers, render_text, ExportError, RecommendationPriority};
pub use router::assessment_router;
pub use rules::matching::matches;
pub use rules::{
    Applicability, AreaRules, Edition, Guard, Matcher, Rule, RuleSet, RuleSetError, Tier,
    SELECTION_SEPARATOR,
};
pub use service::{AreaSummary, AssessmentService, AssessmentServiceError, RuleSetSummary};
