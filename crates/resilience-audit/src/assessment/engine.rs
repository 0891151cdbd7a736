use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::aggregate::{aggregate, AssessmentResult};
use super::answers::AnswerStore;
use super::domain::{AreaKind, RuleSetVersion};
use super::rules::matching::{select_tier, TierSelection};
use super::rules::{
    Applicability, AreaRules, Rule, RuleSet, RuleSetError, Tier, SELECTION_SEPARATOR,
};

/// Deduction applied by a single rule, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub question: String,
    pub tier: usize,
    pub points: i32,
    pub answered: bool,
}

/// Outcome of evaluating one area's rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaResult {
    pub area: AreaKind,
    pub title: String,
    /// Raw score; negative when deductions exceed the maximum.
    pub score: i32,
    pub display_score: i32,
    pub maximum: i32,
    pub applicable: bool,
    pub findings: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

impl AreaResult {
    fn start(rules: &AreaRules) -> Self {
        Self {
            area: rules.area,
            title: rules.title.to_string(),
            score: rules.maximum,
            display_score: rules.maximum,
            maximum: rules.maximum,
            applicable: true,
            findings: Vec::new(),
            gaps: Vec::new(),
            recommendations: Vec::new(),
            components: Vec::new(),
        }
    }

    fn apply(&mut self, tier: &Tier, rule: &Rule, answers: &AnswerStore) {
        if let Some(finding) = tier.finding {
            self.findings.push(render(finding, rule, answers));
        }
        if let Some(gap) = tier.gap {
            self.gaps.push(render(gap, rule, answers));
        }
        if let Some(recommendation) = tier.recommendation {
            self.recommendations.push(render(recommendation, rule, answers));
        }
        self.score -= tier.points;
    }

    fn finish(mut self) -> Self {
        self.display_score = self.score.clamp(0, self.maximum);
        self
    }
}

/// Fills `{answer}` and `{selected}` placeholders of a tier text.
fn render(template: &str, rule: &Rule, answers: &AnswerStore) -> String {
    let mut text = template.to_string();
    if text.contains("{answer}") {
        let selected = answers.options(rule.question);
        let answer = if selected.is_empty() {
            "not provided".to_string()
        } else {
            selected.join(SELECTION_SEPARATOR)
        };
        text = text.replace("{answer}", &answer);
    }
    if text.contains("{selected}") {
        let count = rule.guard.map_or(0, |guard| guard.selected(answers));
        text = text.replace("{selected}", &count.to_string());
    }
    text
}

/// Stateless evaluator applying one validated rule set to answer stores.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    rule_set: RuleSet,
}

impl ScoringEngine {
    pub fn new(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    pub fn load(version: RuleSetVersion) -> Result<Self, RuleSetError> {
        RuleSet::load(version).map(Self::new)
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    pub fn version(&self) -> RuleSetVersion {
        self.rule_set.version()
    }

    /// Scores one area. Never mutates the store.
    pub fn evaluate_area(&self, rules: &AreaRules, answers: &AnswerStore) -> AreaResult {
        let mut result = AreaResult::start(rules);

        if !rules.applicability.applies(answers) {
            if let Applicability::RequiresSelection { question, note, .. } = rules.applicability {
                debug!(area = ?rules.area, question, "area not applicable; keeping maximum");
                result.applicable = false;
                result.recommendations.push(note.to_string());
            }
            return result.finish();
        }

        let catalog = self.rule_set.catalog();
        for rule in &rules.rules {
            let Some(question) = catalog.question(rule.question) else {
                continue;
            };
            match select_tier(rule, question, answers) {
                TierSelection::Applied { index, tier } => {
                    result.apply(tier, rule, answers);
                    result.components.push(ScoreComponent {
                        question: rule.question.to_string(),
                        tier: index,
                        points: -tier.points,
                        answered: answers.is_answered(rule.question),
                    });
                }
                TierSelection::OutOfCatalog => {
                    warn!(
                        version = %self.version(),
                        question = rule.question,
                        value = ?answers.get(rule.question),
                        "answer is not a catalog option; rule skipped"
                    );
                }
                TierSelection::Skipped | TierSelection::NoMatch => {}
            }
        }

        result.finish()
    }

    /// Scores every area in table order.
    /// Evaluates every area against the catalog-shaped copy of `answers`.
    pub fn evaluate(&self, answers: &AnswerStore) -> Vec<AreaResult> {
        let answers = answers.normalized(self.rule_set.catalog());
        self.rule_set
            .areas()
            .iter()
            .map(|rules| self.evaluate_area(rules, &answers))
            .collect()
    }

    pub fn assess(&self, answers: &AnswerStore) -> AssessmentResult {
        aggregate(self.version(), self.evaluate(answers))
    }
}
