use axum::body::{to_bytes, Body};
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::QuestionKind;
use crate::assessment::rules::matching::{select_tier, TierSelection};
use crate::assessment::{AnswerStore, AssessmentService, RuleSetVersion, ScoringEngine};

pub(super) fn engine(version: RuleSetVersion) -> ScoringEngine {
    ScoringEngine::load(version).expect("shipped rule set loads")
}

pub(super) fn service() -> AssessmentService {
    AssessmentService::load(RuleSetVersion::V130).expect("shipped rule sets load")
}

/// Deduction a single-choice option would trigger on its own.
pub(super) fn deduction(engine: &ScoringEngine, question: &str, option: &str) -> i32 {
    let rule_set = engine.rule_set();
    let (Some(rule), Some(catalog_question)) =
        (rule_set.rule_for(question), rule_set.catalog().question(question))
    else {
        return 0;
    };
    let answers = AnswerStore::new().with_choice(question, option);
    match select_tier(rule, catalog_question, &answers) {
        TierSelection::Applied { tier, .. } => tier.points,
        _ => 0,
    }
}

/// Answers every question with its least penalised option.
///
/// Multi-choice questions get their second option: the opt-out entries sit
/// first or last, never second.
pub(super) fn best_answers(engine: &ScoringEngine) -> AnswerStore {
    let mut answers = AnswerStore::new();
    for question in engine.rule_set().catalog().questions() {
        match question.kind {
            QuestionKind::MultipleChoice => {
                answers.set_selections(question.id, question.options.iter().skip(1).take(1).copied());
            }
            QuestionKind::SingleChoice => {
                let best = question
                    .options
                    .iter()
                    .min_by_key(|option| deduction(engine, question.id, option))
                    .copied()
                    .unwrap_or_default();
                answers.set_choice(question.id, best);
            }
        }
    }
    answers
}

pub(super) fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn read_body(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body readable");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_str(&body).expect("json body")
}
