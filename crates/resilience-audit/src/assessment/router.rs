use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::answers::{AnswerStore, AnswerValue};
use super::service::{AssessmentService, AssessmentServiceError};

#[derive(Debug, Deserialize)]
pub(crate) struct FeedbackRequest {
    question: String,
    value: AnswerValue,
}

/// Router exposing catalogs, scoring, and report rendering over HTTP.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/rulesets", get(rulesets_handler))
        .route("/api/v1/rulesets/:version/catalog", get(catalog_handler))
        .route("/api/v1/assessments/:version/score", post(score_handler))
        .route("/api/v1/assessments/:version/report", post(report_handler))
        .route("/api/v1/assessments/:version/export", post(export_handler))
        .route(
            "/api/v1/assessments/:version/feedback",
            post(feedback_handler),
        )
        .with_state(service)
}

pub(crate) async fn rulesets_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    let payload = json!({
        "default": service.default_version(),
        "rulesets": service.summaries(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn catalog_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(version): Path<String>,
) -> Response {
    match service.catalog(&version) {
        Ok(catalog) => (StatusCode::OK, axum::Json(catalog)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(version): Path<String>,
    axum::Json(answers): axum::Json<AnswerStore>,
) -> Response {
    match service.score(&version, &answers) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(version): Path<String>,
    axum::Json(answers): axum::Json<AnswerStore>,
) -> Response {
    match service.report(&version, &answers, Utc::now()) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            report,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(version): Path<String>,
    axum::Json(answers): axum::Json<AnswerStore>,
) -> Response {
    match service.export(&version, &answers) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"eu-resilience-audit.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn feedback_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(version): Path<String>,
    axum::Json(request): axum::Json<FeedbackRequest>,
) -> Response {
    match service.feedback(&version, &request.question, &request.value) {
        Ok(feedback) => (StatusCode::OK, axum::Json(feedback)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::UnknownRuleSet(_) | AssessmentServiceError::UnknownQuestion(_) => {
            StatusCode::NOT_FOUND
        }
        AssessmentServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
