use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::assessment_router;

#[tokio::test]
async fn lists_rule_sets_with_their_maxima() {
    let router = assessment_router(Arc::new(service()));
    let response = router
        .oneshot(Request::get("/api/v1/rulesets").body(Body::empty()).expect("request"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["default"], "v130");
    let maxima: Vec<i64> = body["rulesets"]
        .as_array()
        .expect("rulesets array")
        .iter()
        .filter_map(|summary| summary["max_possible"].as_i64())
        .collect();
    assert_eq!(maxima, vec![100, 118, 130]);
}

#[tokio::test]
async fn unknown_version_is_not_found() {
    let router = assessment_router(Arc::new(service()));
    let response = router
        .oneshot(
            Request::get("/api/v1/rulesets/v999/catalog")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert!(body["error"].as_str().is_some_and(|error| error.contains("v999")));
}

#[tokio::test]
async fn catalog_exposes_options_in_order() {
    let router = assessment_router(Arc::new(service()));
    let response = router
        .oneshot(
            Request::get("/api/v1/rulesets/v100/catalog")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["version"], "v100");
    assert_eq!(body["questions"][0]["id"], "sector");
    assert_eq!(body["questions"][0]["options"][7], "Other/Mixed");
}

#[tokio::test]
async fn scores_posted_answers() {
    let router = assessment_router(Arc::new(service()));
    let answers = json!({
        "board_approval": "No - Nessuna approvazione formale del CdA",
        "ai_systems_in_use": ["Nessun sistema IA in uso"],
    });
    let response = router
        .oneshot(json_request("/api/v1/assessments/v118/score", &answers))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["version"], "v118");
    assert_eq!(body["max_possible"], 118);
    assert_eq!(body["risk_tier"], "HIGH");
    assert_eq!(body["areas"].as_array().map(Vec::len), Some(6));
    assert_eq!(body["areas"][5]["applicable"], false);
}

#[tokio::test]
async fn malformed_answers_are_rejected() {
    let router = assessment_router(Arc::new(service()));
    let response = router
        .oneshot(
            Request::post("/api/v1/assessments/v130/score")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("{"))
                .expect("request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn report_and_export_use_their_content_types() {
    let service = Arc::new(service());
    let answers = json!({ "mfa_zerotrust": "No - Nessuna MFA implementata" });

    let report = assessment_router(service.clone())
        .oneshot(json_request("/api/v1/assessments/v130/report", &answers))
        .await
        .expect("router responds");
    assert_eq!(report.status(), StatusCode::OK);
    assert_eq!(
        report.headers()[CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    let text = read_body(report).await;
    assert!(text.contains("Nessuna MFA"));

    let export = assessment_router(service)
        .oneshot(json_request("/api/v1/assessments/v130/export", &answers))
        .await
        .expect("router responds");
    assert_eq!(export.status(), StatusCode::OK);
    assert_eq!(export.headers()[CONTENT_TYPE], "text/csv; charset=utf-8");
    assert!(export.headers().contains_key(CONTENT_DISPOSITION));
    let csv = read_body(export).await;
    assert!(csv.starts_with("Area,Score,Max Score"));
}

#[tokio::test]
async fn feedback_classifies_a_single_answer() {
    let service = Arc::new(service());

    let response = assessment_router(service.clone())
        .oneshot(json_request(
            "/api/v1/assessments/v130/feedback",
            &json!({ "question": "encryption", "value": "No - Nessuna crittografia sistematica" }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["question"], "encryption");
    assert_eq!(body["level"], "critical");

    let unknown = assessment_router(service)
        .oneshot(json_request(
            "/api/v1/assessments/v130/feedback",
            &json!({ "question": "favourite_colour", "value": "blue" }),
        ))
        .await
        .expect("router responds");
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}
