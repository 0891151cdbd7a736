use metrics_exporter_prometheus::PrometheusHandle;
use resilience_audit::assessment::AnswerStore;
use resilience_audit::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads an answers file: `{"question_id": "option" | ["option", ...]}`.
pub(crate) fn read_answers(path: &Path) -> Result<AnswerStore, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let answers = serde_json::from_str(&raw)?;
    Ok(answers)
}
