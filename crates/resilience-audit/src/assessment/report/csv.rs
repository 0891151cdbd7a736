use std::io::Read;

use tracing::debug;

use super::super::aggregate::AssessmentResult;
use super::super::answers::{AnswerStore, AnswerValue};
use super::super::catalog::{QuestionCatalog, QuestionKind};
use super::super::rules::SELECTION_SEPARATOR;
use super::ExportError;

const ANSWER_HEADER: [&str; 2] = ["Question", "Response"];

/// Writes area scores, totals, and the answers as CSV.
///
/// Answers are normalized against the catalog first and listed in catalog
/// order, so [`import_answers`] reads back exactly `answers.normalized(catalog)`.
pub fn export_csv(
    result: &AssessmentResult,
    answers: &AnswerStore,
    catalog: &QuestionCatalog,
) -> Result<String, ExportError> {
    let mut writer = ::csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(["Area", "Score", "Max Score"])?;
    for area in &result.areas {
        writer.write_record([
            area.title.clone(),
            area.score.to_string(),
            area.maximum.to_string(),
        ])?;
    }
    writer.write_record([
        "TOTAL".to_string(),
        result.total.to_string(),
        result.max_possible.to_string(),
    ])?;
    writer.write_record(["RISK LEVEL", result.risk_tier.label(), ""])?;

    writer.write_record(ANSWER_HEADER)?;
    let answers = answers.normalized(catalog);
    for question in catalog.questions() {
        if let Some(value) = answers.get(question.id) {
            writer.write_record([question.id.to_string(), flatten(value)])?;
        }
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn flatten(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Choice(choice) => choice.clone(),
        AnswerValue::Selections(options) => options
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(SELECTION_SEPARATOR),
    }
}

/// Reads the `Question,Response` section of an export back into a store.
pub fn import_answers<R: Read>(
    reader: R,
    catalog: &QuestionCatalog,
) -> Result<AnswerStore, ExportError> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut store = AnswerStore::new();
    let mut in_answers = false;
    for record in csv_reader.records() {
        let record = record?;
        if !in_answers {
            in_answers = record.len() >= 2
                && record.get(0) == Some(ANSWER_HEADER[0])
                && record.get(1) == Some(ANSWER_HEADER[1]);
            continue;
        }
        let (Some(key), Some(raw)) = (record.get(0), record.get(1)) else {
            debug!(fields = record.len(), "skipping short CSV answer row");
            continue;
        };
        let Some(question) = catalog.question(key) else {
            debug!(question = key, "skipping CSV answer outside the catalog");
            continue;
        };
        store.set(key, unflatten(raw, question.kind));
    }

    if !in_answers {
        return Err(ExportError::MissingAnswerSection);
    }
    Ok(store.normalized(catalog))
}

fn unflatten(raw: &str, kind: QuestionKind) -> AnswerValue {
    match kind {
        QuestionKind::SingleChoice => AnswerValue::choice(raw),
        QuestionKind::MultipleChoice if raw.is_empty() => AnswerValue::empty_for(kind),
        QuestionKind::MultipleChoice => AnswerValue::selections(raw.split(SELECTION_SEPARATOR)),
    }
}
