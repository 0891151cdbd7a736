use chrono::{TimeZone, Utc};

use super::common::*;
use crate::assessment::{
    export_csv, import_answers, render_text, AnswerStore, ExportError, RuleSetVersion,
};

fn generated_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

#[test]
fn text_report_lists_scores_and_prioritised_actions() {
    let engine = engine(RuleSetVersion::V130);
    let result = engine.assess(&AnswerStore::new());
    let report = render_text(&result, generated_at());

    let mut lines = report.lines();
    assert_eq!(
        lines.next(),
        Some("EU DIGITAL RESILIENCE AUDIT 2026 (GRADUATED) - ASSESSMENT REPORT")
    );
    assert_eq!(lines.next(), Some("Generated: 2026-01-15 09:30:00 UTC"));

    assert!(report.contains(&format!(
        "OVERALL COMPLIANCE SCORE: {}/130",
        result.total
    )));
    assert!(report.contains("RISK LEVEL: HIGH"));
    assert!(report.contains("- Governance e Responsabilità Legale: 2/29\n"));
    assert!(report.contains("- Misure Tecniche e Fisiche: -5/27 (shown as 0)\n"));
    assert!(report.contains("- IA ed Etica: 15/15 (not applicable)\n"));
    assert!(report.contains(&format!("CRITICAL FINDINGS ({}):", result.findings.len())));
    assert!(report.contains(&format!("1. [HIGH] {}", result.recommendations[0])));
    assert!(report.contains(&format!("4. [MEDIUM] {}", result.recommendations[3])));
    assert!(report.contains(&format!("7. [LOW] {}", result.recommendations[6])));
    assert!(report.contains(
        "DISCLAIMER\n----------------------------------------------------------------------\nThis assessment is a readiness and risk evaluation tool. It does not constitute\nlegal advice."
    ));
    assert!(report.trim_end().ends_with("Report created by EU Digital Resilience Toolkit"));
}

#[test]
fn clean_report_omits_empty_sections() {
    let engine = engine(RuleSetVersion::V100);
    let result = engine.assess(&best_answers(&engine));
    let report = render_text(&result, generated_at());

    assert!(report.contains("OVERALL COMPLIANCE SCORE: 100/100 (100.0%)"));
    assert!(report.contains("RISK LEVEL: LOW"));
    assert!(!report.contains("CRITICAL FINDINGS"));
    assert!(!report.contains("REGULATORY GAPS"));
    assert!(report.contains("consult legal counsel for compliance strategy"));
}

#[test]
fn csv_export_carries_scores_and_answers() {
    let engine = engine(RuleSetVersion::V118);
    let answers = AnswerStore::new()
        .with_choice("board_approval", "No - Nessuna approvazione formale del CdA")
        .with_selections(
            "ai_systems_in_use",
            &["Chatbot e assistenti virtuali", "Sistemi di sorveglianza o sicurezza"],
        );
    let result = engine.assess(&answers);
    let csv = export_csv(&result, &answers, engine.rule_set().catalog()).expect("csv renders");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Area,Score,Max Score");
    assert_eq!(lines[1], format!("Governance e Responsabilità Legale,{},25", result.areas[0].score));
    assert_eq!(lines[7], format!("TOTAL,{},118", result.total));
    assert_eq!(lines[8], "RISK LEVEL,HIGH,");
    assert_eq!(lines[9], "Question,Response");
    assert_eq!(lines[10], "board_approval,No - Nessuna approvazione formale del CdA");
    assert_eq!(
        lines[11],
        "ai_systems_in_use,Chatbot e assistenti virtuali; Sistemi di sorveglianza o sicurezza"
    );
}

#[test]
fn exported_answers_read_back_into_an_equal_store() {
    let engine = engine(RuleSetVersion::V130);
    let catalog = engine.rule_set().catalog();
    let answers = best_answers(&engine)
        .with_selections("scope", &[])
        .with_selections(
            "ai_systems_in_use",
            &["IA generativa (GPT, LLM, generazione immagini)", "Chatbot e assistenti virtuali"],
        );
    let result = engine.assess(&answers);
    let csv = export_csv(&result, &answers, catalog).expect("csv renders");

    let restored = import_answers(csv.as_bytes(), catalog).expect("answers parse");
    assert_eq!(restored, answers);
    assert_eq!(engine.assess(&restored), result);
}

#[test]
fn mismatched_shapes_and_unknown_keys_read_back_normalized() {
    let engine = engine(RuleSetVersion::V130);
    let catalog = engine.rule_set().catalog();
    let answers = AnswerStore::new()
        .with_selections("notes", &["a", "b"])
        .with_selections("board_approval", &["No - Nessuna approvazione formale del CdA"])
        .with_selections("extra_empty", &[]);
    let result = engine.assess(&answers);
    let csv = export_csv(&result, &answers, catalog).expect("csv renders");

    let restored = import_answers(csv.as_bytes(), catalog).expect("answers parse");
    let expected = AnswerStore::new()
        .with_choice("board_approval", "No - Nessuna approvazione formale del CdA");
    assert_eq!(answers.normalized(catalog), expected);
    assert_eq!(restored, expected);
    assert!(!csv.contains("notes"));
    assert!(!csv.contains("extra_empty"));
    assert_eq!(engine.assess(&restored), result);
}

#[test]
fn import_requires_the_answer_section() {
    let catalog = engine(RuleSetVersion::V100).rule_set().catalog().clone();
    let error = import_answers("Area,Score,Max Score\nTOTAL,0,100\n".as_bytes(), &catalog)
        .expect_err("no answer section");
    assert!(matches!(error, ExportError::MissingAnswerSection));
}
