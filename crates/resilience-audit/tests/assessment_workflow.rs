//! End-to-end scenarios driven through the public service facade: a partially
//! completed 2026 audit is scored, reported, exported, and read back.

mod common {
    use resilience_audit::assessment::{AnswerStore, AssessmentService, RuleSetVersion};

    pub(super) fn service() -> AssessmentService {
        AssessmentService::load(RuleSetVersion::default()).expect("rule sets load")
    }

    /// A mid-sized manufacturer half way through its first audit.
    pub(super) fn manufacturer_answers() -> AnswerStore {
        AnswerStore::new()
            .with_choice("sector", "Manifatturiero (Prodotti critici)")
            .with_selections(
                "scope",
                &["NIS2 Entità Importante (>50 dip. O >€10M in settore importante)"],
            )
            .with_choice("board_approval", "Parziale - Discusso ma non approvato formalmente")
            .with_choice("mfa_zerotrust", "Parziale - MFA solo per VPN o admin")
            .with_choice("encryption", "No - Nessuna crittografia sistematica")
            .with_selections("ai_systems_in_use", &["Chatbot e assistenti virtuali"])
            .with_choice("ai_transparency", "Parziale - Disclosure in privacy policy ma non evidente")
    }
}

use chrono::Utc;
use common::*;
use resilience_audit::assessment::{
    import_answers, AssessmentServiceError, FeedbackLevel, RiskTier, RuleSetVersion,
};

#[test]
fn every_version_scores_the_same_answers_independently() {
    let service = service();
    let answers = manufacturer_answers();

    for version in RuleSetVersion::ordered() {
        let result = service.score(version.key(), &answers).expect("version known");
        assert_eq!(result.version, version);
        assert_eq!(result.max_possible, version.published_maximum());
        assert_eq!(
            result.total,
            result.areas.iter().map(|area| area.score).sum::<i32>()
        );
        assert!(result.total <= result.max_possible);
    }
}

#[test]
fn partial_audit_is_high_risk_with_actionable_output() {
    let service = service();
    let result = service
        .score("v130", &manufacturer_answers())
        .expect("scores");

    assert_eq!(result.risk_tier, RiskTier::High);
    assert!(result
        .findings
        .iter()
        .any(|finding| finding == "Crittografia dati sensibili non implementata"));
    assert!(result
        .recommendations
        .iter()
        .any(|text| text == "Aggiornare piano di conformità e ottenere nuova approvazione CdA"));

    let ai = result.areas.last().expect("ai area");
    assert!(ai.applicable);
    assert!(ai.score < ai.maximum);
}

#[test]
fn report_export_and_reimport_agree() {
    let service = service();
    let answers = manufacturer_answers();

    let report = service
        .report("v118", &answers, Utc::now())
        .expect("report renders");
    assert!(report.starts_with("EU DIGITAL RESILIENCE AUDIT 2026 - ASSESSMENT REPORT"));

    let csv = service.export("v118", &answers).expect("export renders");
    let catalog = service.catalog("v118").expect("catalog");
    let restored = import_answers(csv.as_bytes(), catalog).expect("answers read back");

    assert_eq!(restored, answers);
    assert_eq!(
        service.score("v118", &restored).expect("scores"),
        service.score("v118", &answers).expect("scores")
    );
}

#[test]
fn unknown_versions_and_questions_are_reported() {
    let service = service();

    let error = service
        .score("v2", &manufacturer_answers())
        .expect_err("unknown version");
    assert!(matches!(error, AssessmentServiceError::UnknownRuleSet(_)));

    let value = resilience_audit::assessment::AnswerValue::choice("x");
    let error = service
        .feedback("v130", "favourite_colour", &value)
        .expect_err("unknown question");
    assert!(matches!(error, AssessmentServiceError::UnknownQuestion(_)));

    let partial = service
        .feedback(
            "v130",
            "mfa_zerotrust",
            &resilience_audit::assessment::AnswerValue::choice("Parziale - MFA solo per VPN o admin"),
        )
        .expect("feedback");
    assert_eq!(partial.level, FeedbackLevel::Warning);
}
