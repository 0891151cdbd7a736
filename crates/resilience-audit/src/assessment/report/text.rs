use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::super::aggregate::AssessmentResult;
use super::RecommendationPriority;

const RULE_WIDTH: usize = 70;
const DISCLAIMER: &str = "This assessment is a readiness and risk evaluation tool. It does not constitute\nlegal advice. Organizations should consult legal counsel for compliance strategy.";

/// Plain-text report for download or terminal output.
pub fn render_text(result: &AssessmentResult, generated_at: DateTime<Utc>) -> String {
    let mut report = String::new();
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(
        &mut report,
        "{} - ASSESSMENT REPORT",
        result.version.label().to_uppercase()
    )
    .expect("write title");
    writeln!(
        &mut report,
        "Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
    .expect("write timestamp");
    writeln!(&mut report, "{heavy}\n").expect("write rule");

    writeln!(
        &mut report,
        "OVERALL COMPLIANCE SCORE: {}/{} ({:.1}%)",
        result.total,
        result.max_possible,
        result.percentage()
    )
    .expect("write total");
    writeln!(&mut report, "RISK LEVEL: {}\n", result.risk_tier).expect("write risk level");

    report.push_str("AREA SCORES:\n");
    for area in &result.areas {
        write!(
            &mut report,
            "- {}: {}/{}",
            area.title, area.score, area.maximum
        )
        .expect("write area score");
        if !area.applicable {
            report.push_str(" (not applicable)");
        } else if area.display_score != area.score {
            write!(&mut report, " (shown as {})", area.display_score).expect("write display score");
        }
        report.push('\n');
    }
    report.push('\n');

    section(&mut report, &light, "CRITICAL FINDINGS", &result.findings, |_| None);
    section(&mut report, &light, "REGULATORY GAPS", &result.gaps, |_| None);
    section(
        &mut report,
        &light,
        "RECOMMENDED ACTIONS",
        &result.recommendations,
        |index| Some(RecommendationPriority::for_position(index)),
    );

    writeln!(&mut report, "DISCLAIMER\n{light}\n{DISCLAIMER}").expect("write disclaimer");

    writeln!(&mut report, "\n{heavy}").expect("write rule");
    report.push_str("Report created by EU Digital Resilience Toolkit\n");
    report
}

fn section(
    report: &mut String,
    rule: &str,
    title: &str,
    items: &[String],
    priority: impl Fn(usize) -> Option<RecommendationPriority>,
) {
    if items.is_empty() {
        return;
    }
    writeln!(report, "{title} ({}):\n{rule}", items.len()).expect("write section header");
    for (index, item) in items.iter().enumerate() {
        let written = match priority(index) {
            Some(tag) => writeln!(report, "{}. [{}] {item}", index + 1, tag.label()),
            None => writeln!(report, "{}. {item}", index + 1),
        };
        written.expect("write section item");
    }
    report.push('\n');
}
