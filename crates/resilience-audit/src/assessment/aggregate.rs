use serde::{Deserialize, Serialize};

use super::domain::{RiskTier, RuleSetVersion};
use super::engine::AreaResult;

/// Combined outcome across all areas of a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub version: RuleSetVersion,
    pub areas: Vec<AreaResult>,
    pub total: i32,
    /// Sum of the clamped per-area display scores.
    pub display_total: i32,
    pub max_possible: i32,
    pub risk_tier: RiskTier,
    pub findings: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
}

impl AssessmentResult {
    pub fn percentage(&self) -> f64 {
        if self.max_possible == 0 {
            return 0.0;
        }
        f64::from(self.total) * 100.0 / f64::from(self.max_possible)
    }
}

/// Maps a total onto a risk tier; boundaries belong to the higher tier.
pub fn classify(total: i32, max_possible: i32) -> RiskTier {
    let scaled = i64::from(total) * 100;
    let max = i64::from(max_possible);
    if scaled >= RiskTier::LOW_THRESHOLD_PCT * max {
        RiskTier::Low
    } else if scaled >= RiskTier::MEDIUM_THRESHOLD_PCT * max {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

/// Sums area scores and concatenates texts in area, then rule, order.
pub fn aggregate(version: RuleSetVersion, areas: Vec<AreaResult>) -> AssessmentResult {
    let total = areas.iter().map(|area| area.score).sum();
    let display_total = areas.iter().map(|area| area.display_score).sum();
    let max_possible = areas.iter().map(|area| area.maximum).sum();

    let findings = areas
        .iter()
        .flat_map(|area| area.findings.iter().cloned())
        .collect();
    let gaps = areas
        .iter()
        .flat_map(|area| area.gaps.iter().cloned())
        .collect();
    let recommendations = areas
        .iter()
        .flat_map(|area| area.recommendations.iter().cloned())
        .collect();

    AssessmentResult {
        version,
        risk_tier: classify(total, max_possible),
        areas,
        total,
        display_total,
        max_possible,
        findings,
        gaps,
        recommendations,
    }
}
