use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Thematic section of the questionnaire with its own maximum and rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaKind {
    Governance,
    RiskManagement,
    SupplyChain,
    IncidentResponse,
    TechnicalMeasures,
    AiEthics,
}

impl AreaKind {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Governance,
            Self::RiskManagement,
            Self::SupplyChain,
            Self::IncidentResponse,
            Self::TechnicalMeasures,
            Self::AiEthics,
        ]
    }
}

/// Overall classification derived from the share of the maximum score achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Percentage at or above which an assessment is classified as low risk.
    pub const LOW_THRESHOLD_PCT: i64 = 85;
    /// Percentage at or above which an assessment is at most medium risk.
    pub const MEDIUM_THRESHOLD_PCT: i64 = 65;

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies a self-consistent bundle of catalog, rule tables, and maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleSetVersion {
    /// Four-phase NIS2 + DORA readiness check, 100 points.
    #[serde(rename = "v100")]
    V100,
    /// 2026 audit across six areas, 118 points.
    #[serde(rename = "v118")]
    V118,
    /// 2026 audit with graduated tiers, 130 points.
    #[serde(rename = "v130")]
    V130,
}

impl RuleSetVersion {
    pub const fn ordered() -> [Self; 3] {
        [Self::V100, Self::V118, Self::V130]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::V100 => "v100",
            Self::V118 => "v118",
            Self::V130 => "v130",
        }
    }

    /// Published maximum the area maxima of this version must add up to.
    pub const fn published_maximum(self) -> i32 {
        match self {
            Self::V100 => 100,
            Self::V118 => 118,
            Self::V130 => 130,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::V100 => "EU Digital Resilience Assessment (NIS2 + DORA)",
            Self::V118 => "EU Digital Resilience Audit 2026",
            Self::V130 => "EU Digital Resilience Audit 2026 (graduated)",
        }
    }
}

impl Default for RuleSetVersion {
    fn default() -> Self {
        Self::V130
    }
}

impl fmt::Display for RuleSetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule set version '{0}' (expected v100, v118, or v130)")]
pub struct UnknownRuleSetVersion(pub String);

impl FromStr for RuleSetVersion {
    type Err = UnknownRuleSetVersion;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "v100" | "100" => Ok(Self::V100),
            "v118" | "118" => Ok(Self::V118),
            "v130" | "130" => Ok(Self::V130),
            _ => Err(UnknownRuleSetVersion(value.to_string())),
        }
    }
}
