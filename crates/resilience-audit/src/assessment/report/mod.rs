mod csv;
mod text;

pub use self::csv::{export_csv, import_answers};
pub use text::render_text;

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("failed to flush CSV export: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("CSV data has no Question,Response section")]
    MissingAnswerSection,
}

/// Urgency tag attached to recommendations by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

impl RecommendationPriority {
    /// First three are high, next three medium, the rest low.
    pub const fn for_position(index: usize) -> Self {
        match index {
            0..=2 => Self::High,
            3..=5 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}
