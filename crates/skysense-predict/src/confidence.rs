use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PredictError;

/// How strongly the user expects rain today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryUnlikely,
    Unlikely,
    #[default]
    Neutral,
    Likely,
    VeryLikely,
}

impl ConfidenceLevel {
    /// All levels, least to most confident.
    pub const ALL: [ConfidenceLevel; 5] = [
        Self::VeryUnlikely,
        Self::Unlikely,
        Self::Neutral,
        Self::Likely,
        Self::VeryLikely,
    ];

    /// Display label, e.g. "Very Likely".
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryUnlikely => "Very Unlikely",
            Self::Unlikely => "Unlikely",
            Self::Neutral => "Neutral",
            Self::Likely => "Likely",
            Self::VeryLikely => "Very Likely",
        }
    }

    /// Scalar in [0, 1] fed to the estimator.
    pub fn value(&self) -> f64 {
        match self {
            Self::VeryUnlikely => 0.05,
            Self::Unlikely => 0.2,
            Self::Neutral => 0.5,
            Self::Likely => 0.8,
            Self::VeryLikely => 1.0,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = PredictError;

    /// Accepts "Very Likely", "very-likely" and "very_likely" in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");

        Self::ALL
            .into_iter()
            .find(|level| level.label().to_ascii_lowercase() == normalized)
            .ok_or_else(|| PredictError::UnknownConfidenceLabel(s.to_string()))
    }
}
