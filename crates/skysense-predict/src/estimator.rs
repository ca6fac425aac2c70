//! Bayesian rain estimate with a confidence skew.
//!
//! ```text
//! posterior(o) ∝ prior(o) · w(o) / Σ w
//! adjusted(Rain)    ∝ posterior(Rain)    · (1 + 0.3·c)
//! adjusted(No Rain) ∝ posterior(No Rain) · (1 − 0.3·c)
//! ```
//!
//! Labels without weights (or with zero total weight) yield an even split.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::advice::Advice;
use crate::confidence::ConfidenceLevel;
use crate::error::PredictError;

/// Strength of the linear confidence skew.
pub const CONFIDENCE_SKEW: f64 = 0.3;

/// Baseline rain frequency before looking at current conditions.
pub const DEFAULT_PRIOR: Likelihood = Likelihood {
    rain: 0.15,
    no_rain: 0.85,
};

const BUILTIN_CONDITIONS: [(&str, Likelihood); 6] = [
    ("Clear", Likelihood { rain: 0.05, no_rain: 0.95 }),
    ("Partly Cloudy", Likelihood { rain: 0.30, no_rain: 0.70 }),
    ("Cloudy", Likelihood { rain: 0.80, no_rain: 0.20 }),
    ("Rainy", Likelihood { rain: 0.90, no_rain: 0.10 }),
    ("Stormy", Likelihood { rain: 0.95, no_rain: 0.05 }),
    ("few clouds", Likelihood { rain: 0.30, no_rain: 0.70 }),
];

/// Relative weights for each outcome. They need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Likelihood {
    pub rain: f64,
    pub no_rain: f64,
}

impl Likelihood {
    /// No evidence either way.
    pub const EMPTY: Likelihood = Likelihood {
        rain: 0.0,
        no_rain: 0.0,
    };

    pub fn total(&self) -> f64 {
        self.rain + self.no_rain
    }

    fn is_valid_weight(&self) -> bool {
        self.rain.is_finite() && self.no_rain.is_finite() && self.rain >= 0.0 && self.no_rain >= 0.0
    }
}

/// A normalized {Rain, No Rain} distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RainDistribution {
    pub rain: f64,
    pub no_rain: f64,
}

impl RainDistribution {
    /// Even split used when the condition gives no evidence.
    pub const NEUTRAL: RainDistribution = RainDistribution {
        rain: 0.5,
        no_rain: 0.5,
    };

    /// Scale `rain` and `no_rain` so they sum to 1.
    ///
    /// Returns `None` when the total is zero or not finite.
    pub fn normalized(rain: f64, no_rain: f64) -> Option<Self> {
        let total = rain + no_rain;
        if total == 0.0 || !total.is_finite() {
            return None;
        }
        Some(Self {
            rain: rain / total,
            no_rain: no_rain / total,
        })
    }

    pub fn total(&self) -> f64 {
        self.rain + self.no_rain
    }

    pub fn rain_percent(&self) -> f64 {
        self.rain * 100.0
    }

    pub fn no_rain_percent(&self) -> f64 {
        self.no_rain * 100.0
    }
}

/// Condition label → likelihood weights. Lookups are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalTable {
    entries: HashMap<String, Likelihood>,
}

impl ConditionalTable {
    /// A table with no known conditions.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace the weights for `label`.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        weights: Likelihood,
    ) -> Result<(), PredictError> {
        let label = label.into();
        if !weights.is_valid_weight() {
            return Err(PredictError::InvalidLikelihood { label });
        }
        self.entries.insert(label, weights);
        Ok(())
    }

    /// Weights for `label`, or [`Likelihood::EMPTY`] if the label is unknown.
    pub fn weights_for(&self, label: &str) -> Likelihood {
        self.entries.get(label).copied().unwrap_or(Likelihood::EMPTY)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Known labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ConditionalTable {
    fn default() -> Self {
        Self {
            entries: BUILTIN_CONDITIONS
                .iter()
                .map(|(label, weights)| (label.to_string(), *weights))
                .collect(),
        }
    }
}

/// Outcome of a single prediction request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub condition: String,
    pub confidence: ConfidenceLevel,
    pub distribution: RainDistribution,
    pub advice: Advice,
}

/// Stateless rain estimator over an immutable prior and conditional table.
#[derive(Debug, Clone, PartialEq)]
pub struct RainEstimator {
    prior: Likelihood,
    table: ConditionalTable,
}

impl Default for RainEstimator {
    fn default() -> Self {
        Self {
            prior: DEFAULT_PRIOR,
            table: ConditionalTable::default(),
        }
    }
}

impl RainEstimator {
    /// Build an estimator from a custom prior and table.
    ///
    /// Both prior weights must be finite and strictly positive so the
    /// posterior can always be normalized.
    pub fn new(prior: Likelihood, table: ConditionalTable) -> Result<Self, PredictError> {
        let valid = prior.rain.is_finite()
            && prior.no_rain.is_finite()
            && prior.rain > 0.0
            && prior.no_rain > 0.0;
        if !valid {
            return Err(PredictError::InvalidPrior {
                rain: prior.rain,
                no_rain: prior.no_rain,
            });
        }
        Ok(Self { prior, table })
    }

    pub fn prior(&self) -> Likelihood {
        self.prior
    }

    pub fn table(&self) -> &ConditionalTable {
        &self.table
    }

    /// Normalized posterior for `condition`, before any confidence skew.
    ///
    /// Returns `None` when the condition carries no evidence.
    fn evidence_posterior(&self, condition: &str) -> Option<RainDistribution> {
        let weights = self.table.weights_for(condition);
        let evidence_sum = weights.total();
        if evidence_sum == 0.0 {
            return None;
        }

        let rain = self.prior.rain * (weights.rain / evidence_sum);
        let no_rain = self.prior.no_rain * (weights.no_rain / evidence_sum);
        RainDistribution::normalized(rain, no_rain)
    }

    /// Posterior for `condition` without the confidence skew.
    pub fn posterior(&self, condition: &str) -> RainDistribution {
        self.evidence_posterior(condition)
            .unwrap_or(RainDistribution::NEUTRAL)
    }

    /// Confidence-adjusted rain distribution for `condition`.
    ///
    /// `confidence` is expected in [0, 1] but is not clamped. Values above
    /// 1/0.3 flip the sign of the No Rain weight before normalization.
    pub fn estimate(
        &self,
        condition: &str,
        confidence: f64,
    ) -> Result<RainDistribution, PredictError> {
        if !confidence.is_finite() {
            return Err(PredictError::InvalidConfidence(confidence));
        }
        if !(0.0..=1.0).contains(&confidence) {
            tracing::warn!(confidence, "Confidence outside [0, 1]; estimate is not clamped");
        }

        let Some(posterior) = self.evidence_posterior(condition) else {
            tracing::debug!(condition, "No likelihood weights for condition, using neutral estimate");
            return Ok(RainDistribution::NEUTRAL);
        };

        let rain = posterior.rain * (1.0 + confidence * CONFIDENCE_SKEW);
        let no_rain = posterior.no_rain * (1.0 - confidence * CONFIDENCE_SKEW);

        RainDistribution::normalized(rain, no_rain).ok_or(PredictError::Degenerate(confidence))
    }

    /// Estimate for an ordinal confidence level, bundled with advice.
    pub fn predict(
        &self,
        condition: &str,
        confidence: ConfidenceLevel,
    ) -> Result<Prediction, PredictError> {
        let distribution = self.estimate(condition, confidence.value())?;
        let advice = Advice::from_distribution(&distribution);

        tracing::info!(
            condition,
            confidence = confidence.label(),
            rain = distribution.rain,
            "Rain estimate computed"
        );

        Ok(Prediction {
            condition: condition.to_string(),
            confidence,
            distribution,
            advice,
        })
    }
}
