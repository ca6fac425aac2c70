//! Estimator error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    #[error("Confidence must be a finite number, got {0}")]
    InvalidConfidence(f64),

    #[error("Unknown confidence level: {0}")]
    UnknownConfidenceLabel(String),

    #[error("Prior weights must be finite and positive (rain={rain}, no_rain={no_rain})")]
    InvalidPrior { rain: f64, no_rain: f64 },

    #[error("Likelihood weights for '{label}' must be finite and non-negative")]
    InvalidLikelihood { label: String },

    #[error("Adjusted distribution cannot be normalized for confidence {0}")]
    Degenerate(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_value() {
        let err = PredictError::UnknownConfidenceLabel("Maybe".into());
        assert!(err.to_string().contains("Maybe"));

        let err = PredictError::InvalidPrior {
            rain: 0.0,
            no_rain: 1.0,
        };
        assert!(err.to_string().contains("rain=0"));
    }
}
