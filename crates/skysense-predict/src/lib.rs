//! Rain probability estimation for SkySense.
//!
//! Combines a fixed prior with per-condition likelihood weights, then skews
//! the posterior by how strongly the user expects rain.

pub mod advice;
pub mod confidence;
pub mod error;
pub mod estimator;

pub use advice::Advice;
pub use confidence::ConfidenceLevel;
pub use error::PredictError;
pub use estimator::{ConditionalTable, Likelihood, Prediction, RainDistribution, RainEstimator};
