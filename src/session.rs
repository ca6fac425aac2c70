//! One lookup: fetch, show conditions, ask for confidence, estimate, show result.

use std::io::{BufRead, Write};

use skysense_core::AppError;
use skysense_predict::RainEstimator;
use skysense_weather::WeatherProvider;

use crate::cli::Args;
use crate::error_mapping::IntoAppError;
use crate::form;
use crate::render::{render_conditions, render_prediction, Report};

/// Runs a single request against `provider`, prompting on `input` for anything
/// `args` leaves out. A failed fetch returns before the confidence prompt.
pub async fn run<R: BufRead, W: Write>(
    args: &Args,
    provider: &WeatherProvider,
    estimator: &RainEstimator,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let city = match &args.city {
        Some(city) => city.clone(),
        None => form::prompt_city(input, output)?,
    };

    let conditions = provider
        .fetch_current(&city)
        .await
        .map_err(IntoAppError::into_app_error)?;

    if !args.json {
        writeln!(output, "{}", render_conditions(&conditions))?;
    }

    let confidence = match args.confidence {
        Some(level) => level,
        None => form::prompt_confidence(input, output)?,
    };

    let prediction = estimator
        .predict(&conditions.condition, confidence)
        .map_err(IntoAppError::into_app_error)?;

    if args.json {
        let json = Report::new(&conditions, &prediction)
            .to_json()
            .map_err(|e| AppError::Other(e.into()))?;
        writeln!(output, "{}", json)?;
    } else {
        writeln!(output)?;
        write!(output, "{}", render_prediction(&prediction))?;
    }

    Ok(())
}
