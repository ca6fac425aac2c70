mod cli;
mod error_mapping;
mod form;
mod render;
mod session;

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use skysense_core::{AppError, Config};
use skysense_predict::RainEstimator;
use skysense_weather::{ProviderSettings, WeatherProvider};
use structopt::StructOpt;

use crate::cli::Args;
use crate::error_mapping::{failure_message, IntoAppError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = skysense_core::init() {
        eprintln!("{}", e);
    }

    let args = Args::from_args();

    match start(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "request failed");
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<Config, AppError> {
    let (config, _warnings) = match &args.config {
        Some(path) => Config::load_validated_from(path)?,
        None => Config::load_validated()?,
    };
    Ok(config)
}

async fn start(args: &Args) -> Result<(), AppError> {
    let config = load_config(args)?;

    let provider = WeatherProvider::new(ProviderSettings {
        base_url: config.weather.api_base_url.clone(),
        api_key: config.weather.api_key_from_env(),
        timeout: Duration::from_secs(config.weather.timeout_secs),
    })
    .map_err(IntoAppError::into_app_error)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    session::run(
        args,
        &provider,
        &RainEstimator::default(),
        &mut input,
        &mut output,
    )
    .await
}
