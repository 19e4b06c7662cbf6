//! CLI module for the student outcome client
//!
//! Provides subcommands:
//! - `sample`: print generated student records
//! - `predict`: fill the form, submit it and show the result
//! - `status`: show classification service and model status
//! - `example`: show the service's example input

pub mod example;
pub mod predict;
pub mod sample;
pub mod status;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::{HttpClient, PredictionClient};

/// Student Outcome - predict course outcomes from student attributes
#[derive(Parser)]
#[command(name = "student-outcome")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print randomly generated student records as JSON lines
    Sample(sample::SampleArgs),

    /// Submit a student record and show the predicted outcome
    Predict(predict::PredictArgs),

    /// Show classification service and model status
    Status(status::StatusArgs),

    /// Print the example input published by the service
    Example(example::ExampleArgs),
}

/// Load `.env` and configuration, then install logging
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    config
}

/// Build a prediction client, preferring the command-line URL over config
fn build_client(
    config: &AppConfig,
    api_url: Option<&str>,
) -> anyhow::Result<PredictionClient<HttpClient>> {
    let http = HttpClient::from_timeout_secs(config.api.timeout_secs)?;
    let url = api_url.unwrap_or(&config.api.url);

    Ok(PredictionClient::new(http, url))
}
