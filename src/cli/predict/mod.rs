//! Predict command - fills the form, submits it and renders the result

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Args;
use tracing::info;

use crate::domain::{FieldName, PredictionResult, PresentedResult, SampleGenerator};
use crate::infrastructure::{HttpClientTrait, PredictionSession, TracingObserver};

pub use render::TextView;

#[derive(Args, Clone)]
pub struct PredictArgs {
    /// JSON file with student fields (may be partial)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Start from a randomly generated sample
    #[arg(long)]
    pub random: bool,

    /// Seed for the random sample (overrides config)
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Set a field, e.g. `--set avg_score=72.5` (repeatable, applied last)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Print the raw result and its presented view as JSON
    #[arg(long)]
    pub json: bool,

    /// Classification service URL (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let client = super::build_client(&config, args.api_url.as_deref())?;

    let mut session = PredictionSession::new(client);
    session.subscribe(Arc::new(TracingObserver));

    if args.random {
        let mut generator = match args.seed.or(config.sample.seed) {
            Some(seed) => SampleGenerator::seeded(seed),
            None => SampleGenerator::from_entropy(),
        };
        session.generate_sample(&mut generator);
        info!("Loaded random sample");
    }

    if let Some(path) = &args.input {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let fields: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?;
        apply_json(&mut session, &fields)?;
    }

    for assignment in &args.set {
        let (field, value) = parse_assignment(assignment)?;
        session.update_field(field, value)?;
    }

    let result = session.submit().await?;
    let Some(presented) = session.present() else {
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json_report(&result, &presented))?);
    } else {
        print!("{}", TextView(&presented));
    }

    Ok(())
}

/// Raw service result alongside the display view
fn json_report(result: &PredictionResult, presented: &PresentedResult) -> serde_json::Value {
    serde_json::json!({
        "result": result,
        "view": presented,
    })
}

/// Apply every field of a JSON object to the form
fn apply_json<C: HttpClientTrait>(
    session: &mut PredictionSession<C>,
    fields: &serde_json::Value,
) -> anyhow::Result<()> {
    let Some(object) = fields.as_object() else {
        bail!("Input must be a JSON object of student fields");
    };

    for (name, value) in object {
        let field: FieldName = name.parse()?;
        let raw = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Null => String::new(),
            other => bail!("Unsupported value for '{}': {}", name, other),
        };
        session.update_field(field, &raw)?;
    }

    Ok(())
}

fn parse_assignment(assignment: &str) -> anyhow::Result<(FieldName, &str)> {
    let Some((name, value)) = assignment.split_once('=') else {
        bail!("Expected FIELD=VALUE, got '{}'", assignment);
    };

    Ok((name.trim().parse()?, value))
}
