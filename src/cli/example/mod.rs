//! Example command - prints the service's example input

use clap::Args;

#[derive(Args, Clone)]
pub struct ExampleArgs {
    /// Classification service URL (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: ExampleArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let client = super::build_client(&config, args.api_url.as_deref())?;

    let example = client.example_input().await?;
    println!("{}", serde_json::to_string_pretty(&example.example_input)?);

    if !example.possible_predictions.is_empty() {
        println!(
            "Possible predictions: {}",
            example.possible_predictions.join(", ")
        );
    }

    Ok(())
}
