//! Status command - reports service and model availability

use clap::Args;
use tracing::warn;

#[derive(Args, Clone)]
pub struct StatusArgs {
    /// Classification service URL (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: StatusArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let client = super::build_client(&config, args.api_url.as_deref())?;

    let status = client.status().await?;
    println!("{} ({})", status.message, status.status);
    for (endpoint, description) in &status.endpoints {
        println!("  {:<14} {}", endpoint, description);
    }

    match client.model_info().await {
        Ok(info) if info.model_loaded => {
            println!(
                "Model: {}",
                info.model_type.as_deref().unwrap_or("unknown")
            );
            println!("Classes: {}", info.classes.join(", "));
            println!("Features: {}", info.feature_columns.join(", "));
        }
        Ok(info) => {
            println!(
                "Model: not loaded{}",
                info.message.map(|m| format!(" ({})", m)).unwrap_or_default()
            );
        }
        Err(e) => warn!(error = %e, "Could not fetch model info"),
    }

    Ok(())
}
