//! Sample command - prints generated student records

use clap::Args;
use tracing::info;

use crate::domain::SampleGenerator;

#[derive(Args, Clone)]
pub struct SampleArgs {
    /// Number of records to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}

pub async fn run(args: SampleArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let mut generator = match args.seed.or(config.sample.seed) {
        Some(seed) => SampleGenerator::seeded(seed),
        None => SampleGenerator::from_entropy(),
    };

    info!(count = args.count, "Generating sample records");
    for record in generator.generate_many(args.count) {
        println!("{}", serde_json::to_string(&record)?);
    }

    Ok(())
}
