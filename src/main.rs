use clap::Parser;
use student_outcome::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Sample(args) => cli::sample::run(args).await,
        Command::Predict(args) => cli::predict::run(args).await,
        Command::Status(args) => cli::status::run(args).await,
        Command::Example(args) => cli::example::run(args).await,
    }
}
