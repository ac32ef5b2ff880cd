use anyhow::Result;
use clap::Parser;
use notifier_cli::{init_tracing, run_cli, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    run_cli(Cli::parse()).await
}
