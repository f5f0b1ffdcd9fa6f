use anyhow::Context;
use clap::Parser;

use counter_store::cli::{new_session, parse_ops, run_ops, Cli};
use counter_store::config::Config;
use counter_store::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let ops = parse_ops(&cli.ops)?;
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    let (store, fetcher) = new_session(&config);

    for report in run_ops(&store, &fetcher, &ops).await {
        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", report);
        }
    }

    Ok(())
}
