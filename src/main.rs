use anyhow::Result;
use clap::Parser;

use animal_facts::cli::{execute, Cli};
use animal_facts::config::Config;
use animal_facts::logging::init_tracing;
use animal_facts::runtime::Environment;

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.feed.base_url = base_url;
        config.validate()?;
    }

    // Without local storage there is nothing to show; abort startup.
    let env = Environment::from_config(&config)?;

    let mut stdout = std::io::stdout().lock();
    execute(cli.command, env, &mut stdout).await
}
