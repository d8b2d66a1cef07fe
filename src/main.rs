use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tokentree::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_level()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if !cli.directory.exists() {
        println!("Directory '{}' does not exist.", cli.directory.display());
        std::process::exit(1);
    }

    tokentree::run(&cli)
}
