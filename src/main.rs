mod cli;
mod commands;
mod error;
mod page_range;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    commands::split::run(&cli.input, &cli.ranges, &cli.output, cli.json)?;

    Ok(())
}
