//! CLI entry point for batch stimulus expansion

use clap::Parser;
use stimgrid::io::cli::{Cli, FileProcessor};

fn main() -> stimgrid::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    FileProcessor::new(cli).process()?;
    Ok(())
}
