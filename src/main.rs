use anyhow::Result;
use clap::Parser;
use echelon::cli::{self, Cli};

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose turns on debug output unless RUST_LOG says otherwise
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let output = cli::run(&cli)?;
    println!("{output}");

    Ok(())
}
