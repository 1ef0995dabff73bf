use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster::core::{RosterConfig, DEFAULT_MAX_NUMBER, DEFAULT_MIN_NUMBER};
use roster::store::Store;
use roster::ui::Session;

/// Manage a roster of players from the terminal.
#[derive(Parser, Debug)]
#[command(name = "roster")]
struct Args {
    /// Start with an empty roster instead of the seed players
    #[arg(long)]
    empty: bool,

    /// Lowest jersey number the form accepts
    #[arg(long, default_value_t = DEFAULT_MIN_NUMBER, allow_negative_numbers = true)]
    min_number: i64,

    /// Highest jersey number the form accepts
    #[arg(long, default_value_t = DEFAULT_MAX_NUMBER, allow_negative_numbers = true)]
    max_number: i64,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = RosterConfig::default().with_number_range(args.min_number, args.max_number);
    if args.empty {
        config = config.without_seed();
    }
    config.validate()?;

    let mut store: Store = Store::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut store, config.number_range, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
