//! Pegboard terminal application.
//!
//! Plays cross-shaped peg solitaire on stdin/stdout.
//!
//! # Usage
//!
//! ```sh
//! cargo run
//! ```
//!
//! Keep the best time somewhere else, or not at all:
//!
//! ```sh
//! cargo run -- --best-time-file ~/.pegboard.json
//! cargo run -- --no-best-time
//! ```
//!
//! Set `RUST_LOG=debug` to see move-level logging on stderr.

use std::{
    io::{self, BufRead as _},
    path::PathBuf,
    time::Duration,
};

use clap::Parser;
use pegboard_app::{
    DEFAULT_BEST_TIME_FILE, DEFAULT_TICK_MILLIS, PegboardApp, persistence::JsonFileStore,
};
use pegboard_game::{BestTimeStore, MemoryBestTimeStore};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file holding the best winning time.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BEST_TIME_FILE)]
    best_time_file: PathBuf,

    /// Keep the best time in memory only.
    #[arg(long, conflicts_with = "best_time_file")]
    no_best_time: bool,

    /// Length of one clock tick in milliseconds.
    #[arg(
        long,
        value_name = "MILLIS",
        default_value_t = DEFAULT_TICK_MILLIS,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    tick_millis: u64,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let tick_period = Duration::from_millis(args.tick_millis);

    if args.no_best_time {
        run(MemoryBestTimeStore::default(), tick_period)
    } else {
        log::info!("best time file: {}", args.best_time_file.display());
        run(
            JsonFileStore::open_or_default(args.best_time_file),
            tick_period,
        )
    }
}

fn run<S>(store: S, tick_period: Duration) -> io::Result<()>
where
    S: BestTimeStore,
{
    let stdout = io::stdout().lock();
    let mut app = PegboardApp::new(store, stdout, tick_period);
    app.start()?;

    for line in io::stdin().lock().lines() {
        if app.handle_line(&line?)?.is_break() {
            return Ok(());
        }
    }

    // EOF: leave the cursor on a fresh line.
    println!();
    Ok(())
}
