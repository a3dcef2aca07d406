use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::MenuLoop;
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Menu-driven personal expense tracker",
    long_about = "Records expenses into expenses.csv in the current directory and \
                  shows them as a list, per month, or per category. Run without \
                  arguments to open the interactive menu."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_logger(LevelFilter::WARN);

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    let storage = Storage::new(settings.apply_to(paths));
    debug!(store = %storage.expenses.path().display(), "starting expense tracker");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    MenuLoop::new(&storage, &settings, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}

/// Initializes the tracing subscriber on stderr so log lines never mix with
/// the menu on stdout.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
