//! Typeahead - terminal front-end for the search controller.
//!
//! Reads one event per stdin line, forwards it to a [`SearchSession`] and
//! prints what the session renders. Logs go to stderr.

mod commands;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Command, HELP};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use terminal::TerminalView;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use typeahead_core::config::{NetworkConfig, StorageConfig};
use typeahead_core::{
    HttpSearchService, JsonFileStore, KeyValueStore, MemoryStore, SearchEvents, SearchSession,
    SuggestionOrdering,
};

#[derive(Parser, Debug)]
#[command(name = "typeahead")]
#[command(about = "Interactive search box against a typeahead search service")]
struct Args {
    /// Base URL of the search service
    #[arg(long, default_value = NetworkConfig::DEFAULT_BASE_URL)]
    base_url: String,

    /// File holding history and counters (defaults to the user data directory)
    #[arg(long, conflicts_with = "ephemeral")]
    state_file: Option<PathBuf>,

    /// Keep history and counters in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Quiet period before typed input is sent for autocomplete, in milliseconds
    #[arg(long, default_value = "300")]
    debounce_ms: u64,

    /// Interval of the popular/cache refresh, in seconds
    #[arg(long, default_value = "30")]
    refresh_secs: u64,

    /// Drop autocomplete responses that arrive after a newer one
    #[arg(long)]
    latest_request_wins: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let service = HttpSearchService::new(&args.base_url)
        .with_context(|| format!("invalid --base-url {}", args.base_url))?;
    info!("Search service: {}", service.base_url());

    let store: Arc<dyn KeyValueStore> = if args.ephemeral {
        info!("Using in-memory state");
        Arc::new(MemoryStore::new())
    } else {
        let path = match args.state_file {
            Some(path) => path,
            None => default_state_file()?,
        };
        info!("State file: {}", path.display());
        Arc::new(JsonFileStore::open(path))
    };

    let ordering = if args.latest_request_wins {
        SuggestionOrdering::LatestRequestWins
    } else {
        SuggestionOrdering::LastResponseWins
    };

    let session = SearchSession::builder(Arc::new(service))
        .view(Arc::new(TerminalView::new()))
        .store(store)
        .debounce_delay(Duration::from_millis(args.debounce_ms))
        .refresh_interval(Duration::from_secs(args.refresh_secs))
        .suggestion_ordering(ordering)
        .build();

    let _polling = session.start().await;
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    info!("End of input, exiting");
                    break;
                };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => dispatch(&session, command).await,
                    Err(e) => warn!("{}", e),
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received, exiting");
                break;
            }
        }
    }

    Ok(())
}

async fn dispatch(session: &SearchSession, command: Command) {
    match command {
        Command::Input(text) => session.on_input_changed(text).await,
        Command::Key(key) => session.on_key_pressed(key).await,
        Command::Submit => session.on_submit().await,
        Command::Focus => session.on_focus().await,
        Command::Blur => session.on_outside_click().await,
        Command::PickSuggestion(n) => session.on_suggestion_picked(n - 1).await,
        Command::PickHistory(n) => session.on_history_item_picked(n - 1).await,
        Command::PickPopular(rank) => {
            if session.pick_popular_rank(rank).await.is_none() {
                warn!("No popular query at rank {}", rank);
            }
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
}

fn default_state_file() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(dirs::home_dir)
        .context("could not determine a data directory; pass --state-file or --ephemeral")?;
    Ok(base
        .join(StorageConfig::STATE_DIR_NAME)
        .join(StorageConfig::STATE_FILE_NAME))
}
