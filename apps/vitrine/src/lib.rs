//! # Vitrine Storefront Library
//!
//! Store, commands and terminal view for the Vitrine storefront.
//!
//! ## Module Organization
//! ```text
//! vitrine/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Store: cart + catalog operations
//! │   ├── cart.rs     ◄─── CartState (Arc<Mutex<Cart>>)
//! │   ├── catalog.rs  ◄─── CatalogState (products, categories, flags)
//! │   └── config.rs   ◄─── ConfigState (currency, shipping)
//! ├── commands/
//! │   ├── product.rs  ◄─── Catalog listing and detail
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── checkout.rs ◄─── Simulated checkout
//! ├── view/           ◄─── Shell parser, renderer, loop
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod view;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vitrine_catalog::{CatalogConfig, HttpCatalog};
use vitrine_core::CategoryFilter;

use state::{ConfigState, Store};
use view::{Outcome, Shell};

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(name = "vitrine", version, about = "Browse a product catalog and fill a cart")]
pub struct Args {
    /// Catalog config file (TOML). Defaults to the platform config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Catalog base URL, overriding config and environment
    #[arg(long)]
    pub base_url: Option<String>,

    /// Category to show first ("all" for everything)
    #[arg(long, default_value = "all")]
    pub category: String,
}

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • catalog.toml + VITRINE_* env, then --base-url                     │
/// │     • ConfigState from env                                              │
/// │                                                                         │
/// │  3. Build Store ──────────────────────────────────────────────────────► │
/// │     • HttpCatalog as the catalog source                                 │
/// │     • Empty cart, nothing loaded                                        │
/// │                                                                         │
/// │  4. init(): products, then categories ────────────────────────────────► │
/// │                                                                         │
/// │  5. Shell loop until quit or end of input ────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Vitrine storefront");

    let filter = CategoryFilter::parse(&args.category)?;

    let catalog = HttpCatalog::new(&catalog_config(&args))?;
    info!(base_url = %catalog.base_url(), "Catalog client ready");

    let store = Store::new(Arc::new(catalog), ConfigState::from_env());
    store.init().await;

    let mut shell = Shell::new(store, filter.clone());

    let mut stdout = tokio::io::stdout();
    let first = if filter.is_all() {
        shell.catalog_screen()
    } else {
        // Narrow the catalog to the requested category up front
        match shell.execute(view::ShellCommand::List(Some(filter))).await {
            Outcome::Continue(text) => text,
            Outcome::Quit => String::new(),
        }
    };
    stdout.write_all(first.as_bytes()).await?;
    stdout.write_all(b"Type 'help' for commands.\n").await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match shell.handle_line(&line).await {
            Outcome::Continue(text) => stdout.write_all(text.as_bytes()).await?,
            Outcome::Quit => break,
        }
    }

    info!("Goodbye");
    Ok(())
}

/// Catalog config from file and environment, with `--base-url` on top.
fn catalog_config(args: &Args) -> CatalogConfig {
    let mut config = CatalogConfig::load_or_default(args.config.clone());
    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
    }
    config
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vitrine=trace` - Show trace for the app only
/// - Default: INFO, debug for vitrine crates
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();
}

const DEFAULT_LOG_FILTER: &str = "info,vitrine=debug,reqwest=warn";

/// `RUST_LOG` when set and valid, otherwise the default directives.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
