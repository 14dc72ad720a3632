//! # Bakery CLI Library
//!
//! Core library for the Bakery POS terminal application.
//!
//! ## Module Organization
//! ```text
//! bakery_cli/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── config.rs       ◄─── Store path and log filter
//! ├── commands/
//! │   ├── mod.rs      ◄─── Inventory (load → mutate → save)
//! │   ├── item.rs     ◄─── Add, list, search, update, delete
//! │   └── billing.rs  ◄─── Billing sessions
//! ├── session.rs      ◄─── Text menu over BufRead / Write
//! └── error.rs        ◄─── AppError for menu messages
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod session;

use std::io;

use bakery_store::{RecordStore, StoreConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::Inventory;
use config::AppConfig;
use error::AppResult;

/// Runs the application on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: "warn,bakery=info", can be overridden with RUST_LOG      │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • BAKERY_STORE_PATH, or the platform data directory                 │
/// │                                                                         │
/// │  3. Bootstrap Store ──────────────────────────────────────────────────► │
/// │     • Create an empty bakery.json if missing                            │
/// │                                                                         │
/// │  4. Run Menu ─────────────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    let config = AppConfig::from_env();
    init_tracing(&config.log_filter);

    info!(store = %config.store_path.display(), "Starting Bakery POS");

    let store = RecordStore::new(StoreConfig::new(&config.store_path));
    let inventory = Inventory::new(store);

    // A store that cannot be created is reported, not fatal; every
    // operation will surface its own storage error.
    if let Err(e) = inventory.bootstrap() {
        warn!(error = %e, "Could not create store file");
        eprintln!("{}", e.message);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run_session(&inventory, stdin.lock(), stdout.lock())?;

    info!("Bakery POS stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bakery=trace` - Show trace for bakery crates only
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_new(default_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore the error when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
