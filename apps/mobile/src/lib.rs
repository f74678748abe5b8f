//! # Nutrio Mobile Library
//!
//! Service layer behind the Nutrio mobile front end. The native bridge calls
//! the functions in [`commands`] with a shared [`AppState`].
//!
//! ## Module Organization
//! ```text
//! nutrio_mobile/
//! ├── lib.rs          ◄─── You are here (startup, logging)
//! ├── config.rs       ◄─── Environment configuration
//! ├── state.rs        ◄─── AppState: local DB + catalog backend
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── favourites.rs ◄─── Favourite ids
//! │   └── product.rs    ◄─── Catalog fetch
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{AppConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use state::AppState;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,nutrio=debug,sqlx=warn";

/// Loads configuration and builds the application state.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load AppConfig from the environment                                 │
/// │     • NUTRIO_DB_PATH, NUTRIO_CATALOG_URL,                               │
/// │       NUTRIO_CATALOG_MAX_CONNECTIONS                                    │
/// │                                                                         │
/// │  2. Open the local database                                             │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  3. Choose the catalog                                                  │
/// │     • Hosted Postgres when a URL is set, local table otherwise          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Logging is not set up here; call [`init_tracing`] first.
pub async fn start() -> Result<AppState, ApiError> {
    info!("Starting Nutrio");

    let config = AppConfig::load()?;
    let state = AppState::bootstrap(&config).await?;

    info!(remote_catalog = state.is_remote(), "State initialized");
    Ok(state)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=nutrio=trace` - Show trace for nutrio crates only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Calling it again is a no-op.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
