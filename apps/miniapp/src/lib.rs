//! # Urban Lunch Mini App Library
//!
//! Session layer of the Urban Lunch Telegram Mini App: it owns the cart,
//! the product sheet and admin mode for one launch, and turns web view
//! commands into calls on `urban-core`.
//!
//! ## Module Organization
//! ```text
//! urban_miniapp_lib/
//! ├── lib.rs          ◄─── You are here (startup & line driver)
//! ├── session.rs      ◄─── MenuSession, catalog loading
//! ├── bridge.rs       ◄─── HostBridge (sendData / showAlert)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   ├── sheet.rs    ◄─── Open product sheet
//! │   └── admin.rs    ◄─── Admin mode and stop list
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command enum, dispatch
//! │   ├── catalog.rs  ◄─── Categories and tiles
//! │   ├── sheet.rs    ◄─── Options and add to cart
//! │   ├── cart.rs     ◄─── Cart commands
//! │   ├── checkout.rs ◄─── Order hand-off
//! │   ├── admin.rs    ◄─── Stop list commands
//! │   └── config.rs   ◄─── Public configuration
//! └── error.rs        ◄─── API and startup error types
//! ```

pub mod bridge;
pub mod commands;
pub mod error;
pub mod session;
pub mod state;

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};
use urban_core::StopList;

use bridge::{HostBridge, WriterBridge};
use error::{AppError, AppResult};
use session::{load_catalog, MenuSession};
use state::ConfigState;

/// Runs one Mini App session over stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Built-in default filter, can be overridden with RUST_LOG          │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults < config.toml < URBAN_* environment                      │
/// │     • Swap in the configured log filter unless RUST_LOG is set          │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • catalog_path, or the embedded sample menu                         │
/// │                                                                         │
/// │  4. Read Stop List ───────────────────────────────────────────────────► │
/// │     • `stop` query parameter of the launch URL                          │
/// │                                                                         │
/// │  5. Serve Commands ───────────────────────────────────────────────────► │
/// │     • one JSON command per stdin line until EOF                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(launch_url: Option<String>) -> AppResult<()> {
    let log_filter = init_tracing(&ConfigState::default().log_filter);
    let config = ConfigState::load(None)?;
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        apply_log_filter(&log_filter, &config.log_filter);
    }

    info!(store = %config.store_name, "Starting Urban Lunch Mini App session");

    let catalog = load_catalog(&config)?;
    let stop_list = match launch_url {
        Some(url) => StopList::from_launch_url(&url).map_err(AppError::InvalidLaunchUrl)?,
        None => StopList::default(),
    };
    info!(stopped = stop_list.len(), "Stop list initialized");

    let mut session = MenuSession::new(
        config,
        catalog,
        stop_list,
        WriterBridge::new(std::io::stdout()),
    );

    let stdin = std::io::stdin();
    let handled = serve(&mut session, stdin.lock(), std::io::stdout())?;

    info!(commands = handled, "Session ended");
    Ok(())
}

/// Reads commands line by line and writes one reply line per command.
///
/// Blank lines are skipped. Returns the number of commands handled.
pub fn serve<B, R, W>(session: &mut MenuSession<B>, input: R, mut output: W) -> AppResult<usize>
where
    B: HostBridge,
    R: BufRead,
    W: Write,
{
    let mut handled = 0;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = commands::handle_line(session, line);
        let encoded = serde_json::to_string(&reply)
            .map_err(|e| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        writeln!(output, "{}", encoded)?;
        output.flush()?;

        handled += 1;
        debug!(handled, "Reply written");
    }

    Ok(handled)
}

/// Handle for replacing the log filter after startup.
pub type LogFilterHandle = reload::Handle<EnvFilter, Registry>;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=urban_core=trace` - Show trace for the core crate only
/// - Default: `default_filter`, until [`apply_log_filter`] swaps it
///
/// Logs go to stderr; stdout carries the command protocol.
pub fn init_tracing(default_filter: &str) -> LogFilterHandle {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    handle
}

/// Replaces the active log filter with `directives`.
pub fn apply_log_filter(handle: &LogFilterHandle, directives: &str) {
    match handle.reload(EnvFilter::new(directives)) {
        Ok(()) => debug!(filter = %directives, "Log filter applied"),
        Err(e) => warn!(error = %e, "Could not apply log filter"),
    }
}
