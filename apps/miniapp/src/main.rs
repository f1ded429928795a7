//! # Urban Lunch Mini App Entry Point
//!
//! ```text
//! urban-miniapp [launch-url]
//!
//!   stdin   one JSON command per line
//!   stdout  one JSON reply per command, plus bridge events
//!   stderr  logs
//! ```
//!
//! The launch URL is the one Telegram opened the Mini App with; its `stop`
//! query parameter seeds the stop list.

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    let launch_url = std::env::args().nth(1);

    match urban_miniapp_lib::run(launch_url) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("urban-miniapp: {}", e);
            ExitCode::FAILURE
        }
    }
}
