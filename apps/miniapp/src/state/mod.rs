//! # State Module
//!
//! Session state for one Mini App launch.
//!
//! Instead of a single blob, each concern gets its own state type so that
//! commands read as "what state they touch".
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      MenuSession                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌──────────────┬─────────┴────────┬──────────────────┐             │
//! │     ▼              ▼                  ▼                  ▼              │
//! │  ┌────────┐  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐      │
//! │  │  Cart  │  │ ProductSheet │  │  AdminState  │  │ ConfigState  │      │
//! │  │ (core) │  │ Option<..>   │  │ flag + stop  │  │ read-only    │      │
//! │  └────────┘  └──────────────┘  └──────────────┘  └──────────────┘      │
//! │                                                                         │
//! │  One session is one actor: commands run one at a time with exclusive   │
//! │  access, so no locking is needed.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod admin;
mod config;
mod sheet;

pub use admin::AdminState;
pub use config::{ConfigState, CONFIG_PATH_ENV};
pub use sheet::{ProductSheet, SheetView};
