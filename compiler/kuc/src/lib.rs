//! Command line driver for the ku front end.
//!
//! ```text
//! source file ──► SourceText ──► Scanner ──► Parser ──► SourceTree
//!                     │              │           │
//!                     ▼              ▼           ▼
//!              exit status 1-6   `ku lex`    `ku parse` / diagnostic
//! ```
//!
//! The binary in `main.rs` only dispatches on the command name; every
//! command lives in [`commands`] and returns the process exit status.

pub mod commands;
mod options;
mod tracing_setup;

pub use options::{CliOptions, OptionsError};
pub use tracing_setup::init_tracing;
