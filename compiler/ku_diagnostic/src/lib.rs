//! Diagnostic system for the ku front end.
//!
//! A `Diagnostic` carries an error code for searchability, a message saying
//! what went wrong, labeled positions saying where, and optional notes and
//! suggestions. Emitters turn diagnostics into text for a terminal.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
