//! Diagnostic emitters.
//!
//! The front end reports one error per run, so an emitter only needs to
//! render a diagnostic and the closing "aborting" line.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Close the report after the fatal error.
    fn emit_abort(&mut self);

    fn flush(&mut self);
}
