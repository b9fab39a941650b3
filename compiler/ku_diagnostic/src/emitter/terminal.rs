//! Terminal emitter.
//!
//! Renders diagnostics as plain text, optionally with ANSI color:
//!
//! ```text
//! error[E1003]: unclosed `{`: expected `}`, found end of file
//!   --> main.ku:3:1: found end of file
//!       main.ku:1:11: `{` opened here
//!   = note: while parsing a block
//!
//! error: aborting due to previous error
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// Text styles used in the output.
#[derive(Clone, Copy)]
enum Style {
    Error,
    Secondary,
    Help,
    Bold,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Secondary => "\x1b[1;34m",
            Style::Help => "\x1b[1;32m",
            Style::Bold => "\x1b[1m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// When to color diagnostics (`--color=`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    /// Prefix for label positions, usually the source path.
    source_name: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source_name: None,
        }
    }

    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    fn styled(&mut self, text: &str, style: Style) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{}{text}{RESET}", style.ansi())
        } else {
            self.writer.write_all(text.as_bytes())
        }
    }

    fn label(&mut self, label: &Label) -> io::Result<()> {
        let marker = if label.is_primary { "-->" } else { "   " };
        write!(self.writer, "  {marker} ")?;
        if let Some(name) = &self.source_name {
            write!(self.writer, "{name}:")?;
        }
        write!(self.writer, "{}", label.position)?;

        if !label.message.is_empty() {
            self.writer.write_all(b": ")?;
            let style = if label.is_primary {
                Style::Error
            } else {
                Style::Secondary
            };
            self.styled(&label.message, style)?;
        }
        writeln!(self.writer)
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        self.styled("error", Style::Error)?;
        let code = format!("[{}]", diagnostic.code);
        self.styled(&code, Style::Bold)?;
        writeln!(self.writer, ": {}", diagnostic.message)?;

        for label in &diagnostic.labels {
            self.label(label)?;
        }
        for note in &diagnostic.notes {
            self.writer.write_all(b"  = ")?;
            self.styled("note", Style::Bold)?;
            writeln!(self.writer, ": {note}")?;
        }
        for suggestion in &diagnostic.suggestions {
            self.writer.write_all(b"  = ")?;
            self.styled("help", Style::Help)?;
            writeln!(self.writer, ": {suggestion}")?;
        }
        writeln!(self.writer)
    }

    fn abort_line(&mut self) -> io::Result<()> {
        self.styled("error", Style::Error)?;
        writeln!(self.writer, ": aborting due to previous error")
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

// Write failures are ignored.
impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = self.diagnostic(diagnostic);
    }

    fn emit_abort(&mut self) {
        let _ = self.abort_line();
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
