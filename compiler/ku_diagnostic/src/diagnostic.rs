use std::fmt;

use ku_ir::Position;

use crate::ErrorCode;

/// A message attached to a source position.
///
/// The primary label marks the offending token; secondary labels point at
/// related places, such as the bracket an unclosed block started with.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub position: Position,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    pub fn primary(position: Position, message: impl Into<String>) -> Self {
        Label {
            position,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(position: Position, message: impl Into<String>) -> Self {
        Label {
            position,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A fatal error, ready to be rendered.
///
/// Every ku diagnostic is an error: parsing stops at the first one.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    /// Context lines, rendered as `= note: ...`.
    pub notes: Vec<String>,
    /// Fix hints, rendered as `= help: ...`.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Mark the offending position.
    pub fn with_label(mut self, position: Position, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(position, message));
        self
    }

    pub fn with_secondary_label(mut self, position: Position, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(position, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {marker} {}: {}", label.position, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
