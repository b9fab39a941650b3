//! Global flags shared by every command.

use std::fmt;

use ku_diagnostic::ColorMode;

/// Arguments after the program name, with global flags pulled out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub color: ColorMode,
    /// Command name followed by its operands.
    pub args: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionsError {
    InvalidColor(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::InvalidColor(value) => write!(
                f,
                "invalid value '{value}' for --color (expected auto, always or never)"
            ),
        }
    }
}

impl std::error::Error for OptionsError {}

impl CliOptions {
    /// Split `--color=<mode>` (accepted anywhere) from the rest.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, OptionsError> {
        let mut options = CliOptions::default();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--color=") {
                options.color = ColorMode::from_flag(value)
                    .ok_or_else(|| OptionsError::InvalidColor(value.to_string()))?;
            } else {
                options.args.push(arg);
            }
        }
        Ok(options)
    }

    pub fn command(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Operands after the command name.
    pub fn operands(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options(args: &[&str]) -> Result<CliOptions, OptionsError> {
        CliOptions::from_args(args.iter().map(ToString::to_string))
    }

    #[test]
    fn color_flag_anywhere() {
        let parsed = options(&["parse", "--color=never", "main.ku"]).unwrap_or_default();
        assert_eq!(parsed.color, ColorMode::Never);
        assert_eq!(parsed.command(), Some("parse"));
        assert_eq!(parsed.operands(), ["main.ku".to_string()]);
    }

    #[test]
    fn defaults_to_auto() {
        let parsed = options(&["lex", "a.ku"]).unwrap_or_default();
        assert_eq!(parsed.color, ColorMode::Auto);
    }

    #[test]
    fn rejects_unknown_color() {
        assert_eq!(
            options(&["--color=sometimes"]),
            Err(OptionsError::InvalidColor("sometimes".to_string()))
        );
    }

    #[test]
    fn empty_arguments() {
        let parsed = options(&[]).unwrap_or_default();
        assert_eq!(parsed.command(), None);
        assert!(parsed.operands().is_empty());
    }
}
