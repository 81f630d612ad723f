//! # Output Configuration
//!
//! This module controls how progress lines look on the console. Every
//! noteworthy step is printed as a badge followed by a bold, colored message:
//!
//! ```text
//! => About to run command
//! => $ git clone --depth 1 https://example.com/a.git /home/me/123456789_a
//! ```
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use console::{Color, Style};
use std::env;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

/// What a progress line is about; selects its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// An action is starting.
    Action,
    /// A URL, path or command being acted on.
    Subject,
    /// A command line about to run, or a failure.
    Alert,
    /// A default being chosen for the user.
    Notice,
    /// Something was filtered out.
    Skip,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Action => Color::Green,
            Tone::Subject => Color::Blue,
            Tone::Alert => Color::Red,
            Tone::Notice => Color::Magenta,
            Tone::Skip => Color::Cyan,
        }
    }
}

/// Prints badge-prefixed progress lines to stdout.
#[derive(Debug, Clone)]
pub struct Reporter {
    config: OutputConfig,
}

impl Reporter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// A reporter that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(OutputConfig::without_color())
    }

    /// Render a progress line without printing it.
    pub fn format_line(&self, text: &str, tone: Tone) -> String {
        let color = self.config.use_color;
        let badge = Style::new().black().bold().on_white().force_styling(color);
        let message = Style::new().fg(tone.color()).bold().force_styling(color);
        format!("{} {}", badge.apply_to("=>"), message.apply_to(text))
    }

    /// Print a progress line.
    pub fn line(&self, text: &str, tone: Tone) {
        println!("{}", self.format_line(text, tone));
    }

    /// Announce a subprocess before it runs.
    pub fn command(&self, program: &str, args: &[String]) {
        self.line("About to run command", Tone::Action);
        let mut rendered = format!("$ {}", program);
        for arg in args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        self.line(&rendered, Tone::Alert);
    }

    /// Print an empty separator line between repositories or images.
    pub fn separator(&self) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("never");
        assert!(!config.use_color);
    }

    #[test]
    fn test_plain_line() {
        let reporter = Reporter::plain();
        assert_eq!(
            reporter.format_line("About to run command", Tone::Action),
            "=> About to run command"
        );
    }

    #[test]
    fn test_colored_line_has_escape_codes() {
        let reporter = Reporter::new(OutputConfig::with_color());
        let line = reporter.format_line("pulling", Tone::Subject);
        assert!(line.contains('\u{1b}'));
        assert!(line.contains("=>"));
        assert!(line.contains("pulling"));
    }
}
