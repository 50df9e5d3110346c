//! User-facing messages with severity levels and color support.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`.

use std::io::Write;
use std::sync::Mutex;

use super::ColorMode;
use super::ansi;
use crate::error::IsrcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

impl Severity {
    const fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Error => "✖",
            Self::Success => "✓",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::Info => ansi::CYAN,
            Self::Warning => ansi::YELLOW,
            Self::Error => ansi::RED,
            Self::Success => ansi::GREEN,
        }
    }

    /// Warnings and errors belong on stderr.
    #[must_use]
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

/// Sink for progress and diagnostic messages.
pub trait Logger: Send + Sync {
    fn log(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    fn success(&self, message: &str) {
        self.log(Severity::Success, message);
    }
}

/// Terminal logger: info and success go to stdout, warnings and errors to stderr.
pub struct Console {
    stdout_colors: bool,
    stderr_colors: bool,
    quiet: bool,
}

impl Console {
    #[must_use]
    pub fn new(mode: ColorMode, quiet: bool) -> Self {
        Self {
            stdout_colors: mode.for_stdout(),
            stderr_colors: mode.for_stderr(),
            quiet,
        }
    }

    /// Console with colors fixed on or off for both streams.
    #[must_use]
    pub const fn with_colors(use_colors: bool, quiet: bool) -> Self {
        Self {
            stdout_colors: use_colors,
            stderr_colors: use_colors,
            quiet,
        }
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Quiet mode drops info and success messages only.
    #[must_use]
    pub const fn shows(&self, severity: Severity) -> bool {
        !self.quiet || severity.is_diagnostic()
    }

    /// Writes one message line (for testing).
    pub fn write_message<W: Write>(&self, w: &mut W, severity: Severity, message: &str) {
        let use_colors = if severity.is_diagnostic() {
            self.stderr_colors
        } else {
            self.stdout_colors
        };
        // Failing to write to the terminal is not recoverable here.
        if use_colors {
            let _ = writeln!(
                w,
                "{}{}{}{} {message}",
                ansi::BOLD,
                severity.color(),
                severity.icon(),
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "{} {message}", severity.icon());
        }
    }

    /// Prints a fatal error with its detail and suggestion to stderr.
    pub fn print_error(&self, err: &IsrcError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            err.error_type(),
            &err.message(),
            err.detail().as_deref(),
            err.suggestion(),
        );
    }

    /// Writes an error block (for testing).
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.stderr_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_extras(w, detail, suggestion);
    }

    /// Writes a warning block (for testing).
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.stderr_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_extras(w, detail, suggestion);
    }

    fn write_extras<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.stderr_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.stderr_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(ColorMode::Auto, false)
    }
}

impl Logger for Console {
    fn log(&self, severity: Severity, message: &str) {
        if !self.shows(severity) {
            return;
        }
        match severity {
            Severity::Warning => {
                let mut stderr = std::io::stderr().lock();
                self.write_warning(&mut stderr, message, None, None);
            }
            Severity::Error => {
                let mut stderr = std::io::stderr().lock();
                self.write_error(&mut stderr, "Error", message, None, None);
            }
            Severity::Info | Severity::Success => {
                let mut stdout = std::io::stdout().lock();
                self.write_message(&mut stdout, severity, message);
            }
        }
    }
}

/// Logger that records every message, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemoryLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, message)| message)
            .collect()
    }

    /// True if any message of `severity` contains `needle`.
    #[must_use]
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.messages(severity).iter().any(|m| m.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, severity: Severity, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((severity, message.to_string()));
        }
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
