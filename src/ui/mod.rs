//! Console reporting
//!
//! Everything the publish pipeline tells the user goes through the
//! [`Reporter`] trait so that commands can pick the presentation:
//! - [`ConsoleReporter`]: styled output, a spinner while the baseline is
//!   fetched, per-entry details with `--verbose`
//! - [`SilentReporter`]: no output at all (`--quiet`)
//!
//! Progress goes to stdout, warnings to stderr.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Reporter for pipeline progress and recoverable diagnostics
pub trait Reporter {
    /// A pipeline stage begins
    fn step(&mut self, message: &str);

    /// One action inside the current stage
    fn item(&mut self, message: &str);

    /// Extra information shown only in verbose mode
    fn detail(&mut self, message: &str);

    /// A recoverable problem; the run continues
    fn warn(&mut self, message: &str);

    /// The run completed
    fn success(&mut self, message: &str);

    /// The baseline clone starts
    fn start_fetch(&mut self, url: &str);

    /// The baseline clone ended, successfully or not
    fn finish_fetch(&mut self);
}

/// Styled terminal reporter
#[derive(Default)]
pub struct ConsoleReporter {
    verbose: bool,
    spinner: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: None,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner} Fetching {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
    }
}

impl Reporter for ConsoleReporter {
    fn step(&mut self, message: &str) {
        println!("{}", Style::new().bold().apply_to(message));
    }

    fn item(&mut self, message: &str) {
        println!("  {message}");
    }

    fn detail(&mut self, message: &str) {
        if self.verbose {
            println!("  {}", Style::new().dim().apply_to(message));
        }
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{} {message}", Style::new().yellow().bold().apply_to("warning:"));
    }

    fn success(&mut self, message: &str) {
        println!();
        println!("{} {message}", Style::new().green().bold().apply_to("✓"));
    }

    fn start_fetch(&mut self, url: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(url.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(pb);
    }

    fn finish_fetch(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

/// Reporter that prints nothing
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn step(&mut self, _message: &str) {}

    fn item(&mut self, _message: &str) {}

    fn detail(&mut self, _message: &str) {}

    fn warn(&mut self, _message: &str) {}

    fn success(&mut self, _message: &str) {}

    fn start_fetch(&mut self, _url: &str) {}

    fn finish_fetch(&mut self) {}
}

/// Reporter that keeps every message, for asserting on diagnostics in tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingReporter {
    pub items: Vec<String>,
    pub details: Vec<String>,
    pub warnings: Vec<String>,
    pub fetched: Vec<String>,
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn step(&mut self, _message: &str) {}

    fn item(&mut self, message: &str) {
        self.items.push(message.to_string());
    }

    fn detail(&mut self, message: &str) {
        self.details.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn success(&mut self, _message: &str) {}

    fn start_fetch(&mut self, url: &str) {
        self.fetched.push(url.to_string());
    }

    fn finish_fetch(&mut self) {}
}
