use core::fmt::{Debug, Formatter};
use core::time::Duration;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;

/// Refresh rate for the spinner (10 Hz).
const REFRESH_INTERVAL_MS: u64 = 100;

const SPINNER_TEMPLATE: &str = "{prefix:>12.bold.cyan} {spinner} {msg} ({elapsed})";
const SPINNER_TEMPLATE_NO_COLOR: &str = "{prefix:>12} {spinner} {msg} ({elapsed})";

/// A stderr spinner shown while the catalog request is in flight.
///
/// The spinner stays hidden when it is disabled or when stderr is not a terminal,
/// so log output and redirected streams are never interleaved with it.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter.
    ///
    /// When `use_colors` is false, the spinner prefix is rendered without ANSI styling.
    #[must_use]
    pub fn new(enabled: bool, use_colors: bool) -> Self {
        let target = if enabled && std::io::stderr().is_terminal() {
            ProgressDrawTarget::stderr_with_hz(10)
        } else {
            ProgressDrawTarget::hidden()
        };

        let template = if use_colors { SPINNER_TEMPLATE } else { SPINNER_TEMPLATE_NO_COLOR };
        let style = ProgressStyle::default_spinner()
            .template(template)
            .expect("could not create progress bar style")
            .tick_strings(&["-", "\\", "|", "/", " "]);

        let bar = ProgressBar::with_draw_target(None, target);
        bar.set_style(style);

        Self { bar }
    }

    /// Start spinning with the given phase label and message.
    pub fn start(&self, phase: &str, message: &str) {
        self.bar.set_prefix(phase.to_string());
        self.bar.set_message(message.to_string());
        self.bar.enable_steady_tick(Duration::from_millis(REFRESH_INTERVAL_MS));
    }

    /// Finish and clear the spinner.
    pub fn done(&self) {
        self.bar.finish_and_clear();
    }

    #[cfg(test)]
    fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}

impl Debug for ProgressReporter {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProgressReporter").field("bar", &self.bar).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_reporter_is_hidden() {
        let reporter = ProgressReporter::new(false, true);
        assert!(reporter.is_hidden());
        reporter.start("Fetching", "earthquake catalog");
        reporter.done();
    }
}
