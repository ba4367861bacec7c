//! Spinner shown on stderr while a request is in flight

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::OutputFormat;

/// Start a spinner with a message.
///
/// JSON output gets a hidden spinner so stderr stays clean for scripts.
pub fn spinner(format: OutputFormat, message: &str) -> ProgressBar {
    if matches!(format, OutputFormat::Json) {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
