//! Spinner shown while an analysis request is outstanding.

use crate::usecases::Submission;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a steady-ticking "Analyzing..." spinner.
pub fn analysis_spinner(url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.red} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["◐", "◓", "◑", "◒", "●"]);
    pb.set_style(style);
    pb.set_message(format!("Analyzing... {}", url));
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Stop the spinner, leaving a one-line outcome.
pub fn finish(pb: ProgressBar, outcome: Submission) {
    match outcome {
        Submission::Succeeded => pb.finish_with_message("Analysis ready"),
        Submission::Failed => pb.finish_with_message("Analysis failed"),
        Submission::Ignored => pb.finish_and_clear(),
    }
}
