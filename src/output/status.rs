//! Console reporting: colored status lines that cooperate with the
//! searching spinner.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const GREEN: &str = "\x1b[1;32m";
const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Print a red diagnostic to stderr.
pub(crate) fn error_line(line: &str, use_color: bool) {
    eprintln!("{}", paint(line, RED, use_color));
}

fn paint(line: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{color}{line}{RESET}")
    } else {
        line.to_string()
    }
}

pub(crate) struct Reporter {
    use_color: bool,
    spinner: Option<ProgressBar>,
}

impl Reporter {
    pub(crate) fn new(use_color: bool) -> Self {
        Reporter {
            use_color,
            spinner: None,
        }
    }

    /// Show the searching spinner. Stays hidden when stderr is not a
    /// terminal, so logs and pipes never see tick characters.
    pub(crate) fn start_searching(&mut self) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Searching for slots...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        self.spinner = Some(spinner);
    }

    pub(crate) fn stop(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Green headline, also used for the final summary.
    pub(crate) fn banner(&self, line: &str) {
        self.print_stdout(line, GREEN);
    }

    pub(crate) fn added(&self, line: &str) {
        self.print_stdout(line, GREEN);
    }

    pub(crate) fn removed(&self, line: &str) {
        self.print_stdout(line, RED);
    }

    /// Diagnostics go to stderr so piped stdout stays clean.
    pub(crate) fn problem(&self, line: &str) {
        let text = paint(line, RED, self.use_color);
        self.suspended(|| eprintln!("{text}"));
    }

    fn print_stdout(&self, line: &str, color: &str) {
        let text = paint(line, color, self.use_color);
        self.suspended(|| println!("{text}"));
    }

    fn suspended(&self, print: impl FnOnce()) {
        match &self.spinner {
            Some(spinner) => spinner.suspend(print),
            None => print(),
        }
    }
}
