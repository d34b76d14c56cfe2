use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};

// Spinner style template
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Terminal feedback for a running spin
///
/// Shows which option passes under the marker while the wheel turns.
pub struct SpinProgress {
    term: Term,
    bar: Option<ProgressBar>,
}

impl Default for SpinProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinProgress {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            bar: None,
        }
    }

    pub fn start(&mut self, option_count: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Spinning a wheel of {} options...",
            style("🎡").cyan(),
            style(option_count).yellow().bold()
        );

        let mut frames: Vec<&str> = SPINNER_FRAMES.to_vec();
        frames.push("✓");

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(&frames),
        );
        pb.enable_steady_tick(TICK_INTERVAL);
        self.bar = Some(pb);
    }

    /// Show the option currently under the marker
    pub fn frame(&self, option: &str, progress: f64) {
        if let Some(ref pb) = self.bar {
            pb.set_message(format!(
                "{} {}",
                style(format!("{:>3.0}%", progress * 100.0)).dim(),
                style(option).bold()
            ));
        }
    }

    pub fn finish(&mut self, option: &str) {
        if let Some(pb) = self.bar.take() {
            pb.finish_with_message(format!("Landed on {}", style(option).green().bold()));
        }
    }
}
