//! Human-readable console report generation

use std::fmt::Write;

use console::{measure_text_width, style};

use super::ReportGenerator;
use crate::error::WheelError;
use crate::spin::SpinOutcome;

const MIN_BOX_WIDTH: usize = 24;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn spin_report(&self, outcome: &SpinOutcome, options: &[String]) -> Result<String, WheelError> {
        let mut output = String::new();

        let title = "The wheel has spoken";
        let width = measure_text_width(&outcome.option)
            .max(measure_text_width(title))
            .max(MIN_BOX_WIDTH);
        let horizontal = "─".repeat(width + 2);

        writeln!(output)?;
        writeln!(output, "╭{horizontal}╮")?;
        writeln!(output, "│ {} │", pad(title, width))?;
        writeln!(output, "│ {} │", " ".repeat(width))?;
        writeln!(
            output,
            "│ {}{} │",
            style(&outcome.option).green().bold(),
            " ".repeat(width - measure_text_width(&outcome.option))
        )?;
        writeln!(output, "╰{horizontal}╯")?;
        writeln!(
            output,
            "  {} slice {} of {}",
            style("→").dim(),
            outcome.index + 1,
            options.len()
        )?;

        Ok(output)
    }

    fn options_report(&self, options: &[String]) -> Result<String, WheelError> {
        let mut output = String::new();

        if options.is_empty() {
            writeln!(
                output,
                "{} The wheel is empty. Add options with `spinning-wheel apply`.",
                style("ℹ").blue()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "{} {} {} on the wheel:",
            style("🎡").cyan(),
            style(options.len()).yellow().bold(),
            option_noun(options.len())
        )?;
        let digits = options.len().to_string().len();
        for (i, option) in options.iter().enumerate() {
            writeln!(output, "  {:>digits$}. {option}", i + 1)?;
        }

        Ok(output)
    }
}

/// "option" or "options", whichever fits `count`
pub(crate) fn option_noun(count: usize) -> &'static str {
    if count == 1 {
        "option"
    } else {
        "options"
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(measure_text_width(text));
    format!("{text}{}", " ".repeat(fill))
}
