//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::error::WheelError;
use crate::options::export_options;
use crate::spin::SpinOutcome;

pub struct JsonReportGenerator;

#[derive(Debug, Serialize)]
struct SpinReport<'a> {
    option: &'a str,
    index: usize,
    option_count: usize,
    rotation: f64,
}

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn spin_report(&self, outcome: &SpinOutcome, options: &[String]) -> Result<String, WheelError> {
        let report = SpinReport {
            option: &outcome.option,
            index: outcome.index,
            option_count: options.len(),
            rotation: outcome.rotation,
        };

        serde_json::to_string_pretty(&report).map_err(WheelError::Json)
    }

    fn options_report(&self, options: &[String]) -> Result<String, WheelError> {
        export_options(options)
    }
}
