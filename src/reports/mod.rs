//! Report generation modules for different output formats
//!
//! - human: console output, the spin result shown as a boxed overlay
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::WheelError;
use crate::spin::SpinOutcome;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Report where a spin landed
    fn spin_report(&self, outcome: &SpinOutcome, options: &[String]) -> Result<String, WheelError>;

    /// Report the options currently on the wheel
    fn options_report(&self, options: &[String]) -> Result<String, WheelError>;
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
