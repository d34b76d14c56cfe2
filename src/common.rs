//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::render::SurfaceSize;
use crate::spin::SpinTuning;

/// Location of the option store
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// File that keeps the options between runs
    #[arg(
        long,
        value_name = "PATH",
        default_value = crate::constants::wheel::DEFAULT_STORE_FILE,
        env = "SPINNING_WHEEL_STORE"
    )]
    pub store: PathBuf,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "SPINNING_WHEEL_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Size of the drawing surface
#[derive(Args, Debug, Clone)]
pub struct SurfaceArgs {
    /// Width of the viewport the wheel is shown in
    #[arg(long, default_value = crate::constants::output::DEFAULT_VIEWPORT_WIDTH, env = "SPINNING_WHEEL_VIEWPORT_WIDTH")]
    pub viewport_width: f64,

    /// Device pixels per logical unit
    #[arg(long, default_value = crate::constants::output::DEFAULT_PIXEL_RATIO, env = "SPINNING_WHEEL_PIXEL_RATIO")]
    pub pixel_ratio: f64,
}

/// Spin animation tuning
#[derive(Args, Debug, Clone)]
pub struct TuningArgs {
    /// Minimum number of full turns
    #[arg(short, long, default_value_t = crate::constants::spin::BASE_SPIN_SPEED, env = "SPINNING_WHEEL_SPEED")]
    pub speed: u32,

    /// Maximum number of random extra turns
    #[arg(long, default_value_t = crate::constants::spin::EXTRA_TURNS, env = "SPINNING_WHEEL_EXTRA_TURNS")]
    pub extra_turns: u32,

    /// Shortest spin duration in milliseconds
    #[arg(long, default_value_t = crate::constants::spin::BASE_DURATION_MS, env = "SPINNING_WHEEL_DURATION_MS")]
    pub duration_ms: u32,

    /// Random milliseconds added to the duration (exclusive bound)
    #[arg(long, default_value_t = crate::constants::spin::DURATION_JITTER_MS, env = "SPINNING_WHEEL_JITTER_MS")]
    pub jitter_ms: u32,
}

impl SurfaceArgs {
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::for_viewport(self.viewport_width, self.pixel_ratio)
    }
}

impl TuningArgs {
    pub fn tuning(&self) -> SpinTuning {
        SpinTuning {
            base_spin_speed: self.speed,
            extra_turns: self.extra_turns,
            base_duration_ms: self.duration_ms,
            duration_jitter_ms: self.jitter_ms,
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::WheelError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::WheelError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::WheelError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Unwrap a builder field or report it as missing
pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, crate::error::WheelError> {
    value.ok_or_else(|| crate::error::WheelError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_args_size() {
        let args = SurfaceArgs {
            viewport_width: 400.0,
            pixel_ratio: 2.0,
        };
        let size = args.surface_size();
        assert_eq!(size.css_size, 360.0);
        assert_eq!(size.pixel_width, 720);
    }

    #[test]
    fn test_tuning_args_map_to_tuning() {
        let args = TuningArgs {
            speed: 4,
            extra_turns: 1,
            duration_ms: 1000,
            jitter_ms: 10,
        };
        assert_eq!(
            args.tuning(),
            SpinTuning {
                base_spin_speed: 4,
                extra_turns: 1,
                base_duration_ms: 1000,
                duration_jitter_ms: 10,
            }
        );
    }

    #[test]
    fn test_require_reports_missing_field() {
        let err = require::<u32>(None, "store_path").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: store_path"
        );
        assert_eq!(require(Some(3), "x").unwrap(), 3);
    }
}
