//! Apply command executor

use std::fs;
use std::io;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::ApplyConfig;
use crate::error::WheelError;
use crate::executors::CommandExecutor;
use crate::render::{SurfaceSize, SvgSurface};
use crate::reports::human::option_noun;
use crate::spin::SpinTuning;
use crate::storage::FileStore;
use crate::widget::Wheel;

pub struct ApplyExecutor;

impl CommandExecutor for ApplyExecutor {
    type Config = ApplyConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let text = match &config.input {
            Some(path) => fs::read_to_string(path).map_err(|source| WheelError::FileReadError {
                path: path.clone(),
                source,
            })?,
            None => io::read_to_string(io::stdin())
                .into_diagnostic()
                .wrap_err("Failed to read options from stdin")?,
        };

        let mut wheel = Wheel::load(
            SvgSurface::new(SurfaceSize::default()),
            FileStore::new(&config.store_path),
            SpinTuning::default(),
        );
        let count = wheel.apply_text(&text).len();

        if count == 0 {
            eprintln!(
                "{} No options given, the wheel is now empty",
                style("ℹ").blue()
            );
        } else {
            eprintln!(
                "{} Applied {} {}",
                style("✓").green(),
                style(count).yellow().bold(),
                option_noun(count)
            );
        }

        Ok(())
    }
}
