//! Spin command executor

use std::thread;
use std::time::Instant;

use console::{Term, style};
use miette::{Result, WrapErr, miette};

use crate::cli::OutputFormat;
use crate::config::SpinConfig;
use crate::constants::progress::FRAME_INTERVAL;
use crate::executors::{CommandExecutor, write_output};
use crate::progress::SpinProgress;
use crate::render::{SvgSurface, WheelRenderer};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::spin::{SpinController, SpinTick, landing_index};
use crate::storage::FileStore;
use crate::widget::Wheel;

pub struct SpinExecutor;

impl CommandExecutor for SpinExecutor {
    type Config = SpinConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let controller = match config.seed {
            Some(seed) => SpinController::seeded(config.tuning, seed),
            None => SpinController::new(config.tuning),
        };
        let mut wheel = Wheel::with_parts(
            SvgSurface::new(config.surface),
            FileStore::new(&config.store_path),
            WheelRenderer::default(),
            controller,
        );

        // The frame loop plays the part of the host's frame scheduler
        let clock = Instant::now();
        let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;

        if !wheel.request_spin(now_ms()) {
            eprintln!(
                "{} The wheel is empty, nothing to spin. Add options with `spinning-wheel apply`.",
                style("ℹ").blue()
            );
            return Ok(());
        }

        let mut progress = if Term::stderr().is_term() {
            Some(SpinProgress::new())
        } else {
            None
        };
        if let Some(p) = progress.as_mut() {
            p.start(wheel.options().len());
        }

        let outcome = loop {
            thread::sleep(FRAME_INTERVAL);
            match wheel.tick(now_ms()) {
                SpinTick::Frame {
                    rotation,
                    progress: fraction,
                } => {
                    let under_marker = landing_index(rotation, wheel.options().len());
                    if let (Some(p), Some(index)) = (progress.as_ref(), under_marker) {
                        p.frame(&wheel.options()[index], fraction);
                    }
                }
                SpinTick::Landed(outcome) => break outcome,
                SpinTick::Idle => return Err(miette!("The spin stopped before landing")),
            }
        };

        if let Some(p) = progress.as_mut() {
            p.finish(&outcome.option);
        }

        if let Some(path) = &config.svg {
            let svg = wheel
                .surface()
                .to_svg_string()
                .wrap_err("Failed to draw the final frame")?;
            write_output(path, false, &svg).wrap_err("Failed to save the final frame")?;
            eprintln!(
                "{} Final frame saved to {}",
                style("🖼").cyan(),
                style(path.display()).dim()
            );
        }

        let report = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new().spin_report(&outcome, wheel.options())
            }
            OutputFormat::Json => JsonReportGenerator::new().spin_report(&outcome, wheel.options()),
        }
        .wrap_err("Failed to generate report")?;

        println!("{report}");

        Ok(())
    }
}
