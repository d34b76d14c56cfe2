//! Export command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::ExportConfig;
use crate::executors::{CommandExecutor, write_output};
use crate::render::{SurfaceSize, SvgSurface};
use crate::reports::human::option_noun;
use crate::spin::SpinTuning;
use crate::storage::FileStore;
use crate::widget::Wheel;

pub struct ExportExecutor;

impl CommandExecutor for ExportExecutor {
    type Config = ExportConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let wheel = Wheel::load(
            SvgSurface::new(SurfaceSize::default()),
            FileStore::new(&config.store_path),
            SpinTuning::default(),
        );

        if config.to_stdout() {
            let mut json = wheel.export_json().wrap_err("Failed to export options")?;
            json.push('\n');
            write_output(&config.output, true, &json)?;
            return Ok(());
        }

        wheel
            .export_to(&config.output)
            .wrap_err("Failed to export options")?;

        let count = wheel.options().len();
        eprintln!(
            "{} Exported {} {} to {}",
            style("✓").green(),
            style(count).yellow().bold(),
            option_noun(count),
            style(config.output.display()).dim()
        );

        Ok(())
    }
}
