//! Render command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::RenderConfig;
use crate::executors::{CommandExecutor, write_output};
use crate::render::{SvgSurface, WheelRenderer};
use crate::storage::{FileStore, OptionsRepository};

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let options = OptionsRepository::new(FileStore::new(&config.store_path)).load_or_default();

        let mut surface = SvgSurface::new(config.surface);
        WheelRenderer::default().render(&mut surface, &options, config.rotation);

        let svg = surface
            .to_svg_string()
            .wrap_err("Failed to draw the wheel")?;
        write_output(&config.output, config.to_stdout(), &svg)
            .wrap_err("Failed to write the SVG document")?;

        if !config.to_stdout() {
            eprintln!(
                "{} Wheel drawn to {}",
                style("🖼").cyan(),
                style(config.output.display()).dim()
            );
        }

        Ok(())
    }
}
