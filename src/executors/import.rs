//! Import command executor

use console::style;
use miette::Result;

use crate::config::ImportConfig;
use crate::executors::CommandExecutor;
use crate::render::{SurfaceSize, SvgSurface};
use crate::reports::human::option_noun;
use crate::spin::SpinTuning;
use crate::storage::FileStore;
use crate::widget::Wheel;

pub struct ImportExecutor;

impl CommandExecutor for ImportExecutor {
    type Config = ImportConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut wheel = Wheel::load(
            SvgSurface::new(SurfaceSize::default()),
            FileStore::new(&config.store_path),
            SpinTuning::default(),
        );

        // Rejected files surface as diagnostics pointing into the document
        let count = wheel.import_file(&config.file)?;

        eprintln!(
            "{} Imported {} {} from {}",
            style("✓").green(),
            style(count).yellow().bold(),
            option_noun(count),
            style(config.file.display()).dim()
        );

        Ok(())
    }
}
