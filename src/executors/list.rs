//! List command executor

use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::ListConfig;
use crate::executors::CommandExecutor;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::storage::{FileStore, OptionsRepository};

pub struct ListExecutor;

impl CommandExecutor for ListExecutor {
    type Config = ListConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let options = OptionsRepository::new(FileStore::new(&config.store_path)).load_or_default();

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().options_report(&options),
            OutputFormat::Json => JsonReportGenerator::new().options_report(&options),
        }
        .wrap_err("Failed to generate report")?;

        print!("{report}");
        if config.format == OutputFormat::Json {
            println!();
        }

        Ok(())
    }
}
