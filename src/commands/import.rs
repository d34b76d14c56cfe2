//! Import command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ImportConfig;
use crate::error::WheelError;

impl FromCommand for ImportConfig {
    fn from_command(command: Commands) -> Result<Self, WheelError> {
        match command {
            Commands::Import { file, store } => ImportConfig::builder()
                .with_store_path(store.store)
                .with_file(file)
                .build(),
            _ => Err(WheelError::ConfigurationError {
                message: "Invalid command type for ImportConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ImportConfig);

/// Execute the import command
pub fn execute_import_command(command: Commands) -> Result<()> {
    let config = ImportConfig::from_command(command)
        .wrap_err("Failed to parse import command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::import::ImportExecutor;
    ImportExecutor::execute(config)
}
