//! Export command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ExportConfig;
use crate::error::WheelError;

impl FromCommand for ExportConfig {
    fn from_command(command: Commands) -> Result<Self, WheelError> {
        match command {
            Commands::Export { store, output } => ExportConfig::builder()
                .with_store_path(store.store)
                .with_output(output)
                .build(),
            _ => Err(WheelError::ConfigurationError {
                message: "Invalid command type for ExportConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ExportConfig);

/// Execute the export command
pub fn execute_export_command(command: Commands) -> Result<()> {
    let config = ExportConfig::from_command(command)
        .wrap_err("Failed to parse export command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::export::ExportExecutor;
    ExportExecutor::execute(config)
}
