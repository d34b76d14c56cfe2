//! Apply command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ApplyConfig;
use crate::error::WheelError;

impl FromCommand for ApplyConfig {
    fn from_command(command: Commands) -> Result<Self, WheelError> {
        match command {
            Commands::Apply { store, file } => ApplyConfig::builder()
                .with_store_path(store.store)
                .with_input(file)
                .build(),
            _ => Err(WheelError::ConfigurationError {
                message: "Invalid command type for ApplyConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ApplyConfig);

/// Execute the apply command
pub fn execute_apply_command(command: Commands) -> Result<()> {
    let config = ApplyConfig::from_command(command)
        .wrap_err("Failed to parse apply command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::apply::ApplyExecutor;
    ApplyExecutor::execute(config)
}
