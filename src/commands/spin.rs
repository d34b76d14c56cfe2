//! Spin command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpinConfig;
use crate::error::WheelError;

impl FromCommand for SpinConfig {
    fn from_command(command: Commands) -> Result<Self, WheelError> {
        match command {
            Commands::Spin {
                store,
                format,
                surface,
                tuning,
                seed,
                svg,
            } => SpinConfig::builder()
                .with_store_path(store.store)
                .with_format(format.format)
                .with_surface(surface.surface_size())
                .with_tuning(tuning.tuning())
                .with_seed(seed)
                .with_svg(svg)
                .build(),
            _ => Err(WheelError::ConfigurationError {
                message: "Invalid command type for SpinConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpinConfig);

/// Execute the spin command
pub fn execute_spin_command(command: Commands) -> Result<()> {
    let config =
        SpinConfig::from_command(command).wrap_err("Failed to parse spin command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spin::SpinExecutor;
    SpinExecutor::execute(config)
}
