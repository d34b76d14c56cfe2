//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderConfig;
use crate::error::WheelError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, WheelError> {
        match command {
            Commands::Render {
                store,
                surface,
                rotation,
                output,
            } => RenderConfig::builder()
                .with_store_path(store.store)
                .with_surface(surface.surface_size())
                .with_rotation(rotation)
                .with_output(output)
                .build(),
            _ => Err(WheelError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_render_config_defaults_to_stdout() {
        let cli = Cli::try_parse_from(["spinning-wheel", "render"]).unwrap();
        let config = RenderConfig::try_from(cli.command).unwrap();

        assert!(config.to_stdout());
        assert_eq!(config.rotation, 0.0);
        assert_eq!(config.surface.css_size, 640.0);
    }
}
