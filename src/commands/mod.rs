//! Command implementations for spinning-wheel CLI
//!
//! - spin: Spin the wheel and reveal where it lands
//! - apply: Replace the options with edited text
//! - list: Show the options on the wheel
//! - export: Export the options as a JSON array
//! - import: Import options from a JSON array
//! - render: Draw the wheel to an SVG file

pub mod apply;
pub mod export;
pub mod import;
pub mod list;
pub mod render;
pub mod spin;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Spin { .. } => spin::execute_spin_command(command),
        Commands::Apply { .. } => apply::execute_apply_command(command),
        Commands::List { .. } => list::execute_list_command(command),
        Commands::Export { .. } => export::execute_export_command(command),
        Commands::Import { .. } => import::execute_import_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
