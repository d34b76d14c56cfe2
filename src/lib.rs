//! # Spinning Wheel - Let Chance Pick an Option
//!
//! Spinning Wheel keeps a list of text options, draws them as the equal
//! slices of a wheel and spins it to pick one at random. The option list is
//! persisted in a key-value store and can be edited as plain text or moved
//! around as a JSON array.
//!
//! ## Main Components
//!
//! - **Core**: The [`core::WheelState`] shared by everything else
//! - **Render**: Slice geometry, label wrapping and the [`render::Surface`]
//!   drawing seam, with an SVG implementation
//! - **Spin**: Target selection, rotation planning and the eased animation
//! - **Storage**: The [`storage::KeyValueStore`] seam and the option
//!   repository on top of it
//! - **Widget**: [`widget::Wheel`], which wires all of the above to the
//!   operations a host exposes
//!
//! ## Usage
//!
//! ### Example: Driving a Spin
//!
//! ```
//! use spinning_wheel::render::{SurfaceSize, SvgSurface};
//! use spinning_wheel::spin::{SpinController, SpinTick, SpinTuning};
//! use spinning_wheel::render::WheelRenderer;
//! use spinning_wheel::storage::MemoryStore;
//! use spinning_wheel::widget::Wheel;
//!
//! let mut wheel = Wheel::with_parts(
//!     SvgSurface::new(SurfaceSize::square(300.0)),
//!     MemoryStore::new(),
//!     WheelRenderer::default(),
//!     SpinController::seeded(SpinTuning::default(), 42),
//! );
//!
//! wheel.apply_text("Pizza\nSushi\nTacos");
//! assert!(wheel.request_spin(0.0));
//!
//! // The host drives the animation with monotonic timestamps
//! let mut now = 0.0;
//! let outcome = loop {
//!     now += 16.0;
//!     if let SpinTick::Landed(outcome) = wheel.tick(now) {
//!         break outcome;
//!     }
//! };
//!
//! assert!(["Pizza", "Sushi", "Tacos"].contains(&outcome.option.as_str()));
//! assert_eq!(wheel.overlay().text(), Some(outcome.option.as_str()));
//! ```
//!
//! ### Example: Moving Options Between Wheels
//!
//! ```
//! use spinning_wheel::options::{export_options, import_options};
//!
//! # fn main() -> Result<(), spinning_wheel::error::WheelError> {
//! let options = vec!["Red".to_string(), "Blue".to_string()];
//! let json = export_options(&options)?;
//!
//! assert_eq!(import_options("wheel-options.json", &json)?, options);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod options;
pub mod render;
pub mod reports;
pub mod spin;
pub mod storage;
pub mod widget;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
