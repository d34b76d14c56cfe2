//! # Configuration Module
//!
//! Configuration structures for every spinning-wheel command. Each command
//! has its own config module with a builder that reports missing fields as
//! configuration errors.
//!
//! ## Example
//!
//! ```
//! use spinning_wheel::cli::OutputFormat;
//! use spinning_wheel::common::ConfigBuilder;
//! use spinning_wheel::config::ListConfig;
//!
//! let config = ListConfig::builder()
//!     .with_store_path(".spinning-wheel.json".into())
//!     .with_format(OutputFormat::Json)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.format, OutputFormat::Json);
//! ```

pub mod apply;
pub mod export;
pub mod import;
pub mod list;
pub mod render;
pub mod spin;

pub use apply::ApplyConfig;
pub use export::ExportConfig;
pub use import::ImportConfig;
pub use list::ListConfig;
pub use render::RenderConfig;
pub use spin::SpinConfig;
