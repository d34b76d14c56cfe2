//! Core data types and structures
//!
//! This module contains the state shared by the renderer and the spin
//! controller, separated from their implementation logic.

pub mod types;

pub use types::*;
