//! Core type definitions
//!
//! The widget state is an explicit value owned by a single wheel instance;
//! the renderer reads it and the spin controller mutates it.

use std::f64::consts::TAU;

use crate::constants::wheel::DEFAULT_OPTIONS;

/// State of one wheel instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelState {
    /// Option labels in slice order
    pub options: Vec<String>,
    /// Cumulative rotation in radians, never wrapped
    pub rotation: f64,
    /// Set while a spin animation runs; gates new spin requests
    pub spinning: bool,
}

impl WheelState {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            rotation: 0.0,
            spinning: false,
        }
    }

    /// State seeded with the built-in option list
    pub fn with_defaults() -> Self {
        Self::new(default_options())
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Angle covered by one slice, or `None` for an empty wheel
    pub fn slice_angle(&self) -> Option<f64> {
        slice_angle(self.options.len())
    }
}

/// Angle covered by one of `count` equal slices
pub fn slice_angle(count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(TAU / count as f64)
    }
}

/// The built-in option list
pub fn default_options() -> Vec<String> {
    DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect()
}
