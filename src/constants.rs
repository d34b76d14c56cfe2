//! Configuration constants for spinning-wheel
//!
//! This module contains the tuning values used throughout the application.
//! The spin tuning values are only defaults; they can be overridden through
//! command arguments or environment variables.

use std::time::Duration;

/// Wheel content defaults
pub mod wheel {
    /// Options used when nothing usable is stored
    pub const DEFAULT_OPTIONS: &[&str] = &["Option 1", "Option 2", "Option 3", "Option 4", "Surprise"];

    /// Key under which the option list is persisted
    pub const STORAGE_KEY: &str = "wheel.options";

    /// Slice colors, cycled by slice index
    pub const PALETTE: &[&str] = &["#C8E6F0", "#004D80"];

    /// Default file name for exported option lists
    pub const EXPORT_FILE_NAME: &str = "wheel-options.json";

    /// Default location of the file-backed store
    pub const DEFAULT_STORE_FILE: &str = ".spinning-wheel.json";
}

/// Rendering geometry
pub mod render {
    /// Inset between the wheel edge and the surface edge
    pub const RIM_MARGIN: f64 = 4.0;

    /// Width of the border stroked between slices
    pub const BORDER_WIDTH: f64 = 1.5;

    pub const BORDER_COLOR: &str = "#ffffff";
    pub const LABEL_COLOR: &str = "#ffffff";
    pub const FONT_FAMILY: &str = "Arial";

    /// Label anchor distance from the center, as a fraction of the radius
    pub const LABEL_OFFSET_RATIO: f64 = 0.66;

    /// Wrap width for labels, as a fraction of the radius
    pub const LABEL_WIDTH_RATIO: f64 = 0.55;

    /// Font size as a fraction of the wheel size
    pub const FONT_SCALE: f64 = 0.045;
    pub const MIN_FONT_PX: f64 = 12.0;
    pub const LINE_SPACING: f64 = 2.0;

    /// Horizontal room kept free around the surface in the viewport
    pub const VIEWPORT_GUTTER: f64 = 40.0;
    pub const MAX_SURFACE_SIZE: f64 = 640.0;
    pub const MIN_SURFACE_SIZE: f64 = 260.0;

    /// Average glyph advance of a sans-serif face, relative to font size
    pub const AVERAGE_ADVANCE: f64 = 0.55;
}

/// Spin animation tuning
pub mod spin {
    /// Full turns every spin makes at minimum
    pub const BASE_SPIN_SPEED: u32 = 10;

    /// Extra full turns added at random (inclusive upper bound)
    pub const EXTRA_TURNS: u32 = 2;

    pub const BASE_DURATION_MS: u32 = 2500;

    /// Random duration added on top of the base (exclusive upper bound)
    pub const DURATION_JITTER_MS: u32 = 900;
}

/// Terminal frame loop configuration
pub mod progress {
    use super::*;

    /// Delay between two animation frames (about 60 per second)
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

    /// Duration between spinner redraws
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the wheel animation
    pub const SPINNER_FRAMES: &[&str] = &["🎡◐", "🎡◓", "🎡◑", "🎡◒"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default viewport width assumed by the CLI host
    pub const DEFAULT_VIEWPORT_WIDTH: &str = "680";

    pub const DEFAULT_PIXEL_RATIO: &str = "1";
}
