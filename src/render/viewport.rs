//! Surface sizing for a viewport

use crate::constants::render::{MAX_SURFACE_SIZE, MIN_SURFACE_SIZE, VIEWPORT_GUTTER};

/// Pixel buffer dimensions for a square drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// On-screen edge length in logical units
    pub css_size: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Logical-to-pixel scale applied to every drawing operation
    pub scale: f64,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::square(MAX_SURFACE_SIZE)
    }
}

impl SurfaceSize {
    /// Size for a viewport `viewport_width` units wide on a display with
    /// the given pixel density
    pub fn for_viewport(viewport_width: f64, pixel_ratio: f64) -> Self {
        let css_size = (viewport_width - VIEWPORT_GUTTER)
            .min(MAX_SURFACE_SIZE)
            .max(MIN_SURFACE_SIZE);
        let scale = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        let pixels = (css_size * scale).round() as u32;

        Self {
            css_size,
            pixel_width: pixels,
            pixel_height: pixels,
            scale,
        }
    }

    /// Unscaled square surface of `size` units
    pub fn square(size: f64) -> Self {
        let pixels = size.round().max(0.0) as u32;
        Self {
            css_size: size,
            pixel_width: pixels,
            pixel_height: pixels,
            scale: 1.0,
        }
    }
}
