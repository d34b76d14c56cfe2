//! SVG drawing surface

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use console::measure_text_width;

use super::{Font, Point, Surface, SurfaceSize, TextFrame, Wedge};
use crate::constants::render::AVERAGE_ADVANCE;
use crate::error::WheelError;

// Helper macro for write operations that converts formatting errors
macro_rules! write_out {
    ($dst:expr, $($arg:tt)*) => {
        write!($dst, $($arg)*).map_err(WheelError::from)
    };
}

/// A surface that records drawing operations as SVG elements
///
/// The document is sized in device pixels while its `viewBox` stays in
/// logical units, so a pixel ratio above one produces a sharper image.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: SurfaceSize,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            elements: Vec::new(),
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Number of elements painted since the last clear
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The current frame as a standalone SVG document
    pub fn to_svg_string(&self) -> Result<String, WheelError> {
        let mut out = String::new();
        write_out!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            self.size.pixel_width,
            self.size.pixel_height,
            num(self.size.css_size),
            num(self.size.css_size),
        )?;
        for element in &self.elements {
            write_out!(out, "  {element}\n")?;
        }
        write_out!(out, "</svg>\n")?;
        Ok(out)
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> f64 {
        self.size.css_size
    }

    fn height(&self) -> f64 {
        self.size.css_size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.elements.clear();
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn fill_wedge(&mut self, wedge: &Wedge, color: &str) {
        self.elements.push(format!(
            "<path d=\"{}\" fill=\"{}\"/>",
            wedge_path(wedge),
            escape(color)
        ));
    }

    fn stroke_wedge(&mut self, wedge: &Wedge, color: &str, line_width: f64) {
        self.elements.push(format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            wedge_path(wedge),
            escape(color),
            num(line_width)
        ));
    }

    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        // Wide glyphs (CJK, emoji) take two cells
        measure_text_width(text) as f64 * font.size_px * AVERAGE_ADVANCE
    }

    fn fill_text(&mut self, text: &str, frame: &TextFrame, at: Point, font: &Font, color: &str) {
        self.elements.push(format!(
            "<text x=\"{}\" y=\"{}\" transform=\"translate({} {}) rotate({})\" \
             font-family=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"middle\" \
             dominant-baseline=\"middle\">{}</text>",
            num(at.x),
            num(at.y),
            num(frame.origin.x),
            num(frame.origin.y),
            num(frame.angle.to_degrees()),
            escape(font.family),
            num(font.size_px),
            escape(color),
            escape(text)
        ));
    }
}

/// Path data for a wedge: center, out to the rim, clockwise arc, back
fn wedge_path(wedge: &Wedge) -> String {
    let sweep = wedge.end_angle - wedge.start_angle;
    let center = wedge.center;
    let start = wedge.rim_point(wedge.start_angle);
    let end = wedge.rim_point(wedge.end_angle);
    let r = num(wedge.radius);

    if sweep >= TAU - 1e-9 {
        // A single arc cannot close on itself, split the circle in two
        let half = wedge.rim_point(wedge.start_angle + PI);
        return format!(
            "M {} {} L {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
            num(center.x),
            num(center.y),
            num(start.x),
            num(start.y),
            num(half.x),
            num(half.y),
            num(start.x),
            num(start.y),
        );
    }

    let large_arc = u8::from(sweep > PI);
    format!(
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
        num(center.x),
        num(center.y),
        num(start.x),
        num(start.y),
        num(end.x),
        num(end.y),
    )
}

/// Compact decimal formatting for SVG attributes
fn num(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
