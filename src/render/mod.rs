//! # Wheel Rendering
//!
//! Slice geometry and painting. The renderer draws onto anything that
//! implements [`Surface`]; [`SvgSurface`] is the implementation used by the
//! command-line host.
//!
//! Angles follow screen conventions: zero points right, angles grow
//! clockwise, and slice 0 starts at the top of the wheel (−π/2) before the
//! wheel rotation is added.

pub mod svg;
pub mod viewport;
pub mod wrap;

use std::f64::consts::FRAC_PI_2;

pub use svg::SvgSurface;
pub use viewport::SurfaceSize;
pub use wrap::{line_baselines, wrap_label};

use crate::constants::render::{
    BORDER_COLOR, BORDER_WIDTH, FONT_FAMILY, FONT_SCALE, LABEL_COLOR, LABEL_OFFSET_RATIO,
    LABEL_WIDTH_RATIO, LINE_SPACING, MIN_FONT_PX, RIM_MARGIN,
};
use crate::constants::wheel::PALETTE;
use crate::core::slice_angle;
use crate::error::WheelError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A pie wedge running clockwise from `start_angle` to `end_angle`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Wedge {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Point on the rim at `angle`
    pub fn rim_point(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub size_px: f64,
    pub family: &'static str,
}

/// A drawing frame translated to `origin` and rotated by `angle`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFrame {
    pub origin: Point,
    pub angle: f64,
}

/// A 2D drawable surface
///
/// Coordinates are logical units; implementations map them to their pixel
/// buffer using the scale of the last [`Surface::resize`].
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Reallocate the pixel buffer; the previous content is discarded
    fn resize(&mut self, size: SurfaceSize);

    fn clear(&mut self);
    fn fill_wedge(&mut self, wedge: &Wedge, color: &str);
    fn stroke_wedge(&mut self, wedge: &Wedge, color: &str, line_width: f64);

    /// Rendered width of `text` in logical units
    fn measure_text(&self, text: &str, font: &Font) -> f64;

    /// Draw `text` centered on `at`, where `at` is expressed in `frame`
    fn fill_text(&mut self, text: &str, frame: &TextFrame, at: Point, font: &Font, color: &str);
}

/// Slice colors, cycled by slice index
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self, WheelError> {
        if colors.is_empty() {
            return Err(WheelError::ConfigurationError {
                message: "A palette needs at least one color".to_string(),
            });
        }
        Ok(Self { colors })
    }

    pub fn color_for(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Size-dependent measurements of a wheel drawn on a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub size: f64,
    pub center: Point,
    pub radius: f64,
    pub font_px: f64,
    pub line_height: f64,
    /// Distance from the center to the label anchor
    pub label_offset: f64,
    /// Wrap width for labels
    pub label_width: f64,
}

impl WheelLayout {
    pub fn new(width: f64, height: f64) -> Self {
        let size = width.min(height);
        let radius = size / 2.0 - RIM_MARGIN;
        let scaled_font = (size * FONT_SCALE).round();

        Self {
            size,
            center: Point::new(width / 2.0, height / 2.0),
            radius,
            font_px: scaled_font.max(MIN_FONT_PX),
            line_height: scaled_font + LINE_SPACING,
            label_offset: radius * LABEL_OFFSET_RATIO,
            label_width: radius * LABEL_WIDTH_RATIO,
        }
    }

    pub fn for_surface(surface: &impl Surface) -> Self {
        Self::new(surface.width(), surface.height())
    }

    /// Wedge of slice `index` out of `count` at the given wheel rotation
    pub fn slice(&self, index: usize, count: usize, rotation: f64) -> Option<Wedge> {
        let slice = slice_angle(count)?;
        let start_angle = -FRAC_PI_2 + rotation + index as f64 * slice;

        Some(Wedge {
            center: self.center,
            radius: self.radius,
            start_angle,
            end_angle: start_angle + slice,
        })
    }
}

/// Paints option lists as labeled pie slices
#[derive(Debug, Clone, Default)]
pub struct WheelRenderer {
    palette: Palette,
}

impl WheelRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Clear `surface` and paint `options` at `rotation`
    ///
    /// An empty option list leaves the surface cleared.
    pub fn render(&self, surface: &mut impl Surface, options: &[String], rotation: f64) {
        surface.clear();

        let layout = WheelLayout::for_surface(&*surface);
        let font = Font {
            size_px: layout.font_px,
            family: FONT_FAMILY,
        };

        for (index, label) in options.iter().enumerate() {
            let Some(wedge) = layout.slice(index, options.len(), rotation) else {
                return;
            };

            surface.fill_wedge(&wedge, self.palette.color_for(index));
            surface.stroke_wedge(&wedge, BORDER_COLOR, BORDER_WIDTH);

            let frame = TextFrame {
                origin: layout.center,
                angle: wedge.mid_angle(),
            };
            self.draw_label(surface, label, &frame, &layout, &font);
        }
    }

    fn draw_label(
        &self,
        surface: &mut impl Surface,
        label: &str,
        frame: &TextFrame,
        layout: &WheelLayout,
        font: &Font,
    ) {
        let lines = wrap_label(label, layout.label_width, |text| {
            surface.measure_text(text, font)
        });
        let baselines = line_baselines(lines.len(), 0.0, layout.line_height);

        for (line, y) in lines.iter().zip(baselines) {
            surface.fill_text(line, frame, Point::new(layout.label_offset, y), font, LABEL_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{PI, TAU};

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Fill(Wedge, String),
        Stroke(Wedge, String, f64),
        Text(String, TextFrame, Point, f64),
    }

    struct RecordingSurface {
        width: f64,
        height: f64,
        ops: Vec<Op>,
    }

    impl RecordingSurface {
        fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
            }
        }

        fn fills(&self) -> Vec<(Wedge, String)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Fill(w, c) => Some((*w, c.clone())),
                    _ => None,
                })
                .collect()
        }

        fn texts(&self) -> Vec<(String, TextFrame, Point)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(t, f, p, _) => Some((t.clone(), *f, *p)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> f64 {
            self.width
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn resize(&mut self, size: SurfaceSize) {
            self.width = size.css_size;
            self.height = size.css_size;
            self.ops.clear();
        }

        fn clear(&mut self) {
            self.ops.clear();
            self.ops.push(Op::Clear);
        }

        fn fill_wedge(&mut self, wedge: &Wedge, color: &str) {
            self.ops.push(Op::Fill(*wedge, color.to_string()));
        }

        fn stroke_wedge(&mut self, wedge: &Wedge, color: &str, line_width: f64) {
            self.ops
                .push(Op::Stroke(*wedge, color.to_string(), line_width));
        }

        fn measure_text(&self, text: &str, font: &Font) -> f64 {
            text.chars().count() as f64 * font.size_px * 0.5
        }

        fn fill_text(&mut self, text: &str, frame: &TextFrame, at: Point, font: &Font, _: &str) {
            self.ops
                .push(Op::Text(text.to_string(), *frame, at, font.size_px));
        }
    }

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_layout_measurements() {
        let layout = WheelLayout::new(400.0, 300.0);
        assert_eq!(layout.size, 300.0);
        assert_eq!(layout.center, Point::new(200.0, 150.0));
        assert_eq!(layout.radius, 146.0);
        assert_eq!(layout.font_px, 14.0);
        assert_eq!(layout.line_height, 16.0);
        assert!(approx(layout.label_offset, 146.0 * 0.66));
        assert!(approx(layout.label_width, 146.0 * 0.55));
    }

    #[test]
    fn test_small_layout_keeps_minimum_font() {
        let layout = WheelLayout::new(100.0, 100.0);
        assert_eq!(layout.font_px, 12.0);
        // Line height follows the scaled size, not the clamped font
        assert_eq!(layout.line_height, 7.0);
    }

    #[test]
    fn test_empty_options_only_clear() {
        let mut surface = RecordingSurface::new(300.0, 300.0);
        WheelRenderer::default().render(&mut surface, &[], 1.0);
        assert_eq!(surface.ops, vec![Op::Clear]);
    }

    #[test]
    fn test_slice_zero_starts_at_top_and_proceeds_clockwise() {
        let mut surface = RecordingSurface::new(300.0, 300.0);
        WheelRenderer::default().render(&mut surface, &options(&["a", "b", "c", "d"]), 0.0);

        let fills = surface.fills();
        assert_eq!(fills.len(), 4);
        assert!(approx(fills[0].0.start_angle, -PI / 2.0));
        assert!(approx(fills[0].0.end_angle, 0.0));
        assert!(approx(fills[1].0.start_angle, 0.0));
        assert!(approx(fills[3].0.end_angle, 3.0 * PI / 2.0));
    }

    #[test]
    fn test_rotation_shifts_every_slice() {
        let mut surface = RecordingSurface::new(300.0, 300.0);
        WheelRenderer::default().render(&mut surface, &options(&["a", "b"]), 0.5);

        let fills = surface.fills();
        assert!(approx(fills[0].0.start_angle, -PI / 2.0 + 0.5));
        assert!(approx(fills[1].0.start_angle, -PI / 2.0 + 0.5 + PI));
    }

    #[test]
    fn test_palette_cycles() {
        let palette = Palette::new(vec!["red".into(), "green".into(), "blue".into()]).unwrap();
        let mut surface = RecordingSurface::new(300.0, 300.0);
        WheelRenderer::new(palette).render(&mut surface, &options(&["a", "b", "c", "d", "e"]), 0.0);

        let colors: Vec<String> = surface.fills().into_iter().map(|(_, c)| c).collect();
        assert_eq!(colors, vec!["red", "green", "blue", "red", "green"]);
    }

    #[test]
    fn test_every_slice_gets_a_white_border() {
        let mut surface = RecordingSurface::new(300.0, 300.0);
        WheelRenderer::default().render(&mut surface, &options(&["a", "b", "c"]), 0.0);

        let strokes: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Stroke(_, color, width) => Some((color.clone(), *width)),
                _ => None,
            })
            .collect();
        assert_eq!(strokes, vec![("#ffffff".to_string(), 1.5); 3]);
    }

    #[test]
    fn test_single_option_covers_full_circle() {
        let mut surface = RecordingSurface::new(300.0, 300.0);
        WheelRenderer::default().render(&mut surface, &options(&["only"]), 0.0);

        let fills = surface.fills();
        assert_eq!(fills.len(), 1);
        assert!(approx(fills[0].0.end_angle - fills[0].0.start_angle, TAU));
    }

    #[test]
    fn test_labels_anchor_on_slice_mid_angle() {
        let mut surface = RecordingSurface::new(300.0, 300.0);
        WheelRenderer::default().render(&mut surface, &options(&["a", "b"]), 0.0);

        let texts = surface.texts();
        assert_eq!(texts.len(), 2);

        let (label, frame, at) = &texts[1];
        assert_eq!(label, "b");
        assert_eq!(frame.origin, Point::new(150.0, 150.0));
        assert!(approx(frame.angle, -PI / 2.0 + PI + PI / 2.0));
        assert!(approx(at.x, 146.0 * 0.66));
        assert_eq!(at.y, 0.0);
    }

    #[test]
    fn test_long_labels_wrap_into_centered_block() {
        let mut surface = RecordingSurface::new(300.0, 300.0);
        // Wrap width is 80.3 units, a character is 7 units wide here
        WheelRenderer::default().render(&mut surface, &options(&["spin the big wheel now"]), 0.0);

        let texts = surface.texts();
        let lines: Vec<&str> = texts.iter().map(|(t, _, _)| t.as_str()).collect();
        assert_eq!(lines, vec!["spin the", "big wheel", "now"]);

        let ys: Vec<f64> = texts.iter().map(|(_, _, p)| p.y).collect();
        assert_eq!(ys, vec![-16.0, 0.0, 16.0]);
    }
}
