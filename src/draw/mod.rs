// src/draw/mod.rs
// The drawing surface contract shared by every demo renderer.
//
// Demos draw in screen space (origin top-left, y down) through the
// Surface trait. NannouSurface flips into nannou's centre-origin space,
// RecordingSurface keeps the commands for tests and headless frames.

pub mod nannou_surface;
pub mod recording;
pub mod style;

pub use nannou_surface::NannouSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use style::{Color, StrokeStyle, TextAlign, TextBaseline, TextStyle, BLACK, WHITE};

use crate::models::{pt, Point2D};

// segments used to approximate a full turn of an arc
pub const ARC_RESOLUTION: usize = 128;

pub trait Surface {
    /// Wipe the previous frame.
    fn clear(&mut self, color: Color);

    fn line(&mut self, start: Point2D, end: Point2D, stroke: StrokeStyle);

    fn polyline(&mut self, points: &[Point2D], stroke: StrokeStyle);

    fn circle(
        &mut self,
        center: Point2D,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<StrokeStyle>,
    );

    fn polygon(&mut self, points: &[Point2D], fill: Option<Color>, stroke: Option<StrokeStyle>);

    fn text(&mut self, text: &str, position: Point2D, style: &TextStyle);

    /// Arc from `start` to `end` (radians). Drawn as a polyline.
    fn arc(&mut self, center: Point2D, radius: f64, start: f64, end: f64, stroke: StrokeStyle) {
        let points = arc_points(center, radius, start, end);
        self.polyline(&points, stroke);
    }
}

pub fn arc_points(center: Point2D, radius: f64, start: f64, end: f64) -> Vec<Point2D> {
    let sweep = end - start;
    let fraction = (sweep.abs() / std::f64::consts::TAU).min(1.0);
    let segments = ((ARC_RESOLUTION as f64 * fraction).ceil() as usize).max(2);

    (0..=segments)
        .map(|i| {
            let angle = start + sweep * (i as f64 / segments as f64);
            center + Point2D::polar(angle, radius)
        })
        .collect()
}

/// A black outline stroke with the coloured line drawn on top of it.
pub fn outlined_line(
    surface: &mut dyn Surface,
    start: Point2D,
    end: Point2D,
    outline: StrokeStyle,
    line: StrokeStyle,
) {
    surface.line(start, end, outline);
    surface.line(start, end, line);
}

pub fn outlined_polyline(
    surface: &mut dyn Surface,
    points: &[Point2D],
    outline: StrokeStyle,
    line: StrokeStyle,
) {
    surface.polyline(points, outline);
    surface.polyline(points, line);
}

/// Positions and colours to draw a text label with, back to front.
/// An outlined label is stamped in the outline colour at eight offsets
/// of half the outline width, then filled at `position`.
pub fn text_layers(position: Point2D, style: &TextStyle) -> Vec<(Point2D, Color)> {
    let mut layers = Vec::with_capacity(9);
    if let Some(outline) = style.outline {
        let offset = outline.width / 2.0;
        if offset > 0.0 {
            for i in 0..8 {
                let angle = i as f64 * std::f64::consts::FRAC_PI_4;
                let direction = Point2D::polar(angle, 1.0);
                let step = pt(direction.x.round(), direction.y.round()) * offset;
                layers.push((position + step, outline.color));
            }
        }
    }
    layers.push((position, style.color));
    layers
}
