// src/draw/nannou_surface.rs
//
// Surface backed by nannou's Draw. Nannou puts the origin at the window
// centre with y pointing up, so every point is flipped on the way in.

use nannou::prelude::*;

use super::{
    arc_points, text_layers, Color, StrokeStyle, Surface, TextAlign, TextBaseline, TextStyle,
};
use crate::models::{Bounds, Point2D};

// width of the layout box text is justified within
const TEXT_BOX_WIDTH: f32 = 600.0;

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    bounds: Bounds,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, bounds: Bounds) -> Self {
        Self { draw, bounds }
    }

    fn to_nannou(&self, point: Point2D) -> Point2 {
        pt2(
            (point.x - self.bounds.width / 2.0) as f32,
            (self.bounds.height / 2.0 - point.y) as f32,
        )
    }

    fn points(&self, points: &[Point2D]) -> Vec<Point2> {
        points.iter().map(|p| self.to_nannou(*p)).collect()
    }

    fn glyphs(&self, text: &str, position: Point2D, style: &TextStyle, color: Color) {
        let anchor = self.to_nannou(position);
        let box_height = (style.size * 2.0) as f32;

        // nannou justifies text inside a box centred on xy
        let x = match style.align {
            TextAlign::Left => anchor.x + TEXT_BOX_WIDTH / 2.0,
            TextAlign::Center => anchor.x,
            TextAlign::Right => anchor.x - TEXT_BOX_WIDTH / 2.0,
        };
        let y = match style.baseline {
            TextBaseline::Top => anchor.y - box_height / 2.0,
            TextBaseline::Middle => anchor.y,
        };

        let text = self
            .draw
            .text(text)
            .x_y(x, y)
            .w_h(TEXT_BOX_WIDTH, box_height)
            .font_size(style.size as u32)
            .color(to_rgba(color));

        let text = match style.align {
            TextAlign::Left => text.left_justify(),
            TextAlign::Center => text.center_justify(),
            TextAlign::Right => text.right_justify(),
        };

        match style.baseline {
            TextBaseline::Top => text.align_text_top(),
            TextBaseline::Middle => text.align_text_middle_y(),
        };
    }
}

fn to_rgba(color: Color) -> Rgba {
    rgba(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a,
    )
}

impl Surface for NannouSurface<'_> {
    fn clear(&mut self, color: Color) {
        self.draw.background().color(to_rgba(color));
    }

    fn line(&mut self, start: Point2D, end: Point2D, stroke: StrokeStyle) {
        if !start.is_finite() || !end.is_finite() {
            return;
        }
        self.draw
            .line()
            .start(self.to_nannou(start))
            .end(self.to_nannou(end))
            .stroke_weight(stroke.width as f32)
            .color(to_rgba(stroke.color))
            .caps_round();
    }

    fn polyline(&mut self, points: &[Point2D], stroke: StrokeStyle) {
        if points.iter().any(|p| !p.is_finite()) {
            return;
        }
        // round caps on each segment, as the tessellated polyline has none
        for window in points.windows(2) {
            if let [p1, p2] = window {
                self.line(*p1, *p2, stroke);
            }
        }
    }

    fn circle(
        &mut self,
        center: Point2D,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<StrokeStyle>,
    ) {
        if !center.is_finite() || !radius.is_finite() {
            return;
        }
        let Some(fill) = fill else {
            if let Some(stroke) = stroke {
                let ring = arc_points(center, radius, 0.0, std::f64::consts::TAU);
                self.polyline(&ring, stroke);
            }
            return;
        };

        let mut inner = radius;
        if let Some(stroke) = stroke {
            // the stroke straddles the edge, so the outline disc sits underneath
            self.draw
                .ellipse()
                .xy(self.to_nannou(center))
                .radius((radius + stroke.width / 2.0) as f32)
                .color(to_rgba(stroke.color));
            inner -= stroke.width / 2.0;
        }
        self.draw
            .ellipse()
            .xy(self.to_nannou(center))
            .radius(inner.max(0.0) as f32)
            .color(to_rgba(fill));
    }

    fn polygon(&mut self, points: &[Point2D], fill: Option<Color>, stroke: Option<StrokeStyle>) {
        if points.len() < 3 || points.iter().any(|p| !p.is_finite()) {
            return;
        }
        if let Some(fill) = fill {
            self.draw
                .polygon()
                .color(to_rgba(fill))
                .points(self.points(points));
        }
        if let Some(stroke) = stroke {
            let mut closed = points.to_vec();
            closed.push(points[0]);
            self.polyline(&closed, stroke);
        }
    }

    fn text(&mut self, text: &str, position: Point2D, style: &TextStyle) {
        if !position.is_finite() {
            return;
        }
        for (layer, color) in text_layers(position, style) {
            self.glyphs(text, layer, style, color);
        }
    }
}
