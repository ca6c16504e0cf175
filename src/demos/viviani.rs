// src/demos/viviani.rs
//
// Viviani's theorem: from any point inside an equilateral triangle the
// perpendicular distances to the three sides add up to the altitude.

use std::f64::consts::FRAC_PI_6;

use super::{Demo, DemoKind};
use crate::animation::{Fade, Orbit, SmoothedPoint};
use crate::config::VivianiConfig;
use crate::controllers::{InputEvent, InputState};
use crate::draw::{outlined_line, Color, StrokeStyle, Surface, TextAlign, TextStyle};
use crate::models::{equilateral_altitude, pt, Bounds, Circle, Point2D, Triangle};

// edges of Triangle::equilateral, listed left side, right side, base
const SIDE_ORDER: [usize; 3] = [0, 2, 1];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideDistance {
    /// Positive while the point is on the inner side of the edge.
    pub distance: f64,
    /// Foot of the perpendicular on the edge's line.
    pub foot: Point2D,
}

/// Signed perpendicular distance from `point` to the line through `a` and
/// `b`. `orientation` is the triangle's signed area and picks which side
/// counts as inside.
pub fn side_distance(a: Point2D, b: Point2D, point: Point2D, orientation: f64) -> SideDistance {
    let edge = b - a;
    let sign = if orientation < 0.0 { -1.0 } else { 1.0 };
    let inward = pt(-edge.y, edge.x) * (sign / edge.length());
    let offset = point - a;
    let distance = inward.x * offset.x + inward.y * offset.y;
    SideDistance {
        distance,
        foot: point - inward * distance,
    }
}

/// Distances to the left side, the right side and the base.
pub fn side_distances(triangle: &Triangle, point: Point2D) -> [SideDistance; 3] {
    let edges = triangle.edges();
    let orientation = triangle.signed_area();
    SIDE_ORDER.map(|i| {
        let (a, b) = edges[i];
        side_distance(a, b, point, orientation)
    })
}

/// Orbit path touching all three sides: the incircle.
pub fn orbit_path(triangle: &Triangle, side: f64) -> Circle {
    Circle::new(triangle.centroid(), FRAC_PI_6.tan() * side / 2.0)
}

pub struct VivianiDemo {
    config: VivianiConfig,
    ink: Color,
    triangle: Triangle,
    path: Circle,
    orbit: Orbit,
    fade: Fade,
    inside: bool,
    // where the dot is heading
    inner: Point2D,
    dot: SmoothedPoint,
    distances: [SideDistance; 3],
}

impl VivianiDemo {
    pub fn new(config: VivianiConfig, ink: Color, bounds: Bounds) -> Self {
        let triangle = Triangle::equilateral(Point2D::ZERO, config.side);
        let path = orbit_path(&triangle, config.side);
        let mut demo = Self {
            orbit: Orbit::new(0.0, config.orbit_speed),
            fade: Fade::new(config.orbit_opacity, config.fade_in, config.fade_out),
            dot: SmoothedPoint::new(Point2D::ZERO, config.dot_ease),
            distances: side_distances(&triangle, Point2D::ZERO),
            config,
            ink,
            triangle,
            path,
            inside: false,
            inner: Point2D::ZERO,
        };
        demo.resize(bounds);
        demo
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn orbit_path(&self) -> &Circle {
        &self.path
    }

    pub fn dot(&self) -> Point2D {
        self.dot.smooth
    }

    pub fn distances(&self) -> &[SideDistance; 3] {
        &self.distances
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn orbit_opacity(&self) -> f64 {
        self.fade.value
    }

    pub fn altitude(&self) -> f64 {
        equilateral_altitude(self.config.side)
    }

    fn render_total_bar(&self, surface: &mut dyn Surface) {
        let c = &self.config;
        let [_, left, _] = self.triangle.vertices;
        let x = left.x + c.bar_offset;
        let outline = StrokeStyle::new(self.ink, c.bar_outline);
        let text_outline = StrokeStyle::new(self.ink, c.text_outline);

        let mut start = left.y;
        for (i, side) in self.distances.iter().enumerate() {
            let end = start - side.distance;
            let bar = StrokeStyle::new(c.line_colors[i], c.line_width);
            outlined_line(surface, pt(x, start), pt(x, end), outline, bar);

            let style = TextStyle::new(c.line_colors[i], c.font_size)
                .align(TextAlign::Right)
                .outline(text_outline);
            surface.text(
                &format!("{}", side.distance.round()),
                pt(x - c.text_space, (start + end) / 2.0),
                &style,
            );
            start = end;
        }
    }
}

impl Demo for VivianiDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::VivianisTheorem
    }

    fn resize(&mut self, bounds: Bounds) {
        let [rx, ry] = self.config.center_ratio;
        self.triangle = Triangle::equilateral(bounds.at_ratio(rx, ry), self.config.side);
        self.path = orbit_path(&self.triangle, self.config.side);

        // the dot jumps onto the orbit so it can never be left outside
        self.inside = false;
        self.inner = self.orbit.position(&self.path);
        self.dot.snap(self.inner);
        self.distances = side_distances(&self.triangle, self.dot.smooth);
    }

    fn handle_event(&mut self, event: &InputEvent, _input: &InputState) {
        if let InputEvent::PointerMoved(position) = event {
            self.inside = self.triangle.contains(*position);
            if self.inside {
                self.inner = *position;
            }
        }
    }

    fn update(&mut self, _input: &InputState) {
        if !self.inside {
            self.inner = self.orbit.advance(&self.path);
        }
        self.dot.set_target(self.inner);
        self.dot.update();
        self.fade.step(!self.inside);
        self.distances = side_distances(&self.triangle, self.dot.smooth);
    }

    fn render(&self, surface: &mut dyn Surface) {
        let c = &self.config;
        let edge = StrokeStyle::new(self.ink, c.line_width);
        let outline = StrokeStyle::new(self.ink, c.bar_outline);

        for (a, b) in self.triangle.edges() {
            surface.line(a, b, edge);
        }

        let path = StrokeStyle::new(c.orbit_color.with_alpha(self.fade.value as f32), c.line_width);
        surface.circle(self.path.center, self.path.radius, None, Some(path));

        let dot = self.dot.smooth;
        for (i, side) in self.distances.iter().enumerate() {
            let line = StrokeStyle::new(c.line_colors[i], c.line_width);
            outlined_line(surface, dot, side.foot, outline, line);
        }
        self.render_total_bar(surface);

        surface.circle(
            dot,
            c.dot_radius,
            Some(c.dot_color),
            Some(StrokeStyle::new(self.ink, c.dot_outline)),
        );
    }

    fn degenerate(&self) -> Option<String> {
        (!self.dot.smooth.is_finite()).then(|| "viviani dot is not finite".to_string())
    }
}
