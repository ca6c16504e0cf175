// src/demos/ptolemy.rs
//
// Ptolemy's theorem for an equilateral triangle inscribed in a circle:
// from any point on the circle, the distance to the farthest vertex equals
// the sum of the distances to the other two.

use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};

use super::{Demo, DemoKind};
use crate::animation::{Orbit, SmoothedPoint};
use crate::config::PtolemyConfig;
use crate::controllers::{InputEvent, InputState, PointerTracker};
use crate::draw::{outlined_line, Color, StrokeStyle, Surface, TextAlign, TextBaseline, TextStyle};
use crate::models::{pt, Bounds, Circle, Point2D};

/// Vertices relative to the circle's centre, point up: top, left, right.
pub fn inscribed_triangle(radius: f64) -> [Point2D; 3] {
    let half_side = FRAC_PI_3.sin() * radius;
    let offset = FRAC_PI_6.sin() * radius;
    [pt(0.0, -radius), pt(-half_side, offset), pt(half_side, offset)]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PtolemyDistances {
    pub distances: [f64; 3],
    pub longest: usize,
    /// The two other vertex indices, in vertex order.
    pub shorter: [usize; 2],
}

impl PtolemyDistances {
    pub fn longest_distance(&self) -> f64 {
        self.distances[self.longest]
    }

    pub fn shorter_sum(&self) -> f64 {
        self.shorter.iter().map(|&i| self.distances[i]).sum()
    }
}

/// Distances from `point` to each vertex. Ties for the longest go to the
/// lowest index.
pub fn measure(vertices: &[Point2D; 3], point: Point2D) -> PtolemyDistances {
    let distances = vertices.map(|v| v.distance(point));
    let mut longest = 0;
    for i in 1..3 {
        if distances[longest] < distances[i] {
            longest = i;
        }
    }
    let mut shorter = [0; 2];
    for (slot, i) in (0..3).filter(|&i| i != longest).enumerate() {
        shorter[slot] = i;
    }
    PtolemyDistances {
        distances,
        longest,
        shorter,
    }
}

pub struct PtolemyDemo {
    config: PtolemyConfig,
    ink: Color,
    circle: Circle,
    vertices: [Point2D; 3],
    pointer: PointerTracker,
    in_circle: bool,
    orbit: Orbit,
    // relative to the centre
    point: SmoothedPoint,
    measured: PtolemyDistances,
}

impl PtolemyDemo {
    pub fn new(config: PtolemyConfig, ink: Color, bounds: Bounds) -> Self {
        let vertices = inscribed_triangle(config.radius);
        let mut demo = Self {
            pointer: PointerTracker::new(config.mouse_ease),
            orbit: Orbit::new(config.orbit_start, config.orbit_speed),
            point: SmoothedPoint::new(Point2D::ZERO, config.point_ease),
            circle: Circle::new(bounds.center(), config.radius),
            measured: measure(&vertices, Point2D::ZERO),
            config,
            ink,
            vertices,
            in_circle: false,
        };
        demo.resize(bounds);
        demo
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Position of the point on screen.
    pub fn point(&self) -> Point2D {
        self.circle.center + self.point.smooth
    }

    pub fn measured(&self) -> &PtolemyDistances {
        &self.measured
    }

    pub fn is_pointer_in_circle(&self) -> bool {
        self.in_circle
    }

    fn render_bars(&self, surface: &mut dyn Surface) {
        let c = &self.config;
        let center = self.circle.center;
        let outline = StrokeStyle::new(self.ink, c.bar_outline);
        let text_outline = StrokeStyle::new(self.ink, c.text_outline);
        let m = &self.measured;

        let overall = m.shorter_sum() / 2.0;
        let y = center.y + self.circle.radius + c.bar_space_shortest;
        let mut total = 0.0;
        for (slot, &i) in m.shorter.iter().enumerate() {
            let length = m.distances[i];
            let start = pt(center.x - overall + total, y);
            let bar = StrokeStyle::new(c.line_colors[i], c.bar_width);
            outlined_line(surface, start, start + pt(length, 0.0), outline, bar);

            let (side, align) = if slot == 0 { (-1.0, TextAlign::Right) } else { (1.0, TextAlign::Left) };
            let style = TextStyle::new(c.line_colors[i], c.font_size)
                .align(align)
                .outline(text_outline);
            let x = center.x + (overall + c.text_space_shortest) * side;
            surface.text(&format!("{}", length.round()), pt(x, y), &style);
            total += length;
        }

        let longest = m.longest_distance();
        let y = center.y + self.circle.radius + c.bar_space_longest;
        let bar = StrokeStyle::new(c.line_colors[m.longest], c.bar_width);
        outlined_line(
            surface,
            pt(center.x - longest / 2.0, y),
            pt(center.x + longest / 2.0, y),
            outline,
            bar,
        );
        let style = TextStyle::new(c.line_colors[m.longest], c.font_size)
            .align(TextAlign::Center)
            .baseline(TextBaseline::Top)
            .outline(text_outline);
        surface.text(
            &format!("{}", longest.round()),
            pt(center.x, y + c.text_space_longest),
            &style,
        );
    }
}

impl Demo for PtolemyDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::PtolemysTheorem
    }

    fn resize(&mut self, bounds: Bounds) {
        self.circle.center = bounds.center();
        self.in_circle = false;
    }

    fn handle_event(&mut self, event: &InputEvent, _input: &InputState) {
        if let InputEvent::PointerMoved(position) = event {
            self.in_circle = self.circle.contains(*position);
        }
    }

    fn update(&mut self, input: &InputState) {
        let pointer = self.pointer.update(input);

        // where the point is aimed, before projection onto the circle
        let inner = match pointer {
            Some(smooth) if self.in_circle => smooth,
            _ => self.orbit.advance(&self.circle),
        };

        let offset = inner - self.circle.center;
        let length = offset.length();
        // the exact centre has no direction; keep aiming where we were
        if length > 0.0 {
            self.point.set_target(offset * (self.circle.radius / length));
        }
        self.point.update();
        self.measured = measure(&self.vertices, self.point.smooth);
    }

    fn render(&self, surface: &mut dyn Surface) {
        let c = &self.config;
        let center = self.circle.center;
        let edge = StrokeStyle::new(self.ink, c.line_width);
        let outline = StrokeStyle::new(self.ink, c.bar_outline);

        surface.circle(center, self.circle.radius, None, Some(edge));
        for i in 0..3 {
            surface.line(
                center + self.vertices[i],
                center + self.vertices[(i + 1) % 3],
                edge,
            );
        }

        let point = self.point();
        for (i, vertex) in self.vertices.iter().enumerate() {
            let line = StrokeStyle::new(c.line_colors[i], c.bar_width);
            outlined_line(surface, center + *vertex, point, outline, line);
        }

        self.render_bars(surface);

        surface.circle(
            point,
            c.point_radius,
            Some(c.point_color),
            Some(StrokeStyle::new(self.ink, c.point_outline)),
        );
    }

    fn degenerate(&self) -> Option<String> {
        (!self.point.smooth.is_finite()).then(|| "ptolemy point is not finite".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RecordingSurface, BLACK};
    use std::f64::consts::TAU;

    #[test]
    fn test_inscribed_triangle_is_on_circle() {
        let vertices = inscribed_triangle(250.0);
        for v in vertices {
            assert!((v.length() - 250.0).abs() < 1e-9);
        }
        let side = vertices[0].distance(vertices[1]);
        assert!((side - vertices[1].distance(vertices[2])).abs() < 1e-9);
        assert!((side - 250.0 * 3f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_identity_holds_around_the_circle() {
        let radius = 250.0;
        let vertices = inscribed_triangle(radius);
        for step in 0..1000 {
            let angle = TAU * step as f64 / 1000.0 + 0.0001;
            let m = measure(&vertices, Point2D::polar(angle, radius));
            let longest = m.longest_distance();
            assert!(
                (m.shorter_sum() - longest).abs() <= 1e-6 * longest,
                "identity failed at angle {}: {:?}",
                angle,
                m
            );
        }
    }

    #[test]
    fn test_longest_tie_goes_to_first() {
        let vertices = [pt(0.0, 0.0), pt(10.0, 0.0), pt(-10.0, 0.0)];
        let m = measure(&vertices, pt(0.0, 0.0));
        assert_eq!(m.longest, 1);
        assert_eq!(m.shorter, [0, 2]);
    }

    #[test]
    fn test_pointer_inside_drives_point() {
        let bounds = Bounds::new(800.0, 800.0);
        let mut demo = PtolemyDemo::new(PtolemyConfig::default(), BLACK, bounds);
        let mut input = InputState::new();

        // pointer (500, 400) is inside, to the right of the centre
        let event = InputEvent::PointerMoved(pt(500.0, 400.0));
        input.apply(&event);
        demo.handle_event(&event, &input);
        assert!(demo.is_pointer_in_circle());

        for _ in 0..300 {
            demo.update(&input);
        }
        assert!(demo.point().distance(pt(650.0, 400.0)) < 1e-6, "{:?}", demo.point());
    }

    #[test]
    fn test_pointer_outside_orbits() {
        let bounds = Bounds::new(800.0, 800.0);
        let config = PtolemyConfig::default();
        let speed = config.orbit_speed;
        let mut demo = PtolemyDemo::new(config, BLACK, bounds);
        let mut input = InputState::new();

        let event = InputEvent::PointerMoved(pt(5.0, 5.0));
        input.apply(&event);
        demo.handle_event(&event, &input);
        assert!(!demo.is_pointer_in_circle());

        for _ in 0..500 {
            demo.update(&input);
        }
        let m = demo.measured();
        assert!((m.shorter_sum() - m.longest_distance()).abs() < 1.0);
        // orbit advanced once per frame
        assert!((demo.orbit.angle - (-std::f64::consts::FRAC_PI_2 + 500.0 * speed)).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_at_centre_keeps_target() {
        let bounds = Bounds::new(600.0, 600.0);
        let mut demo = PtolemyDemo::new(PtolemyConfig::default(), BLACK, bounds);
        let mut input = InputState::new();
        let event = InputEvent::PointerMoved(pt(300.0, 300.0));
        input.apply(&event);
        demo.handle_event(&event, &input);
        for _ in 0..50 {
            demo.update(&input);
        }
        assert!(demo.degenerate().is_none());
    }

    #[test]
    fn test_render_draws_bars_and_labels() {
        let mut demo = PtolemyDemo::new(PtolemyConfig::default(), BLACK, Bounds::new(800.0, 800.0));
        demo.update(&InputState::new());
        let mut surface = RecordingSurface::new();
        demo.render(&mut surface);
        assert_eq!(surface.texts().len(), 3);
    }
}
