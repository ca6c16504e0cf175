// src/demos/chaos_game.rs
//
// Sierpinski triangle by the chaos game: each new point is the midpoint of
// the previous point and a randomly chosen vertex.

use rand::rngs::StdRng;
use rand::Rng;

use super::{Demo, DemoKind};
use crate::config::ChaosGameConfig;
use crate::controllers::{InputEvent, InputState, KeyCode};
use crate::draw::{Color, StrokeStyle, Surface, TextAlign, TextStyle};
use crate::models::{equilateral_altitude, pt, Bounds, Point2D, Triangle};

pub fn next_point(previous: Point2D, vertex: Point2D) -> Point2D {
    (previous + vertex) / 2.0
}

/// Point sequence over a fixed vertex set, bounded by `limit` points
/// (the seed point included). The seed is always kept, so a limit below
/// one is raised to one.
#[derive(Debug, Clone)]
pub struct ChaosGame {
    vertices: Vec<Point2D>,
    points: Vec<Point2D>,
    limit: usize,
}

impl ChaosGame {
    pub fn new(vertices: Vec<Point2D>, seed: Point2D, limit: usize) -> Self {
        Self {
            vertices,
            points: vec![seed],
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= self.limit
    }

    /// Add one point using `pick(vertex_count)` to choose the vertex.
    /// Out-of-range picks wrap around. Returns `None` once the limit is hit.
    pub fn step_with(&mut self, mut pick: impl FnMut(usize) -> usize) -> Option<Point2D> {
        if self.is_full() || self.vertices.is_empty() {
            return None;
        }
        let vertex = self.vertices[pick(self.vertices.len()) % self.vertices.len()];
        let previous = *self.points.last()?;
        let point = next_point(previous, vertex);
        self.points.push(point);
        Some(point)
    }

    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Option<Point2D> {
        self.step_with(|count| rng.gen_range(0..count))
    }

    /// Drop everything but the seed point.
    pub fn reset(&mut self) {
        self.points.truncate(1);
    }
}

/// Vertices of a point-up equilateral triangle centred on the origin.
pub fn triangle_vertices(side: f64) -> Vec<Point2D> {
    Triangle::equilateral(Point2D::ZERO, side).vertices.to_vec()
}

pub struct ChaosGameDemo {
    config: ChaosGameConfig,
    ink: Color,
    bounds: Bounds,
    center: Point2D,
    game: ChaosGame,
    paused: bool,
    rng: StdRng,
}

impl ChaosGameDemo {
    pub fn new(config: ChaosGameConfig, ink: Color, bounds: Bounds, rng: StdRng) -> Self {
        let game = ChaosGame::new(triangle_vertices(config.side), Point2D::ZERO, config.limit);
        let mut demo = Self {
            paused: config.start_paused,
            config,
            ink,
            bounds,
            center: Point2D::ZERO,
            game,
            rng,
        };
        demo.resize(bounds);
        demo
    }

    pub fn game(&self) -> &ChaosGame {
        &self.game
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn reset(&mut self) {
        self.game.reset();
        self.paused = true;
    }
}

impl Demo for ChaosGameDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::ChaosGameTriangle
    }

    fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        let [rx, ry] = self.config.center_ratio;
        self.center = bounds.at_ratio(rx, ry);
    }

    fn handle_event(&mut self, event: &InputEvent, input: &InputState) {
        // any key release acts on whichever of the keys are still held
        if let InputEvent::KeyReleased(_) = event {
            if input.is_key_down(KeyCode::Space) {
                self.paused = !self.paused;
            }
            if input.is_key_down(KeyCode::R) {
                self.reset();
            }
        }
    }

    fn update(&mut self, _input: &InputState) {
        if self.paused {
            return;
        }
        for _ in 0..self.config.points_per_frame {
            if self.game.step(&mut self.rng).is_none() {
                break;
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        let edge = StrokeStyle::new(self.config.line_color, self.config.line_width);
        let to_screen = |p: Point2D| self.center + p;

        let vertices = self.game.vertices();
        for (i, vertex) in vertices.iter().enumerate() {
            let next = vertices[(i + 1) % vertices.len()];
            surface.line(to_screen(*vertex), to_screen(next), edge);
        }

        for point in self.game.points() {
            surface.circle(
                to_screen(*point),
                self.config.dot_size,
                Some(self.config.dot_color),
                None,
            );
        }

        // point count, under the triangle and centred in the space below it
        let base = self.center.y + equilateral_altitude(self.config.side) / 2.0;
        let y = (base + self.config.font_size).max((self.bounds.height + base) / 2.0);
        let style = TextStyle::new(self.ink, self.config.font_size).align(TextAlign::Center);
        surface.text(
            &self.game.points().len().to_string(),
            pt(self.center.x, y),
            &style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_forced_vertex_order_scenario() {
        let vertices = triangle_vertices(500.0);
        let mut game = ChaosGame::new(vertices.clone(), pt(0.0, 0.0), 5);

        let mut order = [0usize, 1, 2].into_iter().cycle();
        while game.step_with(|_| order.next().unwrap_or(0)).is_some() {}

        let h = equilateral_altitude(500.0);
        let expected = [
            pt(0.0, 0.0),
            pt(0.0, -h / 4.0),
            pt(-125.0, h / 8.0),
            pt(62.5, 5.0 * h / 16.0),
            pt(31.25, -3.0 * h / 32.0),
        ];

        let points = game.points();
        assert_eq!(points.len(), 5);
        for (i, (actual, wanted)) in points.iter().zip(expected.iter()).enumerate() {
            assert!(
                actual.distance(*wanted) < 1e-9,
                "point {} was {:?}, expected {:?}",
                i,
                actual,
                wanted
            );
        }
        // and exactly the recurrence
        for i in 1..points.len() {
            assert_eq!(points[i], (points[i - 1] + vertices[(i - 1) % 3]) / 2.0);
        }
    }

    #[test]
    fn test_random_points_respect_limit_and_recurrence() {
        let vertices = triangle_vertices(300.0);
        let mut game = ChaosGame::new(vertices.clone(), pt(10.0, 20.0), 200);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            game.step(&mut rng);
        }

        let points = game.points();
        assert_eq!(points.len(), 200);
        for pair in points.windows(2) {
            let [previous, point] = [pair[0], pair[1]];
            assert!(
                vertices.iter().any(|v| next_point(previous, *v) == point),
                "{:?} is not a midpoint step from {:?}",
                point,
                previous
            );
        }
    }

    #[test]
    fn test_zero_limit_keeps_only_seed() {
        let mut game = ChaosGame::new(triangle_vertices(100.0), pt(0.0, 0.0), 0);
        assert_eq!(game.limit(), 1);
        assert!(game.is_full());
        assert_eq!(game.step_with(|_| 0), None);
        assert_eq!(game.points(), &[pt(0.0, 0.0)]);
    }

    #[test]
    fn test_reset_keeps_seed() {
        let mut game = ChaosGame::new(triangle_vertices(100.0), pt(1.0, 2.0), 10);
        game.step_with(|_| 0);
        game.step_with(|_| 1);
        game.reset();
        assert_eq!(game.points(), &[pt(1.0, 2.0)]);
    }

    #[test]
    fn test_space_and_reset_keys() {
        let config = ChaosGameConfig::default();
        let mut demo = ChaosGameDemo::new(
            config,
            Color::rgb(0, 0, 0),
            Bounds::new(800.0, 600.0),
            StdRng::seed_from_u64(1),
        );
        let mut input = InputState::new();
        assert!(demo.is_paused());

        demo.update(&input);
        assert_eq!(demo.game().points().len(), 1);

        // Space down then up: unpause
        input.apply(&InputEvent::KeyPressed(KeyCode::Space));
        demo.handle_event(&InputEvent::KeyReleased(KeyCode::Space), &input);
        input.apply(&InputEvent::KeyReleased(KeyCode::Space));
        assert!(!demo.is_paused());

        for _ in 0..3 {
            demo.update(&input);
        }
        assert_eq!(demo.game().points().len(), 4);

        input.apply(&InputEvent::KeyPressed(KeyCode::R));
        demo.handle_event(&InputEvent::KeyReleased(KeyCode::R), &input);
        input.apply(&InputEvent::KeyReleased(KeyCode::R));
        assert!(demo.is_paused());
        assert_eq!(demo.game().points().len(), 1);
    }
}
