// src/demos/napoleon.rs
//
// Napoleon's theorem: equilateral triangles erected outward on the sides
// of any triangle have centroids forming an equilateral triangle.

use rand::rngs::StdRng;
use rand::Rng;
use std::f64::consts::FRAC_PI_3;

use super::{Demo, DemoKind};
use crate::animation::SmoothedPoint;
use crate::config::NapoleonConfig;
use crate::controllers::{InputEvent, InputState, PointerTracker};
use crate::draw::{Color, StrokeStyle, Surface};
use crate::models::{pt, Bounds, Point2D, Triangle};

fn rotate(v: Point2D, angle: f64) -> Point2D {
    let (sin, cos) = angle.sin_cos();
    pt(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Third vertex of the equilateral triangle on side `a -> b`, on the
/// opposite side of the line from the rest of a triangle with
/// `orientation` (its signed area).
pub fn outer_apex(a: Point2D, b: Point2D, orientation: f64) -> Point2D {
    let angle = if orientation >= 0.0 { -FRAC_PI_3 } else { FRAC_PI_3 };
    a + rotate(b - a, angle)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NapoleonConstruction {
    pub triangle: Triangle,
    /// Outer apex for each side `v[i] -> v[i + 1]`.
    pub apexes: [Point2D; 3],
    /// Centroid of each outer equilateral triangle: the Napoleon triangle.
    pub centroids: [Point2D; 3],
}

impl NapoleonConstruction {
    pub fn new(triangle: Triangle) -> Self {
        let v = triangle.vertices;
        let orientation = triangle.signed_area();
        let apexes = [0, 1, 2].map(|i| outer_apex(v[i], v[(i + 1) % 3], orientation));
        let centroids = [0, 1, 2].map(|i| (v[i] + v[(i + 1) % 3] + apexes[i]) / 3.0);
        Self {
            triangle,
            apexes,
            centroids,
        }
    }

    pub fn napoleon_triangle(&self) -> Triangle {
        let [a, b, c] = self.centroids;
        Triangle::new(a, b, c)
    }

    /// The three medians of the equilateral triangle on side `i`.
    pub fn medians(&self, i: usize) -> [(Point2D, Point2D); 3] {
        let a = self.triangle.vertices[i];
        let b = self.triangle.vertices[(i + 1) % 3];
        let apex = self.apexes[i];
        [
            (apex, a.midpoint(b)),
            (b, apex.midpoint(a)),
            (a, apex.midpoint(b)),
        ]
    }
}

pub struct NapoleonDemo {
    config: NapoleonConfig,
    ink: Color,
    bounds: Bounds,
    vertices: [SmoothedPoint; 3],
    pointer: PointerTracker,
    selected: Option<usize>,
    construction: NapoleonConstruction,
}

impl NapoleonDemo {
    pub fn new(config: NapoleonConfig, ink: Color, bounds: Bounds, mut rng: StdRng) -> Self {
        let vertices = [(); 3].map(|_| {
            pt(
                rng.gen_range(0.0..bounds.width.max(1.0)),
                rng.gen_range(0.0..bounds.height.max(1.0)),
            )
        });
        Self::with_vertices(config, ink, bounds, vertices)
    }

    pub fn with_vertices(
        config: NapoleonConfig,
        ink: Color,
        bounds: Bounds,
        vertices: [Point2D; 3],
    ) -> Self {
        let points = vertices.map(|v| SmoothedPoint::new(v, config.vertex_ease));
        let mut demo = Self {
            pointer: PointerTracker::new(config.mouse_ease),
            config,
            ink,
            bounds,
            vertices: points,
            selected: None,
            construction: NapoleonConstruction::new(Triangle::new(vertices[0], vertices[1], vertices[2])),
        };
        demo.resize(bounds);
        demo
    }

    pub fn construction(&self) -> &NapoleonConstruction {
        &self.construction
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn vertex(&self, index: usize) -> &SmoothedPoint {
        &self.vertices[index]
    }

    fn margin(&self) -> f64 {
        self.config.dot_size + self.config.outline
    }

    fn rebuild(&mut self) {
        let [a, b, c] = self.vertices.map(|v| v.smooth);
        self.construction = NapoleonConstruction::new(Triangle::new(a, b, c));
    }
}

impl Demo for NapoleonDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::NapoleonsTheorem
    }

    fn resize(&mut self, bounds: Bounds) {
        self.selected = None;
        let margin = self.margin();
        // a collapsed viewport would snap every vertex onto one point
        if !bounds.fits(margin) {
            return;
        }
        self.bounds = bounds;
        for vertex in self.vertices.iter_mut() {
            let clamped = bounds.clamp(vertex.smooth, margin);
            vertex.snap(clamped);
        }
        self.rebuild();
    }

    fn handle_event(&mut self, event: &InputEvent, _input: &InputState) {
        match event {
            InputEvent::PointerPressed => {
                let Some(pointer) = self.pointer.smooth() else {
                    return;
                };
                self.selected = self
                    .vertices
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i, v.smooth.distance(pointer)))
                    .filter(|(_, d)| *d < self.config.select_radius)
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(i, _)| i);
            }
            InputEvent::PointerReleased => self.selected = None,
            _ => (),
        }
    }

    fn update(&mut self, input: &InputState) {
        let pointer = self.pointer.update(input);
        let margin = self.margin();

        for vertex in self.vertices.iter_mut() {
            vertex.update();
            // nothing is clamped while a vertex is being dragged
            if self.selected.is_none() {
                vertex.real = self.bounds.clamp(vertex.real, margin);
            }
        }

        if let (Some(index), Some(pointer)) = (self.selected, pointer) {
            let ease = self.config.vertex_ease;
            let vertex = &mut self.vertices[index];
            vertex.real += (pointer - vertex.smooth) / ease + self.pointer.velocity();
        }

        self.rebuild();
    }

    fn render(&self, surface: &mut dyn Surface) {
        let c = &self.config;
        let outline = StrokeStyle::new(self.ink, c.outline);
        let dot_outline = StrokeStyle::new(self.ink, c.outline * 2.0);
        let construction = &self.construction;
        let vertices = construction.triangle.vertices;

        for i in 0..3 {
            for (start, end) in construction.medians(i) {
                surface.line(start, end, outline);
            }
        }

        for i in 0..3 {
            let side = [vertices[i], vertices[(i + 1) % 3], construction.apexes[i]];
            surface.polygon(&side, Some(c.equilateral_color), Some(outline));
        }

        surface.polygon(&vertices, Some(c.irregular_color), Some(outline));
        for vertex in vertices {
            surface.circle(vertex, c.dot_size, Some(c.irregular_dot_color), Some(dot_outline));
        }

        surface.polygon(&construction.centroids, Some(c.center_color), Some(outline));
        for center in construction.centroids {
            surface.circle(center, c.dot_size, Some(c.center_dot_color), Some(dot_outline));
        }
    }

    fn degenerate(&self) -> Option<String> {
        let finite = self.construction.apexes.iter().all(|p| p.is_finite())
            && self.construction.triangle.is_finite();
        (!finite).then(|| "napoleon construction is not finite".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLACK;
    use rand::SeedableRng;

    fn assert_equilateral(triangle: &Triangle) {
        let sides = triangle.side_lengths();
        let longest = sides.iter().cloned().fold(0.0, f64::max);
        for side in sides {
            assert!(
                (side - longest).abs() <= 1e-6 * longest,
                "sides {:?} are not equal",
                sides
            );
        }
    }

    #[test]
    fn test_napoleon_triangle_is_equilateral() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = [(); 3].map(|_| pt(rng.gen_range(0.0..1600.0), rng.gen_range(0.0..900.0)));
            let triangle = Triangle::new(v[0], v[1], v[2]);
            if triangle.signed_area().abs() < 1.0 {
                continue;
            }
            assert_equilateral(&NapoleonConstruction::new(triangle).napoleon_triangle());
        }
    }

    #[test]
    fn test_apexes_are_outward_for_both_orientations() {
        let clockwise = Triangle::new(pt(0.0, 0.0), pt(100.0, 0.0), pt(30.0, 80.0));
        let [a, b, c] = clockwise.vertices;
        let counter = Triangle::new(a, c, b);

        for triangle in [clockwise, counter] {
            let construction = NapoleonConstruction::new(triangle);
            let v = triangle.vertices;
            for i in 0..3 {
                let (a, b, other) = (v[i], v[(i + 1) % 3], v[(i + 2) % 3]);
                let apex_side = (b - a).cross(construction.apexes[i] - a);
                let other_side = (b - a).cross(other - a);
                assert!(apex_side * other_side < 0.0, "apex {} is not outward", i);

                let equilateral = Triangle::new(a, b, construction.apexes[i]);
                assert_equilateral(&equilateral);
            }
        }
    }

    #[test]
    fn test_medians_meet_at_centroid() {
        let construction =
            NapoleonConstruction::new(Triangle::new(pt(10.0, 10.0), pt(200.0, 40.0), pt(90.0, 170.0)));
        for i in 0..3 {
            for (start, end) in construction.medians(i) {
                // the centroid lies two thirds along each median
                let point = start + (end - start) * (2.0 / 3.0);
                assert!(point.distance(construction.centroids[i]) < 1e-9);
            }
        }
    }

    #[test]
    fn test_resize_clamps_and_releases() {
        let config = NapoleonConfig::default();
        let margin = config.dot_size + config.outline;
        let mut demo = NapoleonDemo::with_vertices(
            config,
            BLACK,
            Bounds::new(1600.0, 900.0),
            [pt(1500.0, 850.0), pt(20.0, 30.0), pt(800.0, 450.0)],
        );
        let mut input = InputState::new();
        input.apply(&InputEvent::PointerMoved(pt(1490.0, 840.0)));
        demo.update(&input);
        demo.handle_event(&InputEvent::PointerPressed, &input);
        assert_eq!(demo.selected(), Some(0));

        let bounds = Bounds::new(400.0, 300.0);
        demo.resize(bounds);
        assert_eq!(demo.selected(), None);
        for i in 0..3 {
            assert!(bounds.contains(demo.vertex(i).smooth, margin), "vertex {} off screen", i);
        }
    }

    #[test]
    fn test_minimised_window_keeps_triangle() {
        let bounds = Bounds::new(800.0, 600.0);
        let vertices = [pt(100.0, 100.0), pt(700.0, 100.0), pt(400.0, 500.0)];
        let mut demo = NapoleonDemo::with_vertices(NapoleonConfig::default(), BLACK, bounds, vertices);
        let input = InputState::new();

        demo.resize(Bounds::new(0.0, 0.0));
        for _ in 0..10 {
            demo.update(&input);
        }
        demo.resize(bounds);

        let triangle = demo.construction().triangle;
        assert!((triangle.signed_area().abs() - 120_000.0).abs() < 1e-6);
        for (i, expected) in vertices.iter().enumerate() {
            assert!(demo.vertex(i).smooth.distance(*expected) < 1e-9);
        }
    }

    #[test]
    fn test_press_picks_nearest_vertex_within_radius() {
        let mut demo = NapoleonDemo::with_vertices(
            NapoleonConfig::default(),
            BLACK,
            Bounds::new(800.0, 600.0),
            [pt(100.0, 100.0), pt(130.0, 100.0), pt(400.0, 400.0)],
        );
        let mut input = InputState::new();

        input.apply(&InputEvent::PointerMoved(pt(125.0, 100.0)));
        demo.update(&input);
        demo.handle_event(&InputEvent::PointerPressed, &input);
        assert_eq!(demo.selected(), Some(1));

        demo.handle_event(&InputEvent::PointerReleased, &input);
        input.apply(&InputEvent::PointerMoved(pt(600.0, 100.0)));
        for _ in 0..100 {
            demo.update(&input);
        }
        demo.handle_event(&InputEvent::PointerPressed, &input);
        assert_eq!(demo.selected(), None);
    }

    #[test]
    fn test_selected_vertex_follows_pointer() {
        let mut demo = NapoleonDemo::with_vertices(
            NapoleonConfig::default(),
            BLACK,
            Bounds::new(800.0, 600.0),
            [pt(100.0, 100.0), pt(700.0, 100.0), pt(400.0, 500.0)],
        );
        let mut input = InputState::new();
        input.apply(&InputEvent::PointerMoved(pt(110.0, 95.0)));
        demo.update(&input);
        demo.handle_event(&InputEvent::PointerPressed, &input);
        assert_eq!(demo.selected(), Some(0));

        input.apply(&InputEvent::PointerMoved(pt(300.0, 250.0)));
        for _ in 0..600 {
            demo.update(&input);
        }
        assert!(demo.vertex(0).smooth.distance(pt(300.0, 250.0)) < 1e-6);
        assert_equilateral(&demo.construction().napoleon_triangle());
    }
}
