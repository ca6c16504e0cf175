// src/demos/monge.rs
//
// Monge's theorem: the external tangent intersections of three circles
// taken in pairs lie on one straight line.

use rand::rngs::StdRng;
use rand::Rng;

use super::{Demo, DemoKind};
use crate::config::MongeConfig;
use crate::controllers::{InputEvent, InputState, PointerTracker, Selection};
use crate::draw::{outlined_line, outlined_polyline, Color, StrokeStyle, Surface};
use crate::models::{pt, Bounds, Circle, Point2D};

// pairs in drawing order
pub const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Angle of the line joining the two centres, measured from the y axis.
pub fn tangent_angle(a: &Circle, b: &Circle) -> f64 {
    let d = a.center - b.center;
    (d.x / d.y).atan()
}

/// The two points of `circle` perpendicular to the centre line at `angle`.
/// The external tangent lines are drawn through these.
pub fn tangent_endpoints(circle: &Circle, angle: f64) -> [Point2D; 2] {
    let offset = pt(angle.cos(), -angle.sin()) * circle.radius;
    [circle.center - offset, circle.center + offset]
}

/// External tangent intersection of `a` and `b`, by similar triangles: the
/// hypotenuse from `a`'s centre is `r_a * d / (r_a - r_b)`.
///
/// Requires `a.radius != b.radius`. Equal radii divide by zero and the
/// result is non-finite (the tangents are parallel).
pub fn contact_point(a: &Circle, b: &Circle, angle: f64) -> Point2D {
    let sign = if a.center.y < b.center.y { -1.0 } else { 1.0 };
    let hypot = a.radius * a.center.distance(b.center) / (a.radius - b.radius) * sign;
    a.center - pt(angle.sin(), angle.cos()) * hypot
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairTangents {
    pub pair: (usize, usize),
    pub first: [Point2D; 2],
    pub second: [Point2D; 2],
    pub contact: Point2D,
}

pub fn construct(circles: &[Circle; 3]) -> [PairTangents; 3] {
    PAIRS.map(|(i, j)| {
        let (a, b) = (&circles[i], &circles[j]);
        let angle = tangent_angle(a, b);
        PairTangents {
            pair: (i, j),
            first: tangent_endpoints(a, angle),
            second: tangent_endpoints(b, angle),
            contact: contact_point(a, b, angle),
        }
    })
}

/// Twice the area of the triangle spanned by the contact points. Zero when
/// they are collinear.
pub fn collinearity(contacts: [Point2D; 3]) -> f64 {
    let [p, q, r] = contacts;
    (q - p).cross(r - p)
}

pub struct MongeDemo {
    config: MongeConfig,
    ink: Color,
    bounds: Bounds,
    // centres as fractions of the viewport, so a resize keeps the layout
    ratios: [Point2D; 3],
    circles: [Circle; 3],
    pointer: PointerTracker,
    selection: Option<Selection>,
    tangents: [PairTangents; 3],
}

impl MongeDemo {
    pub fn new(config: MongeConfig, ink: Color, bounds: Bounds, mut rng: StdRng) -> Self {
        let ratios = [(); 3].map(|_| pt(rng.gen::<f64>(), rng.gen::<f64>()));
        Self::with_ratios(config, ink, bounds, ratios)
    }

    pub fn with_ratios(config: MongeConfig, ink: Color, bounds: Bounds, ratios: [Point2D; 3]) -> Self {
        let circles = [0, 1, 2].map(|i| Circle::new(Point2D::ZERO, config.radii[i]));
        let mut demo = Self {
            pointer: PointerTracker::new(config.mouse_ease),
            config,
            ink,
            bounds,
            ratios,
            circles,
            selection: None,
            tangents: construct(&circles),
        };
        demo.resize(bounds);
        demo
    }

    pub fn circles(&self) -> &[Circle; 3] {
        &self.circles
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn margin(&self, index: usize) -> f64 {
        self.circles[index].radius + self.config.outline_width / 2.0
    }

    /// Move circle `index` to `center`, clamped so it stays fully on screen.
    fn place(&mut self, index: usize, center: Point2D) {
        let clamped = self.bounds.clamp(center, self.margin(index));
        self.circles[index].center = clamped;
        self.ratios[index] = pt(clamped.x / self.bounds.width, clamped.y / self.bounds.height);
    }
}

impl Demo for MongeDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::MongesTheorem
    }

    fn resize(&mut self, bounds: Bounds) {
        // keep the stored layout until the window is usable again
        let widest = (0..3).map(|i| self.margin(i)).fold(0.0, f64::max);
        if !bounds.fits(widest) {
            return;
        }
        self.bounds = bounds;
        for i in 0..3 {
            let r = self.ratios[i];
            self.place(i, bounds.at_ratio(r.x, r.y));
        }
        self.tangents = construct(&self.circles);
    }

    fn handle_event(&mut self, event: &InputEvent, _input: &InputState) {
        match event {
            InputEvent::PointerPressed => {
                let Some(pointer) = self.pointer.smooth() else {
                    return;
                };
                self.selection = self
                    .circles
                    .iter()
                    .position(|c| c.contains(pointer))
                    .map(|i| Selection::new(i, self.circles[i].center, pointer));
            }
            InputEvent::PointerReleased => self.selection = None,
            _ => (),
        }
    }

    fn update(&mut self, input: &InputState) {
        let pointer = self.pointer.update(input);

        if let (Some(selection), Some(pointer)) = (self.selection, pointer) {
            self.place(selection.index, selection.anchor(pointer));
        }
        self.tangents = construct(&self.circles);
    }

    fn render(&self, surface: &mut dyn Surface) {
        let outline = StrokeStyle::new(self.ink, self.config.outline_width);
        let tangent = StrokeStyle::new(self.config.tangent_color, self.config.line_width);

        for pair in &self.tangents {
            outlined_line(surface, pair.first[0], pair.contact, outline, tangent);
            outlined_line(surface, pair.contact, pair.first[1], outline, tangent);
        }

        for (circle, color) in self.circles.iter().zip(self.config.circle_colors) {
            let stroke = StrokeStyle::new(color, self.config.line_width);
            surface.circle(circle.center, circle.radius, None, Some(outline));
            surface.circle(circle.center, circle.radius, None, Some(stroke));
        }

        let contacts: Vec<Point2D> = self.tangents.iter().map(|t| t.contact).collect();
        let contact_line = StrokeStyle::new(self.config.contact_color, self.config.line_width);
        outlined_polyline(surface, &contacts, outline, contact_line);
    }

    fn degenerate(&self) -> Option<String> {
        self.tangents
            .iter()
            .find(|t| !t.contact.is_finite())
            .map(|t| {
                format!(
                    "circles {} and {} have no external tangent intersection",
                    t.pair.0, t.pair.1
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLACK;
    use rand::SeedableRng;

    fn relative_collinearity(contacts: [Point2D; 3]) -> f64 {
        let [p, q, r] = contacts;
        collinearity(contacts) / ((q - p).length() * (r - p).length())
    }

    #[test]
    fn test_contact_is_homothety_center() {
        let a = Circle::new(pt(100.0, 120.0), 60.0);
        let b = Circle::new(pt(400.0, 300.0), 20.0);
        let contact = contact_point(&a, &b, tangent_angle(&a, &b));
        // external centre of similitude: (r_a * B - r_b * A) / (r_a - r_b)
        let expected = (b.center * a.radius - a.center * b.radius) / (a.radius - b.radius);
        assert!(contact.distance(expected) < 1e-9, "{:?} != {:?}", contact, expected);
    }

    #[test]
    fn test_horizontal_centres() {
        let a = Circle::new(pt(100.0, 200.0), 40.0);
        let b = Circle::new(pt(300.0, 200.0), 20.0);
        let contact = contact_point(&a, &b, tangent_angle(&a, &b));
        assert!(contact.distance(pt(500.0, 200.0)) < 1e-9, "{:?}", contact);
    }

    #[test]
    fn test_tangent_endpoints_on_circle_perpendicular() {
        let a = Circle::new(pt(50.0, 80.0), 30.0);
        let b = Circle::new(pt(260.0, 10.0), 10.0);
        let angle = tangent_angle(&a, &b);
        let [p, q] = tangent_endpoints(&a, angle);
        assert!((p.distance(a.center) - 30.0).abs() < 1e-9);
        assert!((q.distance(a.center) - 30.0).abs() < 1e-9);
        let dot = (q - p).x * (b.center - a.center).x + (q - p).y * (b.center - a.center).y;
        assert!(dot.abs() < 1e-9);
    }

    #[test]
    fn test_contacts_are_collinear() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let circles = [100.0, 50.0, 25.0].map(|r| {
                Circle::new(pt(rng.gen_range(0.0..1600.0), rng.gen_range(0.0..900.0)), r)
            });
            let contacts = construct(&circles).map(|t| t.contact);
            assert!(
                relative_collinearity(contacts).abs() < 1e-6,
                "contacts {:?} not collinear for {:?}",
                contacts,
                circles
            );
        }
    }

    #[test]
    fn test_equal_radii_is_non_finite() {
        let a = Circle::new(pt(0.0, 0.0), 10.0);
        let b = Circle::new(pt(50.0, 50.0), 10.0);
        assert!(!contact_point(&a, &b, tangent_angle(&a, &b)).is_finite());

        let config = MongeConfig {
            radii: [30.0, 30.0, 10.0],
            ..MongeConfig::default()
        };
        let ratios = [pt(0.2, 0.3), pt(0.7, 0.6), pt(0.5, 0.2)];
        let demo = MongeDemo::with_ratios(config, BLACK, Bounds::new(800.0, 600.0), ratios);
        assert!(demo.degenerate().is_some());
    }

    #[test]
    fn test_resize_clamps_circles_on_screen() {
        let config = MongeConfig::default();
        let ratios = [pt(-3.0, 0.5), pt(0.99, 2.0), pt(0.5, 0.5)];
        let mut demo = MongeDemo::with_ratios(config.clone(), BLACK, Bounds::new(1600.0, 900.0), ratios);

        for bounds in [Bounds::new(400.0, 300.0), Bounds::new(1920.0, 1080.0)] {
            demo.resize(bounds);
            for (i, circle) in demo.circles().iter().enumerate() {
                let margin = config.radii[i] + config.outline_width / 2.0;
                assert!(bounds.contains(circle.center, margin), "circle {} off screen", i);
            }
        }
    }

    #[test]
    fn test_minimised_window_keeps_layout() {
        let bounds = Bounds::new(800.0, 600.0);
        let ratios = [pt(0.25, 0.5), pt(0.75, 0.5), pt(0.5, 0.2)];
        let mut demo = MongeDemo::with_ratios(MongeConfig::default(), BLACK, bounds, ratios);
        let before = demo.circles().map(|c| c.center);

        demo.resize(Bounds::new(0.0, 0.0));
        assert_eq!(demo.circles().map(|c| c.center), before);
        demo.resize(Bounds::new(150.0, 150.0));
        demo.resize(bounds);

        for (center, expected) in demo.circles().map(|c| c.center).iter().zip(before) {
            assert!(center.distance(expected) < 1e-9, "{:?} moved to {:?}", expected, center);
        }
    }

    #[test]
    fn test_drag_moves_selected_circle() {
        let bounds = Bounds::new(800.0, 600.0);
        let ratios = [pt(0.25, 0.5), pt(0.75, 0.5), pt(0.5, 0.2)];
        let mut demo = MongeDemo::with_ratios(MongeConfig::default(), BLACK, bounds, ratios);
        let mut input = InputState::new();

        // press before any pointer movement selects nothing
        input.apply(&InputEvent::PointerPressed);
        demo.handle_event(&InputEvent::PointerPressed, &input);
        assert!(demo.selection().is_none());
        input.apply(&InputEvent::PointerReleased);

        input.apply(&InputEvent::PointerMoved(pt(210.0, 300.0)));
        demo.update(&input);
        input.apply(&InputEvent::PointerPressed);
        demo.handle_event(&InputEvent::PointerPressed, &input);
        let selection = demo.selection().expect("circle 0 should be grabbed");
        assert_eq!(selection.index, 0);
        assert_eq!(selection.displacement, pt(-10.0, 0.0));

        input.apply(&InputEvent::PointerMoved(pt(310.0, 250.0)));
        for _ in 0..200 {
            demo.update(&input);
        }
        assert!(demo.circles()[0].center.distance(pt(300.0, 250.0)) < 1e-6);

        demo.handle_event(&InputEvent::PointerReleased, &input);
        assert!(demo.selection().is_none());
    }
}
