// src/demos/trigonometry.rs
//
// Unit-circle explorer: the angle follows the pointer while it is inside
// the circle and orbits otherwise, with every trigonometric function drawn
// as a segment.

use std::f64::consts::TAU;

use super::{Demo, DemoKind};
use crate::animation::{Orbit, SmoothedPoint};
use crate::config::TrigonometryConfig;
use crate::controllers::{InputEvent, InputState, PointerTracker};
use crate::draw::{Color, StrokeStyle, Surface, TextAlign, TextStyle, WHITE};
use crate::models::{pt, Bounds, Circle, Point2D};

const DOT_RADIUS: f64 = 2.5;

/// Function values at an angle. The reciprocal functions are scaled by the
/// circle radius so they can be drawn directly as segment lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigValues {
    pub cosine: f64,
    pub sine: f64,
    pub tangent: f64,
    pub cotangent: f64,
    pub secant: f64,
    pub cosecant: f64,
}

impl TrigValues {
    pub fn is_finite(&self) -> bool {
        [
            self.cosine,
            self.sine,
            self.tangent,
            self.cotangent,
            self.secant,
            self.cosecant,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Infinities are expected on the axes and are not treated as errors.
pub fn evaluate(angle: f64, radius: f64) -> TrigValues {
    let cosine = angle.cos();
    let sine = angle.sin();
    let tangent = angle.tan();
    TrigValues {
        cosine,
        sine,
        tangent,
        cotangent: radius / tangent,
        secant: radius / cosine,
        cosecant: radius / sine,
    }
}

/// Counter-clockwise angle in `(0, 2pi]` as read on screen, where y grows
/// downward and `angle` comes straight from `atan2`.
pub fn display_angle(angle: f64) -> f64 {
    if angle < 0.0 {
        angle.abs()
    } else {
        TAU - angle
    }
}

/// End of the angle marker arc, swept counter-clockwise on screen from 0.
pub fn arc_end(angle: f64) -> f64 {
    if angle <= 0.0 {
        angle
    } else {
        angle - TAU
    }
}

pub struct TrigonometryDemo {
    config: TrigonometryConfig,
    ink: Color,
    circle: Circle,
    pointer: PointerTracker,
    in_circle: bool,
    orbit: Orbit,
    inner: SmoothedPoint,
    angle: f64,
    values: TrigValues,
}

impl TrigonometryDemo {
    pub fn new(config: TrigonometryConfig, ink: Color, bounds: Bounds) -> Self {
        let center = bounds.center();
        Self {
            pointer: PointerTracker::new(config.mouse_ease),
            orbit: Orbit::new(0.0, config.orbit_speed),
            inner: SmoothedPoint::new(center, config.angle_ease),
            circle: Circle::new(center, config.radius),
            values: evaluate(0.0, config.radius),
            config,
            ink,
            in_circle: false,
            angle: 0.0,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn values(&self) -> &TrigValues {
        &self.values
    }

    pub fn point(&self) -> Point2D {
        self.circle.point_at(self.angle)
    }

    fn recompute(&mut self) {
        let offset = self.inner.smooth - self.circle.center;
        self.angle = offset.y.atan2(offset.x);
        self.values = evaluate(self.angle, self.circle.radius);
    }

    fn render_labels(&self, surface: &mut dyn Surface) {
        let c = &self.config;
        let center = self.circle.center;
        let point = self.point();
        let v = &self.values;
        let r = self.circle.radius;
        let outline = StrokeStyle::new(WHITE, c.text_outline);
        let style = |color: Color, align: TextAlign| {
            TextStyle::new(color, c.font_size).align(align).outline(outline)
        };

        let shown = display_angle(self.angle);
        let half = (shown - std::f64::consts::PI) / 2.0;
        surface.text(
            &format!("{}°", shown.to_degrees().round()),
            center - pt(half.sin(), half.cos()) * c.space_angle,
            &style(self.ink, TextAlign::Center),
        );

        surface.text(
            &format!("{:.3}", v.secant / r),
            pt(center.x + v.secant / 2.0, center.y - c.space_sine),
            &style(c.secant_color, TextAlign::Center),
        );
        surface.text(
            &format!("{:.3}", -v.cosecant / r),
            pt(center.x + c.space_cosine, center.y + v.cosecant / 2.0),
            &style(c.cosecant_color, TextAlign::Left),
        );
        surface.text(
            &format!("{:.3}", v.cosine),
            pt((center.x + point.x) / 2.0, center.y + c.space_sine),
            &style(c.cosine_color, TextAlign::Center),
        );
        surface.text(
            &format!("{:.3}", -v.sine),
            pt(center.x - c.space_cosine, (center.y + point.y) / 2.0),
            &style(c.sine_color, TextAlign::Right),
        );

        let d = point - center;
        surface.text(
            &format!("{:.3}", v.tangent),
            center + pt((d.x + v.secant) / 2.0, d.y / 2.0) * c.space_tangent,
            &style(c.tangent_color, TextAlign::Center),
        );
        surface.text(
            &format!("{:.3}", v.cotangent / r),
            center + pt(d.x / 2.0 * 1.1, (d.y + v.cosecant) / 2.0 * c.space_tangent),
            &style(c.cotangent_color, TextAlign::Center),
        );
    }
}

impl Demo for TrigonometryDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::TrigonometricFunctions
    }

    fn resize(&mut self, bounds: Bounds) {
        self.circle.center = bounds.center();
        self.in_circle = false;
        let on_circle = self.circle.point_at(self.angle);
        self.inner.snap(on_circle);
        self.recompute();
    }

    fn handle_event(&mut self, event: &InputEvent, _input: &InputState) {
        if let InputEvent::PointerMoved(position) = event {
            self.in_circle = self.circle.contains(*position);
        }
    }

    fn update(&mut self, input: &InputState) {
        let pointer = self.pointer.update(input);

        match pointer {
            Some(smooth) if self.in_circle => {
                self.inner.set_target(smooth);
                self.orbit.sync(self.angle);
            }
            _ => {
                let target = self.orbit.advance(&self.circle);
                self.inner.set_target(target);
            }
        }
        self.inner.update();
        self.recompute();
    }

    fn render(&self, surface: &mut dyn Surface) {
        let c = &self.config;
        let center = self.circle.center;
        let point = self.point();
        let v = &self.values;
        let ink = StrokeStyle::new(self.ink, c.line_width);
        let colored = |color: Color| StrokeStyle::new(color, c.line_width);

        surface.circle(center, self.circle.radius, None, Some(ink));
        surface.line(center, point, ink);
        surface.arc(center, c.angle_arc_radius, 0.0, arc_end(self.angle), ink);

        // projections of the point onto the axes
        surface.line(pt(point.x, center.y), point, ink);
        surface.line(pt(center.x, point.y), point, ink);

        let secant_end = pt(center.x + v.secant, center.y);
        let cosecant_end = pt(center.x, center.y + v.cosecant);
        surface.line(center, secant_end, colored(c.secant_color));
        surface.line(center, cosecant_end, colored(c.cosecant_color));
        surface.line(center, pt(point.x, center.y), colored(c.cosine_color));
        surface.line(center, pt(center.x, point.y), colored(c.sine_color));
        surface.line(point, secant_end, colored(c.tangent_color));
        surface.line(point, cosecant_end, colored(c.cotangent_color));

        surface.circle(point, DOT_RADIUS, Some(self.ink), None);

        self.render_labels(surface);
    }

    fn degenerate(&self) -> Option<String> {
        (!self.values.is_finite()).then(|| {
            format!(
                "trigonometric values at {:.1} degrees are not finite",
                display_angle(self.angle).to_degrees()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RecordingSurface, BLACK};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_values_satisfy_identities() {
        let r = 250.0;
        for step in 1..360 {
            let angle = (step as f64).to_radians() - std::f64::consts::PI;
            let v = evaluate(angle, r);
            if !v.is_finite() {
                continue;
            }
            assert!((v.sine.powi(2) + v.cosine.powi(2) - 1.0).abs() < 1e-12);
            assert!((v.tangent - v.sine / v.cosine).abs() <= 1e-9 * v.tangent.abs().max(1.0));
            assert!((v.secant * v.cosine - r).abs() < 1e-9);
            assert!((v.cosecant * v.sine - r).abs() < 1e-9);
            assert!((v.cotangent * v.tangent - r).abs() < 1e-6);
        }
    }

    #[test]
    fn test_forty_five_degrees() {
        let v = evaluate(-FRAC_PI_4, 1.0);
        assert!((v.tangent + 1.0).abs() < 1e-12);
        assert!((v.cotangent + 1.0).abs() < 1e-12);
        assert!((v.secant - 2f64.sqrt()).abs() < 1e-12);
        assert!((v.cosecant + 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_axis_angle_is_singular() {
        let v = evaluate(0.0, 250.0);
        assert!(v.cosecant.is_infinite());
        assert!(v.cotangent.is_infinite());
        assert_eq!(v.secant, 250.0);
        assert!(!v.is_finite());
    }

    #[test]
    fn test_display_angle() {
        let tests = vec![
            (-FRAC_PI_2, 90.0),
            (FRAC_PI_2, 270.0),
            (0.0, 360.0),
            (-std::f64::consts::PI, 180.0),
        ];
        for (angle, degrees) in tests {
            assert!(
                (display_angle(angle).to_degrees() - degrees).abs() < 1e-9,
                "Failed for {}",
                angle
            );
        }
        assert_eq!(arc_end(-1.0), -1.0);
        assert!((arc_end(FRAC_PI_2) + 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_pointer_inside_sets_angle_and_orbit_resumes() {
        let config = TrigonometryConfig::default();
        let speed = config.orbit_speed;
        let mut demo = TrigonometryDemo::new(config, BLACK, Bounds::new(800.0, 800.0));
        let mut input = InputState::new();

        // straight above the centre
        let inside = InputEvent::PointerMoved(pt(400.0, 300.0));
        input.apply(&inside);
        demo.handle_event(&inside, &input);
        for _ in 0..400 {
            demo.update(&input);
        }
        assert!((demo.angle() + FRAC_PI_2).abs() < 1e-9);
        assert!((display_angle(demo.angle()).to_degrees() - 90.0).abs() < 1e-6);

        let outside = InputEvent::PointerMoved(pt(5.0, 5.0));
        input.apply(&outside);
        demo.handle_event(&outside, &input);
        demo.update(&input);
        assert!((demo.orbit.angle - (-FRAC_PI_2 + speed)).abs() < 1e-9);
    }

    #[test]
    fn test_resize_keeps_angle_on_new_circle() {
        let mut demo =
            TrigonometryDemo::new(TrigonometryConfig::default(), BLACK, Bounds::new(800.0, 800.0));
        let input = InputState::new();
        for _ in 0..100 {
            demo.update(&input);
        }
        let angle = demo.angle();

        demo.resize(Bounds::new(1200.0, 600.0));
        assert!((demo.angle() - angle).abs() < 1e-9);
        assert!((demo.point().distance(pt(600.0, 300.0)) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_labels() {
        let mut demo =
            TrigonometryDemo::new(TrigonometryConfig::default(), BLACK, Bounds::new(800.0, 800.0));
        for _ in 0..10 {
            demo.update(&InputState::new());
        }
        let mut surface = RecordingSurface::new();
        demo.render(&mut surface);
        let texts = surface.texts();
        assert_eq!(texts.len(), 7);
        assert!(texts[0].ends_with('°'));
    }
}
