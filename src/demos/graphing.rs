// src/demos/graphing.rs
//
// Graphing calculator: pan and zoom a cartesian grid and plot a set of
// one-argument functions. The sample step is recomputed each frame from
// the zoom, so zooming in gives smoother curves.

use serde::Deserialize;

use super::{Demo, DemoKind};
use crate::animation::SmoothedPoint;
use crate::config::GraphingConfig;
use crate::controllers::{InputEvent, InputState, PointerTracker};
use crate::draw::{Color, StrokeStyle, Surface, TextStyle, BLACK};
use crate::models::{clamp_axis, pt, Bounds, Point2D};

// the largest integer that survives a round trip through f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// guards the sampling loop against a degenerate step
const MAX_SAMPLES: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphFunction {
    Identity,
    Square,
    Cube,
    Sine,
    Cosine,
    Tangent,
    Exp2,
    Sqrt,
    Abs,
}

impl GraphFunction {
    pub fn eval(self, x: f64) -> f64 {
        match self {
            GraphFunction::Identity => x,
            GraphFunction::Square => x.powi(2),
            GraphFunction::Cube => x.powi(3),
            GraphFunction::Sine => x.sin(),
            GraphFunction::Cosine => x.cos(),
            GraphFunction::Tangent => x.tan(),
            GraphFunction::Exp2 => x.exp2(),
            GraphFunction::Sqrt => x.sqrt(),
            GraphFunction::Abs => x.abs(),
        }
    }
}

/// A plotted curve: any one-argument real function.
pub type Plot = Box<dyn Fn(f64) -> f64>;

impl GraphFunction {
    pub fn plot(self) -> Plot {
        Box::new(move |x| self.eval(x))
    }
}

/// Pan/zoom state. `origin` is the graph origin's offset from the viewport
/// centre in pixels (y up); `tick_space` is the pixel distance between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphView {
    pub origin: Point2D,
    pub tick_space: Point2D,
    pub tick_value: Point2D,
    pub border_ticks: f64,
}

impl GraphView {
    /// Screen position of the graph origin.
    pub fn center(&self, bounds: &Bounds) -> Point2D {
        pt(
            bounds.width / 2.0 + self.origin.x,
            bounds.height / 2.0 - self.origin.y,
        )
    }

    /// Half extents of the plotted area in pixels.
    pub fn border(&self) -> Point2D {
        self.tick_space * self.border_ticks
    }

    pub fn screen_to_domain(&self, bounds: &Bounds, screen: Point2D) -> Point2D {
        let center = self.center(bounds);
        pt(
            (screen.x - center.x) / self.tick_space.x * self.tick_value.x,
            (center.y - screen.y) / self.tick_space.y * self.tick_value.y,
        )
    }

    pub fn domain_to_screen(&self, bounds: &Bounds, domain: Point2D) -> Point2D {
        let center = self.center(bounds);
        pt(
            center.x + self.tick_space.x * domain.x / self.tick_value.x,
            center.y - self.tick_space.y * domain.y / self.tick_value.y,
        )
    }

    /// Clamp a screen point into the plotted area.
    pub fn clamp_to_border(&self, bounds: &Bounds, screen: Point2D) -> Point2D {
        let center = self.center(bounds);
        let border = self.border();
        pt(
            clamp_axis(screen.x, center.x - border.x, center.x + border.x),
            clamp_axis(screen.y, center.y - border.y, center.y + border.y),
        )
    }

    /// Visible tick counts `(left, right, top, bottom)`, capped at the border.
    pub fn tick_counts(&self, bounds: &Bounds) -> (usize, usize, usize, usize) {
        let center = self.center(bounds);
        let count = |extent: f64, space: f64| -> usize {
            let ticks = ((extent / space).ceil() + 1.0).min(self.border_ticks);
            if ticks.is_finite() && ticks > 0.0 {
                ticks as usize
            } else {
                0
            }
        };
        (
            count(center.x, self.tick_space.x),
            count(bounds.width - center.x, self.tick_space.x),
            count(center.y, self.tick_space.y),
            count(bounds.height - center.y, self.tick_space.y),
        )
    }
}

/// Domain-space sample step: finer as the ticks spread apart.
pub fn sample_step(bounds: &Bounds, view: &GraphView, smoothness: f64) -> f64 {
    bounds.width / 2.0 / view.border().x * smoothness
}

/// Line segments for `function` across the visible ticks. Segments with
/// both ends above or below the viewport are dropped.
pub fn sample_segments(
    function: impl Fn(f64) -> f64,
    view: &GraphView,
    bounds: &Bounds,
    step: f64,
) -> Vec<(Point2D, Point2D)> {
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    let (left, right, _, _) = view.tick_counts(bounds);
    let start = -(left as f64) * view.tick_value.x;
    let end = right as f64 * view.tick_value.x;
    // coarsen rather than cut the curve short
    let step = step.max((end - start) / MAX_SAMPLES as f64);
    let samples = (((end - start) / step).floor() as usize).min(MAX_SAMPLES);

    let at = |x: f64| view.domain_to_screen(bounds, pt(x, function(x)));
    let visible = |y: f64| y > 0.0 && y < bounds.height;

    let mut segments = Vec::with_capacity(samples + 1);
    let mut previous = at(start);
    for i in 0..=samples {
        let x = start + step * i as f64;
        let next = at(x + step);
        if visible(previous.y) || visible(next.y) {
            segments.push((previous, next));
        }
        previous = next;
    }
    segments
}

/// `" 1.000"` / `"-1.000"`: a leading space keeps columns aligned.
pub fn format_readout(value: f64, decimals: usize) -> String {
    // -0.0 reads as zero
    let value = if value == 0.0 { 0.0 } else { value };
    let text = format!("{:.*}", decimals, value);
    if text.starts_with('-') {
        text
    } else {
        format!(" {}", text)
    }
}

pub fn format_value(value: f64, decimals: usize) -> String {
    if value.is_finite() && value.round().abs() <= MAX_SAFE_INTEGER {
        format_readout(value, decimals)
    } else {
        "NaN".to_string()
    }
}

#[derive(Debug, Clone, Default)]
struct GraphGeometry {
    center: Point2D,
    border: Point2D,
    x_ticks: Vec<f64>,
    y_ticks: Vec<f64>,
    curves: Vec<Vec<(Point2D, Point2D)>>,
    dots: Vec<Point2D>,
    values: Vec<f64>,
    pointer_domain: Point2D,
}

pub struct GraphingDemo {
    config: GraphingConfig,
    ink: Color,
    bounds: Bounds,
    functions: Vec<Plot>,
    pointer: PointerTracker,
    origin: SmoothedPoint,
    tick_space: SmoothedPoint,
    velocity: Point2D,
    step: f64,
    geometry: GraphGeometry,
}

impl GraphingDemo {
    pub fn new(config: GraphingConfig, ink: Color, bounds: Bounds) -> Self {
        let functions = config.functions.iter().map(|f| f.plot()).collect();
        Self::with_functions(config, ink, bounds, functions)
    }

    /// Plot caller-supplied functions instead of the configured catalogue.
    pub fn with_functions(
        config: GraphingConfig,
        ink: Color,
        bounds: Bounds,
        functions: Vec<Plot>,
    ) -> Self {
        let tick_space = SmoothedPoint {
            real: pt(config.tick_space, config.tick_space),
            smooth: Point2D::ZERO,
            velocity: Point2D::ZERO,
            ease: config.zoom_ease,
        };
        let mut demo = Self {
            // the pointer starts on the origin until it is first moved
            pointer: PointerTracker::seeded(bounds.center(), config.mouse_ease),
            origin: SmoothedPoint::new(Point2D::ZERO, config.zoom_ease),
            tick_space,
            velocity: Point2D::ZERO,
            step: 0.0,
            geometry: GraphGeometry::default(),
            functions,
            config,
            ink,
            bounds,
        };
        demo.resize(bounds);
        demo
    }

    /// The view as currently displayed (smoothed values).
    pub fn view(&self) -> GraphView {
        GraphView {
            origin: self.origin.smooth,
            tick_space: self.tick_space.smooth,
            tick_value: pt(self.config.tick_value, self.config.tick_value),
            border_ticks: self.config.border_ticks,
        }
    }

    pub fn target_tick_space(&self) -> Point2D {
        self.tick_space.real
    }

    pub fn target_origin(&self) -> Point2D {
        self.origin.real
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Function values at the tracked pointer, one per plot.
    pub fn values(&self) -> &[f64] {
        &self.geometry.values
    }

    /// Sampled segments per plot from the last update.
    pub fn curves(&self) -> &[Vec<(Point2D, Point2D)>] {
        &self.geometry.curves
    }

    fn zoom(&mut self, delta_y: f64) {
        let zoom_in = 1.0 + self.config.zoom_step;
        let zoom_out = 1.0 - self.config.zoom_step;
        let limit = self.config.border_ticks * self.config.zoom_limit;

        if delta_y < 0.0 {
            self.origin.real = self.origin.real * zoom_in;
            self.tick_space.real = self.tick_space.real * zoom_in;
        } else if self.tick_space.real.x > self.bounds.width / 2.0 / limit
            && self.tick_space.real.y > self.bounds.height / 2.0 / limit
        {
            self.origin.real = self.origin.real * zoom_out;
            self.tick_space.real = self.tick_space.real * zoom_out;
        }
    }

    fn compute_geometry(&self, pointer: Point2D) -> GraphGeometry {
        let view = self.view();
        let bounds = &self.bounds;
        let center = view.center(bounds);
        let (left, right, top, bottom) = view.tick_counts(bounds);

        let space = view.tick_space;
        let x_ticks = (1..=left)
            .map(|i| center.x - space.x * i as f64)
            .chain((1..=right).map(|i| center.x + space.x * i as f64))
            .collect();
        let y_ticks = (1..=top)
            .map(|i| center.y - space.y * i as f64)
            .chain((1..=bottom).map(|i| center.y + space.y * i as f64))
            .collect();

        let curves = self
            .functions
            .iter()
            .map(|f| sample_segments(f, &view, bounds, self.step))
            .collect();

        let tracked = view.clamp_to_border(bounds, pointer);
        let pointer_domain = view.screen_to_domain(bounds, tracked);
        let values: Vec<f64> = self.functions.iter().map(|f| f(pointer_domain.x)).collect();
        let dots = values
            .iter()
            .map(|y| pt(tracked.x, view.domain_to_screen(bounds, pt(0.0, *y)).y))
            .collect();

        GraphGeometry {
            center,
            border: view.border(),
            x_ticks,
            y_ticks,
            curves,
            dots,
            values,
            pointer_domain,
        }
    }

    fn line_color(&self, index: usize) -> Color {
        self.config
            .line_colors
            .get(index)
            .copied()
            .unwrap_or(self.config.default_line_color)
    }
}

impl Demo for GraphingDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::GraphingCalculator
    }

    fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn handle_event(&mut self, event: &InputEvent, _input: &InputState) {
        if let InputEvent::Wheel(delta_y) = event {
            self.zoom(*delta_y);
        }
    }

    fn update(&mut self, input: &InputState) {
        let Some(pointer) = self.pointer.update(input) else {
            return;
        };

        // drag sets the pan velocity, otherwise it decays
        if input.is_pointer_down() {
            self.velocity = self.pointer.velocity();
        } else {
            self.velocity = self.velocity * self.config.friction;
        }
        self.origin.real.x += self.velocity.x;
        self.origin.real.y -= self.velocity.y;

        self.tick_space.update();
        self.origin.update();

        let border = self.view().border();
        self.origin.real = pt(
            clamp_axis(self.origin.real.x, -border.x, border.x),
            clamp_axis(self.origin.real.y, -border.y, border.y),
        );

        self.step = sample_step(&self.bounds, &self.view(), self.config.line_smoothness);
        self.geometry = self.compute_geometry(pointer);
    }

    fn render(&self, surface: &mut dyn Surface) {
        let g = &self.geometry;
        let config = &self.config;
        let ink = StrokeStyle::new(self.ink, config.border_width);
        let grid = StrokeStyle::new(config.grid_color, config.grid_width);
        let tick = StrokeStyle::new(self.ink, config.tick_width);

        // axes
        surface.line(pt(0.0, g.center.y), pt(self.bounds.width, g.center.y), ink);
        surface.line(pt(g.center.x, 0.0), pt(g.center.x, self.bounds.height), ink);

        for x in &g.x_ticks {
            surface.line(pt(*x, g.center.y - g.border.y), pt(*x, g.center.y + g.border.y), grid);
            surface.line(
                pt(*x, g.center.y - config.tick_length),
                pt(*x, g.center.y + config.tick_length),
                tick,
            );
        }
        for y in &g.y_ticks {
            surface.line(pt(g.center.x - g.border.x, *y), pt(g.center.x + g.border.x, *y), grid);
            surface.line(
                pt(g.center.x - config.tick_length, *y),
                pt(g.center.x + config.tick_length, *y),
                tick,
            );
        }

        for (i, curve) in g.curves.iter().enumerate() {
            let stroke = StrokeStyle::new(self.line_color(i), config.line_width);
            for (start, end) in curve {
                surface.line(*start, *end, stroke);
            }
        }

        if config.border_visible {
            let (c, b) = (g.center, g.border);
            let corners = [
                pt(c.x - b.x, c.y - b.y),
                pt(c.x + b.x, c.y - b.y),
                pt(c.x + b.x, c.y + b.y),
                pt(c.x - b.x, c.y + b.y),
            ];
            surface.polygon(&corners, None, Some(ink));
        }

        let [text_x, text_y] = config.text_origin;
        for (i, (dot, value)) in g.dots.iter().zip(&g.values).enumerate() {
            let outline = StrokeStyle::new(BLACK, config.dot_outline);
            surface.circle(*dot, config.dot_radius, Some(self.line_color(i)), Some(outline));

            let style = TextStyle::new(self.line_color(i), config.font_size);
            surface.text(
                &format_value(*value, config.decimal_length),
                pt(
                    text_x / 2.0,
                    text_y + config.text_space * (i + 3) as f64 + config.text_separator,
                ),
                &style,
            );
        }

        let style = TextStyle::new(self.ink, config.font_size);
        let decimals = config.decimal_length;
        surface.text(
            &format!("x: {}", format_readout(g.pointer_domain.x, decimals)),
            pt(text_x, text_y + config.text_space),
            &style,
        );
        surface.text(
            &format!("y: {}", format_readout(g.pointer_domain.y, decimals)),
            pt(text_x, text_y + config.text_space * 2.0),
            &style,
        );
    }

    fn degenerate(&self) -> Option<String> {
        if self.step.is_finite() && self.step > 0.0 {
            None
        } else {
            Some(format!("graph sample step is {}", self.step))
        }
    }
}
