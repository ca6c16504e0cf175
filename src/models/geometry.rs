// src/models/geometry.rs
// Value types shared by every demo: points, viewport bounds, circles and
// triangles. All coordinates are screen space, origin top-left, y down.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

pub const fn pt(x: f64, y: f64) -> Point2D {
    Point2D { x, y }
}

impl Point2D {
    pub const ZERO: Point2D = pt(0.0, 0.0);

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point2D) -> f64 {
        (self - other).length()
    }

    pub fn midpoint(self, other: Point2D) -> Point2D {
        pt((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Polar offset: `radius` along `angle` (radians, measured clockwise on
    /// screen because y grows downward).
    pub fn polar(angle: f64, radius: f64) -> Point2D {
        pt(angle.cos() * radius, angle.sin() * radius)
    }

    pub fn cross(self, other: Point2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, rhs: Point2D) -> Point2D {
        pt(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Point2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, rhs: Point2D) -> Point2D {
        pt(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point2D {
    fn sub_assign(&mut self, rhs: Point2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;
    fn mul(self, rhs: f64) -> Point2D {
        pt(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;
    fn div(self, rhs: f64) -> Point2D {
        pt(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point2D {
    type Output = Point2D;
    fn neg(self) -> Point2D {
        pt(-self.x, -self.y)
    }
}

// The drawable viewport. Recomputed on every resize event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point2D {
        pt(self.width / 2.0, self.height / 2.0)
    }

    /// Point at the given fraction of the viewport.
    pub fn at_ratio(&self, rx: f64, ry: f64) -> Point2D {
        pt(self.width * rx, self.height * ry)
    }

    /// Clamp `point` into `[margin, dimension - margin]` on both axes.
    /// When the viewport is narrower than `2 * margin` the point is pinned to
    /// the lower limit.
    pub fn clamp(&self, point: Point2D, margin: f64) -> Point2D {
        pt(
            clamp_axis(point.x, margin, self.width - margin),
            clamp_axis(point.y, margin, self.height - margin),
        )
    }

    /// Whether anything at least `2 * margin` across fits on screen.
    /// A minimised window reports a 0x0 viewport.
    pub fn fits(&self, margin: f64) -> bool {
        self.width > 2.0 * margin && self.height > 2.0 * margin
    }

    pub fn contains(&self, point: Point2D, margin: f64) -> bool {
        point.x >= margin
            && point.x <= self.width - margin
            && point.y >= margin
            && point.y <= self.height - margin
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

// min-then-max, so an inverted range resolves to `min`
pub fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2D, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Point2D) -> bool {
        self.center.distance(point) <= self.radius
    }

    pub fn point_at(&self, angle: f64) -> Point2D {
        self.center + Point2D::polar(angle, self.radius)
    }

    /// Project `point` radially onto the circumference.
    pub fn project(&self, point: Point2D) -> Point2D {
        let offset = point - self.center;
        self.center + offset * (self.radius / offset.length())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point2D; 3],
}

impl Triangle {
    pub fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Point-up equilateral triangle with side `side` whose bounding box is
    /// centred on `center`. Vertex order: top, left, right.
    pub fn equilateral(center: Point2D, side: f64) -> Self {
        let height = equilateral_altitude(side);
        Self::new(
            center + pt(0.0, -height / 2.0),
            center + pt(-side / 2.0, height / 2.0),
            center + pt(side / 2.0, height / 2.0),
        )
    }

    pub fn centroid(&self) -> Point2D {
        let [a, b, c] = self.vertices;
        (a + b + c) / 3.0
    }

    /// Side lengths in edge order `ab, bc, ca`.
    pub fn side_lengths(&self) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        [a.distance(b), b.distance(c), c.distance(a)]
    }

    pub fn edges(&self) -> [(Point2D, Point2D); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }

    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a) / 2.0
    }

    pub fn contains(&self, point: Point2D) -> bool {
        let [a, b, c] = self.vertices;
        let d1 = (b - a).cross(point - a);
        let d2 = (c - b).cross(point - b);
        let d3 = (a - c).cross(point - c);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|v| v.is_finite())
    }
}

pub fn equilateral_altitude(side: f64) -> f64 {
    (side.powi(2) - (side / 2.0).powi(2)).sqrt()
}
