// src/animation/smoothing.rs
//
// Exponential easing shared by the pointer and every draggable entity.
// Each frame the displayed value moves `1 / ease` of the way to its target.

use crate::models::Point2D;

/// One smoothing step. Returns `(new_smooth, velocity)`.
///
/// `ease` must be positive: `1.0` tracks the target instantly, larger values
/// lag further behind. No clamping happens here; callers clamp the target.
pub fn smooth_step(real: Point2D, previous: Point2D, ease: f64) -> (Point2D, Point2D) {
    let velocity = (real - previous) / ease;
    (previous + velocity, velocity)
}

/// A `(real, smooth)` pair plus the velocity of the last step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedPoint {
    pub real: Point2D,
    pub smooth: Point2D,
    pub velocity: Point2D,
    pub ease: f64,
}

impl SmoothedPoint {
    pub fn new(seed: Point2D, ease: f64) -> Self {
        Self {
            real: seed,
            smooth: seed,
            velocity: Point2D::ZERO,
            ease,
        }
    }

    pub fn set_target(&mut self, target: Point2D) {
        self.real = target;
    }

    /// Jump both values to `point` and zero the velocity.
    pub fn snap(&mut self, point: Point2D) {
        self.real = point;
        self.smooth = point;
        self.velocity = Point2D::ZERO;
    }

    pub fn update(&mut self) -> Point2D {
        let (smooth, velocity) = smooth_step(self.real, self.smooth, self.ease);
        self.smooth = smooth;
        self.velocity = velocity;
        velocity
    }

    pub fn residual(&self) -> f64 {
        self.real.distance(self.smooth)
    }
}
