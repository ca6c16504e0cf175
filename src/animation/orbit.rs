// src/animation/orbit.rs
//
// Fallback trajectories used while the pointer is outside a demo's
// reference shape, plus the opacity fade for the orbit path.

use crate::models::{Circle, Point2D};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub angle: f64,
    pub speed: f64,
}

impl Orbit {
    pub fn new(angle: f64, speed: f64) -> Self {
        Self { angle, speed }
    }

    pub fn position(&self, path: &Circle) -> Point2D {
        path.point_at(self.angle)
    }

    /// Position at the current angle, then move the angle forward by one
    /// frame's worth of `speed`.
    pub fn advance(&mut self, path: &Circle) -> Point2D {
        let position = self.position(path);
        self.angle += self.speed;
        position
    }

    /// Resume from an externally driven angle.
    pub fn sync(&mut self, angle: f64) {
        self.angle = angle;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub value: f64,
    pub limit: f64,
    pub fade_in: f64,
    pub fade_out: f64,
}

impl Fade {
    pub fn new(limit: f64, fade_in: f64, fade_out: f64) -> Self {
        Self {
            value: 0.0,
            limit,
            fade_in,
            fade_out,
        }
    }

    pub fn step(&mut self, visible: bool) -> f64 {
        self.value = if visible {
            (self.value + self.fade_in).min(self.limit)
        } else {
            (self.value - self.fade_out).max(0.0)
        };
        self.value
    }
}
