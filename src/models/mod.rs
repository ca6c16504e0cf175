pub mod geometry;

pub use geometry::{clamp_axis, equilateral_altitude, pt, Bounds, Circle, Point2D, Triangle};
