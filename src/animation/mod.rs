pub mod orbit;
pub mod smoothing;

pub use orbit::{Fade, Orbit};
pub use smoothing::{smooth_step, SmoothedPoint};
