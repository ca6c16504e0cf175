// src/controllers/input.rs
//
// Raw input as reported by the host window, and the smoothed pointer
// that demos derive from it.
//
// InputState only records the latest pointer position and the
// button/key flags. Smoothing is owned by each demo through a
// PointerTracker because every demo has its own ease constant.

use std::collections::HashSet;

use crate::animation::SmoothedPoint;
use crate::models::{Bounds, Point2D};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Space,
    R,
    Tab,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(Point2D),
    PointerPressed,
    PointerReleased,
    KeyPressed(KeyCode),
    KeyReleased(KeyCode),
    /// Vertical wheel delta; negative scrolls up.
    Wheel(f64),
    Resized(Bounds),
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer: Option<Point2D>,
    pointer_down: bool,
    keys: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest reported pointer position, `None` until the first move event.
    pub fn pointer(&self) -> Option<Point2D> {
        self.pointer
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMoved(position) => self.pointer = Some(position),
            InputEvent::PointerPressed => self.pointer_down = true,
            InputEvent::PointerReleased => self.pointer_down = false,
            InputEvent::KeyPressed(key) => {
                self.keys.insert(key);
            }
            InputEvent::KeyReleased(key) => {
                self.keys.remove(&key);
            }
            // a resize cancels any drag in progress
            InputEvent::Resized(_) => self.pointer_down = false,
            InputEvent::Wheel(_) => (),
        }
    }
}

/// Smoothed copy of the pointer. Stays unset until the pointer has been
/// reported once, then is seeded at that position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    ease: f64,
    state: Option<SmoothedPoint>,
}

impl PointerTracker {
    pub fn new(ease: f64) -> Self {
        Self { ease, state: None }
    }

    /// Start at a known position instead of waiting for the first event.
    pub fn seeded(position: Point2D, ease: f64) -> Self {
        Self {
            ease,
            state: Some(SmoothedPoint::new(position, ease)),
        }
    }

    pub fn smooth(&self) -> Option<Point2D> {
        self.state.map(|s| s.smooth)
    }

    pub fn velocity(&self) -> Point2D {
        self.state.map(|s| s.velocity).unwrap_or(Point2D::ZERO)
    }

    /// Advance one frame toward the latest reported pointer position.
    pub fn update(&mut self, input: &InputState) -> Option<Point2D> {
        let target = input.pointer();
        match (&mut self.state, target) {
            (Some(state), Some(target)) => {
                state.set_target(target);
                state.update();
            }
            (Some(state), None) => {
                state.update();
            }
            (None, Some(target)) => {
                self.state = Some(SmoothedPoint::new(target, self.ease));
            }
            (None, None) => (),
        }
        self.smooth()
    }
}

/// A grabbed entity plus the offset between it and the pointer at grab time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub displacement: Point2D,
}

impl Selection {
    pub fn new(index: usize, entity: Point2D, pointer: Point2D) -> Self {
        Self {
            index,
            displacement: entity - pointer,
        }
    }

    pub fn anchor(&self, pointer: Point2D) -> Point2D {
        pointer + self.displacement
    }
}
