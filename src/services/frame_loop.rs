// src/services/frame_loop.rs
//
// Drives the active demo: input events in arrival order, then one update
// and one render per frame. The host window (nannou in main.rs, or a test)
// only forwards events and supplies a surface.

use crate::config::AppConfig;
use crate::controllers::{InputEvent, InputState};
use crate::demos::Demo;
use crate::draw::{Color, Surface};
use crate::models::Bounds;

pub struct FrameLoop {
    demo: Box<dyn Demo>,
    input: InputState,
    bounds: Bounds,
    background: Color,
    warn_non_finite: bool,
    frame_count: u64,
    last_report: Option<String>,
}

impl FrameLoop {
    pub fn new(demo: Box<dyn Demo>, bounds: Bounds, config: &AppConfig) -> Self {
        Self {
            demo,
            input: InputState::new(),
            bounds,
            background: config.background,
            warn_non_finite: config.warn_non_finite,
            frame_count: 0,
            last_report: None,
        }
    }

    pub fn demo(&self) -> &dyn Demo {
        self.demo.as_ref()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Swap in another demo. Input state carries over, so a pointer that
    /// is already on screen stays known.
    pub fn replace_demo(&mut self, mut demo: Box<dyn Demo>) {
        demo.resize(self.bounds);
        self.demo = demo;
        self.last_report = None;
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            // key release handlers see which keys were held
            InputEvent::KeyReleased(_) => {
                self.demo.handle_event(&event, &self.input);
                self.input.apply(&event);
            }
            InputEvent::Resized(bounds) => {
                self.bounds = bounds;
                self.input.apply(&event);
                self.demo.resize(bounds);
                self.demo.handle_event(&event, &self.input);
            }
            _ => {
                self.input.apply(&event);
                self.demo.handle_event(&event, &self.input);
            }
        }
    }

    pub fn update(&mut self) {
        self.demo.update(&self.input);
        self.frame_count += 1;

        if !self.warn_non_finite {
            return;
        }
        let report = self.demo.degenerate();
        if report != self.last_report {
            match &report {
                Some(message) => eprintln!(
                    "[frame {}] {}: {}",
                    self.frame_count,
                    self.demo.kind().name(),
                    message
                ),
                None => println!(
                    "[frame {}] {}: geometry finite again",
                    self.frame_count,
                    self.demo.kind().name()
                ),
            }
            self.last_report = report;
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.background);
        self.demo.render(surface);
    }

    pub fn step(&mut self, surface: &mut dyn Surface) {
        self.update();
        self.render(surface);
    }
}
