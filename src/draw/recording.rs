// src/draw/recording.rs
//
// A Surface that records draw commands instead of rasterising them.
// Used by tests and by headless frame runs.

use super::{Color, StrokeStyle, Surface, TextStyle};
use crate::models::Point2D;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line {
        start: Point2D,
        end: Point2D,
        stroke: StrokeStyle,
    },
    Polyline {
        points: Vec<Point2D>,
        stroke: StrokeStyle,
    },
    Circle {
        center: Point2D,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<StrokeStyle>,
    },
    Polygon {
        points: Vec<Point2D>,
        fill: Option<Color>,
        stroke: Option<StrokeStyle>,
    },
    Text {
        text: String,
        position: Point2D,
        style: TextStyle,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Everything drawn after the last clear.
    pub fn drawn(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| !matches!(c, DrawCommand::Clear(_)))
            .count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, start: Point2D, end: Point2D, stroke: StrokeStyle) {
        self.commands.push(DrawCommand::Line { start, end, stroke });
    }

    fn polyline(&mut self, points: &[Point2D], stroke: StrokeStyle) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn circle(
        &mut self,
        center: Point2D,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<StrokeStyle>,
    ) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    fn polygon(&mut self, points: &[Point2D], fill: Option<Color>, stroke: Option<StrokeStyle>) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
        });
    }

    fn text(&mut self, text: &str, position: Point2D, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            style: *style,
        });
    }
}
