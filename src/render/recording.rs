use crate::types::Point;

use super::{Canvas, DrawOptions};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Circle {
        center: Point,
        diameter: f64,
        options: DrawOptions,
    },
    Path {
        points: Vec<Point>,
        options: DrawOptions,
    },
}

impl DrawCall {
    pub fn options(&self) -> &DrawOptions {
        match self {
            Self::Circle { options, .. } | Self::Path { options, .. } => options,
        }
    }
}

/// Canvas that keeps every call in order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Circle { .. }))
    }

    pub fn paths(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Path { .. }))
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn circle(&mut self, center: Point, diameter: f64, options: &DrawOptions) {
        self.calls.push(DrawCall::Circle {
            center,
            diameter,
            options: options.clone(),
        });
    }

    fn linear_path(&mut self, points: &[Point], options: &DrawOptions) {
        self.calls.push(DrawCall::Path {
            points: points.to_vec(),
            options: options.clone(),
        });
    }
}
