//! Rendering of a topology onto a pluggable drawing backend.
//!
//! The renderer never touches the store: it reads a topology snapshot, asks
//! the edge distortion engine for jittered arc paths and emits `Canvas` calls
//! in screen space.
//!
//! ## Modules
//!
//! - `canvas` - Renderer: scene to screen mapping, culling, highlighting
//! - `recording` - A `Canvas` that records calls, for tests and inspection

mod canvas;
mod recording;

pub use canvas::{RenderStats, Renderer};
pub use recording::{DrawCall, RecordingCanvas};

use std::fmt;
use std::str::FromStr;

use crate::types::{Point, Properties};

/// Property keys that override the default style of an object.
pub mod style_keys {
    pub const STROKE: &str = "stroke";
    pub const STROKE_WIDTH: &str = "strokeWidth";
    pub const FILL: &str = "fill";
    pub const FILL_STYLE: &str = "fillStyle";
}

/// Hand-drawn fill patterns supported by sketch-style backends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillStyle {
    #[default]
    Hachure,
    Solid,
    ZigZag,
    CrossHatch,
    Dots,
}

impl FillStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hachure => "hachure",
            Self::Solid => "solid",
            Self::ZigZag => "zigzag",
            Self::CrossHatch => "cross-hatch",
            Self::Dots => "dots",
        }
    }
}

impl fmt::Display for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hachure" => Ok(Self::Hachure),
            "solid" => Ok(Self::Solid),
            "zigzag" => Ok(Self::ZigZag),
            "cross-hatch" | "crosshatch" => Ok(Self::CrossHatch),
            "dots" => Ok(Self::Dots),
            other => Err(format!("Unknown fill style: {}", other)),
        }
    }
}

/// Style of a single draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOptions {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: Option<String>,
    pub fill_style: FillStyle,
}

impl DrawOptions {
    pub fn new(stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width,
            fill: None,
            fill_style: FillStyle::default(),
        }
    }

    /// Apply the style overrides found in an object's properties.
    ///
    /// Unparseable values are ignored and keep the current style.
    pub fn with_properties(mut self, properties: &Properties) -> Self {
        if let Some(stroke) = properties.get(style_keys::STROKE) {
            self.stroke = stroke.clone();
        }
        if let Some(width) = properties
            .get(style_keys::STROKE_WIDTH)
            .and_then(|w| w.parse::<f64>().ok())
            .filter(|w| w.is_finite() && *w > 0.0)
        {
            self.stroke_width = width;
        }
        if let Some(fill) = properties.get(style_keys::FILL) {
            self.fill = Some(fill.clone());
        }
        if let Some(style) = properties
            .get(style_keys::FILL_STYLE)
            .and_then(|s| s.parse().ok())
        {
            self.fill_style = style;
        }
        self
    }
}

/// Drawing backend. Coordinates are in screen space.
pub trait Canvas {
    fn circle(&mut self, center: Point, diameter: f64, options: &DrawOptions);
    fn linear_path(&mut self, points: &[Point], options: &DrawOptions);
}
