//! Editor settings - tunable radii, jitter, zoom bounds and styling.
//!
//! Settings live in a JSON file (camelCase keys). Missing keys fall back to the
//! defaults in `constants`, so a partial file is always valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::constants::*;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting: {0}")]
    InvalidValue(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSettings {
    /// Clicks closer than this to an existing point reuse it
    pub snap_radius: f64,
    /// Hover distance for hit-testing objects
    pub hit_radius: f64,
    /// Grab distance for dragging a point of the selected object
    pub drag_radius: f64,
    pub jitter: f64,
    pub min_segment: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    pub history_limit: usize,
    pub position_diameter: f64,
    pub stroke_color: String,
    pub highlight_color: String,
    pub stroke_width: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            snap_radius: SNAP_RADIUS,
            hit_radius: HIT_RADIUS,
            drag_radius: DRAG_RADIUS,
            jitter: DEFAULT_JITTER,
            min_segment: MIN_DISTORT_SEGMENT,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            history_limit: MAX_HISTORY_STATES,
            position_diameter: POSITION_DIAMETER,
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl EditorSettings {
    /// Load and validate settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!("Failed to load settings from {:?}, using defaults: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let radii = [
            ("snapRadius", self.snap_radius),
            ("hitRadius", self.hit_radius),
            ("dragRadius", self.drag_radius),
            ("minSegment", self.min_segment),
            ("zoomStep", self.zoom_step),
        ];
        if let Some((name, value)) = radii.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(SettingsError::InvalidValue(format!("{name} must be positive, got {value}")));
        }
        if !(self.jitter >= 0.0) {
            return Err(SettingsError::InvalidValue(format!("jitter must not be negative, got {}", self.jitter)));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(SettingsError::InvalidValue(format!(
                "zoom range {}..{} is empty",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.history_limit == 0 {
            return Err(SettingsError::InvalidValue("historyLimit must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Default location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("topodraw").join("settings.json"))
}
