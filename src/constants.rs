//! Editor-wide constants.
//!
//! Centralizes magic numbers so the tunables in `EditorSettings` have a
//! single source for their defaults.

// ============================================================================
// Topology Editing
// ============================================================================

/// A click closer than this to an existing point reuses that point
pub const SNAP_RADIUS: f64 = 10.0;

/// Distance within which pointer-down grabs a point of the selected object
pub const DRAG_RADIUS: f64 = 10.0;

/// Distance within which the cursor hovers an object
pub const HIT_RADIUS: f64 = 5.0;

// ============================================================================
// Edge Distortion
// ============================================================================

/// Segments shorter than this are not subdivided further
pub const MIN_DISTORT_SEGMENT: f64 = 10.0;

/// Default midpoint jitter, applied independently on each axis
pub const DEFAULT_JITTER: f64 = 5.0;

/// Hard cap on subdivision depth so large jitter values cannot recurse forever
pub const MAX_DISTORT_DEPTH: u32 = 12;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 1.0;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 8.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom change per wheel notch
pub const ZOOM_STEP: f64 = 1.0;

// ============================================================================
// History
// ============================================================================

/// Maximum undo history states to keep
pub const MAX_HISTORY_STATES: usize = 100;

// ============================================================================
// Rendering
// ============================================================================

/// Diameter of a rendered position marker at zoom 1.0
pub const POSITION_DIAMETER: f64 = 5.0;

/// Default stroke width
pub const DEFAULT_STROKE_WIDTH: f64 = 1.5;

/// Default stroke color
pub const DEFAULT_STROKE_COLOR: &str = "#1f1f1f";

/// Stroke color for hovered and selected objects
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#e03131";

/// Margin in pixels around the viewport for culling (prevents pop-in at edges)
pub const CULLING_MARGIN: f64 = 10.0;
