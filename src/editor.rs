//! The editor: owns the document, its history and the interaction state.
//!
//! Hosts feed it device-space input events and hand it a `Canvas` to draw
//! on. Everything else (tools, snapping, undo, distortion) happens inside.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::actions;
use crate::data::{self, DocumentResult};
use crate::distort::EdgeDistortion;
use crate::history::{History, HistoryState};
use crate::input::{ActiveTool, ToolContext, ToolStrategy};
use crate::perf::PerfMonitor;
use crate::render::{Canvas, RenderStats, Renderer};
use crate::settings::EditorSettings;
use crate::store::{SubscriptionId, TopologyStore};
use crate::types::{Cursor, Size, ToolType, Topology, Viewport};

pub struct Editor {
    pub(crate) store: TopologyStore,
    pub(crate) history: History,
    pub(crate) viewport: Viewport,
    pub(crate) cursor: Cursor,
    pub(crate) tool: ActiveTool,
    pub(crate) distortion: EdgeDistortion,
    pub(crate) settings: EditorSettings,
    pub(crate) perf_monitor: PerfMonitor,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        let distortion = EdgeDistortion::new(settings.min_segment, settings.jitter);
        Self::build(settings, TopologyStore::new(), distortion)
    }

    /// Editor over an existing topology, using a seeded distortion RNG.
    pub fn with_topology(topology: Topology, settings: EditorSettings, seed: u64) -> Self {
        let distortion = EdgeDistortion::with_seed(seed, settings.min_segment, settings.jitter);
        Self::build(settings, TopologyStore::with_topology(topology), distortion)
    }

    fn build(settings: EditorSettings, store: TopologyStore, distortion: EdgeDistortion) -> Self {
        let history = History::with_limit(&store, settings.history_limit);
        let tool = ActiveTool::default();
        let cursor = Cursor {
            kind: tool.tool_type().default_cursor(),
            ..Cursor::default()
        };
        Self {
            store,
            history,
            viewport: Viewport::default(),
            cursor,
            tool,
            distortion,
            settings,
            perf_monitor: PerfMonitor::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn topology(&self) -> &Topology {
        self.store.topology()
    }

    pub fn store(&self) -> &TopologyStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_state(&self) -> HistoryState {
        self.history.state()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn tool(&self) -> &ActiveTool {
        &self.tool
    }

    pub fn tool_type(&self) -> ToolType {
        self.tool.tool_type()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn distortion(&self) -> &EdgeDistortion {
        &self.distortion
    }

    /// Timings for rendering and pointer handling.
    pub fn perf_monitor(&self) -> &PerfMonitor {
        &self.perf_monitor
    }

    /// Register a listener called after every topology change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Topology) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Resize the drawing surface. `bounds` is its displayed size, `size` its
    /// backing size in device pixels.
    pub fn set_viewport_size(&mut self, size: Size, bounds: Size) {
        self.viewport.size = size;
        self.viewport.bounds = bounds;
    }

    /// Switch tools. Re-selecting the active tool keeps its state.
    pub fn select_tool(&mut self, tool: ToolType) {
        if self.tool.tool_type() == tool {
            return;
        }
        debug!(?tool, "Selected tool");
        self.tool = ActiveTool::new(tool);
        self.cursor.kind = tool.default_cursor();
    }

    // ========================================================================
    // History
    // ========================================================================

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo(&mut self.store);
        if changed {
            self.reset_tool();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo(&mut self.store);
        if changed {
            self.reset_tool();
        }
        changed
    }

    /// Commit any pending edits made through the store directly.
    pub fn commit(&mut self) -> bool {
        self.history.commit(&self.store)
    }

    /// Drop transient tool state; indices it holds may no longer exist.
    fn reset_tool(&mut self) {
        self.tool.reset();
        self.cursor.kind = self.tool.tool_type().default_cursor();
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Set a property on an object as one undoable step.
    pub fn set_property(&mut self, object: usize, key: &str, value: &str) -> bool {
        let changed = actions::set_property(&mut self.store, object, key, value);
        if changed {
            self.history.commit(&self.store);
        }
        changed
    }

    /// Replace the document with the given JSON. On error nothing changes.
    pub fn import_json(&mut self, json: &str) -> DocumentResult<()> {
        if let Err(e) = actions::import_topology(&mut self.store, json) {
            warn!("Rejected document import: {}", e);
            return Err(e);
        }
        self.after_import();
        Ok(())
    }

    pub fn export_json(&self) -> DocumentResult<String> {
        actions::export_topology(&self.store)
    }

    pub fn import_file(&mut self, path: &Path) -> DocumentResult<()> {
        let topology = data::read_document(path).inspect_err(|e| {
            warn!(path = %path.display(), "Rejected document import: {}", e);
        })?;
        self.store.replace(topology);
        self.after_import();
        info!(path = %path.display(), "Imported document");
        Ok(())
    }

    pub fn export_file(&self, path: &Path) -> DocumentResult<()> {
        data::write_document(path, self.store.topology())?;
        info!(path = %path.display(), "Exported document");
        Ok(())
    }

    fn after_import(&mut self) {
        self.history.commit(&self.store);
        self.distortion.clear();
        self.reset_tool();
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn render(&mut self, canvas: &mut dyn Canvas) -> RenderStats {
        let Self {
            store,
            viewport,
            tool,
            distortion,
            settings,
            perf_monitor,
            ..
        } = self;
        perf_monitor.time("render", || {
            Renderer::new(viewport, settings)
                .highlight([tool.selected(), tool.hovered()])
                .render(canvas, store.topology(), distortion)
        })
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    pub(crate) fn with_tool<R>(
        &mut self,
        f: impl FnOnce(&mut dyn ToolStrategy, &mut ToolContext<'_>) -> R,
    ) -> R {
        let mut ctx = ToolContext {
            store: &mut self.store,
            history: &mut self.history,
            viewport: &mut self.viewport,
            cursor: &mut self.cursor,
            settings: &self.settings,
        };
        f(self.tool.strategy_mut(), &mut ctx)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("tool", &self.tool)
            .field("viewport", &self.viewport)
            .field("cursor", &self.cursor)
            .field("history", &self.history.state())
            .field("revision", &self.store.revision())
            .finish()
    }
}
