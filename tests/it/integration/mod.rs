//! Integration tests for topodraw.
//!
//! These tests drive the editor through input events and verify complete
//! workflows end-to-end.

mod arc_workflow_tests;
mod import_export_tests;
mod render_tests;
mod undo_redo_tests;
