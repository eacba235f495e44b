//! Arc Construction Integration Tests

use crate::helpers::{TestEditorBuilder, assert_arc_indices, assert_counts, click, empty_editor, p, press};
use topodraw::input::Key;
use topodraw::types::{Object, ToolType};

#[test]
fn test_arc_closes_on_start_point() {
    let mut editor = empty_editor(ToolType::Arc);

    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 10.0, 0.0);
    click(&mut editor, 0.0, 0.0);

    assert_eq!(editor.topology().points, vec![p(0.0, 0.0), p(10.0, 0.0)]);
    assert_arc_indices(&editor, 0, &[0, 1, 0]);
    assert!(editor.topology().objects[0].is_closed_arc());
    assert_eq!(editor.tool().in_progress_arc(), None);
    // One step per click
    assert_eq!(editor.history().index(), 3);
}

#[test]
fn test_click_after_close_starts_new_arc() {
    let mut editor = empty_editor(ToolType::Arc);
    for (x, y) in [(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (0.0, 0.0)] {
        click(&mut editor, x, y);
    }
    assert_arc_indices(&editor, 0, &[0, 1, 2, 0]);

    click(&mut editor, 200.0, 200.0);
    assert_counts(&editor, 4, 2);
    assert_arc_indices(&editor, 1, &[3]);
    assert_eq!(editor.tool().in_progress_arc(), Some(1));
}

#[test]
fn test_snap_radius_is_strict() {
    let mut editor = empty_editor(ToolType::Arc);
    click(&mut editor, 0.0, 0.0);
    // Exactly 10 away: a new point
    click(&mut editor, 10.0, 0.0);
    // 9 away from the previous point: snaps
    click(&mut editor, 19.0, 0.0);

    assert_eq!(editor.topology().points.len(), 2);
    assert_arc_indices(&editor, 0, &[0, 1, 1]);
}

#[test]
fn test_arc_snaps_to_existing_position() {
    let mut editor = TestEditorBuilder::new()
        .with_position(100.0, 100.0)
        .with_tool(ToolType::Arc)
        .build();

    click(&mut editor, 103.0, 104.0);
    click(&mut editor, 200.0, 100.0);

    assert_counts(&editor, 2, 2);
    assert_arc_indices(&editor, 1, &[0, 1]);
    assert_eq!(editor.topology().objects[0], Object::position(0));
}

#[test]
fn test_escape_cancels_arc_without_commit() {
    let mut editor = TestEditorBuilder::new()
        .with_position(300.0, 300.0)
        .with_tool(ToolType::Arc)
        .build();

    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 50.0, 0.0);
    let steps = editor.history().len();

    press(&mut editor, Key::Escape);

    assert_counts(&editor, 1, 1);
    assert_eq!(editor.topology().objects[0], Object::position(0));
    assert_eq!(editor.tool().in_progress_arc(), None);
    assert_eq!(editor.history().len(), steps);
    assert!(editor.history().has_pending(editor.store()));
}

#[test]
fn test_escape_keeps_closed_arcs() {
    let mut editor = empty_editor(ToolType::Arc);
    for (x, y) in [(0.0, 0.0), (40.0, 0.0), (0.0, 0.0)] {
        click(&mut editor, x, y);
    }
    press(&mut editor, Key::Escape);
    assert_counts(&editor, 2, 1);
}

#[test]
fn test_switching_tools_discards_arc_state() {
    let mut editor = empty_editor(ToolType::Arc);
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 50.0, 0.0);

    editor.select_tool(ToolType::Select);
    editor.select_tool(ToolType::Arc);
    click(&mut editor, 100.0, 100.0);

    assert_counts(&editor, 3, 2);
    assert_arc_indices(&editor, 0, &[0, 1]);
    assert_arc_indices(&editor, 1, &[2]);
}

#[test]
fn test_reselecting_tool_keeps_arc_state() {
    let mut editor = empty_editor(ToolType::Arc);
    click(&mut editor, 0.0, 0.0);
    editor.select_tool(ToolType::Arc);
    click(&mut editor, 50.0, 0.0);

    assert_counts(&editor, 2, 1);
    assert_arc_indices(&editor, 0, &[0, 1]);
}
