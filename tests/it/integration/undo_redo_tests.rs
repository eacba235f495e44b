//! Undo/Redo Integration Tests

use std::cell::Cell;
use std::rc::Rc;

use crate::helpers::{TestEditorBuilder, assert_counts, click, empty_editor, p, redo, undo};
use topodraw::EditorSettings;
use topodraw::types::{Object, ToolType};

#[test]
fn test_add_position_then_undo_redo() {
    let mut editor = empty_editor(ToolType::Position);

    click(&mut editor, 10.0, 10.0);
    assert_counts(&editor, 1, 1);
    assert_eq!(editor.topology().points[0], p(10.0, 10.0));
    assert_eq!(editor.topology().objects[0], Object::position(0));

    undo(&mut editor);
    assert!(editor.topology().is_empty());
    assert!(editor.history_state().can_redo);

    redo(&mut editor);
    assert_counts(&editor, 1, 1);
    assert!(!editor.history_state().can_redo);
}

#[test]
fn test_commit_after_undo_truncates_redo() {
    let mut editor = empty_editor(ToolType::Position);
    click(&mut editor, 10.0, 10.0);
    click(&mut editor, 50.0, 50.0);

    undo(&mut editor);
    click(&mut editor, 90.0, 90.0);

    assert_eq!(editor.topology().points, vec![p(10.0, 10.0), p(90.0, 90.0)]);
    assert!(!editor.history_state().can_redo);
    assert!(!editor.redo());
}

#[test]
fn test_boundaries_are_noops() {
    let mut editor = TestEditorBuilder::new().with_position(5.0, 5.0).build();
    assert!(!editor.undo());
    assert!(!editor.redo());
    // Initial content is step zero and survives
    assert_counts(&editor, 1, 1);
}

#[test]
fn test_multi_step_undo_restores_each_state() {
    let mut editor = empty_editor(ToolType::Arc);
    for (x, y) in [(0.0, 0.0), (40.0, 0.0), (40.0, 40.0)] {
        click(&mut editor, x, y);
    }
    let states: Vec<_> = (0..3)
        .map(|_| {
            let snapshot = editor.store().snapshot();
            editor.undo();
            snapshot
        })
        .collect();
    assert!(editor.topology().is_empty());

    for expected in states.iter().rev() {
        editor.redo();
        assert_eq!(editor.topology(), expected);
    }
}

#[test]
fn test_history_limit_drops_oldest() {
    let settings = EditorSettings {
        history_limit: 3,
        ..EditorSettings::default()
    };
    let mut editor = TestEditorBuilder::new()
        .with_settings(settings)
        .with_tool(ToolType::Position)
        .build();

    for i in 0..5 {
        click(&mut editor, i as f64 * 20.0, 0.0);
    }
    assert_eq!(editor.history().len(), 3);

    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());
    assert_counts(&editor, 3, 3);
}

#[test]
fn test_listeners_observe_changes() {
    let mut editor = empty_editor(ToolType::Position);
    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    let id = editor.subscribe(move |_| counter.set(counter.get() + 1));

    click(&mut editor, 10.0, 10.0);
    assert_eq!(notified.get(), 1);

    undo(&mut editor);
    assert_eq!(notified.get(), 2);

    assert!(editor.unsubscribe(id));
    redo(&mut editor);
    assert_eq!(notified.get(), 2);
}

#[test]
fn test_undo_discards_selection() {
    let mut editor = TestEditorBuilder::new().with_position(0.0, 0.0).build();
    editor.select_tool(ToolType::Position);
    click(&mut editor, 100.0, 100.0);
    editor.select_tool(ToolType::Select);
    click(&mut editor, 100.0, 100.0);
    assert_eq!(editor.tool().selected(), Some(1));

    undo(&mut editor);
    assert_eq!(editor.tool().selected(), None);
    assert_counts(&editor, 1, 1);
}
