//! Document Import/Export Integration Tests

use crate::helpers::{TestEditorBuilder, assert_counts, click, empty_editor, p};
use tempfile::tempdir;
use topodraw::data::DocumentError;
use topodraw::types::{Object, ToolType};

const VALID: &str =
    r#"{"points":[{"x":0,"y":0}],"objects":[{"type":"position","points":[0],"properties":{}}]}"#;
const UNKNOWN_TYPE: &str =
    r#"{"points":[],"objects":[{"type":"triangle","points":[],"properties":{}}]}"#;

#[test]
fn test_import_valid_document_replaces_content() {
    let mut editor = TestEditorBuilder::new()
        .with_arc(&[(5.0, 5.0), (50.0, 5.0)])
        .build();

    editor.import_json(VALID).unwrap();

    assert_eq!(editor.topology().points, vec![p(0.0, 0.0)]);
    assert_eq!(editor.topology().objects, vec![Object::position(0)]);
}

#[test]
fn test_import_unknown_type_is_rejected() {
    let mut editor = TestEditorBuilder::new().with_position(1.0, 2.0).build();
    let before = editor.store().snapshot();
    let revision = editor.store().revision();

    let err = editor.import_json(UNKNOWN_TYPE).unwrap_err();

    assert!(matches!(err, DocumentError::Json(_)));
    assert_eq!(editor.topology(), &before);
    assert_eq!(editor.store().revision(), revision);
    assert!(!editor.history().can_undo());
}

#[test]
fn test_import_rejections() {
    let mut editor = empty_editor(ToolType::Select);

    let dangling = r#"{"points":[],"objects":[{"type":"position","points":[3]}]}"#;
    assert!(matches!(
        editor.import_json(dangling),
        Err(DocumentError::DanglingPoint { object: 0, index: 3, len: 0 })
    ));

    let arity = r#"{"points":[{"x":0,"y":0},{"x":1,"y":1}],"objects":[{"type":"position","points":[0,1]}]}"#;
    let message = editor.import_json(arity).unwrap_err().to_string();
    assert!(message.contains("exactly one point"), "{}", message);

    for malformed in [
        "",
        "{",
        r#"{"points":[{"x":"0","y":0}],"objects":[]}"#,
        r#"{"points":[],"objects":[{"type":"arc","points":[-1]}]}"#,
        r#"{"points":[],"objects":[{"type":"arc","points":[0.5]}]}"#,
        r#"{"objects":[]}"#,
    ] {
        assert!(
            matches!(editor.import_json(malformed), Err(DocumentError::Json(_))),
            "accepted {:?}",
            malformed
        );
    }
    assert!(editor.topology().is_empty());
}

#[test]
fn test_import_is_undoable() {
    let mut editor = TestEditorBuilder::new()
        .with_position(7.0, 7.0)
        .with_position(9.0, 90.0)
        .build();

    editor.import_json(VALID).unwrap();
    assert_counts(&editor, 1, 1);

    assert!(editor.undo());
    assert_counts(&editor, 2, 2);
    assert_eq!(editor.topology().points[0], p(7.0, 7.0));
}

#[test]
fn test_import_resets_tool_state() {
    let mut editor = empty_editor(ToolType::Arc);
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 50.0, 0.0);
    assert!(editor.tool().in_progress_arc().is_some());

    editor.import_json(VALID).unwrap();

    assert_eq!(editor.tool().in_progress_arc(), None);
    assert_eq!(editor.tool_type(), ToolType::Arc);
    assert_eq!(editor.distortion().len(), 0);
}

#[test]
fn test_export_then_import_preserves_content() {
    let mut source = TestEditorBuilder::new()
        .with_position(10.0, 10.0)
        .with_arc(&[(0.0, 0.0), (40.0, 0.0), (40.0, 40.0)])
        .build();
    source.set_property(1, "label", "river");

    let json = source.export_json().unwrap();
    let mut target = empty_editor(ToolType::Select);
    target.import_json(&json).unwrap();

    assert_eq!(target.topology(), source.topology());
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drawing.json");

    let source = TestEditorBuilder::new()
        .with_arc(&[(0.0, 0.0), (40.0, 0.0), (0.0, 0.0)])
        .build();
    source.export_file(&path).unwrap();

    let mut target = empty_editor(ToolType::Select);
    target.import_file(&path).unwrap();
    assert_eq!(target.topology(), source.topology());
    assert!(target.history().can_undo());
}

#[test]
fn test_import_missing_file_leaves_content() {
    let dir = tempdir().unwrap();
    let mut editor = TestEditorBuilder::new().with_position(1.0, 1.0).build();

    let err = editor.import_file(&dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, DocumentError::Io(_)));
    assert_counts(&editor, 1, 1);
}
