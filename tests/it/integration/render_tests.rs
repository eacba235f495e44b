//! Rendering and Edge Distortion Integration Tests

use crate::helpers::{TestEditorBuilder, click, drag, hover, p};
use topodraw::distort::EdgeDistortion;
use topodraw::render::{DrawCall, FillStyle, RecordingCanvas, RenderStats, Renderer};
use topodraw::types::{Object, Point, Size, ToolType, Topology, Viewport};
use topodraw::{Editor, EditorSettings};

fn render(editor: &mut Editor) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new();
    editor.render(&mut canvas);
    canvas
}

fn paths(canvas: &RecordingCanvas) -> Vec<Vec<Point>> {
    canvas
        .paths()
        .map(|call| match call {
            DrawCall::Path { points, .. } => points.clone(),
            _ => unreachable!(),
        })
        .collect()
}

fn shared_edge_editor() -> Editor {
    TestEditorBuilder::new()
        .with_topology(Topology {
            points: vec![p(0.0, 0.0), p(100.0, 0.0)],
            objects: vec![Object::arc(vec![0, 1]), Object::arc(vec![1, 0])],
        })
        .with_seed(3)
        .build()
}

#[test]
fn test_shared_edge_renders_identically_both_ways() {
    let mut editor = shared_edge_editor();
    let paths = paths(&render(&mut editor));

    assert_eq!(paths.len(), 2);
    let mut reversed = paths[1].clone();
    reversed.reverse();
    assert_eq!(paths[0], reversed);
    assert_eq!(editor.distortion().len(), 1);
}

#[test]
fn test_repeated_renders_are_stable() {
    let mut editor = shared_edge_editor();
    let first = render(&mut editor);
    let second = render(&mut editor);
    assert_eq!(first.calls, second.calls);
}

#[test]
fn test_dragged_endpoint_regenerates_edge() {
    let mut editor = shared_edge_editor();
    render(&mut editor);

    click(&mut editor, 50.0, 0.0);
    drag(&mut editor, (0.0, 0.0), (0.0, 40.0), 2);
    let paths = paths(&render(&mut editor));

    assert_eq!(paths[0].first(), Some(&p(0.0, 40.0)));
    assert_eq!(paths[0].last(), Some(&p(100.0, 0.0)));
    assert_eq!(paths[1].last(), Some(&p(0.0, 40.0)));
    assert_eq!(editor.distortion().len(), 1);
}

#[test]
fn test_hovered_object_is_highlighted() {
    let mut editor = TestEditorBuilder::new().with_position(100.0, 100.0).build();
    let highlight = editor.settings().highlight_color.clone();
    let stroke = editor.settings().stroke_color.clone();

    hover(&mut editor, 100.0, 100.0);
    assert_eq!(render(&mut editor).calls[0].options().stroke, highlight);

    hover(&mut editor, 300.0, 300.0);
    assert_eq!(render(&mut editor).calls[0].options().stroke, stroke);
}

#[test]
fn test_properties_style_objects() {
    let mut editor = TestEditorBuilder::new()
        .with_arc(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0), (0.0, 0.0)])
        .build();
    editor.set_property(0, "stroke", "#2f9e44");
    editor.set_property(0, "fill", "#b2f2bb");
    editor.set_property(0, "fillStyle", "solid");

    let canvas = render(&mut editor);
    let options = canvas.calls[0].options();
    assert_eq!(options.stroke, "#2f9e44");
    assert_eq!(options.fill.as_deref(), Some("#b2f2bb"));
    assert_eq!(options.fill_style, FillStyle::Solid);
}

#[test]
fn test_culling_follows_pan() {
    let mut editor = TestEditorBuilder::new()
        .with_position(50.0, 50.0)
        .with_position(1000.0, 1000.0)
        .with_surface(200.0, 200.0)
        .with_tool(ToolType::Hand)
        .build();

    let mut canvas = RecordingCanvas::new();
    assert_eq!(editor.render(&mut canvas), RenderStats { drawn: 1, culled: 1 });

    drag(&mut editor, (0.0, 0.0), (-900.0, -900.0), 3);
    canvas.clear();
    assert_eq!(editor.render(&mut canvas), RenderStats { drawn: 1, culled: 1 });
    match &canvas.calls[0] {
        DrawCall::Circle { center, .. } => assert_eq!(*center, p(100.0, 100.0)),
        other => panic!("expected circle, got {:?}", other),
    }
}

#[test]
fn test_arc_crossing_surface_is_drawn() {
    // Both endpoints lie far outside the surface
    let mut editor = TestEditorBuilder::new()
        .with_arc(&[(-1000.0, 300.0), (2000.0, 300.0)])
        .with_arc(&[(-1000.0, 900.0), (2000.0, 900.0)])
        .with_surface(800.0, 600.0)
        .build();

    let mut canvas = RecordingCanvas::new();
    assert_eq!(editor.render(&mut canvas), RenderStats { drawn: 1, culled: 1 });
    let paths = paths(&canvas);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].first(), Some(&p(-1000.0, 300.0)));
    assert_eq!(paths[0].last(), Some(&p(2000.0, 300.0)));
}

#[test]
fn test_partly_visible_position_is_drawn() {
    let mut viewport = Viewport::new(Size::new(800.0, 600.0));
    viewport.zoom = 8.0;
    let settings = EditorSettings::default();
    let mut distortion = EdgeDistortion::default();
    let mut canvas = RecordingCanvas::new();

    // At zoom 8 a position is 40px across: the first overlaps the left edge
    let topology = Topology {
        points: vec![p(-3.0, 30.0), p(-10.0, 30.0)],
        objects: vec![Object::position(0), Object::position(1)],
    };
    let stats = Renderer::new(&viewport, &settings).render(&mut canvas, &topology, &mut distortion);

    assert_eq!(stats, RenderStats { drawn: 1, culled: 1 });
    match &canvas.calls[0] {
        DrawCall::Circle { center, diameter, .. } => {
            assert_eq!(*center, p(-24.0, 240.0));
            assert_eq!(*diameter, 40.0);
        }
        other => panic!("expected circle, got {:?}", other),
    }
}
