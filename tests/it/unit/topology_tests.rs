//! Unit tests for edit operations and the topology store.

use std::cell::RefCell;
use std::rc::Rc;

use topodraw::actions::{add_position, begin_or_continue_arc, delete_object, set_property};
use topodraw::store::TopologyStore;
use topodraw::types::{Object, Point, Topology};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_delete_with_partial_sharing() {
    // Two arcs share point 1; the first also owns points 0 and 2
    let mut store = TopologyStore::with_topology(Topology {
        points: vec![p(0.0, 0.0), p(10.0, 10.0), p(20.0, 20.0), p(30.0, 30.0)],
        objects: vec![Object::arc(vec![0, 1, 2]), Object::arc(vec![1, 3])],
    });

    let removed = delete_object(&mut store, 0);

    assert_eq!(removed, Some(Object::arc(vec![0, 1, 2])));
    assert_eq!(store.topology().points, vec![p(10.0, 10.0), p(30.0, 30.0)]);
    assert_eq!(store.topology().objects, vec![Object::arc(vec![0, 1])]);
}

#[test]
fn test_listeners_see_complete_edits() {
    let mut store = TopologyStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    store.subscribe(move |t: &Topology| {
        log.borrow_mut().push((t.points.len(), t.objects.len()));
    });

    add_position(&mut store, p(0.0, 0.0));
    let arc = begin_or_continue_arc(&mut store, None, p(50.0, 50.0), 10.0);
    begin_or_continue_arc(&mut store, arc, p(0.0, 5.0), 10.0);

    assert_eq!(*seen.borrow(), vec![(1, 1), (2, 2), (2, 2)]);
    assert_eq!(store.topology().objects[1], Object::arc(vec![1, 0]));
}

#[test]
fn test_noops_do_not_bump_revision() {
    let mut store = TopologyStore::new();
    add_position(&mut store, p(1.0, 1.0));
    let revision = store.revision();

    assert!(!set_property(&mut store, 9, "k", "v"));
    assert_eq!(delete_object(&mut store, 9), None);
    // Position 0 is not an arc
    assert_eq!(begin_or_continue_arc(&mut store, Some(0), p(5.0, 5.0), 10.0), None);

    assert_eq!(store.revision(), revision);
}
