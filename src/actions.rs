//! Edit operations over the topology store.
//!
//! These are the only functions that change the shape of the topology. Each
//! one leaves every object reference valid when it returns. Out-of-range
//! indices are treated as silent no-ops and reported through the return value.

use std::collections::BTreeSet;

use tracing::debug;

use crate::data::{self, DocumentResult};
use crate::geometry::distance;
use crate::store::TopologyStore;
use crate::types::{Object, Point, Topology};

/// Append a point and a position object referencing it. Returns the new
/// object's index.
pub fn add_position(store: &mut TopologyStore, point: Point) -> usize {
    store.update(|t| {
        t.points.push(point);
        t.objects.push(Object::position(t.points.len() - 1));
        debug!(x = point.x, y = point.y, object = t.objects.len() - 1, "Added position");
        t.objects.len() - 1
    })
}

/// Index of the first point strictly closer than `radius` to `point`.
pub fn find_snap_point(topology: &Topology, point: Point, radius: f64) -> Option<usize> {
    topology
        .points
        .iter()
        .position(|existing| distance(*existing, point) < radius)
}

/// Append `point` to an arc, starting a new arc when `arc` is `None`.
///
/// The point snaps to an existing point within `snap_radius`, otherwise a new
/// point is created. Returns the arc's index, or `None` when `arc` names no
/// arc (in which case nothing changes). Closing the arc is left to the caller.
pub fn begin_or_continue_arc(
    store: &mut TopologyStore,
    arc: Option<usize>,
    point: Point,
    snap_radius: f64,
) -> Option<usize> {
    if let Some(index) = arc {
        if !store.topology().objects.get(index).is_some_and(Object::is_arc) {
            debug!(index, "Ignoring point for missing arc");
            return None;
        }
    }

    Some(store.update(|t| {
        let arc_index = arc.unwrap_or_else(|| {
            t.objects.push(Object::empty_arc());
            t.objects.len() - 1
        });

        let point_index = find_snap_point(t, point, snap_radius).unwrap_or_else(|| {
            t.points.push(point);
            t.points.len() - 1
        });

        if let Some(Object::Arc(a)) = t.objects.get_mut(arc_index) {
            a.points.push(point_index);
        }
        debug!(arc = arc_index, point = point_index, "Extended arc");
        arc_index
    }))
}

/// Upsert a property on an object. Returns `false` without touching the store
/// when the index is out of range.
pub fn set_property(
    store: &mut TopologyStore,
    object: usize,
    key: impl Into<String>,
    value: impl Into<String>,
) -> bool {
    if object >= store.topology().objects.len() {
        debug!(object, "Ignoring property for missing object");
        return false;
    }
    let (key, value) = (key.into(), value.into());
    store.update(|t| {
        t.objects[object].properties_mut().insert(key, value);
    });
    true
}

/// Overwrite a point's coordinates. Returns `false` when out of range.
pub fn move_point(store: &mut TopologyStore, index: usize, to: Point) -> bool {
    if index >= store.topology().points.len() {
        return false;
    }
    store.update(|t| t.points[index] = to);
    true
}

/// Remove an object together with the points only it referenced.
///
/// Surviving references are shifted down by the number of removed points
/// below them. Returns the removed object, or `None` when out of range.
pub fn delete_object(store: &mut TopologyStore, index: usize) -> Option<Object> {
    if index >= store.topology().objects.len() {
        debug!(index, "Ignoring delete of missing object");
        return None;
    }
    Some(store.update(|t| remove_object(t, index)))
}

fn remove_object(t: &mut Topology, index: usize) -> Object {
    let removed = t.objects.remove(index);

    let still_used: BTreeSet<usize> = t
        .objects
        .iter()
        .flat_map(|o| o.point_indices().iter().copied())
        .collect();
    let orphaned: Vec<usize> = removed
        .point_indices()
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|i| !still_used.contains(i))
        .collect();

    // Descending, so earlier removals never shift later targets.
    for &i in orphaned.iter().rev() {
        if i < t.points.len() {
            t.points.remove(i);
        }
    }

    for object in &mut t.objects {
        for reference in object.point_indices_mut() {
            // `orphaned` is sorted; the partition point counts removals below.
            *reference -= orphaned.partition_point(|&o| o < *reference);
        }
    }

    debug!(index, orphaned = orphaned.len(), "Deleted object");
    removed
}

/// Validate a JSON document and replace the store content with it. On error
/// the store is left untouched.
pub fn import_topology(store: &mut TopologyStore, json: &str) -> DocumentResult<()> {
    let topology = data::parse_document(json)?;
    debug!(
        points = topology.points.len(),
        objects = topology.objects.len(),
        "Imported topology"
    );
    store.replace(topology);
    Ok(())
}

/// Serialize the current topology as pretty-printed JSON.
pub fn export_topology(store: &TopologyStore) -> DocumentResult<String> {
    data::to_document(store.topology())
}
