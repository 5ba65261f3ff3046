// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc store and object table.
//!
//! The [`Topology`] is the central owner of all input data. Arcs live in a flat
//! arena and are shared between geometries by integer index; a boundary shared
//! by two polygons is stored once and referenced forward by one and reversed by
//! the other. Geometry objects are kept in insertion order so that conversion
//! output follows the document order.
//!
//! A topology is read-only while it is being converted. Decoding copies arcs
//! before touching them, so one `&Topology` can be shared across threads.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::geometry::{Position, TopoGeometry};
use crate::keys::ArcRef;
use crate::transform::Transform;

/// One stored arc: an ordered sequence of positions, delta-encoded when the
/// topology carries a transform.
pub type ArcData = Vec<Position>;

/// A decoded-on-demand topology: arcs, optional quantization transform and
/// named geometry objects.
///
/// # Example
///
/// ```
/// use topojson_lite_topology::{TopoGeometry, Topology, Transform};
///
/// let mut topology = Topology::new().with_transform(Transform::new([1.0, 1.0], [0.0, 0.0]));
/// let arc = topology.add_arc(vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![1.0, 0.0]]);
/// topology.add_object("road", TopoGeometry::line_string(vec![arc]));
///
/// assert_eq!(topology.arc_count(), 1);
/// assert_eq!(topology.object_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub(crate) arcs: Vec<ArcData>,
    #[serde(default)]
    pub(crate) transform: Option<Transform>,
    #[serde(default)]
    pub(crate) objects: IndexMap<String, TopoGeometry>,
    #[serde(default)]
    pub(crate) bbox: Option<Vec<f64>>,
}

impl Topology {
    /// Creates a new, empty, unquantized topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantization transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Sets the bounding box carried through to the output collection.
    pub fn with_bbox(mut self, bbox: Vec<f64>) -> Self {
        self.bbox = Some(bbox);
        self
    }

    // --- Arc operations ---

    /// Appends an arc and returns its forward reference.
    pub fn add_arc(&mut self, points: ArcData) -> ArcRef {
        self.arcs.push(points);
        (self.arcs.len() - 1) as ArcRef
    }

    /// Returns the stored (still encoded) arc at `index`.
    pub fn arc(&self, index: usize) -> Option<&[Position]> {
        self.arcs.get(index).map(Vec::as_slice)
    }

    /// Returns every stored arc.
    pub fn arcs(&self) -> &[ArcData] {
        &self.arcs
    }

    /// Returns the number of arcs in the store.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    // --- Transform ---

    /// Returns the quantization transform, if any.
    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    /// Returns `true` if arcs are delta-encoded under a transform.
    pub fn is_quantized(&self) -> bool {
        self.transform.is_some()
    }

    pub fn bbox(&self) -> Option<&[f64]> {
        self.bbox.as_deref()
    }

    // --- Object operations ---

    /// Adds a named object, replacing (and returning) any object with the same
    /// name. A replaced object keeps its original position in the order.
    pub fn add_object(
        &mut self,
        name: impl Into<String>,
        geometry: TopoGeometry,
    ) -> Option<TopoGeometry> {
        self.objects.insert(name.into(), geometry)
    }

    /// Returns the object with the given name, or `None` if not found.
    pub fn object(&self, name: &str) -> Option<&TopoGeometry> {
        self.objects.get(name)
    }

    /// Iterates over `(name, object)` pairs in document order.
    pub fn objects(&self) -> impl ExactSizeIterator<Item = (&str, &TopoGeometry)> {
        self.objects.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of objects in the topology.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}
