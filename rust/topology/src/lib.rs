// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # TopoJSON-Lite Topology
//!
//! Decodes TopoJSON topologies into self-contained GeoJSON geometry.
//!
//! A topology stores every boundary once, as an arc in a shared arena, and
//! geometry objects refer to arcs by signed index (negative means reversed).
//! Quantized topologies additionally delta-encode arc positions and carry a
//! scale/translate transform. This crate resolves all of that into explicit,
//! absolute coordinates:
//!
//! - [`Transform`] maps quantized positions to real coordinates.
//! - [`Topology::decode_line`] resolves arc references, accumulates deltas,
//!   reverses where needed and closes polygon rings.
//! - [`Topology::to_geometry`] walks a geometry object (recursing into
//!   collections) and builds the matching [`Geometry`].
//!
//! ```
//! use topojson_lite_topology::{Geometry, TopoGeometry, Topology, Transform};
//!
//! let mut topology = Topology::new().with_transform(Transform::new([1.0, 1.0], [0.0, 0.0]));
//! topology.add_arc(vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![1.0, 0.0]]);
//!
//! let reversed = topology.to_geometry(&TopoGeometry::line_string(vec![!0])).unwrap();
//! assert_eq!(
//!     reversed,
//!     Some(Geometry::LineString(vec![vec![2.0, 1.0], vec![1.0, 1.0], vec![0.0, 0.0]]))
//! );
//! ```
//!
//! Conversion never mutates the topology, so a `&Topology` can be shared by
//! any number of threads converting different objects.

pub mod arena;
pub mod compose;
pub mod decode;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod keys;
pub mod options;
pub mod serialization;
pub mod transform;

pub use arena::{ArcData, Topology};
pub use decode::MIN_RING_LEN;
pub use error::{Error, Result};
pub use feature::{Feature, FeatureCollection, Geometry};
pub use geometry::{Position, Properties, TopoGeometry, TopoValue};
pub use keys::{resolve_arc_ref, ArcRef, Direction, GeometryType};
pub use options::{ConvertOptions, UnknownGeometry};
pub use transform::Transform;
