// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc references and geometry type discriminants.
//!
//! Geometry objects never own arcs. They name them with a signed integer:
//! a non-negative value is an index into the topology's arc store, traversed
//! forward, and a negative value is the bitwise complement of the index,
//! traversed in reverse (`-1` is arc 0 reversed, `-2` is arc 1 reversed).

/// A signed reference into the arc store.
pub type ArcRef = i64;

/// Traversal direction of a referenced arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reversed,
}

/// Splits a signed arc reference into its arc index and traversal direction.
///
/// ```
/// use topojson_lite_topology::{resolve_arc_ref, Direction};
///
/// assert_eq!(resolve_arc_ref(2), (2, Direction::Forward));
/// assert_eq!(resolve_arc_ref(!2), (2, Direction::Reversed));
/// ```
pub fn resolve_arc_ref(reference: ArcRef) -> (u64, Direction) {
    if reference < 0 {
        // !reference is non-negative for every negative i64
        ((!reference) as u64, Direction::Reversed)
    } else {
        (reference as u64, Direction::Forward)
    }
}

/// Discriminant for the seven recognized geometry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeometryType {
    Point = 0,
    MultiPoint = 1,
    LineString = 2,
    MultiLineString = 3,
    Polygon = 4,
    MultiPolygon = 5,
    GeometryCollection = 6,
}

impl GeometryType {
    /// All recognized types, in discriminant order.
    pub const ALL: [GeometryType; 7] = [
        GeometryType::Point,
        GeometryType::MultiPoint,
        GeometryType::LineString,
        GeometryType::MultiLineString,
        GeometryType::Polygon,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
    ];

    /// Returns the type name as it appears in TopoJSON and GeoJSON documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// Parses a type name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == name)
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
