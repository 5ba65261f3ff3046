// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology-side geometry objects.
//!
//! Points and multipoints carry positions directly. Every line-like payload
//! carries arc references instead, resolved against the owning topology's
//! arc store at conversion time.

use serde::Deserialize;
use serde_json::Value;

use crate::keys::{ArcRef, GeometryType};

/// A coordinate tuple: `[x, y]` plus any extra dimensions.
pub type Position = Vec<f64>;

/// Open property mapping, passed through conversion uninterpreted.
pub type Properties = serde_json::Map<String, Value>;

/// Typed payload of a geometry object.
#[derive(Debug, Clone, PartialEq)]
pub enum TopoValue {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<ArcRef>),
    MultiLineString(Vec<Vec<ArcRef>>),
    /// Rings; the first is the exterior, the rest are holes.
    Polygon(Vec<Vec<ArcRef>>),
    MultiPolygon(Vec<Vec<Vec<ArcRef>>>),
    GeometryCollection(Vec<TopoGeometry>),
    /// Unset type tag (`"type": null`). Converts to no geometry.
    Null,
    /// A type tag outside the seven recognized types.
    Unsupported(String),
}

impl TopoValue {
    /// Returns the geometry type, or `None` for null and unsupported tags.
    pub fn geometry_type(&self) -> Option<GeometryType> {
        match self {
            TopoValue::Point(_) => Some(GeometryType::Point),
            TopoValue::MultiPoint(_) => Some(GeometryType::MultiPoint),
            TopoValue::LineString(_) => Some(GeometryType::LineString),
            TopoValue::MultiLineString(_) => Some(GeometryType::MultiLineString),
            TopoValue::Polygon(_) => Some(GeometryType::Polygon),
            TopoValue::MultiPolygon(_) => Some(GeometryType::MultiPolygon),
            TopoValue::GeometryCollection(_) => Some(GeometryType::GeometryCollection),
            TopoValue::Null | TopoValue::Unsupported(_) => None,
        }
    }
}

/// A geometry object together with its identifier, properties and bbox.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::serialization::RawGeometry")]
pub struct TopoGeometry {
    pub value: TopoValue,
    pub id: Option<Value>,
    pub properties: Option<Properties>,
    pub bbox: Option<Vec<f64>>,
}

impl TopoGeometry {
    pub fn new(value: TopoValue) -> Self {
        Self {
            value,
            id: None,
            properties: None,
            bbox: None,
        }
    }

    pub fn point(position: Position) -> Self {
        Self::new(TopoValue::Point(position))
    }

    pub fn multi_point(positions: Vec<Position>) -> Self {
        Self::new(TopoValue::MultiPoint(positions))
    }

    pub fn line_string(arcs: Vec<ArcRef>) -> Self {
        Self::new(TopoValue::LineString(arcs))
    }

    pub fn multi_line_string(lines: Vec<Vec<ArcRef>>) -> Self {
        Self::new(TopoValue::MultiLineString(lines))
    }

    pub fn polygon(rings: Vec<Vec<ArcRef>>) -> Self {
        Self::new(TopoValue::Polygon(rings))
    }

    pub fn multi_polygon(polygons: Vec<Vec<Vec<ArcRef>>>) -> Self {
        Self::new(TopoValue::MultiPolygon(polygons))
    }

    pub fn collection(geometries: Vec<TopoGeometry>) -> Self {
        Self::new(TopoValue::GeometryCollection(geometries))
    }

    pub fn null() -> Self {
        Self::new(TopoValue::Null)
    }

    /// Sets the identifier carried onto the output feature.
    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the whole property mapping.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Inserts a single property, creating the mapping if needed.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value.into());
        self
    }

    /// Returns the geometry type, or `None` for null and unsupported tags.
    pub fn geometry_type(&self) -> Option<GeometryType> {
        self.value.geometry_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_set_matching_type() {
        assert_eq!(
            TopoGeometry::point(vec![0.0, 0.0]).geometry_type(),
            Some(GeometryType::Point)
        );
        assert_eq!(
            TopoGeometry::multi_polygon(vec![vec![vec![0]]]).geometry_type(),
            Some(GeometryType::MultiPolygon)
        );
        assert_eq!(
            TopoGeometry::collection(vec![]).geometry_type(),
            Some(GeometryType::GeometryCollection)
        );
        assert_eq!(TopoGeometry::null().geometry_type(), None);
        assert_eq!(
            TopoGeometry::new(TopoValue::Unsupported("Circle".into())).geometry_type(),
            None
        );
    }

    #[test]
    fn properties_accumulate() {
        let g = TopoGeometry::line_string(vec![0, -2])
            .with_id("I-90")
            .with_property("lanes", 4)
            .with_property("toll", true);

        assert_eq!(g.id, Some(json!("I-90")));
        let props = g.properties.unwrap();
        assert_eq!(props.get("lanes"), Some(&json!(4)));
        assert_eq!(props.get("toll"), Some(&json!(true)));
    }

    #[test]
    fn nested_collections_hold_children_by_value() {
        let inner = TopoGeometry::collection(vec![TopoGeometry::point(vec![1.0, 2.0])]);
        let outer = TopoGeometry::collection(vec![inner.clone(), TopoGeometry::null()]);

        if let TopoValue::GeometryCollection(children) = &outer.value {
            assert_eq!(children.len(), 2);
            assert_eq!(children[0], inner);
        } else {
            panic!("expected collection");
        }
    }
}
