// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON boundary: TopoJSON in, GeoJSON out.
//!
//! Geometry objects are read leniently. A missing payload is treated as empty,
//! `"type": null` becomes [`TopoValue::Null`], and a type name outside the
//! seven geometry types is kept as [`TopoValue::Unsupported`] so the composer
//! can decide what to do with it.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::arena::Topology;
use crate::error::{Error, Result};
use crate::feature::FeatureCollection;
use crate::geometry::{Properties, TopoGeometry, TopoValue};
use crate::keys::GeometryType;

/// Wire shape of a TopoJSON geometry object, before its type tag is checked.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct RawGeometry {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Properties>,
    #[serde(default)]
    bbox: Option<Vec<f64>>,
    #[serde(default)]
    coordinates: Option<Value>,
    #[serde(default)]
    arcs: Option<Value>,
    #[serde(default)]
    geometries: Option<Vec<TopoGeometry>>,
}

impl TryFrom<RawGeometry> for TopoGeometry {
    type Error = Error;

    fn try_from(raw: RawGeometry) -> Result<Self> {
        let RawGeometry {
            kind,
            id,
            properties,
            bbox,
            coordinates,
            arcs,
            geometries,
        } = raw;

        let value = match kind {
            None => TopoValue::Null,
            Some(name) => match GeometryType::from_name(&name) {
                Some(GeometryType::Point) => TopoValue::Point(payload(coordinates)?),
                Some(GeometryType::MultiPoint) => TopoValue::MultiPoint(payload(coordinates)?),
                Some(GeometryType::LineString) => TopoValue::LineString(payload(arcs)?),
                Some(GeometryType::MultiLineString) => {
                    TopoValue::MultiLineString(payload(arcs)?)
                }
                Some(GeometryType::Polygon) => TopoValue::Polygon(payload(arcs)?),
                Some(GeometryType::MultiPolygon) => TopoValue::MultiPolygon(payload(arcs)?),
                Some(GeometryType::GeometryCollection) => {
                    TopoValue::GeometryCollection(geometries.unwrap_or_default())
                }
                None => TopoValue::Unsupported(name),
            },
        };

        Ok(TopoGeometry {
            value,
            id,
            properties,
            bbox,
        })
    }
}

/// Decodes an optional payload member, defaulting to empty when absent.
fn payload<T: DeserializeOwned + Default>(value: Option<Value>) -> Result<T> {
    match value {
        None | Some(Value::Null) => Ok(T::default()),
        Some(v) => Ok(serde_json::from_value(v)?),
    }
}

impl Topology {
    /// Deserializes a topology from a TopoJSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserializes a topology from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl FeatureCollection {
    /// Serializes the collection to a compact GeoJSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the collection to an indented GeoJSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
