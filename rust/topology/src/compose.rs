// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry composition.
//!
//! Walks a topology object and builds the matching absolute-coordinate
//! geometry: points go through the transform, lines and rings through the arc
//! decoder, and collections recurse. Polygon winding is taken as-is.

use crate::arena::Topology;
use crate::error::{Error, Result};
use crate::feature::{Feature, FeatureCollection, Geometry};
use crate::geometry::{TopoGeometry, TopoValue};
use crate::options::{ConvertOptions, UnknownGeometry};

impl Topology {
    /// Converts a geometry object with default options.
    ///
    /// Returns `Ok(None)` for objects with an unset (`null`) type.
    pub fn to_geometry(&self, object: &TopoGeometry) -> Result<Option<Geometry>> {
        self.to_geometry_with(object, &ConvertOptions::default())
    }

    /// Converts a geometry object.
    ///
    /// Collection children that produce no geometry are left out of the
    /// collection.
    pub fn to_geometry_with(
        &self,
        object: &TopoGeometry,
        options: &ConvertOptions,
    ) -> Result<Option<Geometry>> {
        let geometry = match &object.value {
            TopoValue::Point(position) => Geometry::Point(self.apply_point(position)),
            TopoValue::MultiPoint(positions) => Geometry::MultiPoint(
                positions.iter().map(|p| self.apply_point(p)).collect(),
            ),
            TopoValue::LineString(arcs) => Geometry::LineString(self.decode_line(arcs, false)?),
            TopoValue::MultiLineString(lines) => {
                Geometry::MultiLineString(self.decode_lines(lines, false)?)
            }
            TopoValue::Polygon(rings) => Geometry::Polygon(self.decode_lines(rings, true)?),
            TopoValue::MultiPolygon(polygons) => Geometry::MultiPolygon(
                polygons
                    .iter()
                    .map(|rings| self.decode_lines(rings, true))
                    .collect::<Result<_>>()?,
            ),
            TopoValue::GeometryCollection(children) => {
                let mut geometries = Vec::with_capacity(children.len());
                for child in children {
                    if let Some(g) = self.to_geometry_with(child, options)? {
                        geometries.push(g);
                    }
                }
                Geometry::GeometryCollection(geometries)
            }
            TopoValue::Null => return Ok(None),
            TopoValue::Unsupported(name) => {
                return match options.unknown_geometry {
                    UnknownGeometry::Error => Err(Error::UnsupportedGeometryType(name.clone())),
                    UnknownGeometry::Skip => {
                        tracing::warn!(geometry_type = %name, "skipping unsupported geometry type");
                        Ok(None)
                    }
                };
            }
        };
        Ok(Some(geometry))
    }

    /// Converts a geometry object into a feature, carrying its identifier,
    /// properties and bbox through unchanged.
    pub fn object_to_feature(
        &self,
        object: &TopoGeometry,
        options: &ConvertOptions,
    ) -> Result<Feature> {
        Ok(Feature {
            id: object.id.clone(),
            bbox: object.bbox.clone(),
            geometry: self.to_geometry_with(object, options)?,
            properties: object.properties.clone(),
        })
    }

    /// Converts the named object, or returns `None` if there is no such object.
    pub fn to_feature(&self, name: &str) -> Result<Option<Feature>> {
        self.object(name)
            .map(|object| self.object_to_feature(object, &ConvertOptions::default()))
            .transpose()
    }

    /// Converts every object with default options. See
    /// [`Topology::to_feature_collection_with`].
    pub fn to_feature_collection(&self) -> Result<FeatureCollection> {
        self.to_feature_collection_with(&ConvertOptions::default())
    }

    /// Converts every object, in object order, into one feature collection.
    ///
    /// Conversion is eager: the first object that fails aborts the whole
    /// collection.
    pub fn to_feature_collection_with(&self, options: &ConvertOptions) -> Result<FeatureCollection> {
        tracing::debug!(
            objects = self.object_count(),
            arcs = self.arc_count(),
            quantized = self.is_quantized(),
            "converting topology"
        );

        let features = self
            .objects()
            .map(|(_, object)| self.object_to_feature(object, options))
            .collect::<Result<Vec<_>>>()?;

        Ok(FeatureCollection {
            bbox: self.bbox.clone(),
            features,
        })
    }
}
