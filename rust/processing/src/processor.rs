// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology conversion service with parallel per-object decoding.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use topojson_lite_topology::{
    ConvertOptions, Feature, FeatureCollection, TopoGeometry, Topology,
};

use crate::config::{ErrorPolicy, ProcessingConfig};
use crate::error::{Error, Result};

/// Result of converting a topology.
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub collection: FeatureCollection,
    pub stats: ProcessingStats,
}

/// Counters collected while converting a topology.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessingStats {
    /// Objects in the topology.
    pub total_objects: usize,
    /// Objects that produced a feature (with or without geometry).
    pub converted: usize,
    /// Converted objects whose geometry was null or skipped.
    pub empty: usize,
    /// Names of objects dropped under [`ErrorPolicy::Skip`].
    pub skipped: Vec<String>,
    /// Output positions across all features.
    pub positions: usize,
    /// Features per top-level geometry type.
    pub geometry_counts: FxHashMap<&'static str, usize>,
    /// Whether the batch ran on the worker pool.
    pub parallel: bool,
    pub elapsed_ms: u64,
}

type Outcome<'a> = (&'a str, topojson_lite_topology::Result<Feature>);

/// Converts every object of `topology` into a feature collection.
///
/// Features follow the topology's object order whether or not the batch runs
/// in parallel.
pub fn convert(topology: &Topology, config: &ProcessingConfig) -> Result<ProcessingResult> {
    let start = std::time::Instant::now();
    let options = config.convert_options();
    let objects: Vec<(&str, &TopoGeometry)> = topology.objects().collect();
    let parallel = config.is_parallel_for(objects.len());

    tracing::info!(
        objects = objects.len(),
        arcs = topology.arc_count(),
        quantized = topology.is_quantized(),
        parallel,
        "Starting topology conversion"
    );

    let outcomes: Vec<Outcome<'_>> = if parallel {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_threads)
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?;
        pool.install(|| {
            objects
                .par_iter()
                .map(|&(name, object)| convert_object(topology, name, object, &options))
                .collect()
        })
    } else {
        objects
            .iter()
            .map(|&(name, object)| convert_object(topology, name, object, &options))
            .collect()
    };

    let mut stats = ProcessingStats {
        total_objects: objects.len(),
        parallel,
        ..ProcessingStats::default()
    };
    let mut features = Vec::with_capacity(outcomes.len());

    for (name, outcome) in outcomes {
        match outcome {
            Ok(feature) => {
                stats.record(&feature);
                features.push(feature);
            }
            Err(source) => match config.error_policy {
                ErrorPolicy::FailFast => {
                    return Err(Error::Object {
                        name: name.to_string(),
                        source,
                    });
                }
                ErrorPolicy::Skip => {
                    tracing::warn!(object = name, error = %source, "Skipping object that failed to convert");
                    stats.skipped.push(name.to_string());
                }
            },
        }
    }

    stats.elapsed_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        converted = stats.converted,
        empty = stats.empty,
        skipped = stats.skipped.len(),
        positions = stats.positions,
        elapsed_ms = stats.elapsed_ms,
        "Topology conversion complete"
    );

    Ok(ProcessingResult {
        collection: FeatureCollection {
            bbox: topology.bbox().map(<[f64]>::to_vec),
            features,
        },
        stats,
    })
}

/// Parses a TopoJSON document, converts it and returns GeoJSON text.
pub fn convert_json(json: &str, config: &ProcessingConfig) -> Result<String> {
    let topology = Topology::from_json(json)?;
    let result = convert(&topology, config)?;
    Ok(result.collection.to_json()?)
}

fn convert_object<'a>(
    topology: &Topology,
    name: &'a str,
    object: &TopoGeometry,
    options: &ConvertOptions,
) -> Outcome<'a> {
    (name, topology.object_to_feature(object, options))
}

impl ProcessingStats {
    fn record(&mut self, feature: &Feature) {
        self.converted += 1;
        match &feature.geometry {
            Some(geometry) => {
                self.positions += geometry.position_count();
                *self
                    .geometry_counts
                    .entry(geometry.geometry_type().as_str())
                    .or_default() += 1;
            }
            None => self.empty += 1,
        }
    }
}
