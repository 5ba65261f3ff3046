// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Processing configuration loaded from environment variables.

use topojson_lite_topology::{ConvertOptions, UnknownGeometry};

/// How a batch reacts to an object that fails to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole batch with the first failure (in object order).
    #[default]
    FailFast,
    /// Log the failure, leave the object out and keep going.
    Skip,
}

impl ErrorPolicy {
    /// Parses `"fail-fast"`/`"fail_fast"` or `"skip"` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fail-fast" | "fail_fast" | "failfast" => Some(ErrorPolicy::FailFast),
            "skip" => Some(ErrorPolicy::Skip),
            _ => None,
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingConfig {
    /// Number of worker threads for parallel conversion.
    pub worker_threads: usize,
    /// Minimum object count before conversion goes parallel.
    pub parallel_threshold: usize,
    /// Per-object failure handling.
    pub error_policy: ErrorPolicy,
    /// Handling of unrecognized geometry types.
    pub unknown_geometry: UnknownGeometry,
}

impl ProcessingConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup. Missing or
    /// unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            worker_threads: lookup("TOPOJSON_WORKER_THREADS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or_else(num_cpus::get),
            parallel_threshold: lookup("TOPOJSON_PARALLEL_THRESHOLD")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(64),
            error_policy: lookup("TOPOJSON_ERROR_POLICY")
                .and_then(|v| ErrorPolicy::from_name(&v))
                .unwrap_or_default(),
            unknown_geometry: lookup("TOPOJSON_UNKNOWN_GEOMETRY")
                .and_then(|v| UnknownGeometry::from_name(&v))
                .unwrap_or_default(),
        }
    }

    /// Single-threaded, fail-fast configuration that ignores the environment.
    pub fn sequential() -> Self {
        Self {
            worker_threads: 1,
            parallel_threshold: usize::MAX,
            error_policy: ErrorPolicy::FailFast,
            unknown_geometry: UnknownGeometry::Error,
        }
    }

    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads.max(1);
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    pub fn with_unknown_geometry(mut self, unknown_geometry: UnknownGeometry) -> Self {
        self.unknown_geometry = unknown_geometry;
        self
    }

    /// Options handed to the geometry composer.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            unknown_geometry: self.unknown_geometry,
        }
    }

    /// Whether a batch of `object_count` objects should run in parallel.
    pub fn is_parallel_for(&self, object_count: usize) -> bool {
        self.worker_threads > 1 && object_count >= self.parallel_threshold
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
