// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch conversion of TopoJSON topologies into GeoJSON feature collections.
//!
//! Top-level objects are independent once the topology is loaded, so large
//! documents are converted in parallel on a rayon pool. Every worker reads the
//! same `&Topology` and builds its own output tree.

pub mod config;
pub mod error;
pub mod processor;

pub use config::{ErrorPolicy, ProcessingConfig};
pub use error::{Error, Result};
pub use processor::{convert, convert_json, ProcessingResult, ProcessingStats};
