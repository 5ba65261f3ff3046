// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for batch processing
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during batch processing
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to convert object {name:?}: {source}")]
    Object {
        name: String,
        #[source]
        source: topojson_lite_topology::Error,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("Topology error: {0}")]
    Topology(#[from] topojson_lite_topology::Error),
}
