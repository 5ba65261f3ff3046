// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for topology decoding.

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a topology.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An arc reference resolved to an index outside the arc store.
    #[error("arc reference {reference} resolves to index {index}, but the topology has {arc_count} arcs")]
    OutOfRangeArc {
        reference: i64,
        index: u64,
        arc_count: usize,
    },

    /// A geometry object carries a type tag that is not one of the seven
    /// recognized geometry types.
    #[error("unsupported geometry type: {0:?}")]
    UnsupportedGeometryType(String),

    /// A delta-encoded arc position has fewer than two components.
    #[error("malformed arc position: expected at least 2 components, found {len}")]
    MalformedPosition { len: usize },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_reference_and_index() {
        let err = Error::OutOfRangeArc {
            reference: -4,
            index: 3,
            arc_count: 2,
        };
        assert_eq!(
            err.to_string(),
            "arc reference -4 resolves to index 3, but the topology has 2 arcs"
        );
    }

    #[test]
    fn unsupported_type_message() {
        let err = Error::UnsupportedGeometryType("Sphere".to_string());
        assert_eq!(err.to_string(), "unsupported geometry type: \"Sphere\"");
    }
}
