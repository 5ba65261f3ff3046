// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion options.

/// What to do with a geometry object whose type tag is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownGeometry {
    /// Fail the conversion with [`crate::Error::UnsupportedGeometryType`].
    #[default]
    Error,
    /// Produce no geometry for the object and log a warning.
    Skip,
}

impl UnknownGeometry {
    /// Parses `"error"` or `"skip"` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" => Some(UnknownGeometry::Error),
            "skip" => Some(UnknownGeometry::Skip),
            _ => None,
        }
    }
}

/// Options controlling geometry composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub unknown_geometry: UnknownGeometry,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Silently omits geometries with unrecognized type tags.
    pub fn skip_unknown(mut self) -> Self {
        self.unknown_geometry = UnknownGeometry::Skip;
        self
    }
}
