// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Quantization transform.
//!
//! A quantized topology stores integer-like coordinates together with a
//! per-axis scale and translate. Only the first two components (x, y) are
//! transformed; any further components (elevation, measures) pass through.

use serde::{Deserialize, Serialize};

use crate::arena::Topology;
use crate::geometry::Position;

/// Per-axis linear scale and translate, `[x, y]` each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

impl Transform {
    /// Creates a transform from per-axis scale and translate.
    pub fn new(scale: [f64; 2], translate: [f64; 2]) -> Self {
        Self { scale, translate }
    }

    /// Maps one quantized axis value to its real coordinate.
    #[inline]
    pub fn apply_axis(&self, axis: usize, value: f64) -> f64 {
        value * self.scale[axis] + self.translate[axis]
    }

    /// Transforms a standalone (non delta-encoded) position.
    ///
    /// Positions shorter than two components transform only what they have.
    pub fn apply(&self, raw: &[f64]) -> Position {
        raw.iter()
            .enumerate()
            .map(|(i, &v)| if i < 2 { self.apply_axis(i, v) } else { v })
            .collect()
    }
}

impl Topology {
    /// Applies the topology's transform to a standalone position, or returns
    /// it unchanged when the topology is not quantized.
    pub fn apply_point(&self, raw: &[f64]) -> Position {
        match &self.transform {
            Some(t) => t.apply(raw),
            None => raw.to_vec(),
        }
    }
}
