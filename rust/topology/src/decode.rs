// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc decoding.
//!
//! Turns signed arc references into absolute coordinate sequences. Stored arcs
//! are never modified: every decode works on a copy, so the same arc can be
//! decoded forward, reversed, or from several threads at once.
//!
//! When the topology is quantized, arc positions are delta-encoded. The first
//! position is absolute in quantized space and each following one is an
//! offset from its predecessor. Deltas are always accumulated in stored order;
//! reversal is applied to the decoded result.

use crate::arena::Topology;
use crate::error::{Error, Result};
use crate::geometry::Position;
use crate::keys::{resolve_arc_ref, ArcRef, Direction};

/// Minimum number of positions in a closed ring.
pub const MIN_RING_LEN: usize = 4;

impl Topology {
    /// Decodes a single arc reference into absolute positions, reversed if
    /// the reference is negative.
    ///
    /// Returns [`Error::OutOfRangeArc`] if the reference does not resolve to a
    /// stored arc.
    pub fn decode_arc(&self, reference: ArcRef) -> Result<Vec<Position>> {
        let (index, direction) = resolve_arc_ref(reference);
        let arc = usize::try_from(index)
            .ok()
            .and_then(|i| self.arcs.get(i))
            .ok_or(Error::OutOfRangeArc {
                reference,
                index,
                arc_count: self.arcs.len(),
            })?;

        let mut points = self.decode_arc_points(arc)?;
        if direction == Direction::Reversed {
            points.reverse();
        }
        Ok(points)
    }

    /// Decodes a line from a list of arc references, concatenating arcs in
    /// reference order.
    ///
    /// With `ring` set, the result is closed: padded with its first position
    /// up to [`MIN_RING_LEN`] and terminated by a copy of the first position.
    pub fn decode_line(&self, refs: &[ArcRef], ring: bool) -> Result<Vec<Position>> {
        let mut line = Vec::new();
        for &reference in refs {
            line.extend(self.decode_arc(reference)?);
        }
        if ring {
            self.close_ring(&mut line);
        }
        Ok(line)
    }

    /// Decodes several lines (or rings) independently, preserving order.
    pub fn decode_lines(&self, lines: &[Vec<ArcRef>], ring: bool) -> Result<Vec<Vec<Position>>> {
        lines
            .iter()
            .map(|refs| self.decode_line(refs, ring))
            .collect()
    }

    /// Copies a stored arc into absolute coordinates, in stored order.
    fn decode_arc_points(&self, arc: &[Position]) -> Result<Vec<Position>> {
        let Some(transform) = &self.transform else {
            return Ok(arc.to_vec());
        };

        let (mut x, mut y) = (0.0, 0.0);
        arc.iter()
            .map(|delta| {
                if delta.len() < 2 {
                    return Err(Error::MalformedPosition { len: delta.len() });
                }
                x += delta[0];
                y += delta[1];

                let mut point = delta.clone();
                point[0] = transform.apply_axis(0, x);
                point[1] = transform.apply_axis(1, y);
                Ok(point)
            })
            .collect()
    }

    /// Pads and closes a ring. Equality of the endpoints is exact.
    ///
    /// An empty ring has no first position to repeat, so it degenerates to the
    /// decoded origin.
    fn close_ring(&self, ring: &mut Vec<Position>) {
        let first = match ring.first() {
            Some(p) => p.clone(),
            None => self.apply_point(&[0.0, 0.0]),
        };
        while ring.len() < MIN_RING_LEN {
            ring.push(first.clone());
        }
        if ring.last() != Some(&first) {
            ring.push(first);
        }
    }
}
