//! Uniform hash grid.
//!
//! Space is cut into square cells of side `cell_size`; each occupied cell
//! holds the agents inside it.  A query visits only the cells overlapping
//! the query circle's bounding box, then filters by exact distance.
//!
//! Choose `cell_size` close to the vision radius: smaller cells mean more
//! cells per query, larger cells mean more false candidates per cell.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use fl_core::{AgentId, Vec2, is_finite};

use crate::index::usable_radius;
use crate::{SpatialError, SpatialIndex, SpatialResult};

type CellKey = (i32, i32);

/// Hash grid keyed by integer cell coordinates.
#[derive(Clone, Debug)]
pub struct GridIndex {
    cell_size: f32,
    inv_cell:  f32,
    cells:     HashMap<CellKey, Vec<(AgentId, Vec2)>>,
    len:       usize,
}

impl GridIndex {
    /// Create an empty grid.  `cell_size` must be finite and positive.
    pub fn new(cell_size: f32) -> SpatialResult<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SpatialError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            cell_size,
            inv_cell: 1.0 / cell_size,
            cells:    HashMap::default(),
            len:      0,
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of non-empty cells after the last rebuild.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn cell_of(&self, p: Vec2) -> CellKey {
        ((p.x * self.inv_cell).floor() as i32, (p.y * self.inv_cell).floor() as i32)
    }
}

impl SpatialIndex for GridIndex {
    fn rebuild(&mut self, positions: &[Vec2]) {
        // Keep bucket allocations across ticks; drop only the ones left empty.
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
        self.len = 0;
        for (i, &p) in positions.iter().enumerate() {
            if !is_finite(p) {
                continue;
            }
            let key = self.cell_of(p);
            self.cells.entry(key).or_default().push((AgentId(i as u32), p));
            self.len += 1;
        }
        self.cells.retain(|_, bucket| !bucket.is_empty());
    }

    fn query_within(&self, center: Vec2, radius: f32, exclude: AgentId, out: &mut Vec<AgentId>) {
        if !usable_radius(radius) {
            return;
        }
        let radius_sq = radius * radius;
        let mut visit = |bucket: &Vec<(AgentId, Vec2)>| {
            out.extend(
                bucket
                    .iter()
                    .filter(|(id, p)| *id != exclude && p.distance_squared(center) <= radius_sq)
                    .map(|(id, _)| *id),
            );
        };

        let (x0, y0) = self.cell_of(center - Vec2::splat(radius));
        let (x1, y1) = self.cell_of(center + Vec2::splat(radius));
        let span = (i64::from(x1) - i64::from(x0) + 1) * (i64::from(y1) - i64::from(y0) + 1);

        // A query box covering more cells than are occupied is cheaper to
        // answer by walking the occupied cells directly.
        if span > self.cells.len() as i64 {
            for bucket in self.cells.values() {
                visit(bucket);
            }
            return;
        }

        for cx in x0..=x1 {
            for cy in y0..=y1 {
                if let Some(bucket) = self.cells.get(&(cx, cy)) {
                    visit(bucket);
                }
            }
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}
