//! R-tree index (via `rstar`).
//!
//! Rebuilt from scratch each tick with `RTree::bulk_load`, which is
//! O(N log N) and produces a better-balanced tree than N inserts.  Best
//! suited to flocks that are very unevenly spread, where a fixed grid cell
//! size is a poor fit.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use fl_core::{AgentId, Vec2, is_finite};

use crate::SpatialIndex;
use crate::index::usable_radius;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, y]` point with its `AgentId`.
#[derive(Clone, Debug)]
struct AgentEntry {
    point: [f32; 2],
    id:    AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RTreeIndex ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct RTreeIndex {
    tree: RTree<AgentEntry>,
}

impl RTreeIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }
}

impl Default for RTreeIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialIndex for RTreeIndex {
    fn rebuild(&mut self, positions: &[Vec2]) {
        let entries: Vec<AgentEntry> = positions
            .iter()
            .enumerate()
            .filter(|(_, p)| is_finite(**p))
            .map(|(i, p)| AgentEntry {
                point: [p.x, p.y],
                id:    AgentId(i as u32),
            })
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    fn query_within(&self, center: Vec2, radius: f32, exclude: AgentId, out: &mut Vec<AgentId>) {
        if !usable_radius(radius) {
            return;
        }
        out.extend(
            self.tree
                .locate_within_distance([center.x, center.y], radius * radius)
                .filter(|e| e.id != exclude)
                .map(|e| e.id),
        );
    }

    fn len(&self) -> usize {
        self.tree.size()
    }
}
