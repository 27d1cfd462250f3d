// ABOUTME: k-nearest-neighbor search over scaled macro vectors
// ABOUTME: Exhaustive Euclidean lookup with deterministic tie-breaking by row order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

use crate::scaler::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

/// A single search result: a table row and its distance from the query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Row position in the nutrition table
    pub row: usize,
    /// Euclidean distance from the query, in scaled space
    pub distance: f64,
}

/// Pre-built spatial index over the scaled feature vectors of every table row
///
/// Built once at startup and never updated. Lookups are exhaustive scans;
/// the tables this serves are small enough (hundreds to low thousands of
/// rows) that an exact scan beats any tree structure once cache effects
/// are counted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborIndex {
    points: Vec<[f64; FEATURE_COUNT]>,
}

impl NeighborIndex {
    /// Build the index from already-scaled row vectors, one per table row
    #[must_use]
    pub fn new(points: Vec<[f64; FEATURE_COUNT]>) -> Self {
        Self { points }
    }

    /// Number of indexed rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the index holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The k nearest rows to a scaled query vector
    ///
    /// Results are ordered by ascending distance; equal distances break
    /// ties by ascending row position. Requesting more neighbors than the
    /// index holds returns every row rather than failing.
    #[must_use]
    pub fn nearest(&self, query: [f64; FEATURE_COUNT], k: usize) -> Vec<Neighbor> {
        let mut neighbors: Vec<Neighbor> = self
            .points
            .iter()
            .enumerate()
            .map(|(row, point)| Neighbor {
                row,
                distance: euclidean_distance(query, *point),
            })
            .collect();

        // total_cmp keeps the sort deterministic even for degenerate floats;
        // row order settles exact-distance ties
        neighbors.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.row.cmp(&b.row))
        });
        neighbors.truncate(k.min(self.points.len()));
        neighbors
    }
}

/// Euclidean distance between two points in scaled feature space
fn euclidean_distance(a: [f64; FEATURE_COUNT], b: [f64; FEATURE_COUNT]) -> f64 {
    a.iter()
        .zip(&b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn unit_index() -> NeighborIndex {
        NeighborIndex::new(vec![
            [0.0, 0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [3.0, 0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
        ])
    }

    #[test]
    fn test_nearest_sorted_by_distance() {
        let neighbors = unit_index().nearest([0.0, 0.0, 0.0, 0.0], 4);
        let distances: Vec<f64> = neighbors.iter().map(|n| n.distance).collect();
        for pair in distances.windows(2) {
            assert!(pair[0] <= pair[1], "distances must be non-decreasing");
        }
        assert_eq!(neighbors[0].row, 0);
    }

    #[test]
    fn test_ties_break_by_row_order() {
        // Rows 1 and 3 are both at distance 1.0
        let neighbors = unit_index().nearest([0.0, 0.0, 0.0, 0.0], 3);
        assert_eq!(neighbors[1].row, 1);
        assert_eq!(neighbors[2].row, 3);
    }

    #[test]
    fn test_k_clamped_to_index_size() {
        let neighbors = unit_index().nearest([0.0, 0.0, 0.0, 0.0], 100);
        assert_eq!(neighbors.len(), 4);
    }

    #[test]
    fn test_distance_is_euclidean() {
        let index = NeighborIndex::new(vec![[3.0, 4.0, 0.0, 0.0]]);
        let neighbors = index.nearest([0.0, 0.0, 0.0, 0.0], 1);
        assert!((neighbors[0].distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_index_returns_nothing() {
        let index = NeighborIndex::new(Vec::new());
        assert!(index.nearest([0.0, 0.0, 0.0, 0.0], 5).is_empty());
    }
}
