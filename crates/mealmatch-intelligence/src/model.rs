// ABOUTME: Bound feature-scaler and neighbor-index pair fitted from one table
// ABOUTME: Single constructor makes a mismatched scaler/index combination unrepresentable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

use crate::neighbors::{Neighbor, NeighborIndex};
use crate::scaler::FeatureScaler;
use mealmatch_core::{AppResult, NutritionTable};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The fitted scaler and the index built from the same fit, as one value
///
/// A scaler applied to an index built from a different table is a
/// correctness bug, not a style problem: distances come out of the wrong
/// coordinate system and every recommendation is silently wrong. The only
/// way to obtain either half is [`RecommendationModel::fit`], which
/// derives both from the same rows in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationModel {
    scaler: FeatureScaler,
    index: NeighborIndex,
}

impl RecommendationModel {
    /// Fit the scaler and build the index from one nutrition table
    ///
    /// Returns `None` for an empty table; recommendation operations must
    /// then fail closed with a model-unavailable outcome.
    #[must_use]
    pub fn fit(table: &NutritionTable) -> Option<Self> {
        let vectors = table.macro_vectors();
        let scaler = FeatureScaler::fit(&vectors)?;

        // Fitting produced finite parameters from these same rows, so the
        // per-row transform cannot fail
        let points = vectors
            .into_iter()
            .filter_map(|vector| scaler.transform(vector).ok())
            .collect::<Vec<_>>();
        let index = NeighborIndex::new(points);

        info!(rows = index.len(), "Fitted recommendation model");
        Some(Self { scaler, index })
    }

    /// Scale a raw macro query and return its k nearest table rows
    ///
    /// # Errors
    ///
    /// Returns a validation error if the query contains non-finite values.
    pub fn nearest_rows(&self, query: [f64; 4], k: usize) -> AppResult<Vec<Neighbor>> {
        let scaled = self.scaler.transform(query)?;
        Ok(self.index.nearest(scaled, k))
    }

    /// Number of rows the model was fitted against
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.index.len()
    }
}
