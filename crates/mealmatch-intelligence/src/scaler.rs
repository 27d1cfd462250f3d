// ABOUTME: Fitted feature standardization for macro-nutrient vectors
// ABOUTME: Per-feature mean/population-stddev transform matching the search index fit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

use mealmatch_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Number of features in a macro vector: calories, proteins, fat, carbohydrate
pub const FEATURE_COUNT: usize = 4;

/// Fitted affine transform mapping raw macro vectors into the normalized
/// feature space the neighbor index was built with
///
/// Standardization: per-feature center = arithmetic mean, per-feature scale
/// = population standard deviation (divide by N). A constant feature gets a
/// scale of 1.0 so it maps to 0.0 instead of dividing by zero.
///
/// A scaler is only ever constructed together with the index fitted from
/// the same rows; see [`crate::model::RecommendationModel`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureScaler {
    means: [f64; FEATURE_COUNT],
    scales: [f64; FEATURE_COUNT],
}

impl FeatureScaler {
    /// Fit the transform against a non-empty population of macro vectors
    ///
    /// Returns `None` for an empty population; there is nothing to center
    /// against and the caller must treat the model as unavailable.
    #[must_use]
    pub fn fit(vectors: &[[f64; FEATURE_COUNT]]) -> Option<Self> {
        if vectors.is_empty() {
            return None;
        }

        let n = vectors.len() as f64;
        let mut means = [0.0; FEATURE_COUNT];
        for vector in vectors {
            for (mean, value) in means.iter_mut().zip(vector) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut scales = [0.0; FEATURE_COUNT];
        for vector in vectors {
            for ((scale, mean), value) in scales.iter_mut().zip(&means).zip(vector) {
                let centered = value - mean;
                *scale += centered * centered;
            }
        }
        for scale in &mut scales {
            *scale = (*scale / n).sqrt();
            // Constant column: scale by 1.0 so it standardizes to 0.0
            if *scale == 0.0 {
                *scale = 1.0;
            }
        }

        Some(Self { means, scales })
    }

    /// Map a raw macro vector into the scaled feature space
    ///
    /// # Errors
    ///
    /// Returns a validation error if any component is non-finite (NaN or
    /// infinity); such values would silently poison every distance the
    /// index computes.
    pub fn transform(&self, vector: [f64; FEATURE_COUNT]) -> AppResult<[f64; FEATURE_COUNT]> {
        if vector.iter().any(|value| !value.is_finite()) {
            return Err(AppError::invalid_input(
                "Macro values must be finite numbers",
            ));
        }

        let mut scaled = [0.0; FEATURE_COUNT];
        for (out, ((value, mean), scale)) in scaled
            .iter_mut()
            .zip(vector.iter().zip(&self.means).zip(&self.scales))
        {
            *out = (value - mean) / scale;
        }
        Ok(scaled)
    }
}
