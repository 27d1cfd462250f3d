// ABOUTME: Recommendation engine crate for the MealMatch platform
// ABOUTME: Feature scaling, nearest-neighbor search, BMI mapping, and the orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! # MealMatch Intelligence
//!
//! The recommendation engine: everything between a caller's query and the
//! list of recommended foods.
//!
//! - [`scaler`]: fitted per-feature standardization of macro vectors
//! - [`neighbors`]: exhaustive k-nearest-neighbor search in scaled space
//! - [`bmi`]: BMI computation, categorization, and nutrition-target lookup
//! - [`model`]: the bound scaler/index pair fitted from one table
//! - [`engine`]: the orchestrator composing all of the above
//!
//! All operations here are synchronous, allocation-light computations over
//! immutable inputs; the only non-determinism is the injectable random
//! source used for fallback sampling.

/// BMI computation, categorization, and nutrition-target lookup
pub mod bmi;
/// Recommendation orchestrator
pub mod engine;
/// Bound feature-scaler/neighbor-index pair
pub mod model;
/// k-nearest-neighbor search over scaled macro vectors
pub mod neighbors;
/// Fitted feature standardization
pub mod scaler;

pub use bmi::{bmi_category, compute_bmi, nutrition_target_for, nutrition_target_for_bmi};
pub use engine::{BmiRecommendation, MacroQuery, RecommendationEngine};
pub use model::RecommendationModel;
pub use neighbors::{Neighbor, NeighborIndex};
pub use scaler::FeatureScaler;
