// ABOUTME: Recommendation orchestrator composing scaling, search, and filtering
// ABOUTME: Macro and BMI entry points with meal-time filtering and random fallback sampling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

use crate::bmi::{bmi_category, compute_bmi, nutrition_target_for_bmi};
use crate::model::RecommendationModel;
use mealmatch_core::{
    AppError, AppResult, BmiCategory, MealTime, NutritionTable, NutritionTarget, RecommendedFood,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A caller-supplied macro-nutrient query
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroQuery {
    /// Target calories (kcal)
    pub calories: f64,
    /// Target protein (grams)
    pub proteins: f64,
    /// Target fat (grams)
    pub fat: f64,
    /// Target carbohydrates (grams)
    pub carbohydrate: f64,
}

impl MacroQuery {
    /// The query as a 4-dimensional macro vector
    #[must_use]
    pub const fn as_vector(&self) -> [f64; 4] {
        [self.calories, self.proteins, self.fat, self.carbohydrate]
    }
}

impl From<NutritionTarget> for MacroQuery {
    fn from(target: NutritionTarget) -> Self {
        Self {
            calories: target.calories,
            proteins: target.proteins,
            fat: target.fat,
            carbohydrate: target.carbohydrate,
        }
    }
}

/// Result of a BMI-based recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRecommendation {
    /// Body-mass index, rounded to two decimals
    pub bmi: f64,
    /// Display category for the BMI value
    pub category: BmiCategory,
    /// The nutrition target used as the search query
    pub target: NutritionTarget,
    /// Recommended foods for the requested meal time
    pub recommendations: Vec<RecommendedFood>,
}

/// The recommendation orchestrator
///
/// Owns the immutable nutrition table and the model fitted from it. Built
/// once at startup and shared read-only across all requests; every method
/// takes `&self` and the only mutable state is the caller's random source.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    table: NutritionTable,
    model: Option<RecommendationModel>,
    neighbor_count: usize,
    fallback_sample_size: usize,
}

impl RecommendationEngine {
    /// Build the engine, fitting the model from the given table
    ///
    /// An empty table yields an engine without a model; recommendation
    /// calls then fail closed with a model-unavailable error while the
    /// process itself stays up.
    #[must_use]
    pub fn new(table: NutritionTable, neighbor_count: usize, fallback_sample_size: usize) -> Self {
        let model = RecommendationModel::fit(&table);
        Self {
            table,
            model,
            neighbor_count,
            fallback_sample_size,
        }
    }

    /// The nutrition table this engine recommends from
    #[must_use]
    pub const fn table(&self) -> &NutritionTable {
        &self.table
    }

    /// Whether a fitted model is available
    #[must_use]
    pub const fn model_ready(&self) -> bool {
        self.model.is_some()
    }

    /// Recommend foods near an explicit macro-nutrient target
    ///
    /// Runs the nearest-neighbor search, keeps candidates matching the
    /// requested meal time in nearest-first order, and falls back to a
    /// uniform random sample (with replacement) from all rows of that meal
    /// time when no candidate matches.
    ///
    /// # Errors
    ///
    /// - validation error for non-finite macro values
    /// - model-unavailable error when no model could be fitted
    /// - not-found error when the table has no rows for the meal time
    pub fn recommend_by_macros<R: Rng>(
        &self,
        query: &MacroQuery,
        meal_time: MealTime,
        rng: &mut R,
    ) -> AppResult<Vec<RecommendedFood>> {
        let model = self.model.as_ref().ok_or_else(|| {
            AppError::model_unavailable("Recommendation model is not loaded; no nutrition data")
        })?;

        let candidates = model.nearest_rows(query.as_vector(), self.neighbor_count)?;

        let filtered: Vec<RecommendedFood> = candidates
            .iter()
            .filter_map(|neighbor| self.table.get(neighbor.row))
            .filter(|item| item.meal_time == meal_time)
            .map(RecommendedFood::from)
            .collect();

        if !filtered.is_empty() {
            return Ok(filtered);
        }

        debug!(
            meal_time = %meal_time,
            "No neighbor matched the requested meal time, sampling fallback"
        );
        self.sample_fallback(meal_time, rng)
    }

    /// Recommend foods for a user described by body measurements
    ///
    /// Derives BMI, maps it to a canonical nutrition target, and delegates
    /// to the macro-based search with that target as the query.
    ///
    /// # Errors
    ///
    /// Same as [`Self::recommend_by_macros`], plus a validation error for
    /// non-positive weight or height.
    pub fn recommend_by_bmi<R: Rng>(
        &self,
        weight_kg: f64,
        height_cm: f64,
        meal_time: MealTime,
        rng: &mut R,
    ) -> AppResult<BmiRecommendation> {
        let bmi = compute_bmi(weight_kg, height_cm)?;
        let target = nutrition_target_for_bmi(bmi);
        let category = bmi_category(bmi);

        let recommendations = self.recommend_by_macros(&target.into(), meal_time, rng)?;

        Ok(BmiRecommendation {
            bmi: (bmi * 100.0).round() / 100.0,
            category,
            target,
            recommendations,
        })
    }

    /// Uniform sample with replacement from all rows of the given meal time
    fn sample_fallback<R: Rng>(
        &self,
        meal_time: MealTime,
        rng: &mut R,
    ) -> AppResult<Vec<RecommendedFood>> {
        let pool = self.table.rows_for_meal_time(meal_time);
        if pool.is_empty() {
            return Err(AppError::not_found(format!(
                "No food data available for meal time {meal_time}"
            )));
        }

        Ok((0..self.fallback_sample_size)
            .filter_map(|_| {
                let row = pool[rng.gen_range(0..pool.len())];
                self.table.get(row).map(RecommendedFood::from)
            })
            .collect())
    }
}
