// ABOUTME: Nutrition table loading from flat CSV files
// ABOUTME: Tolerant row-by-row parsing that skips bad rows and never fails startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! Dataset loader for the nutrition table.
//!
//! Expected columns: `name, calories, proteins, fat, carbohydrate,
//! meal_time, image`. A missing file yields an empty table with a warning
//! rather than a startup failure, and individual unparseable rows are
//! skipped and counted; the service must always come up and answer.

use mealmatch_core::{FoodItem, MealTime, NutritionTable};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// One CSV row before validation
#[derive(Debug, Deserialize)]
struct RawFoodRecord {
    name: String,
    calories: f64,
    proteins: f64,
    fat: f64,
    carbohydrate: f64,
    meal_time: String,
    image: String,
}

impl RawFoodRecord {
    /// Validate and convert into a domain food item
    fn into_food_item(self) -> Result<FoodItem, String> {
        if self.name.trim().is_empty() {
            return Err("empty name".into());
        }
        let macros = [self.calories, self.proteins, self.fat, self.carbohydrate];
        if macros.iter().any(|value| !value.is_finite()) {
            return Err(format!("non-finite macro value in '{}'", self.name));
        }
        let meal_time: MealTime = self
            .meal_time
            .parse()
            .map_err(|_| format!("unknown meal_time '{}' in '{}'", self.meal_time, self.name))?;

        Ok(FoodItem {
            name: self.name,
            calories: self.calories,
            proteins: self.proteins,
            fat: self.fat,
            carbohydrate: self.carbohydrate,
            meal_time,
            image: self.image,
        })
    }
}

/// Load the nutrition table from a CSV file
///
/// Never fails: a missing or unreadable file produces an empty table, and
/// rows with missing fields, non-numeric macros, or unknown meal times are
/// skipped with a warning.
#[must_use]
pub fn load_nutrition_table(path: &Path) -> NutritionTable {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Nutrition dataset not found, starting with an empty table"
            );
            return NutritionTable::default();
        }
    };

    let mut items = Vec::new();
    let mut skipped = 0_usize;

    for record in reader.deserialize::<RawFoodRecord>() {
        match record {
            Ok(raw) => match raw.into_food_item() {
                Ok(item) => items.push(item),
                Err(reason) => {
                    skipped += 1;
                    warn!(reason = %reason, "Skipping invalid nutrition row");
                }
            },
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "Skipping unparseable nutrition row");
            }
        }
    }

    info!(
        path = %path.display(),
        rows = items.len(),
        skipped,
        "Loaded nutrition dataset"
    );
    NutritionTable::new(items)
}
