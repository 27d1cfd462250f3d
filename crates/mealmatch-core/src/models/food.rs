// ABOUTME: Food item and nutrition table models for the recommendation engine
// ABOUTME: FoodItem, MealTime, NutritionTable, and RecommendedFood definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meal time tag carried by every food item
///
/// Used as a hard filter on recommendations: a request for `Morning` only
/// ever returns items tagged `Morning`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealTime {
    /// Breakfast-time foods
    Morning,
    /// Lunch-time foods
    Midday,
    /// Dinner-time foods
    Evening,
}

impl MealTime {
    /// All meal time values, in canonical order
    pub const ALL: [Self; 3] = [Self::Morning, Self::Midday, Self::Evening];

    /// Wire/CSV label for this meal time
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Midday => "Midday",
            Self::Evening => "Evening",
        }
    }
}

impl FromStr for MealTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" => Ok(Self::Morning),
            "Midday" => Ok(Self::Midday),
            "Evening" => Ok(Self::Evening),
            other => Err(AppError::invalid_input(format!(
                "Invalid meal_time '{other}'. Choose from 'Morning', 'Midday', or 'Evening'"
            ))),
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of the nutrition table
///
/// Identity is the row position in the table; items are immutable once
/// loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Calories per serving (kcal)
    pub calories: f64,
    /// Protein per serving (grams)
    pub proteins: f64,
    /// Fat per serving (grams)
    pub fat: f64,
    /// Carbohydrates per serving (grams)
    pub carbohydrate: f64,
    /// Meal time this food is served at
    pub meal_time: MealTime,
    /// Image reference (URL or asset path)
    pub image: String,
}

impl FoodItem {
    /// The 4-dimensional macro vector used for similarity search
    #[must_use]
    pub const fn macro_vector(&self) -> [f64; 4] {
        [self.calories, self.proteins, self.fat, self.carbohydrate]
    }
}

/// Immutable, in-memory tabular dataset of food items
///
/// Loaded once at process start and shared read-only across all requests.
/// An empty table is a valid state (the data source was missing or held no
/// parseable rows); recommendation operations then fail closed instead of
/// the process refusing to start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionTable {
    items: Vec<FoodItem>,
}

impl NutritionTable {
    /// Build a table from already-validated food items
    #[must_use]
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// Number of rows in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Row lookup by position
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&FoodItem> {
        self.items.get(row)
    }

    /// Iterate all rows in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, FoodItem> {
        self.items.iter()
    }

    /// All rows as a slice
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Row indices of every item tagged with the given meal time
    #[must_use]
    pub fn rows_for_meal_time(&self, meal_time: MealTime) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.meal_time == meal_time)
            .map(|(row, _)| row)
            .collect()
    }

    /// Macro vectors of every row, in row order
    #[must_use]
    pub fn macro_vectors(&self) -> Vec<[f64; 4]> {
        self.items.iter().map(FoodItem::macro_vector).collect()
    }
}

impl<'a> IntoIterator for &'a NutritionTable {
    type Item = &'a FoodItem;
    type IntoIter = std::slice::Iter<'a, FoodItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Projection of a food item returned to API callers
///
/// Drops the meal time tag (implied by the request) and keeps the fields
/// a client renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedFood {
    /// Food name
    pub name: String,
    /// Calories per serving (kcal)
    pub calories: f64,
    /// Protein per serving (grams)
    pub proteins: f64,
    /// Fat per serving (grams)
    pub fat: f64,
    /// Carbohydrates per serving (grams)
    pub carbohydrate: f64,
    /// Image reference
    pub image: String,
}

impl From<&FoodItem> for RecommendedFood {
    fn from(item: &FoodItem) -> Self {
        Self {
            name: item.name.clone(),
            calories: item.calories,
            proteins: item.proteins,
            fat: item.fat,
            carbohydrate: item.carbohydrate,
            image: item.image.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn item(name: &str, meal_time: MealTime) -> FoodItem {
        FoodItem {
            name: name.into(),
            calories: 100.0,
            proteins: 10.0,
            fat: 5.0,
            carbohydrate: 20.0,
            meal_time,
            image: format!("{name}.jpg"),
        }
    }

    #[test]
    fn test_meal_time_round_trip() {
        for meal_time in MealTime::ALL {
            assert_eq!(meal_time.as_str().parse::<MealTime>().unwrap(), meal_time);
        }
    }

    #[test]
    fn test_meal_time_rejects_unknown_label() {
        let err = "Brunch".parse::<MealTime>().unwrap_err();
        assert!(err.message.contains("Invalid meal_time"));
        assert!(err.message.contains("Brunch"));
    }

    #[test]
    fn test_rows_for_meal_time_preserves_order() {
        let table = NutritionTable::new(vec![
            item("a", MealTime::Morning),
            item("b", MealTime::Evening),
            item("c", MealTime::Morning),
        ]);
        assert_eq!(table.rows_for_meal_time(MealTime::Morning), vec![0, 2]);
        assert_eq!(table.rows_for_meal_time(MealTime::Midday), Vec::<usize>::new());
    }

    #[test]
    fn test_recommended_food_projection() {
        let source = item("nasi goreng", MealTime::Evening);
        let projected = RecommendedFood::from(&source);
        assert_eq!(projected.name, "nasi goreng");
        assert_eq!(projected.image, "nasi goreng.jpg");
        assert!((projected.calories - 100.0).abs() < f64::EPSILON);
    }
}
