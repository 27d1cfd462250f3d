// ABOUTME: BMI category and nutrition target models for body-measurement queries
// ABOUTME: BmiCategory enum with display labels and the NutritionTarget macro vector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI category derived from a body-mass index value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 and above
    Obesity,
}

impl BmiCategory {
    /// Human-readable category label shown to API callers
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical macro-nutrient target used as a recommendation query
///
/// Stands in for an explicit macro vector when the caller supplies body
/// measurements instead of nutrition values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionTarget {
    /// Target calories (kcal)
    pub calories: f64,
    /// Target protein (grams)
    pub proteins: f64,
    /// Target fat (grams)
    pub fat: f64,
    /// Target carbohydrates (grams)
    pub carbohydrate: f64,
}

impl NutritionTarget {
    /// The target as a 4-dimensional macro vector
    #[must_use]
    pub const fn as_vector(&self) -> [f64; 4] {
        [self.calories, self.proteins, self.fat, self.carbohydrate]
    }
}
