// ABOUTME: BMI computation, categorization, and nutrition-target lookup
// ABOUTME: Two deliberately independent boundary tables for display vs target selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! BMI-to-nutrition-target mapping.
//!
//! Two boundary tables live here and they are NOT the same:
//!
//! - [`bmi_category`] produces the display label with boundaries at
//!   18.5 / 25 / 30.
//! - [`nutrition_target_for_bmi`] selects the recommendation target with
//!   its own boundaries at 18.5 / 24.9 / 25 / 29.9, so the ranges
//!   [24.9, 25) and [29.9, ∞) both fall through to the obesity target.
//!
//! The mismatch is inherited behavior clients already depend on; a
//! borderline BMI may be labeled "Normal weight" while receiving the
//! obesity target. Do not unify the tables.

use mealmatch_core::{AppError, AppResult, BmiCategory, NutritionTarget};

/// Body-mass index from weight in kilograms and height in centimeters
///
/// # Errors
///
/// Returns a validation error if either measurement is non-positive or
/// non-finite.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(AppError::invalid_input(
            "Weight and height must be positive values",
        ));
    }
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Display category for a BMI value (boundaries 18.5 / 25 / 30)
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

/// Canonical nutrition target for a BMI category
#[must_use]
pub const fn nutrition_target_for(category: BmiCategory) -> NutritionTarget {
    match category {
        BmiCategory::Underweight => NutritionTarget {
            calories: 500.0,
            proteins: 20.0,
            fat: 15.0,
            carbohydrate: 60.0,
        },
        BmiCategory::Normal => NutritionTarget {
            calories: 300.0,
            proteins: 15.0,
            fat: 10.0,
            carbohydrate: 50.0,
        },
        BmiCategory::Overweight => NutritionTarget {
            calories: 250.0,
            proteins: 20.0,
            fat: 8.0,
            carbohydrate: 40.0,
        },
        BmiCategory::Obesity => NutritionTarget {
            calories: 200.0,
            proteins: 18.0,
            fat: 5.0,
            carbohydrate: 30.0,
        },
    }
}

/// Nutrition target for a BMI value, using the target table's own boundaries
///
/// Boundaries here are 18.5 / 24.9 / 25 / 29.9, not the display
/// category's 18.5 / 25 / 30 (see module docs).
#[must_use]
pub fn nutrition_target_for_bmi(bmi: f64) -> NutritionTarget {
    if bmi < 18.5 {
        nutrition_target_for(BmiCategory::Underweight)
    } else if bmi < 24.9 {
        nutrition_target_for(BmiCategory::Normal)
    } else if (25.0..29.9).contains(&bmi) {
        nutrition_target_for(BmiCategory::Overweight)
    } else {
        nutrition_target_for(BmiCategory::Obesity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-3;

    #[test]
    fn test_compute_bmi_formula() {
        let bmi = compute_bmi(70.0, 175.0).unwrap();
        assert!((bmi - 22.857).abs() < EPS, "70kg/175cm should be ~22.857, got {bmi}");
    }

    #[test]
    fn test_compute_bmi_rejects_non_positive() {
        assert!(compute_bmi(0.0, 175.0).is_err());
        assert!(compute_bmi(70.0, 0.0).is_err());
        assert!(compute_bmi(-5.0, 175.0).is_err());
        assert!(compute_bmi(f64::NAN, 175.0).is_err());
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(bmi_category(17.0), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(24.9), BmiCategory::Normal);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.99), BmiCategory::Overweight);
        assert_eq!(bmi_category(31.0), BmiCategory::Obesity);
    }

    #[test]
    fn test_target_values() {
        let underweight = nutrition_target_for(BmiCategory::Underweight);
        assert_eq!(underweight.as_vector(), [500.0, 20.0, 15.0, 60.0]);
        let normal = nutrition_target_for(BmiCategory::Normal);
        assert_eq!(normal.as_vector(), [300.0, 15.0, 10.0, 50.0]);
        let overweight = nutrition_target_for(BmiCategory::Overweight);
        assert_eq!(overweight.as_vector(), [250.0, 20.0, 8.0, 40.0]);
        let obesity = nutrition_target_for(BmiCategory::Obesity);
        assert_eq!(obesity.as_vector(), [200.0, 18.0, 5.0, 30.0]);
    }

    #[test]
    fn test_target_table_has_its_own_boundaries() {
        // 24.95 sits in the [24.9, 25) gap: labeled Normal, but the target
        // table falls through to the obesity target
        assert_eq!(bmi_category(24.95), BmiCategory::Normal);
        assert_eq!(
            nutrition_target_for_bmi(24.95),
            nutrition_target_for(BmiCategory::Obesity)
        );

        // 29.95 similarly: labeled Overweight, obesity target
        assert_eq!(bmi_category(29.95), BmiCategory::Overweight);
        assert_eq!(
            nutrition_target_for_bmi(29.95),
            nutrition_target_for(BmiCategory::Obesity)
        );

        assert_eq!(
            nutrition_target_for_bmi(22.0),
            nutrition_target_for(BmiCategory::Normal)
        );
        assert_eq!(
            nutrition_target_for_bmi(27.0),
            nutrition_target_for(BmiCategory::Overweight)
        );
        assert_eq!(
            nutrition_target_for_bmi(17.0),
            nutrition_target_for(BmiCategory::Underweight)
        );
    }
}
