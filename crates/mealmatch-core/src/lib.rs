// ABOUTME: Foundation crate for the MealMatch recommendation platform
// ABOUTME: Exposes domain models and the unified error system shared by all crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! # MealMatch Core
//!
//! Foundation crate holding the domain model (food items, meal times, BMI
//! categories, nutrition targets) and the unified error system used across
//! the MealMatch workspace. The heavier recommendation logic lives in
//! `mealmatch-intelligence`; the HTTP surface lives in the server crate.

/// Unified error handling system (error codes, `AppError`, HTTP mapping)
pub mod errors;
/// Domain models: food items, nutrition table, meal times, BMI categories
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use models::{
    BmiCategory, FoodItem, MealTime, NutritionTable, NutritionTarget, RecommendedFood,
};
