// ABOUTME: Core data models for the MealMatch recommendation service
// ABOUTME: Re-exports FoodItem, MealTime, NutritionTable and BMI-related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! # Data Models
//!
//! Core data structures used throughout the MealMatch service.
//!
//! ## Design Principles
//!
//! - **Immutable**: the nutrition table is loaded once and never mutated
//! - **Serializable**: all models support JSON serialization for the API
//! - **Type Safe**: meal times and BMI categories are closed enums, not strings

// Domain modules
mod bmi;
mod food;

pub use bmi::{BmiCategory, NutritionTarget};
pub use food::{FoodItem, MealTime, NutritionTable, RecommendedFood};
