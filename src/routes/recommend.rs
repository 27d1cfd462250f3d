// ABOUTME: Recommendation route handlers for macro-based and BMI-based queries
// ABOUTME: Validates request fields, delegates to the engine, and shapes JSON responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! Recommendation routes
//!
//! Two entry points producing the same result shape: `POST
//! /recommend/nutrition` takes an explicit macro target, `POST
//! /recommend/bmi` derives one from body measurements and additionally
//! reports the BMI value, category label, and target used.

use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use mealmatch_core::{AppError, MealTime};
use mealmatch_intelligence::MacroQuery;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Request body for `POST /recommend/nutrition`
///
/// Fields are optional at the serde layer so a missing one produces the
/// canonical "Missing required field" validation error instead of a
/// deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct NutritionRecommendationRequest {
    /// Target calories (kcal)
    pub calories: Option<f64>,
    /// Target protein (grams)
    pub proteins: Option<f64>,
    /// Target fat (grams)
    pub fat: Option<f64>,
    /// Target carbohydrates (grams)
    pub carbohydrate: Option<f64>,
    /// Requested meal time (Morning, Midday, or Evening)
    pub meal_time: Option<String>,
}

/// Request body for `POST /recommend/bmi`
#[derive(Debug, Deserialize)]
pub struct BmiRecommendationRequest {
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Requested meal time (Morning, Midday, or Evening)
    pub meal_time: Option<String>,
}

/// Recommendation routes
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create all recommendation routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recommend/nutrition", post(Self::handle_by_nutrition))
            .route("/recommend/bmi", post(Self::handle_by_bmi))
            .with_state(resources)
    }

    /// Handle a macro-based recommendation request
    async fn handle_by_nutrition(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<NutritionRecommendationRequest>,
    ) -> Result<Response, AppError> {
        info!(?request, "Received nutrition recommendation request");

        let query = MacroQuery {
            calories: require(request.calories, "calories")?,
            proteins: require(request.proteins, "proteins")?,
            fat: require(request.fat, "fat")?,
            carbohydrate: require(request.carbohydrate, "carbohydrate")?,
        };
        let meal_time = parse_meal_time(request.meal_time.as_deref())?;

        let recommendations =
            resources
                .engine
                .recommend_by_macros(&query, meal_time, &mut rand::thread_rng())?;

        Ok((
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "recommendations": recommendations,
                "request_data": {
                    "meal_time": meal_time
                }
            })),
        )
            .into_response())
    }

    /// Handle a BMI-based recommendation request
    async fn handle_by_bmi(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<BmiRecommendationRequest>,
    ) -> Result<Response, AppError> {
        info!(?request, "Received BMI recommendation request");

        let weight = require(request.weight, "weight")?;
        let height = require(request.height, "height")?;
        let meal_time = parse_meal_time(request.meal_time.as_deref())?;

        let result =
            resources
                .engine
                .recommend_by_bmi(weight, height, meal_time, &mut rand::thread_rng())?;

        Ok((
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "bmi": result.bmi,
                "bmi_category": result.category.label(),
                "nutrition_needs": result.target,
                "recommendations": result.recommendations,
                "request_data": {
                    "meal_time": meal_time
                }
            })),
        )
            .into_response())
    }
}

/// Unwrap a required field or produce the canonical missing-field error
fn require(value: Option<f64>, field: &str) -> Result<f64, AppError> {
    value.ok_or_else(|| AppError::missing_field(field))
}

/// Parse the requested meal time, treating absence as a missing field
fn parse_meal_time(value: Option<&str>) -> Result<MealTime, AppError> {
    value
        .ok_or_else(|| AppError::missing_field("meal_time"))?
        .parse()
}
