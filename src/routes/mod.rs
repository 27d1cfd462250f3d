// ABOUTME: Route module organization for MealMatch HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain with shared middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! Route module for the MealMatch server
//!
//! Each domain module contains route definitions and thin handler
//! functions that delegate to the recommendation engine.

/// Food listing routes
pub mod foods;
/// Health check and system status routes
pub mod health;
/// Recommendation routes (macro-based and BMI-based)
pub mod recommend;

pub use foods::FoodRoutes;
pub use health::HealthRoutes;
pub use recommend::RecommendationRoutes;

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Assemble the full application router with CORS and request tracing
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(RecommendationRoutes::routes(resources.clone()))
        .merge(FoodRoutes::routes(resources.clone()))
        .merge(HealthRoutes::routes(resources))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
