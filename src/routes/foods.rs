// ABOUTME: Food listing route handlers exposing the loaded nutrition table
// ABOUTME: Returns all table rows or a 404 when no dataset was loaded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use mealmatch_core::AppError;
use serde_json::json;
use std::sync::Arc;

/// Food listing routes
pub struct FoodRoutes;

impl FoodRoutes {
    /// Create all food listing routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/foods", get(Self::handle_list_foods))
            .with_state(resources)
    }

    /// Return every row of the nutrition table
    async fn handle_list_foods(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let table = resources.engine.table();
        if table.is_empty() {
            return Err(AppError::not_found("No food data available"));
        }

        Ok((
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "foods": table.items()
            })),
        )
            .into_response())
    }
}
