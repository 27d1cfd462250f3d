// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Reports service liveness plus dataset and model readiness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! Health check routes for service monitoring

use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    /// Always returns 200; readiness is reported in the body
    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        Json(json!({
            "status": "ok",
            "message": "API is running",
            "data_loaded": !resources.engine.table().is_empty(),
            "model_ready": resources.engine.model_ready(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
