// ABOUTME: Centralized resource container for dependency injection into route handlers
// ABOUTME: Holds the recommendation engine and configuration behind one Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. The engine and
//! configuration are built once in the binary, wrapped in an `Arc`, and
//! passed by reference into every route constructor; request handlers only
//! ever read them.

use crate::config::environment::ServerConfig;
use mealmatch_intelligence::RecommendationEngine;
use std::sync::Arc;

/// Shared, read-only state for all request handlers
pub struct ServerResources {
    /// The recommendation engine (table, fitted model, tuning)
    pub engine: RecommendationEngine,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create the resource container
    #[must_use]
    pub fn new(engine: RecommendationEngine, config: Arc<ServerConfig>) -> Self {
        Self { engine, config }
    }
}
