// ABOUTME: Application-wide constants and environment defaults
// ABOUTME: Default port, dataset path, and recommendation tuning values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! Centralized constants so defaults live in exactly one place.

/// Default values applied when the environment leaves a setting unset
pub mod defaults {
    /// Default HTTP API port
    pub const HTTP_PORT: u16 = 5000;

    /// Default path of the nutrition table CSV
    pub const NUTRITION_DATA_PATH: &str = "./data/nutrition.csv";

    /// Default CORS origin policy (wildcard for development)
    pub const CORS_ALLOWED_ORIGINS: &str = "*";

    /// Number of neighbor candidates fetched per recommendation query
    pub const NEIGHBOR_COUNT: usize = 10;

    /// Size of the random fallback sample when no candidate matches
    pub const FALLBACK_SAMPLE_SIZE: usize = 5;
}

/// Names used in structured logging
pub mod service_names {
    /// Canonical service name
    pub const MEALMATCH_SERVER: &str = "mealmatch-server";
}
