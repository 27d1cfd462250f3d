// ABOUTME: HTTP middleware for the MealMatch server
// ABOUTME: CORS configuration shared by all routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;
