// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides nutrition table builders and server resource construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::must_use_candidate
)]

//! Shared test utilities for `mealmatch_server`

use mealmatch_core::{FoodItem, MealTime, NutritionTable};
use mealmatch_intelligence::RecommendationEngine;
use mealmatch_server::config::environment::{
    CorsConfig, DataConfig, EngineConfig, Environment, LogLevel, ServerConfig,
};
use mealmatch_server::resources::ServerResources;
use std::path::PathBuf;
use std::sync::Arc;

/// Build a food item fixture
pub fn food(name: &str, macros: [f64; 4], meal_time: MealTime) -> FoodItem {
    FoodItem {
        name: name.into(),
        calories: macros[0],
        proteins: macros[1],
        fat: macros[2],
        carbohydrate: macros[3],
        meal_time,
        image: format!("https://img.example/{name}.jpg"),
    }
}

/// A small table covering all three meal times
pub fn sample_table() -> NutritionTable {
    NutritionTable::new(vec![
        food("porridge", [150.0, 5.0, 3.0, 27.0], MealTime::Morning),
        food("omelette", [220.0, 14.0, 16.0, 2.0], MealTime::Morning),
        food("chicken rice", [420.0, 25.0, 12.0, 50.0], MealTime::Midday),
        food("gado-gado", [310.0, 12.0, 18.0, 26.0], MealTime::Midday),
        food("grilled fish", [280.0, 30.0, 14.0, 3.0], MealTime::Evening),
        food("fried noodles", [460.0, 15.0, 18.0, 58.0], MealTime::Evening),
    ])
}

/// Test server configuration with default engine tuning
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Warn,
        environment: Environment::Testing,
        data: DataConfig {
            nutrition_data_path: PathBuf::from("./data/nutrition.csv"),
        },
        engine: EngineConfig {
            neighbor_count: 10,
            fallback_sample_size: 5,
        },
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
    }
}

/// Build server resources around the given table
pub fn test_resources(table: NutritionTable) -> Arc<ServerResources> {
    let config = Arc::new(test_config());
    let engine = RecommendationEngine::new(
        table,
        config.engine.neighbor_count,
        config.engine.fallback_sample_size,
    );
    Arc::new(ServerResources::new(engine, config))
}
