// ABOUTME: Configuration module organization for the MealMatch server
// ABOUTME: Exposes environment-based server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! Configuration management.
//!
//! Configuration is environment-first: every setting has a typed default
//! and an environment variable override, loaded once at startup.

/// Environment-based configuration loading
pub mod environment;

pub use environment::{CorsConfig, DataConfig, EngineConfig, Environment, LogLevel, ServerConfig};
