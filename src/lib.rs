// ABOUTME: Main library entry point for the MealMatch recommendation service
// ABOUTME: Wires configuration, logging, dataset loading, and the HTTP API together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

#![deny(unsafe_code)]

//! # MealMatch Server
//!
//! An HTTP service that recommends food items from a nutrition table,
//! either from an explicit macro-nutrient target or from a target derived
//! from the caller's body-mass index.
//!
//! ## Architecture
//!
//! - **`mealmatch-core`**: domain models and the unified error system
//! - **`mealmatch-intelligence`**: feature scaling, nearest-neighbor
//!   search, BMI mapping, and the recommendation orchestrator
//! - **this crate**: configuration, logging, CSV dataset loading, and the
//!   axum route surface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mealmatch_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("MealMatch configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management (environment-first, typed sub-configs)
pub mod config;
/// Application-wide constants and defaults
pub mod constants;
/// Nutrition table loading from CSV files
pub mod dataset;
/// Structured logging setup
pub mod logging;
/// HTTP middleware (CORS)
pub mod middleware;
/// Shared server resource container
pub mod resources;
/// HTTP route definitions organized by domain
pub mod routes;

// Re-export the error types so handlers and binaries use one import path
pub use mealmatch_core::errors;
