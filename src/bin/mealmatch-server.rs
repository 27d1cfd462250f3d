// ABOUTME: MealMatch server binary serving the recommendation HTTP API
// ABOUTME: Loads configuration and the nutrition dataset, fits the model, and serves axum routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch

//! # MealMatch Server Binary
//!
//! Starts the recommendation API: loads the nutrition table from CSV,
//! fits the scaler/index pair once, and serves the axum router.

use anyhow::{Context, Result};
use clap::Parser;
use mealmatch_server::{
    config::environment::ServerConfig, dataset, logging, resources::ServerResources, routes,
};
use mealmatch_intelligence::RecommendationEngine;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "mealmatch-server")]
#[command(about = "MealMatch - nutrition-table food recommendation API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override nutrition dataset path
    #[arg(long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment, then apply CLI overrides
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data) = args.data {
        config.data.nutrition_data_path = data;
    }

    // Initialize structured logging
    logging::init_from_env()?;

    info!("Starting MealMatch Server");
    info!("{}", config.summary());

    // Load the nutrition table; an empty table is a degraded but valid
    // state, the API answers with model-unavailable until data exists
    let table = dataset::load_nutrition_table(&config.data.nutrition_data_path);
    if table.is_empty() {
        warn!("No nutrition data loaded; recommendation endpoints will fail closed");
    }

    let engine = RecommendationEngine::new(
        table,
        config.engine.neighbor_count,
        config.engine.fallback_sample_size,
    );
    info!(model_ready = engine.model_ready(), "Recommendation engine built");

    let config = Arc::new(config);
    let resources = Arc::new(ServerResources::new(engine, config.clone()));
    let app = routes::router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "MealMatch API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("MealMatch Server shut down");
    Ok(())
}

/// Resolve when the process receives a termination signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to install shutdown signal handler");
    }
}
