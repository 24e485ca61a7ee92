//! ITAM API Library
//!
//! This crate provides the core functionality for the IT asset management API
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod services;

use axum::Router;
use std::sync::Arc;

use crate::db::DbPool;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    /// Assemble application state from an established connection pool.
    pub fn new(db: Arc<DbPool>, config: config::AppConfig) -> Self {
        let services = handlers::AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Versioned API surface mounted under `/api/v1`.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", handlers::categories::category_routes())
        .nest("/locations", handlers::locations::location_routes())
        .nest("/vendors", handlers::vendors::vendor_routes())
        .nest("/users", handlers::users::user_routes())
        .nest("/assets", handlers::assets::asset_routes())
        .nest("/assignments", handlers::assignments::assignment_routes())
        .nest("/maintenance", handlers::maintenance::maintenance_routes())
        .nest("/dashboard", handlers::dashboard::dashboard_routes())
}
