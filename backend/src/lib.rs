//! # Launch Dashboard Backend
//!
//! Interactive dashboard over historical launch outcomes.
//!
//! A launch CSV is loaded once at startup into an immutable dataset. The user
//! picks a launch site and a payload-mass range; the backend filters the
//! dataset and returns a success/failure pie chart and a payload vs. outcome
//! scatter chart, encoded as plotly.js figures for the page served at `/`.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Launch records and control state
//! - [`db`]: CSV loading, the immutable dataset singleton and configuration
//! - [`services`]: Filtering, aggregation, chart builders and the reactive binder
//! - [`routes`]: Route-specific data types
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
