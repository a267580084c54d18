//! HTTP server layer
//!
//! Axum server with:
//! - CORS open to all origins
//! - Request tracing
//! - Graceful shutdown
//! - `{success: false, error, message}` error envelopes

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
