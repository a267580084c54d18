//! trivia-server: HTTP API for a trivia quiz
//!
//! Lists and paginates questions, lists categories, creates, deletes and
//! searches questions, and serves the next question of a quiz round.
//! Storage sits behind [`db::TriviaStore`] with PostgreSQL and in-memory
//! implementations.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
