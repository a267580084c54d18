//! Database layer - storage trait, connection pool, and implementations
//!
//! # Design Principles
//!
//! - Handlers only see `dyn TriviaStore`, injected through `AppState`
//! - Storage failures come back typed (`DbError`), never as panics
//! - Lists are returned in id order; pagination happens above this layer

pub mod store;
pub mod pool;
pub mod postgres;
pub mod memory;
pub mod migrations;
pub mod seed;

pub use store::{DbError, TriviaStore};
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgStore;
pub use memory::MemoryStore;
