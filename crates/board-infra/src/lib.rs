//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory storage only
//! - `postgres` - PostgreSQL storage via SeaORM
//! - `hashing` - Argon2 password storage

pub mod database;
pub mod memory;
pub mod password;

// Re-exports - In-Memory
pub use memory::InMemoryPostRepository;
pub use password::PlainTextPasswordService;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;

#[cfg(feature = "hashing")]
pub use password::Argon2PasswordService;
