//! # Board Core
//!
//! The domain layer of the bulletin board.
//! This crate holds the post lifecycle and its password rule, with zero
//! infrastructure dependencies. Storage and password handling are reached
//! through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
