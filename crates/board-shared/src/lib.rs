//! # Board Shared
//!
//! Wire types exchanged over the HTTP API.
//! Kept free of domain and server dependencies so that clients can reuse them.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
