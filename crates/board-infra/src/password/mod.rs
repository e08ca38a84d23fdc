//! Password storage policies.

mod plain;

#[cfg(feature = "hashing")]
mod hashed;

pub use plain::PlainTextPasswordService;

#[cfg(feature = "hashing")]
pub use hashed::Argon2PasswordService;
