//! Verbatim password storage.

use board_core::ports::{PasswordError, PasswordService};

/// Stores passwords as given and compares them byte for byte.
///
/// Comparison is case-sensitive and does no normalization.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextPasswordService;

impl PasswordService for PlainTextPasswordService {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(password.to_owned())
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        Ok(password.as_bytes() == stored.as_bytes())
    }
}
