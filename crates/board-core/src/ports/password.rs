//! Post password port.

/// Turns a caller-supplied password into its stored form and checks
/// candidates against it.
pub trait PasswordService: Send + Sync {
    /// Produce the value to store for a plain text password.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plain text password against a stored value.
    fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError>;
}

/// Password handling errors.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Hashing error: {0}")]
    Hashing(String),
}
