//! Argon2 password hashing implementation.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use board_core::ports::{PasswordError, PasswordService};

/// Argon2-based password service.
///
/// Stored values are PHC strings, so posts written under the plaintext policy
/// cannot be verified by this service.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(stored).map_err(|e| PasswordError::Hashing(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = Argon2PasswordService::new();

        let stored = service.hash("pw1").unwrap();
        assert_ne!(stored, "pw1");
        assert!(service.verify("pw1", &stored).unwrap());
        assert!(!service.verify("PW1", &stored).unwrap());
    }

    #[test]
    fn test_plaintext_stored_value_is_an_error() {
        let service = Argon2PasswordService::new();
        assert!(service.verify("pw1", "pw1").is_err());
    }
}
