use bcrypt::{hash, verify, BcryptError};

use crate::config;

/// One-way, salted hash; the same plaintext yields a different hash on
/// every call.
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    hash(plain, config::config().security.bcrypt_cost)
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(plain, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hashed = hash_password("hunter22").unwrap();
        assert!(verify_password("hunter22", &hashed).unwrap());
        assert!(!verify_password("hunter23", &hashed).unwrap());
    }

    #[test]
    fn same_plaintext_hashes_differently() {
        let a = hash_password("hunter22").unwrap();
        let b = hash_password("hunter22").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn hash_is_never_the_plaintext() {
        let hashed = hash_password("hunter22").unwrap();
        assert_ne!(hashed, "hunter22");
    }
}
