//! Password digests.
//!
//! # Invariants
//! - Stored digests are Argon2id PHC strings with a per-password random salt.
//! - Plain passwords never leave this module.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hashes `password` into a self-describing PHC string.
///
/// # Errors
/// - Returns the hasher's message when Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|err| format!("password hashing failed: {err}"))
}

/// Returns whether `password` matches `digest`.
///
/// Unparsable digests never match.
pub fn verify_password(password: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn digest_verifies_only_the_original_password() {
        let digest = hash_password("pw1").unwrap();
        assert!(digest.starts_with("$argon2id$"));
        assert!(!digest.contains("pw1"));
        assert!(verify_password("pw1", &digest));
        assert!(!verify_password("pw2", &digest));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_digest_never_matches() {
        assert!(!verify_password("pw", "pwd_abc123"));
        assert!(!verify_password("", ""));
    }
}
