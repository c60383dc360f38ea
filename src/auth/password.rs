use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Salted Argon2id hash in PHC string form.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("hash password: {e}"))
}

/// `Ok(false)` on a mismatch; `Err` only when the stored hash is unreadable.
pub fn verify_password(plain: &str, stored: &str) -> anyhow::Result<bool> {
    let parsed =
        PasswordHash::new(stored).map_err(|e| anyhow::anyhow!("parse stored password hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_hash_is_salted_phc_string() {
        let first = hash_password("same secret").expect("hash");
        let second = hash_password("same secret").expect("hash");
        assert!(first.starts_with("$argon2id$"));
        assert!(!first.contains("same secret"));
        assert_ne!(first, second);
    }

    #[test]
    fn verify_accepts_only_the_original_password() {
        let stored = hash_password("correct-horse-battery-staple").expect("hash");
        assert!(verify_password("correct-horse-battery-staple", &stored).expect("verify"));
        assert!(!verify_password("Correct-horse-battery-staple", &stored).expect("verify"));
        assert!(!verify_password("", &stored).expect("verify"));
    }

    #[test]
    fn unreadable_stored_hash_is_an_error() {
        let err = verify_password("anything", "plaintext-password").unwrap_err();
        assert!(err.to_string().starts_with("parse stored password hash"));
    }
}
