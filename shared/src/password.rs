use crate::error::ServiceError;
use bcrypt::{hash, verify};

// Password hashing utility functions. bcrypt is deliberately slow; the
// cost factor comes from service configuration (BCRYPT_COST).

pub fn hash_password(password: &str, cost: u32) -> Result<String, ServiceError> {
    let hashed = hash(password, cost)?;
    Ok(hashed)
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool, ServiceError> {
    let is_valid = verify(password, hashed)?;
    Ok(is_valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the test fast; production uses DEFAULT_COST.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_password_hashing_and_verification() {
        let password = "pw1";

        let hashed = hash_password(password, TEST_COST).unwrap();
        assert_ne!(hashed, password);
        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("wrong", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("pw1", TEST_COST).unwrap();
        let second = hash_password("pw1", TEST_COST).unwrap();

        assert_ne!(first, second);
        assert!(verify_password("pw1", &first).unwrap());
        assert!(verify_password("pw1", &second).unwrap());
    }
}
