// src/auth/password.rs

use bcrypt::{BcryptError, hash, verify};

use super::error::{AuthError, AuthResult};

pub fn hash_password(password: &str, cost: u32) -> AuthResult<String> {
    hash(password, cost)
        .map_err(|e: BcryptError| AuthError::internal(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    verify(password, hash)
        .map_err(|e: BcryptError| AuthError::internal(format!("Failed to verify password: {}", e)))
}
