//! Credential hashing.

pub mod password;

pub use password::{Argon2Verifier, CredentialVerifier, PasswordError, hash_password, verify_password};
