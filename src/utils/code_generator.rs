//! Short code generation and validation.
//!
//! Random codes are sampled from a fixed 62-character alphabet; uniqueness is
//! not guaranteed here and is enforced by the database constraint downstream.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Alphabet for short codes: lowercase, uppercase, digits.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated codes. 62^6 possible values.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Minimum length for a user-provided custom code.
pub const CUSTOM_CODE_MIN: usize = 4;

/// Maximum length for a user-provided custom code.
pub const CUSTOM_CODE_MAX: usize = 20;

/// Generates a random short code of the given length.
///
/// Each character is drawn uniformly, with replacement, from [`ALPHABET`].
/// Uses the thread-local generator, which is seeded once from OS entropy.
///
/// # Examples
///
/// ```
/// use shortly::utils::code_generator::{generate_code, DEFAULT_CODE_LENGTH};
///
/// let code = generate_code(DEFAULT_CODE_LENGTH);
/// assert_eq!(code.len(), 6);
/// assert!(code.bytes().all(|b| b.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 4-20 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < CUSTOM_CODE_MIN || code.len() > CUSTOM_CODE_MAX {
        return Err(AppError::bad_request(
            "Custom code must be 4-20 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters and digits",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
