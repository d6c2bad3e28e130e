//! Random short code generation.
//!
//! Codes only need to avoid collisions, not resist guessing, so a thread-local
//! PRNG is enough. Uniqueness is enforced by the caller against the store.

use rand::Rng;

/// Alphabet codes are drawn from: A-Z, a-z, 0-9.
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random alphanumeric code of `length` characters.
///
/// Each character is drawn uniformly, with replacement, from [`CHARSET`].
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(DEFAULT_CODE_LENGTH);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
