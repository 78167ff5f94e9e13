//! Short code generation.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// Produces a fixed-length string of characters drawn uniformly from
/// `[A-Za-z0-9]`. Pure value production: no collision check is performed
/// here; the storage layer's UNIQUE constraint catches duplicates and the
/// caller retries.
///
/// # Examples
///
/// ```
/// use urlmap::utils::code_generator::{generate_code, CODE_LENGTH};
///
/// let code = generate_code();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_fixed_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_is_alphanumeric() {
        let code = generate_code();
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_varies() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 62^6 possibilities; 1000 draws colliding would mean a broken RNG.
        assert!(codes.len() > 990);
    }
}
