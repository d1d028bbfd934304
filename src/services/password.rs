//! Random password generation
//!
//! Characters are sampled uniformly, with replacement, from a fixed
//! 72-character alphabet. The random source is any [`rand::Rng`].

use rand::Rng;

use crate::error::{PasskeepError, PasskeepResult};

/// Uppercase, lowercase, digits and `!@#$%^&*()`
pub const ALPHABET: &[u8; 72] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Length used by the menu's generate option
pub const DEFAULT_LENGTH: usize = 12;

/// Longest password that will be generated
pub const MAX_LENGTH: usize = 4096;

/// Reject lengths above [`MAX_LENGTH`]
pub fn check_length(length: usize) -> PasskeepResult<usize> {
    if length > MAX_LENGTH {
        return Err(PasskeepError::Validation(format!(
            "Password length {} exceeds the maximum of {}",
            length, MAX_LENGTH
        )));
    }
    Ok(length)
}

/// Generate a password of exactly `length` characters using `rng`
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> PasskeepResult<String> {
    let length = check_length(length)?;
    Ok((0..length)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect())
}

/// Generate a password using the thread-local RNG
pub fn generate(length: usize) -> PasskeepResult<String> {
    generate_password(&mut rand::thread_rng(), length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_is_distinct() {
        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 72);
    }

    #[test]
    fn test_exact_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [0, 1, DEFAULT_LENGTH, 30, MAX_LENGTH] {
            let password = generate_password(&mut rng, length).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_length_above_maximum_rejected() {
        let err = generate(MAX_LENGTH + 1).unwrap_err();
        assert!(matches!(err, PasskeepError::Validation(_)));
        assert!(generate(usize::MAX).is_err());
    }

    #[test]
    fn test_characters_from_alphabet() {
        let password = generate(30).unwrap();
        assert!(password.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = generate_password(&mut StdRng::seed_from_u64(42), 16).unwrap();
        let b = generate_password(&mut StdRng::seed_from_u64(42), 16).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distribution_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = [0usize; 256];
        // Expected 1000 per character, standard deviation about 31
        for _ in 0..(ALPHABET.len() * 1000 / MAX_LENGTH + 1) {
            for b in generate_password(&mut rng, MAX_LENGTH).unwrap().bytes() {
                counts[b as usize] += 1;
            }
        }

        let total: usize = counts.iter().sum();
        let expected = total / ALPHABET.len();
        for &b in ALPHABET.iter() {
            let count = counts[b as usize];
            assert!(
                count * 10 >= expected * 8 && count * 10 <= expected * 12,
                "character {:?} drawn {} times, expected about {}",
                b as char,
                count,
                expected
            );
        }
    }
}
