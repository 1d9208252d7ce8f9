//! Node identifier helpers
//!
//! Container nodes get deterministic ids derived from the key path, leaf nodes
//! get an extra suffix from an [`IdSource`] so sibling leaves never collide.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LENGTH: usize = 9;

/// Source of the suffixes appended to leaf and array item node ids.
pub trait IdSource {
    fn next_suffix(&mut self) -> String;
}

/// Random base-36 suffixes, optionally seeded for reproducible output.
#[derive(Debug)]
pub struct RandomIdSource {
    rng: StdRng,
}

impl RandomIdSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for RandomIdSource {
    fn next_suffix(&mut self) -> String {
        (0..SUFFIX_LENGTH)
            .map(|_| {
                let idx = self.rng.gen_range(0..SUFFIX_ALPHABET.len());
                SUFFIX_ALPHABET[idx] as char
            })
            .collect()
    }
}

/// Counter rendered in base 36. Useful when output has to be diffed.
#[derive(Debug, Default, Clone)]
pub struct SequentialIdSource {
    next: u64,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_suffix(&mut self) -> String {
        let suffix = to_base36(self.next);
        self.next += 1;
        suffix
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(SUFFIX_ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Normalize a key path into an identifier.
///
/// Hyphen separated parts are kept apart. Inside each part, underscore
/// separated words after the first are capitalized and lower-cased, then
/// joined: `user_NAME-home_town` becomes `userName-homeTown`.
pub fn normalize_identifier(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('-')
        .map(|part| {
            part.split('_')
                .enumerate()
                .map(|(idx, word)| {
                    if idx == 0 {
                        word.to_string()
                    } else {
                        capitalize(word)
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier(""), "");
        assert_eq!(normalize_identifier("name"), "name");
        assert_eq!(normalize_identifier("user_name"), "userName");
        assert_eq!(normalize_identifier("user_NAME"), "userName");
        assert_eq!(normalize_identifier("a_B_cD-x_y"), "aBCd-xY");
        assert_eq!(normalize_identifier("address-0"), "address-0");
        assert_eq!(normalize_identifier("home_address-2-zip_code"), "homeAddress-2-zipCode");
    }

    #[test]
    fn test_normalize_keeps_empty_words() {
        assert_eq!(normalize_identifier("a__b"), "aB");
        assert_eq!(normalize_identifier("_lead"), "Lead");
        assert_eq!(normalize_identifier("a--b"), "a--b");
    }

    #[test]
    fn test_random_suffix_shape() {
        let mut source = RandomIdSource::new();
        let suffix = source.next_suffix();
        assert_eq!(suffix.len(), SUFFIX_LENGTH);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut first = RandomIdSource::seeded(42);
        let mut second = RandomIdSource::seeded(42);
        for _ in 0..5 {
            assert_eq!(first.next_suffix(), second.next_suffix());
        }
    }

    #[test]
    fn test_sequential_source() {
        let mut source = SequentialIdSource::new();
        let suffixes: Vec<String> = (0..37).map(|_| source.next_suffix()).collect();
        assert_eq!(suffixes[0], "0");
        assert_eq!(suffixes[10], "a");
        assert_eq!(suffixes[35], "z");
        assert_eq!(suffixes[36], "10");
    }
}
