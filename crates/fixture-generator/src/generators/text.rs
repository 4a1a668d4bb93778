//! Random short-string generator.

use rand::Rng;

/// The 28-symbol alphabet keys and string values are built from.
///
/// Lowercase a-z plus double-quote and space. The two extra symbols exercise
/// JSON string escaping in downstream consumers.
pub const ALPHABET: [char; 28] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '"', ' ',
];

/// Maximum length of generated keys and string values.
pub const MAX_TEXT_LEN: usize = 10;

/// Generate a string of length 0 to [`MAX_TEXT_LEN`] inclusive, each
/// character sampled uniformly with replacement from [`ALPHABET`].
///
/// The empty string is a valid result.
pub fn generate_text<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(0..=MAX_TEXT_LEN);
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(ALPHABET[rng.random_range(0..ALPHABET.len())]);
    }
    out
}
