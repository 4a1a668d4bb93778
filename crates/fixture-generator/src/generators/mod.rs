//! Individual value generators for record fields.
//!
//! This module provides the generation logic for each kind of field value
//! a record can hold.

pub mod numeric;
pub mod text;

use fixture_core::FixtureValue;
use rand::Rng;

/// Generate one field value.
///
/// The value is chosen uniformly among exactly 4 candidates: the literal
/// `true`, the literal `false`, a bounded random integer, and a random
/// string. Selection is uniform across the candidates regardless of kind.
pub fn generate_value<R: Rng>(rng: &mut R) -> FixtureValue {
    match rng.random_range(0..4) {
        0 => FixtureValue::Bool(true),
        1 => FixtureValue::Bool(false),
        2 => numeric::generate_int(rng),
        _ => FixtureValue::Text(text::generate_text(rng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_all_four_candidates_appear() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut trues = 0;
        let mut falses = 0;
        let mut ints = 0;
        let mut texts = 0;

        for _ in 0..1000 {
            match generate_value(&mut rng) {
                FixtureValue::Bool(true) => trues += 1,
                FixtureValue::Bool(false) => falses += 1,
                FixtureValue::Int(_) => ints += 1,
                FixtureValue::Text(_) => texts += 1,
            }
        }

        assert!(trues > 0);
        assert!(falses > 0);
        assert!(ints > 0);
        assert!(texts > 0);
    }

    #[test]
    fn test_generated_values_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            match generate_value(&mut rng) {
                FixtureValue::Int(v) => {
                    assert!((numeric::INT_MIN..=numeric::INT_MAX).contains(&v))
                }
                FixtureValue::Text(s) => assert!(s.chars().count() <= text::MAX_TEXT_LEN),
                FixtureValue::Bool(_) => {}
            }
        }
    }
}
