//! Bounded integer generator.

use fixture_core::FixtureValue;
use rand::Rng;

/// Inclusive lower bound of generated integers.
pub const INT_MIN: i64 = -1_000_000;

/// Inclusive upper bound of generated integers.
///
/// The range comes from drawing a value strictly below 2,000,000 and shifting
/// it down by 1,000,000, so the top end stops at 999,999.
pub const INT_MAX: i64 = 999_999;

/// Generate a random integer in [`INT_MIN`]..=[`INT_MAX`].
pub fn generate_int<R: Rng>(rng: &mut R) -> FixtureValue {
    FixtureValue::Int(rng.random_range(INT_MIN..=INT_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let value = generate_int(&mut rng);
            if let FixtureValue::Int(v) = value {
                assert!((INT_MIN..=INT_MAX).contains(&v));
            } else {
                panic!("Expected Int value");
            }
        }
    }

    #[test]
    fn test_both_signs_occur() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut negatives = 0;
        let mut non_negatives = 0;
        for _ in 0..1000 {
            if let FixtureValue::Int(v) = generate_int(&mut rng) {
                if v < 0 {
                    negatives += 1;
                } else {
                    non_negatives += 1;
                }
            }
        }

        assert!(negatives > 0);
        assert!(non_negatives > 0);
    }
}
