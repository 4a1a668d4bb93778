//! Main generator producing randomized fixture records.

use crate::generators;
use crate::generators::text;
use fixture_core::Record;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Maximum number of key/value insertion attempts per record.
///
/// The attempt count for each record is drawn uniformly from 0 to this bound
/// inclusive. Key collisions overwrite, so the final record may hold fewer
/// entries than attempts.
pub const MAX_FIELDS: usize = 9;

/// Record generator that produces randomized fixture records.
///
/// The generator owns a seeded random number generator to ensure
/// reproducible results across runs with the same seed.
pub struct RecordGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Current record index (number of records produced so far)
    index: u64,
}

impl RecordGenerator {
    /// Create a new record generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next record.
    ///
    /// Draws an insertion count in 0..=[`MAX_FIELDS`], then performs that
    /// many independent (key, value) insertions. Generation is infallible.
    pub fn next_record(&mut self) -> Record {
        let attempts = self.rng.random_range(0..=MAX_FIELDS);

        let mut record = Record::new();
        for _ in 0..attempts {
            let key = text::generate_text(&mut self.rng);
            let value = generators::generate_value(&mut self.rng);
            record.insert(key, value);
        }

        self.index += 1;
        record
    }

    /// Generate multiple records.
    ///
    /// Returns an iterator that lazily generates records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
