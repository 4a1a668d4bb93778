//! Randomized record generation for fixture-gen.
//!
//! This crate provides the [`RecordGenerator`] which produces randomized
//! fixture records. The generator uses a seeded RNG to ensure reproducibility
//! across runs with the same seed.
//!
//! # Architecture
//!
//! ```text
//! seed (u64)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │ RecordGenerator │
//! │                 │
//! │  - rng (StdRng) │
//! │  - index        │
//! └────────┬────────┘
//!          │
//!          ▼
//!    Record { key → FixtureValue }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::new(42);
//! let record = generator.next_record();
//! assert!(record.len() <= 9);
//! ```
//!
//! # Generators
//!
//! The following field generators are composed into each record:
//!
//! - `text` - Random strings of length 0-10 over the 28-symbol alphabet
//! - `numeric` - Random bounded integers
//! - `generate_value` - Uniform choice among `true`, `false`, integer, string

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{RecordGenerator, RecordIterator, MAX_FIELDS};
