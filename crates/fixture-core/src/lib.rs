//! Core types for the fixture-gen workspace.
//!
//! This crate provides the foundational types shared by the generator and
//! emitter crates:
//!
//! - [`FixtureValue`] - The tagged union of values a record field can hold
//! - [`Record`] - One generated record, a mapping from string keys to values
//!
//! # Architecture
//!
//! The fixture-core crate sits at the foundation of the workspace:
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    ├─── fixture-generator  (produces Record values from a seeded RNG)
//!    │
//!    └─── fixture-emitter    (serializes Record values as NDJSON)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{FixtureValue, Record};
//!
//! let mut record = Record::new();
//! record.insert("flag", FixtureValue::Bool(true));
//! assert_eq!(record.to_json().to_string(), r#"{"flag":true}"#);
//! ```

pub mod record;
pub mod value;

pub use record::Record;
pub use value::FixtureValue;
