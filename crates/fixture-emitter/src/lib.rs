//! NDJSON (JSON Lines) emitter for fixture records.
//!
//! This crate drives a [`fixture_generator::RecordGenerator`] and writes each
//! generated record as one JSON object per line to any [`std::io::Write`]
//! destination.
//!
//! # Example
//!
//! ```rust
//! use fixture_emitter::NdjsonEmitter;
//!
//! let mut emitter = NdjsonEmitter::new(42);
//! let mut buf = Vec::new();
//! let metrics = emitter.emit(&mut buf, 10).unwrap();
//! assert_eq!(metrics.records_written, 10);
//! ```

pub mod args;
pub mod emitter;
pub mod error;

pub use args::EmitArgs;
pub use emitter::{EmitMetrics, NdjsonEmitter, DEFAULT_BUFFER_SIZE};
pub use error::EmitError;
