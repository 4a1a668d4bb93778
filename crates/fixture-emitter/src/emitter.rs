//! NDJSON emitter driving record generation.

use crate::error::EmitError;
use fixture_generator::RecordGenerator;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for NDJSON writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from an emit operation.
#[derive(Debug, Clone, Default)]
pub struct EmitMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating records.
    pub generation_duration: Duration,
    /// Time spent writing records.
    pub write_duration: Duration,
    /// Bytes written to the output, newlines included.
    pub bytes_written: u64,
}

impl EmitMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.bytes_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// NDJSON emitter that writes generated fixture records.
pub struct NdjsonEmitter {
    generator: RecordGenerator,
}

impl NdjsonEmitter {
    /// Create a new emitter.
    ///
    /// # Arguments
    ///
    /// * `seed` - Random seed for deterministic generation
    pub fn new(seed: u64) -> Self {
        Self {
            generator: RecordGenerator::new(seed),
        }
    }

    /// Get the current generation index.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Emit `count` records to the given writer, one JSON object per line.
    ///
    /// Each record is fully built in memory before serialization, so a write
    /// failure cannot leave a partially generated line behind a complete one.
    ///
    /// # Returns
    ///
    /// Metrics about the emit operation.
    pub fn emit<W: Write>(&mut self, writer: W, count: u64) -> Result<EmitMetrics, EmitError> {
        let start_time = Instant::now();
        let mut metrics = EmitMetrics::default();
        let mut writer = CountingWriter::new(writer);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        for _ in 0..count {
            // Generate record
            let gen_start = Instant::now();
            let record = self.generator.next_record();
            generation_time += gen_start.elapsed();

            // Convert to JSON and write
            let write_start = Instant::now();
            let json = record.to_json();
            serde_json::to_writer(&mut writer, &json)?;
            writeln!(writer)?;
            write_time += write_start.elapsed();

            metrics.records_written += 1;

            if metrics.records_written % 10000 == 0 {
                debug!("Written {} records", metrics.records_written);
            }
        }

        writer.flush()?;

        metrics.bytes_written = writer.bytes_written();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        Ok(metrics)
    }

    /// Emit `count` records to a file at `output_path`.
    pub fn emit_to_file<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<EmitMetrics, EmitError> {
        let output_path = output_path.as_ref();
        info!(
            "Generating NDJSON file '{}' with {} records",
            output_path.display(),
            count
        );

        let file = File::create(output_path)?;
        let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let metrics = self.emit(writer, count)?;

        info!(
            "NDJSON generation complete: {} records, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }
}

/// Writer adapter counting the bytes that pass through it.
struct CountingWriter<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.bytes += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
