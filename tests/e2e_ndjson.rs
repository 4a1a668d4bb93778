//! End-to-end tests for the generate-then-emit pipeline.

use fixture_emitter::NdjsonEmitter;
use fixture_generator::generators::numeric::{INT_MAX, INT_MIN};
use fixture_generator::generators::text::MAX_TEXT_LEN;
use fixture_generator::MAX_FIELDS;

fn emit_to_string(seed: u64, count: u64) -> String {
    let mut emitter = NdjsonEmitter::new(seed);
    let mut buf = Vec::new();
    emitter.emit(&mut buf, count).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn emits_one_json_object_per_line() {
    let output = emit_to_string(42, 1000);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1000);

    for line in lines {
        let json: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("line did not parse as JSON: {e}\n{line}"));
        assert!(json.is_object());
    }
}

#[test]
fn records_respect_documented_bounds() {
    let output = emit_to_string(7, 1000);

    for line in output.lines() {
        let json: serde_json::Value = serde_json::from_str(line).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.len() <= MAX_FIELDS);

        for (key, value) in obj {
            assert!(key.chars().count() <= MAX_TEXT_LEN);
            match value {
                serde_json::Value::Bool(_) => {}
                serde_json::Value::Number(n) => {
                    let n = n.as_i64().expect("integer values fit in i64");
                    assert!((INT_MIN..=INT_MAX).contains(&n));
                }
                serde_json::Value::String(s) => assert!(s.chars().count() <= MAX_TEXT_LEN),
                other => panic!("unexpected value variant: {other:?}"),
            }
        }
    }
}

#[test]
fn same_seed_produces_identical_output() {
    assert_eq!(emit_to_string(42, 200), emit_to_string(42, 200));
}

#[test]
fn different_seeds_produce_different_output() {
    assert_ne!(emit_to_string(1, 200), emit_to_string(2, 200));
}

#[test]
fn empty_records_appear_as_empty_objects() {
    let output = emit_to_string(42, 1000);

    // With attempt counts uniform in 0..=9, roughly a tenth of the lines
    // should be the literal empty object.
    let empties = output.lines().filter(|line| *line == "{}").count();
    assert!(empties > 0);
}

#[test]
fn emits_to_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("fixtures.ndjson");

    let mut emitter = NdjsonEmitter::new(42);
    let metrics = emitter.emit_to_file(&path, 100).unwrap();

    assert_eq!(metrics.records_written, 100);
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 100);
    assert_eq!(metrics.bytes_written, content.len() as u64);
}
