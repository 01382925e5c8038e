use std::fs;
use std::path::PathBuf;

use chrono::{Duration, TimeZone, Utc};

use crate::diagnostics::{SkipReason, VecSink};
use crate::parse::{parse_line, parse_log};

const HASH: &str = "000000000000000000022b4f8a6a1eb8a9779e74ae1e72a68ae2f7b391e2a7c1";

fn fixture(path: &str) -> String {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let full_path = base.join("tests/data").join(path);
    fs::read_to_string(&full_path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", full_path.display(), err))
}

#[test]
fn parses_noise_wrapped_line() {
    let line = format!(
        r#"2023-10-16T12:53:38.657Z INFO  mempool > {{"block_fees":0.21,"block_score":45.8,"hash":"{HASH}"}}"#
    );
    let record = parse_line(&line).expect("line should parse");

    let expected = Utc.with_ymd_and_hms(2023, 10, 16, 12, 53, 38).unwrap()
        + Duration::milliseconds(657);
    assert_eq!(record.time, expected);
    assert_eq!(record.minute(), 53);
    assert_eq!(record.fees, Some(0.21));
    assert_eq!(record.score, Some(45.8));
    assert_eq!(record.hash, HASH);
}

#[test]
fn line_without_metrics_still_yields_record() {
    let line = format!(r#"2023-10-16T13:02:44.912Z WARN  mempool > {{"hash":"{HASH}"}}"#);
    let record = parse_line(&line).expect("line should parse");
    assert_eq!(record.fees, None);
    assert_eq!(record.score, None);
    assert_eq!(record.hash, HASH);
}

#[test]
fn line_without_hash_is_dropped() {
    let line = "2023-10-16T13:05:10.000Z INFO  mempool > template height advanced";
    assert_eq!(parse_line(line), Err(SkipReason::MissingHash));
}

#[test]
fn line_without_datetime_is_dropped() {
    assert_eq!(
        parse_line("starting template watcher"),
        Err(SkipReason::MissingTimestamp)
    );
}

#[test]
fn impossible_calendar_date_is_dropped() {
    let line = format!(r#"2023-13-16T12:53:38.657Z INFO  mempool > {{"hash":"{HASH}"}}"#);
    assert_eq!(parse_line(&line), Err(SkipReason::MissingTimestamp));
}

#[test]
fn uppercase_hash_is_not_a_key() {
    let upper = HASH.to_ascii_uppercase();
    let line = format!(r#"2023-10-16T12:53:38.657Z INFO  mempool > {{"hash":"{upper}"}}"#);
    assert_eq!(parse_line(&line), Err(SkipReason::MissingHash));
}

#[test]
fn malformed_metric_number_is_treated_as_absent() {
    let line = format!(
        r#"2023-10-16T12:53:38.657Z INFO  mempool > {{"block_fees":0.2.1,"block_score":45.8,"hash":"{HASH}"}}"#
    );
    let record = parse_line(&line).expect("line should parse");
    assert_eq!(record.fees, None);
    assert_eq!(record.score, None);
}

#[test]
fn parses_fixture_log_with_diagnostics() {
    let content = fixture("mempool.log");
    let mut sink = VecSink::default();
    let records = parse_log(&content, &mut sink);

    assert_eq!(records.len(), 4);
    assert_eq!(
        sink.entries,
        vec![
            (2, SkipReason::MissingTimestamp),
            (5, SkipReason::MissingHash),
        ]
    );

    assert_eq!(records[0].score, Some(45.8));
    assert_eq!(records[2].score, None);
    assert_eq!(records[3].fees, Some(0.33));
    assert!(records.windows(2).all(|w| w[0].time <= w[1].time));
}
