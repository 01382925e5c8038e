use std::fs;
use std::path::Path;

use blockscore_parser::{parse_log, TracingSink};
use tracing::{debug, info};

use crate::classify::{classify, counted_scores};
use crate::error::Result;
use crate::policy::PolicyKind;
use crate::report;
use crate::stats::StatsSummary;

/// End-to-end batch run: read the whole input log, parse, classify,
/// write the CSV report, then reduce the counted scores.
///
/// Each stage is fully materialized before the next begins; fatal
/// conditions (unreadable input, unwritable output, too few counted
/// scores) propagate to the caller.
pub fn run(
    input: &Path,
    output: &Path,
    interval_min: u32,
    policy_kind: PolicyKind,
) -> Result<StatsSummary> {
    let policy = policy_kind.build(interval_min)?;

    let content = fs::read_to_string(input)?;
    let mut sink = TracingSink;
    let records = parse_log(&content, &mut sink);
    let total_count = records.len();
    debug!(total_count, "parsed input records");

    let decisions = classify(records, policy.as_ref());

    let file = fs::File::create(output)?;
    report::write_rows(file, &decisions)?;

    let scores = counted_scores(&decisions);
    let summary = StatsSummary::from_scores(&scores, total_count)?;
    info!(
        policy = policy.name(),
        interval_min,
        counted = summary.counted_count,
        "analysis complete"
    );
    Ok(summary)
}
