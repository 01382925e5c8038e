use blockscore_parser::ParsedRecord;
use chrono::Duration;

use crate::policy::TemplatePolicy;

/// A record together with the verdict on its score. Every parsed
/// record gets a decision and stays in the output row stream; only
/// `counted` controls whether the score enters the statistics.
#[derive(Debug, Clone)]
pub struct ValidityDecision {
    pub record: ParsedRecord,
    /// Wall-clock time since the previous record; `None` for the first.
    pub elapsed: Option<Duration>,
    pub counted: bool,
}

impl ValidityDecision {
    /// Elapsed time in minutes rounded to two decimals, as it appears
    /// in the CSV `block_time` column.
    pub fn elapsed_minutes(&self) -> Option<f64> {
        self.elapsed
            .map(|elapsed| round2(elapsed.num_milliseconds() as f64 / 60_000.0))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Run the pairwise freshness scan over the ordered record sequence.
///
/// The first record has no predecessor and is counted whenever it
/// carries a score; every later record is counted only when it carries
/// a score and the policy judges its template fresh.
pub fn classify(records: Vec<ParsedRecord>, policy: &dyn TemplatePolicy) -> Vec<ValidityDecision> {
    let mut decisions: Vec<ValidityDecision> = Vec::with_capacity(records.len());

    for record in records {
        let (elapsed, fresh) = match decisions.last() {
            None => (None, true),
            Some(prev) => {
                let prev_record = &prev.record;
                let elapsed = record.time.signed_duration_since(prev_record.time);
                (Some(elapsed), policy.is_fresh(prev_record, &record))
            }
        };
        let counted = fresh && record.score.is_some();
        decisions.push(ValidityDecision {
            record,
            elapsed,
            counted,
        });
    }

    decisions
}

/// Scores of the counted decisions, in input order.
pub fn counted_scores(decisions: &[ValidityDecision]) -> Vec<f64> {
    decisions
        .iter()
        .filter(|decision| decision.counted)
        .filter_map(|decision| decision.record.score)
        .collect()
}
