use serde::Serialize;
use thiserror::Error;

/// Sample variance needs at least two observations, so a counted set
/// smaller than that cannot be summarized.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("need at least {required} counted scores to aggregate, got {actual}")]
pub struct InsufficientDataError {
    pub required: usize,
    pub actual: usize,
}

/// Descriptive statistics over the counted scores. Mean, median and
/// stdev are rounded to one decimal; min, max and mode are reported
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total_count: usize,
    pub counted_count: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub mode: f64,
    pub mean: f64,
    pub stdev: f64,
}

impl StatsSummary {
    /// Reduce the counted scores. `total_count` is the number of
    /// parsed input records, counted or not.
    pub fn from_scores(scores: &[f64], total_count: usize) -> Result<Self, InsufficientDataError> {
        if scores.len() < 2 {
            return Err(InsufficientDataError {
                required: 2,
                actual: scores.len(),
            });
        }

        let mut sorted = scores.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();

        let mean = round1(sorted.iter().sum::<f64>() / n as f64);
        let median = round1(if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        });
        // Sample variance around the rounded mean.
        let variance = sorted
            .iter()
            .map(|score| (score - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;

        Ok(StatsSummary {
            total_count,
            counted_count: n,
            min: sorted[0],
            max: sorted[n - 1],
            median,
            mode: mode_of_sorted(&sorted),
            mean,
            stdev: round1(variance.sqrt()),
        })
    }
}

/// Most frequent value; on a frequency tie the smallest tied value
/// wins, so the result is deterministic.
fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut best = sorted[0];
    let mut best_count = 0;

    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        if j - i > best_count {
            best_count = j - i;
            best = sorted[i];
        }
        i = j;
    }

    best
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
