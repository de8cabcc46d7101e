//! Deal comparison engine.
//!
//! Pure, synchronous heuristics: pull comparable numbers out of each
//! contract's free-text analysis payload, pick a per-metric winner, and
//! produce the deterministic fallback narrative used when the LLM
//! summarizer is unavailable.

use contract_core::{CompareError, ComparisonMetric, ContractForComparison};

pub mod extract;
pub mod metrics;
pub mod narrative;

pub use metrics::{MetricSpec, METRIC_TABLE};
pub use narrative::fallback_narrative;

/// Builds the per-metric comparison table for a set of contracts.
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine;

impl ComparisonEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compare contracts across the fixed metric table.
    ///
    /// Output rows appear in table order (royalty, advance, term, risk,
    /// concerns); callers may index into the result positionally. Rows
    /// where no contract yielded a value are dropped, except risk and
    /// concern count which have defined defaults and always appear.
    pub fn compare(
        &self,
        contracts: &[ContractForComparison],
    ) -> Result<Vec<ComparisonMetric>, CompareError> {
        if contracts.len() < 2 {
            return Err(CompareError::TooFewContracts);
        }

        let mut rows = Vec::with_capacity(METRIC_TABLE.len());
        for spec in METRIC_TABLE {
            let extracted: Vec<Option<f64>> = contracts
                .iter()
                .map(|c| spec.extract(&c.analysis))
                .collect();

            if !spec.always_included && extracted.iter().all(Option::is_none) {
                tracing::debug!(metric = spec.label, "no extractable values, row omitted");
                continue;
            }

            let values = contracts
                .iter()
                .map(|c| {
                    spec.display(&c.analysis)
                        .unwrap_or_else(|| spec.sentinel.to_string())
                })
                .collect();

            rows.push(ComparisonMetric {
                label: spec.label.to_string(),
                values,
                winner: pick_winner(&extracted, spec.higher_is_better),
                higher_is_better: spec.higher_is_better,
            });
        }

        Ok(rows)
    }
}

/// First index achieving the extremum among non-absent values.
///
/// Exact ties go to the earlier contract; absent values never win but keep
/// their slot in the display array.
fn pick_winner(values: &[Option<f64>], higher_is_better: bool) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.iter().enumerate() {
        let Some(v) = *v else { continue };
        let beats = match best {
            None => true,
            Some((_, b)) => {
                if higher_is_better {
                    v > b
                } else {
                    v < b
                }
            }
        };
        if beats {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}
