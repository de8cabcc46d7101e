//! Deterministic fallback narrative.
//!
//! Used whenever the LLM summarizer is unconfigured or fails; this path
//! must always produce prose, so it never returns an error.

use contract_core::{ComparisonMetric, ContractForComparison, Narrative};

/// Count per-metric wins and emit a templated summary and recommendation.
///
/// The overall winner is the contract with the most metric wins, first
/// index on ties, matching the comparator's tie-break.
pub fn fallback_narrative(
    contracts: &[ContractForComparison],
    metrics: &[ComparisonMetric],
) -> Narrative {
    let mut wins = vec![0usize; contracts.len()];
    for metric in metrics {
        if let Some(w) = metric.winner {
            if w < wins.len() {
                wins[w] += 1;
            }
        }
    }

    let mut best_idx = 0usize;
    let mut best_wins = 0usize;
    for (i, &w) in wins.iter().enumerate() {
        if w > best_wins {
            best_idx = i;
            best_wins = w;
        }
    }

    let total = metrics.len();
    let title = contracts
        .get(best_idx)
        .map(|c| c.title.as_str())
        .unwrap_or("the first contract");

    let summary = format!(
        "Based on {total} key metrics, '{title}' appears to be the stronger offer overall, \
         winning in {best_wins} out of {total} categories."
    );

    let recommendation = if best_wins * 2 > total {
        format!(
            "'{title}' leads on most comparison points and looks like the better deal on paper; \
             review its remaining terms before signing."
        )
    } else {
        "These deals are fairly balanced; weigh the categories that matter most to you \
         before deciding."
            .to_string()
    };

    Narrative {
        summary,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_core::ContractAnalysis;

    fn contracts(titles: &[&str]) -> Vec<ContractForComparison> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| ContractForComparison {
                id: format!("c{i}"),
                title: t.to_string(),
                analysis: ContractAnalysis::default(),
            })
            .collect()
    }

    fn metric(label: &str, winner: Option<usize>) -> ComparisonMetric {
        ComparisonMetric {
            label: label.to_string(),
            values: vec!["x".to_string(), "y".to_string()],
            winner,
            higher_is_better: false,
        }
    }

    #[test]
    fn sweep_produces_majority_recommendation() {
        let contracts = contracts(&["Label Deal A", "Label Deal B"]);
        let metrics = vec![
            metric("Royalty Rate", Some(0)),
            metric("Contract Term", Some(0)),
            metric("Risk Level", Some(0)),
            metric("Red Flags", Some(0)),
        ];

        let narrative = fallback_narrative(&contracts, &metrics);
        assert_eq!(
            narrative.summary,
            "Based on 4 key metrics, 'Label Deal A' appears to be the stronger offer overall, \
             winning in 4 out of 4 categories."
        );
        assert!(narrative.recommendation.contains("Label Deal A"));
    }

    #[test]
    fn split_decision_calls_it_balanced() {
        let contracts = contracts(&["A", "B"]);
        let metrics = vec![
            metric("Royalty Rate", Some(0)),
            metric("Contract Term", Some(1)),
            metric("Risk Level", Some(1)),
            metric("Red Flags", Some(0)),
        ];

        let narrative = fallback_narrative(&contracts, &metrics);
        assert!(narrative.summary.contains("2 out of 4"));
        assert!(narrative.recommendation.contains("fairly balanced"));
    }

    #[test]
    fn tie_in_wins_goes_to_first_contract() {
        let contracts = contracts(&["First", "Second"]);
        let metrics = vec![
            metric("Risk Level", Some(1)),
            metric("Red Flags", Some(0)),
        ];

        let narrative = fallback_narrative(&contracts, &metrics);
        assert!(narrative.summary.contains("'First'"));
    }

    #[test]
    fn never_empty_even_with_no_winners() {
        let contracts = contracts(&["A", "B"]);
        let metrics = vec![metric("Royalty Rate", None)];

        let narrative = fallback_narrative(&contracts, &metrics);
        assert!(!narrative.summary.is_empty());
        assert!(!narrative.recommendation.is_empty());
    }
}
