//! The fixed metric table.
//!
//! Callers index into the response positionally, so row order is part of
//! the contract: royalty, advance, term, risk, concerns. Keep the table
//! explicit rather than pushing rows conditionally.

use contract_core::ContractAnalysis;

use crate::extract;

/// One tracked metric: label, polarity, how to extract a comparable number
/// and how to render the display string.
pub struct MetricSpec {
    pub label: &'static str,
    pub higher_is_better: bool,
    pub sentinel: &'static str,
    /// Risk and concern count have defined defaults and are emitted even
    /// when every payload lacks the raw field.
    pub always_included: bool,
    extract: fn(&ContractAnalysis) -> Option<f64>,
    display: fn(&ContractAnalysis) -> Option<String>,
}

impl MetricSpec {
    pub fn extract(&self, analysis: &ContractAnalysis) -> Option<f64> {
        (self.extract)(analysis)
    }

    pub fn display(&self, analysis: &ContractAnalysis) -> Option<String> {
        (self.display)(analysis)
    }
}

pub const METRIC_TABLE: &[MetricSpec] = &[
    MetricSpec {
        label: "Royalty Rate",
        higher_is_better: true,
        sentinel: "Not specified",
        always_included: false,
        extract: extract_royalty,
        display: display_royalty,
    },
    MetricSpec {
        label: "Advance",
        higher_is_better: true,
        sentinel: "Not specified",
        always_included: false,
        extract: extract_advance,
        display: display_advance,
    },
    MetricSpec {
        label: "Contract Term",
        higher_is_better: false,
        sentinel: "Not specified",
        always_included: false,
        extract: extract_term,
        display: display_term,
    },
    MetricSpec {
        label: "Risk Level",
        higher_is_better: false,
        sentinel: "Unknown",
        always_included: true,
        extract: extract_risk,
        display: display_risk,
    },
    MetricSpec {
        label: "Red Flags",
        higher_is_better: false,
        sentinel: "0",
        always_included: true,
        extract: extract_concerns,
        display: display_concerns,
    },
];

fn royalty_text(analysis: &ContractAnalysis) -> Option<&str> {
    analysis.financial_terms.as_ref()?.royalty_rate.as_deref()
}

fn advance_text(analysis: &ContractAnalysis) -> Option<&str> {
    analysis.financial_terms.as_ref()?.advance_amount.as_deref()
}

fn extract_royalty(analysis: &ContractAnalysis) -> Option<f64> {
    royalty_text(analysis).and_then(extract::parse_rate)
}

fn extract_advance(analysis: &ContractAnalysis) -> Option<f64> {
    advance_text(analysis).and_then(extract::parse_amount)
}

fn extract_term(analysis: &ContractAnalysis) -> Option<f64> {
    analysis
        .term_length
        .as_deref()
        .and_then(extract::parse_term_months)
}

fn extract_risk(analysis: &ContractAnalysis) -> Option<f64> {
    // Absent risk counts as medium so unknown contracts sit in the middle
    // instead of winning or losing by default.
    Some(
        analysis
            .overall_risk_assessment
            .map(|r| r.rank())
            .unwrap_or(2.0),
    )
}

fn extract_concerns(analysis: &ContractAnalysis) -> Option<f64> {
    Some(analysis.potential_concerns.len() as f64)
}

fn display_royalty(analysis: &ContractAnalysis) -> Option<String> {
    royalty_text(analysis).map(String::from)
}

fn display_advance(analysis: &ContractAnalysis) -> Option<String> {
    advance_text(analysis).map(String::from)
}

fn display_term(analysis: &ContractAnalysis) -> Option<String> {
    analysis.term_length.clone()
}

fn display_risk(analysis: &ContractAnalysis) -> Option<String> {
    analysis
        .overall_risk_assessment
        .map(|r| r.as_str().to_string())
}

fn display_concerns(analysis: &ContractAnalysis) -> Option<String> {
    Some(analysis.potential_concerns.len().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_core::{FinancialTerms, RiskLevel};

    #[test]
    fn table_order_matches_response_contract() {
        let labels: Vec<&str> = METRIC_TABLE.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Royalty Rate",
                "Advance",
                "Contract Term",
                "Risk Level",
                "Red Flags"
            ]
        );
    }

    #[test]
    fn polarity_flags_are_fixed() {
        let by_label = |label: &str| {
            METRIC_TABLE
                .iter()
                .find(|m| m.label == label)
                .unwrap()
                .higher_is_better
        };
        assert!(by_label("Royalty Rate"));
        assert!(by_label("Advance"));
        assert!(!by_label("Contract Term"));
        assert!(!by_label("Risk Level"));
        assert!(!by_label("Red Flags"));
    }

    #[test]
    fn risk_defaults_to_medium_rank() {
        let absent = ContractAnalysis::default();
        assert_eq!(extract_risk(&absent), Some(2.0));

        let low = ContractAnalysis {
            overall_risk_assessment: Some(RiskLevel::Low),
            ..Default::default()
        };
        assert_eq!(extract_risk(&low), Some(1.0));
        assert_eq!(display_risk(&low).as_deref(), Some("Low"));
        assert_eq!(display_risk(&absent), None);
    }

    #[test]
    fn unparsable_royalty_is_absent_not_zero() {
        let analysis = ContractAnalysis {
            financial_terms: Some(FinancialTerms {
                royalty_rate: Some("industry standard".to_string()),
                advance_amount: None,
            }),
            ..Default::default()
        };
        assert_eq!(extract_royalty(&analysis), None);
        // The original text still shows in the display column.
        assert_eq!(
            display_royalty(&analysis).as_deref(),
            Some("industry standard")
        );
    }
}
