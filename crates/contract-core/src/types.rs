use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall risk verdict assigned by the upstream contract analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Numeric rank used for comparison (lower is safer).
    pub fn rank(&self) -> f64 {
        match self {
            RiskLevel::Low => 1.0,
            RiskLevel::Medium => 2.0,
            RiskLevel::High => 3.0,
        }
    }

    /// Display label for metric tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Financial terms as extracted by the analysis LLM. Free text, not numbers:
/// values look like "15%" or "$5,000 recoupable".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTerms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub royalty_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_amount: Option<String>,
}

/// The semi-structured analysis payload stored per contract.
///
/// Every field is optional; the payload is whatever the analysis model
/// produced, and fields this service does not track are carried through
/// untouched in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_terms: Option<FinancialTerms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_risk_assessment: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub potential_concerns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_terms: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One contract as submitted to the comparison endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractForComparison {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub analysis: ContractAnalysis,
}

/// A single row of the comparison table.
///
/// `values` is positional: one display string per input contract, with
/// "Not specified"/"Unknown" sentinels where extraction missed. `winner`
/// indexes into the input contracts array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetric {
    pub label: String,
    pub values: Vec<String>,
    pub winner: Option<usize>,
    pub higher_is_better: bool,
}

/// Summary and recommendation prose, whether LLM-written or templated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Narrative {
    pub summary: String,
    pub recommendation: String,
}

/// Full response body for a comparison request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub metrics: Vec<ComparisonMetric>,
    #[serde(rename = "aiSummary")]
    pub ai_summary: String,
    pub recommendation: String,
}

/// Result of analyzing a single contract's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedContract {
    pub title: String,
    pub analysis: ContractAnalysis,
    pub analyzed_at: DateTime<Utc>,
    pub model: String,
}
