//! Single-contract analysis: prompt the LLM with the contract text and
//! validate the completion into a `ContractAnalysis` payload.

use chrono::Utc;
use contract_core::{AnalyzedContract, ContractAnalysis};

use crate::chat::Message;
use crate::error::LlmResult;
use crate::LlmClient;

/// Character budget for contract text embedded in the prompt. Overridden
/// with `ANALYZE_MAX_CHARS`.
pub const DEFAULT_MAX_CHARS: usize = 12_000;

const SYSTEM_PROMPT: &str = "You are a contract analyst for musicians. Read the contract and \
    respond only with a JSON object shaped like: {\"summary\": \"...\", \"financialTerms\": \
    {\"royaltyRate\": \"...\", \"advanceAmount\": \"...\"}, \"termLength\": \"...\", \
    \"overallRiskAssessment\": \"low\"|\"medium\"|\"high\", \"potentialConcerns\": [\"...\"], \
    \"keyTerms\": [\"...\"]}. Omit any field the contract does not address.";

/// Truncate on a char boundary without splitting a code point.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

impl LlmClient {
    /// Analyze raw contract text into the structured payload the comparison
    /// endpoint consumes. Unlike summarization there is no deterministic
    /// fallback; the caller surfaces failures.
    pub async fn analyze_contract(
        &self,
        title: &str,
        text: &str,
        max_chars: usize,
    ) -> LlmResult<AnalyzedContract> {
        let body = truncate_chars(text, max_chars);
        if body.len() < text.len() {
            tracing::debug!(
                title,
                kept = body.len(),
                total = text.len(),
                "contract text truncated for prompt"
            );
        }

        let messages = [
            Message::system(SYSTEM_PROMPT),
            Message::user(format!(
                "Analyze this contract, titled \"{title}\":\n\n{body}"
            )),
        ];

        let content = self.complete_json(&messages).await?;
        let analysis: ContractAnalysis = serde_json::from_str(&content)?;

        Ok(AnalyzedContract {
            title: title.to_string(),
            analysis,
            analyzed_at: Utc::now(),
            model: self.model().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
        assert_eq!(truncate_chars("abc", 10), "abc");
        // Multi-byte chars must not be split.
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }

    #[test]
    fn analysis_payload_tolerates_partial_fields() {
        let analysis: ContractAnalysis = serde_json::from_str(
            r#"{"financialTerms": {"royaltyRate": "15%"}, "overallRiskAssessment": "medium"}"#,
        )
        .unwrap();
        assert_eq!(
            analysis
                .financial_terms
                .as_ref()
                .and_then(|t| t.royalty_rate.as_deref()),
            Some("15%")
        );
        assert!(analysis.potential_concerns.is_empty());
        assert!(analysis.term_length.is_none());
    }

    #[test]
    fn unknown_fields_are_carried_not_rejected() {
        let analysis: ContractAnalysis = serde_json::from_str(
            r#"{"termLength": "2 years", "negotiationTips": ["ask for more"]}"#,
        )
        .unwrap();
        assert_eq!(analysis.term_length.as_deref(), Some("2 years"));
        assert!(analysis.extra.contains_key("negotiationTips"));
    }
}
