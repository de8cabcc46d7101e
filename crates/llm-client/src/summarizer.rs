//! LLM-written comparison narrative.

use async_trait::async_trait;
use serde::Deserialize;

use contract_core::{
    CompareError, ComparisonMetric, ContractForComparison, Narrative, NarrativeSummarizer,
};

use crate::chat::Message;
use crate::error::LlmResult;
use crate::LlmClient;

const SYSTEM_PROMPT: &str = "You are a music industry contract advisor. You compare deal terms \
    plainly and conservatively, for an artist without legal training. Respond only with a JSON \
    object of the form {\"summary\": \"...\", \"recommendation\": \"...\"} where summary is 2-3 \
    sentences comparing the offers and recommendation is a single sentence.";

/// Expected shape of the completion content.
#[derive(Debug, Deserialize)]
struct NarrativePayload {
    summary: String,
    recommendation: String,
}

/// Render one contract's extracted terms as a prompt block. Only the first
/// three concerns are quoted to keep the prompt bounded.
fn contract_block(index: usize, contract: &ContractForComparison) -> String {
    let analysis = &contract.analysis;
    let terms = analysis.financial_terms.as_ref();
    let royalty = terms
        .and_then(|t| t.royalty_rate.as_deref())
        .unwrap_or("not specified");
    let advance = terms
        .and_then(|t| t.advance_amount.as_deref())
        .unwrap_or("not specified");
    let term = analysis.term_length.as_deref().unwrap_or("not specified");
    let risk = analysis
        .overall_risk_assessment
        .map(|r| r.as_str())
        .unwrap_or("unknown");
    let concerns = if analysis.potential_concerns.is_empty() {
        "none listed".to_string()
    } else {
        analysis
            .potential_concerns
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join("; ")
    };

    format!(
        "Contract {n}: {title}\n\
         - Royalty: {royalty}\n\
         - Advance: {advance}\n\
         - Term: {term}\n\
         - Risk level: {risk}\n\
         - Top concerns: {concerns}",
        n = index + 1,
        title = contract.title,
    )
}

pub(crate) fn build_comparison_prompt(
    contracts: &[ContractForComparison],
    metrics: &[ComparisonMetric],
) -> String {
    let blocks: Vec<String> = contracts
        .iter()
        .enumerate()
        .map(|(i, c)| contract_block(i, c))
        .collect();

    let winner_lines: Vec<String> = metrics
        .iter()
        .map(|m| {
            let winner = m
                .winner
                .and_then(|w| contracts.get(w))
                .map(|c| c.title.as_str())
                .unwrap_or("no clear winner");
            format!("- {}: {}", m.label, winner)
        })
        .collect();

    format!(
        "Compare these contract offers for the artist:\n\n{}\n\n\
         Per-metric winners from a heuristic comparison:\n{}\n\n\
         Summarize which offer is stronger and why, then give one recommendation sentence.",
        blocks.join("\n\n"),
        winner_lines.join("\n"),
    )
}

impl LlmClient {
    /// One summarization attempt. Transport failures, non-2xx statuses and
    /// malformed JSON all surface as `LlmError` for the caller to absorb.
    pub async fn summarize_comparison(
        &self,
        contracts: &[ContractForComparison],
        metrics: &[ComparisonMetric],
    ) -> LlmResult<Narrative> {
        let messages = [
            Message::system(SYSTEM_PROMPT),
            Message::user(build_comparison_prompt(contracts, metrics)),
        ];

        let content = self.complete_json(&messages).await?;
        let payload: NarrativePayload = serde_json::from_str(&content)?;

        Ok(Narrative {
            summary: payload.summary,
            recommendation: payload.recommendation,
        })
    }
}

#[async_trait]
impl NarrativeSummarizer for LlmClient {
    async fn summarize(
        &self,
        contracts: &[ContractForComparison],
        metrics: &[ComparisonMetric],
    ) -> Result<Narrative, CompareError> {
        self.summarize_comparison(contracts, metrics)
            .await
            .map_err(|e| CompareError::Summarization(e.to_string()))
    }
}
