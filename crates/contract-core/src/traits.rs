use async_trait::async_trait;

use crate::{CompareError, ComparisonMetric, ContractForComparison, Narrative};

/// Trait for narrative generators that turn a computed metric table into
/// summary and recommendation prose.
///
/// The LLM-backed implementation lives in `llm-client`; callers fall back to
/// the deterministic template in `comparison-engine` when this fails.
#[async_trait]
pub trait NarrativeSummarizer: Send + Sync {
    async fn summarize(
        &self,
        contracts: &[ContractForComparison],
        metrics: &[ComparisonMetric],
    ) -> Result<Narrative, CompareError>;
}
