use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("At least 2 contracts required for comparison")]
    TooFewContracts,

    #[error("Summarization failed: {0}")]
    Summarization(String),
}
