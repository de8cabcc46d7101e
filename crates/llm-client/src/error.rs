use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("LLM API error: {0}")]
    Api(String),

    #[error("Empty completion: no choices in response")]
    EmptyCompletion,

    #[error("Unparsable completion: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type LlmResult<T> = Result<T, LlmError>;
