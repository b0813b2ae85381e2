use thiserror::Error;

/// Failures surfaced by the helpers and the expression evaluator.
/// The emptiness classifier never produces one of these.
#[derive(Debug, Error)]
pub enum HelperError {
    #[error("parse error: {0}")]
    Parse(String),

    // Wrong arity or wrong kind for a helper argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("generation failed: {0}")]
    Generation(String),

    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("clone failed: {0}")]
    DeepClone(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HelperError>;
