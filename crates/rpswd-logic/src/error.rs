//! Error types surfaced to the match harness

use thiserror::Error;

/// Failures the engine reports instead of guessing a default.
///
/// Short or empty history is never an error; it selects the uniform fallback.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown side identifier {0:?}, expected \"p1\" or \"p2\"")]
    UnknownSide(String),

    #[error("unknown move symbol {0:?}, expected one of R, P, S, W, D")]
    UnknownMove(String),

    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),
}
