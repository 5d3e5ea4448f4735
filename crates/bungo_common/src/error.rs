//! Error types for the Bungo pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BungoError {
    /// The caller handed the engine nothing to work with (blank prompt).
    #[error("No usable input supplied")]
    InvalidInput,

    /// The external generation call failed. Transient failures are
    /// recovered inside the retry loop; permanent ones consume the
    /// attempt.
    #[error("Provider error (transient={transient}): {message}")]
    Provider { message: String, transient: bool },

    /// Every attempt was spent without a single usable candidate.
    #[error("Generation exhausted after {attempts} attempts with no usable candidate")]
    GenerationExhausted { attempts: u32 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
