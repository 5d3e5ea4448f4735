//! Generator boundary - the external text-generation capability.
//!
//! The provider client itself (HTTP, API keys, model selection) is an
//! external collaborator. This module defines only what the retry
//! engine consumes: a prompt + task type in, text or a provider error
//! out.

use bungo_common::BungoError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Task types the provider dispatches on (fast model vs capable model,
/// deterministic vs creative temperature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    TitleSuggestion,
    ShortSummary,
    KeywordExtraction,
    PlotDevelopment,
    CharacterCreation,
    ChapterWriting,
    CodeGeneration,
}

/// Per-call generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 8192,
        }
    }
}

/// A generation-call failure. `transient` failures (overload, rate
/// limit, 5xx-class) are retried after a fixed backoff; everything
/// else consumes the attempt.
#[derive(Debug, Clone, Error)]
#[error("provider error (transient={transient}): {message}")]
pub struct ProviderError {
    pub message: String,
    pub transient: bool,
}

impl ProviderError {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            transient: true,
        }
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            transient: false,
        }
    }
}

/// Callers surfacing a provider failure outside the retry loop (one-shot
/// generation, health probes) get the pipeline error taxonomy with `?`.
impl From<ProviderError> for BungoError {
    fn from(e: ProviderError) -> Self {
        BungoError::Provider {
            message: e.message,
            transient: e.transient,
        }
    }
}

/// External generation capability consumed by the retry engine.
///
/// Implementations may block on network I/O; the engine awaits them
/// sequentially within one retry session.
#[allow(async_fn_in_trait)]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        task: TaskType,
        options: &GenerationOptions,
    ) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_serializes_snake_case() {
        let json = serde_json::to_string(&TaskType::ChapterWriting).unwrap();
        assert_eq!(json, "\"chapter_writing\"");
    }

    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();
        assert!((options.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(options.max_output_tokens, 8192);
    }

    #[test]
    fn test_provider_error_converts_to_pipeline_error() {
        let e = BungoError::from(ProviderError::transient("model overloaded"));
        match e {
            BungoError::Provider { message, transient } => {
                assert_eq!(message, "model overloaded");
                assert!(transient);
            }
            other => panic!("expected Provider variant, got {other:?}"),
        }
    }

    #[test]
    fn test_provider_error_display() {
        let e = ProviderError::transient("model overloaded");
        assert_eq!(
            e.to_string(),
            "provider error (transient=true): model overloaded"
        );
        assert!(e.transient);
        assert!(!ProviderError::permanent("bad request").transient);
    }
}
