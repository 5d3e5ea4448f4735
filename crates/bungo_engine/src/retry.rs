//! Bounded generation + validation retry loop.
//!
//! One controller invocation owns one logical request (typically one
//! chapter): it asks the generator for text, validates it, optionally
//! auto-corrects and re-validates once, and keeps the best-scoring
//! candidate seen so far. Attempts are strictly sequential; all retry
//! policy lives here and nowhere else.

use bungo_common::corrector::AutoCorrector;
use bungo_common::validator::{ContentValidator, Severity, ValidationResult};
use bungo_common::{BungoError, EngineConfig, QualityReport};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::generator::{GenerationOptions, Generator, TaskType};

/// How the retry session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStatus {
    /// A candidate met the acceptance bar before attempts ran out
    Accepted,
    /// Attempts ran out; the best-effort candidate is returned
    Exhausted,
}

/// Result of one retry session. Exactly three outcomes exist for a
/// request: accepted, exhausted-with-best-candidate, or the
/// `GenerationExhausted` error when nothing usable was ever produced.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub text: String,
    pub score: u8,
    pub status: RetryStatus,
    pub report: QualityReport,
    pub attempts: u32,
}

impl GenerationOutcome {
    pub fn accepted(&self) -> bool {
        self.status == RetryStatus::Accepted
    }
}

/// Drives up to `max_retries` generation + validation cycles for a
/// single request, tracking the best candidate across attempts.
#[derive(Debug, Clone)]
pub struct RetryController {
    config: EngineConfig,
    validator: ContentValidator,
    corrector: AutoCorrector,
}

impl RetryController {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            validator: ContentValidator::default(),
            corrector: AutoCorrector::new(),
        }
    }

    /// Swap in a non-default validator (custom rule sets in tests).
    pub fn with_validator(config: EngineConfig, validator: ContentValidator) -> Self {
        Self {
            config,
            validator,
            corrector: AutoCorrector::new(),
        }
    }

    /// A candidate is rejected outright when its evidence crosses any
    /// of the configured thresholds.
    pub fn should_reject(&self, result: &ValidationResult) -> bool {
        result.severity == Severity::Critical
            || result.machine_response_hits.len() > self.config.reject_max_machine_hits
            || result.manipulation_hits.len() > self.config.reject_max_manipulation_hits
    }

    /// Run one retry session against `generator`.
    pub async fn run<G: Generator>(
        &self,
        generator: &G,
        prompt: &str,
        task: TaskType,
        options: &GenerationOptions,
    ) -> Result<GenerationOutcome, BungoError> {
        if prompt.trim().is_empty() {
            return Err(BungoError::InvalidInput);
        }

        let mut best: Option<(String, ValidationResult)> = None;
        let mut attempt: u32 = 0;

        while attempt < self.config.max_retries {
            attempt += 1;
            debug!(attempt, max = self.config.max_retries, "generation attempt");

            let text = match generator.generate(prompt, task, options).await {
                Ok(text) => text,
                Err(e) if e.transient => {
                    warn!(attempt, "transient provider error: {e}. Backing off.");
                    tokio::time::sleep(Duration::from_millis(self.config.transient_backoff_ms))
                        .await;
                    continue;
                }
                Err(e) => {
                    warn!(attempt, "provider error: {e}");
                    continue;
                }
            };

            // Too-short output is a failed attempt, never scored.
            if text.chars().count() < self.config.min_acceptable_length {
                debug!(
                    attempt,
                    chars = text.chars().count(),
                    min = self.config.min_acceptable_length,
                    "candidate below minimum length"
                );
                continue;
            }

            let mut candidate = text;
            let mut result = self.validator.validate(&candidate);

            if self.should_reject(&result) {
                // One correction pass, then one re-validation. A
                // candidate still rejected after that is discarded.
                let fixed = self.corrector.attempt_fix(&candidate, &result);
                let fixed_result = self.validator.validate(&fixed);
                if self.should_reject(&fixed_result) {
                    debug!(attempt, "candidate rejected after auto-correction");
                    continue;
                }
                candidate = fixed;
                result = fixed_result;
            }

            let score = result.human_style_score;
            if result.severity == Severity::Clean && score >= self.config.accept_score_threshold {
                info!(attempt, score, "candidate accepted");
                let report = QualityReport::build(&result);
                return Ok(GenerationOutcome {
                    text: candidate,
                    score,
                    status: RetryStatus::Accepted,
                    report,
                    attempts: attempt,
                });
            }

            // Best-so-far tracking: strictly improving scores only, so
            // the running best is non-decreasing across attempts.
            let improves = best
                .as_ref()
                .map_or(true, |(_, r)| score > r.human_style_score);
            if improves {
                debug!(attempt, score, "new best candidate");
                best = Some((candidate, result));
            }
        }

        match best {
            Some((text, result)) => {
                let score = result.human_style_score;
                info!(
                    attempts = attempt,
                    score, "attempts exhausted, returning best candidate"
                );
                let report = QualityReport::build(&result);
                Ok(GenerationOutcome {
                    text,
                    score,
                    status: RetryStatus::Exhausted,
                    report,
                    attempts: attempt,
                })
            }
            None => Err(BungoError::GenerationExhausted { attempts: attempt }),
        }
    }
}
