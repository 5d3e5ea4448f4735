//! Retry orchestration for the Bungo book pipeline.
//!
//! Consumes an external `Generator` (the LLM provider client lives
//! outside this crate) and drives bounded generation + validation
//! cycles, keeping the best-scoring candidate across attempts.

pub mod generator;
pub mod retry;

pub use generator::{GenerationOptions, Generator, ProviderError, TaskType};
pub use retry::{GenerationOutcome, RetryController, RetryStatus};
