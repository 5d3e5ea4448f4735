//! Shared validation core for the Bungo book pipeline.
//!
//! Everything in this crate is pure computation over in-memory text:
//! pattern rule tables, the anti-AI content validator, the
//! auto-corrector, quality reports, persona prompts, and the engine
//! configuration. Orchestration lives in `bungo_engine`.

pub mod config;
pub mod corrector;
pub mod error;
pub mod intensity;
pub mod persona;
pub mod report;
pub mod rules;
pub mod validator;

pub use config::EngineConfig;
pub use error::BungoError;
pub use report::QualityReport;
pub use rules::{PatternRule, RuleSet, RuleSeverity};
pub use validator::{ContentValidator, PatternHit, Severity, ValidationResult};
