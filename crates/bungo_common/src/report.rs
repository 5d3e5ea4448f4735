//! Quality report derived from a validation result.

use crate::validator::{Severity, ValidationResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Serializable summary of one validation, produced once per retry
/// session. External persistence and notification layers consume this
/// without needing the rule definitions.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub machine_response_hits: usize,
    pub manipulation_hits: usize,
    pub human_style_score: u8,
    pub recommendation: &'static str,
}

impl QualityReport {
    /// Pure transformation; total over any well-formed result.
    pub fn build(result: &ValidationResult) -> Self {
        Self {
            timestamp: Utc::now(),
            severity: result.severity,
            machine_response_hits: result.machine_response_hits.len(),
            manipulation_hits: result.manipulation_hits.len(),
            human_style_score: result.human_style_score,
            recommendation: recommendation(result.severity),
        }
    }
}

/// Fixed recommendation string for each severity level.
pub fn recommendation(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "complete regeneration required",
        Severity::High => "major revision needed",
        Severity::Medium => "style improvement needed",
        Severity::Clean => "content approved",
    }
}
