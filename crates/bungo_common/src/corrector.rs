//! Deterministic auto-correction of flagged text.
//!
//! Removes the literal substrings recorded as machine-response hits,
//! then applies two fixed substitution tables: machine-register
//! phrases to plain forms, and soft phrasing to the assertive register
//! the pipeline publishes in. The corrector makes no promise the
//! result re-validates clean; callers must re-validate.

use crate::validator::ValidationResult;

/// Machine-register phrases and template brackets, replaced globally.
const MACHINE_PHRASE_FIXES: &[(&str, &str)] = &[
    ("させていただきます", "する"),
    ("について考えてみましょう", "について考えろ"),
    ("大切なのは", "重要なのは"),
    ("【", ""),
    ("】", ""),
    ("★", ""),
    ("▼", ""),
    ("■", ""),
];

/// Soften-to-assertive replacements that push tone toward the blunt
/// register. Table is configuration, not logic.
const ASSERTIVE_FIXES: &[(&str, &str)] = &[
    ("問題です", "クソみたいな問題だ"),
    ("困難", "クソ面倒"),
    ("素晴らしい", "まともな"),
];

/// Applies the fixed correction tables. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoCorrector;

impl AutoCorrector {
    pub fn new() -> Self {
        Self
    }

    /// Produce a corrected candidate from `text` and its validation
    /// result. Always returns a string, unchanged when nothing matched.
    pub fn attempt_fix(&self, text: &str, result: &ValidationResult) -> String {
        let mut fixed = text.to_string();

        // Literal removal of each recorded machine-response match,
        // first occurrence each. This can leave grammatically rough
        // sentences; that is the documented production behavior.
        for hit in &result.machine_response_hits {
            for matched in &hit.matches {
                fixed = fixed.replacen(matched.as_str(), "", 1);
            }
        }

        for (from, to) in MACHINE_PHRASE_FIXES {
            fixed = fixed.replace(from, to);
        }

        for (from, to) in ASSERTIVE_FIXES {
            fixed = fixed.replace(from, to);
        }

        fixed
    }
}
