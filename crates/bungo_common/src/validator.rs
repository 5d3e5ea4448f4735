//! Anti-AI content validator.
//!
//! Classifies generated text against the pattern rule tables and the
//! human-style heuristics, producing an immutable `ValidationResult`.
//! Severity is always derived from the recorded evidence, never set
//! independently, so a serialized result can be audited against its
//! own hit lists.

use crate::rules::RuleSet;
use serde::Serialize;

/// Formal-register sentence markers. A sentence containing any of
/// these counts toward the formality ratio.
const FORMAL_MARKERS: &[&str] = &["である", "します", "ます", "ください"];

/// Emotionally charged words. Fewer than three occurrences across the
/// whole text costs 20 points.
const EMOTIONAL_WORDS: &[&str] = &[
    "ムカつく",
    "クソ",
    "バカ",
    "最悪",
    "うざい",
    "イライラ",
    "腹立つ",
    "キレる",
];

/// Colloquial markers. Fewer than two occurrences costs 15 points.
const COLLOQUIAL_WORDS: &[&str] = &["だろ", "じゃん", "だよな", "ってか", "マジで", "ヤバい", "すげー"];

/// Human-style score below this adds a style issue to the result.
const STYLE_SCORE_FLOOR: u8 = 70;

/// Coarse classification of how unacceptable a text is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Clean,
    Medium,
    High,
    Critical,
}

/// One rule that matched, with every matched substring recorded so the
/// corrector can remove them literally.
#[derive(Debug, Clone, Serialize)]
pub struct PatternHit {
    /// The source pattern of the rule that matched
    pub rule: String,
    /// Every non-overlapping match, in text order
    pub matches: Vec<String>,
}

/// Outcome of evaluating one text. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub machine_response_hits: Vec<PatternHit>,
    pub manipulation_hits: Vec<PatternHit>,
    pub style_issues: Vec<String>,
    pub human_style_score: u8,
    pub severity: Severity,
}

/// Evaluates text against a rule set. Stateless and safe to share
/// across any number of concurrent validations.
#[derive(Debug, Clone)]
pub struct ContentValidator {
    rules: RuleSet,
}

impl Default for ContentValidator {
    fn default() -> Self {
        Self::new(RuleSet::builtin().clone())
    }
}

impl ContentValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Validate one text. Total over any input, including "".
    pub fn validate(&self, text: &str) -> ValidationResult {
        let machine_response_hits = collect_hits(self.rules.machine_response_rules(), text);
        let manipulation_hits = collect_hits(self.rules.manipulation_rules(), text);

        let human_style_score = human_style_score(text);
        let mut style_issues = Vec::new();
        if human_style_score < STYLE_SCORE_FLOOR {
            style_issues.push(format!(
                "human style score {} below {}: {}",
                human_style_score,
                STYLE_SCORE_FLOOR,
                identify_style_issues(text).join(", ")
            ));
        }

        // Priority order: machine-response evidence trumps everything,
        // then heavy manipulation, then style.
        let severity = if !machine_response_hits.is_empty() {
            Severity::Critical
        } else if manipulation_hits.len() > 3 {
            Severity::High
        } else if !style_issues.is_empty() {
            Severity::Medium
        } else {
            Severity::Clean
        };

        tracing::debug!(
            machine = machine_response_hits.len(),
            manipulation = manipulation_hits.len(),
            score = human_style_score,
            ?severity,
            "validated candidate"
        );

        ValidationResult {
            machine_response_hits,
            manipulation_hits,
            style_issues,
            human_style_score,
            severity,
        }
    }
}

fn collect_hits(rules: &[crate::rules::PatternRule], text: &str) -> Vec<PatternHit> {
    rules
        .iter()
        .filter_map(|rule| {
            let matches = rule.matches(text);
            if matches.is_empty() {
                None
            } else {
                Some(PatternHit {
                    rule: rule.pattern().to_string(),
                    matches: matches.into_iter().map(str::to_string).collect(),
                })
            }
        })
        .collect()
}

/// Heuristic score for "does not read like templated machine output".
///
/// Starts at 100 and deducts for an over-formal sentence register
/// (-30), missing emotional language (-20), and missing colloquialisms
/// (-15). A text with no sentences at all takes no formality penalty;
/// the ratio is defined as 0 in that case rather than dividing by zero.
pub fn human_style_score(text: &str) -> u8 {
    let mut score: i32 = 100;

    let sentences: Vec<&str> = text
        .split(['。', '！', '？'])
        .filter(|s| !s.trim().is_empty())
        .collect();

    let formal_ratio = if sentences.is_empty() {
        0.0
    } else {
        let formal = sentences
            .iter()
            .filter(|s| FORMAL_MARKERS.iter().any(|m| s.contains(m)))
            .count();
        formal as f64 / sentences.len() as f64
    };
    if formal_ratio > 0.7 {
        score -= 30;
    }

    let emotional: usize = EMOTIONAL_WORDS.iter().map(|w| text.matches(w).count()).sum();
    if emotional < 3 {
        score -= 20;
    }

    let colloquial: usize = COLLOQUIAL_WORDS.iter().map(|w| text.matches(w).count()).sum();
    if colloquial < 2 {
        score -= 15;
    }

    score.clamp(0, 100) as u8
}

/// Names the specific heuristics a low-scoring text failed.
fn identify_style_issues(text: &str) -> Vec<&'static str> {
    let mut issues = Vec::new();

    if text.contains("させていただく") {
        issues.push("overly polite keigo");
    }

    let desu_runs = text.matches("です。").count();
    if desu_runs >= 3 {
        issues.push("monotonous sentence endings");
    }

    let colloquial: usize = COLLOQUIAL_WORDS.iter().map(|w| text.matches(w).count()).sum();
    if colloquial < 2 {
        issues.push("missing colloquial expressions");
    }

    let emotional: usize = EMOTIONAL_WORDS.iter().map(|w| text.matches(w).count()).sum();
    if emotional < 3 {
        issues.push("lacking emotional language");
    }

    issues
}
