//! Pattern rule tables for machine-response and manipulation detection.
//!
//! The two sets are disjoint and immutable: machine-response rules flag
//! text that reads like an assistant replying to a prompt, manipulation
//! rules flag the manipulative self-help register the pipeline refuses
//! to publish. Adding or removing a rule is a data change, not logic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Severity tag carried by an individual rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleSeverity {
    Critical,
    High,
    Medium,
}

/// A single detection rule: a compiled regex plus its severity tag
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    severity: RuleSeverity,
}

impl PatternRule {
    pub fn new(pattern: &str, severity: RuleSeverity) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            severity,
        })
    }

    /// The source pattern, used as the rule identifier in reports
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn severity(&self) -> RuleSeverity {
        self.severity
    }

    /// All non-overlapping matches of this rule in `text`
    pub fn matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Phrases that read like an AI assistant acknowledging a request,
/// referring to itself, or falling back on template scaffolding.
const MACHINE_RESPONSE_PATTERNS: &[&str] = &[
    // Mechanical acknowledgements at the start of the text
    "^承知.*しました",
    "^かしこまりました",
    "^理解.*しました",
    "^了解.*しました",
    "それでは.*始めましょう",
    "以下.*生成.*します",
    "^お手伝い.*させていただきます",
    // AI self-reference
    "私は.*AI",
    "私は.*著者として",
    "私は.*創造",
    "AI.*として",
    "システム.*として",
    // Mechanical structuring phrases
    "以下.*ような",
    "について考えてみましょう",
    "まとめてみました",
    "整理してみます",
    "説明.*させていただきます",
    "提案.*させていただきます",
    // Template brackets and decorations
    "【.*】",
    "★.*★",
    "▼.*▼",
    "■.*■",
    // Preachy framing
    "大切なのは",
    "重要なことは",
    "^まず.*大切",
    "忘れてはいけない",
    "心に刻んで",
    "学ぶべき",
    "理解すべき",
    // Over-deferential keigo
    "させていただく",
    "いただけれ",
    "恐縮ですが",
    "申し上げます",
    "お聞かせください",
];

/// Manipulative self-help phrasing the pipeline refuses to publish.
const MANIPULATION_PATTERNS: &[&str] = &[
    "あなたは.*特別",
    "あなたには.*力がある",
    "信じる.*力",
    "ポジティブ.*思考",
    "必ず.*うまくいく",
    "夢は.*叶う",
    "感謝.*すれば",
    "宇宙.*応援",
    "引き寄せ.*法則",
    "運命.*変える",
    "奇跡.*起こる",
    "愛.*エネルギー",
];

static BUILTIN: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::from_patterns(MACHINE_RESPONSE_PATTERNS, MANIPULATION_PATTERNS)
        .expect("built-in pattern tables must compile")
});

/// The two immutable rule collections the validator evaluates.
#[derive(Debug, Clone)]
pub struct RuleSet {
    machine_response: Vec<PatternRule>,
    manipulation: Vec<PatternRule>,
}

impl RuleSet {
    /// Build a rule set from raw pattern strings. Machine-response
    /// rules carry CRITICAL severity, manipulation rules HIGH.
    pub fn from_patterns(
        machine_response: &[&str],
        manipulation: &[&str],
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            machine_response: machine_response
                .iter()
                .map(|p| PatternRule::new(p, RuleSeverity::Critical))
                .collect::<Result<_, _>>()?,
            manipulation: manipulation
                .iter()
                .map(|p| PatternRule::new(p, RuleSeverity::High))
                .collect::<Result<_, _>>()?,
        })
    }

    /// The built-in production rule tables, compiled once
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    pub fn machine_response_rules(&self) -> &[PatternRule] {
        &self.machine_response
    }

    pub fn manipulation_rules(&self) -> &[PatternRule] {
        &self.manipulation
    }
}
