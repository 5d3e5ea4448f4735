//! Revolutionary-intensity heuristic.
//!
//! A quick proxy for how hard a chapter pushes against industry
//! consensus: keyword density earns points, length earns a bonus, and
//! known AI phrases cost points. Used for reporting only; accept and
//! reject decisions come from the validator.

/// Contrarian keywords; each occurrence earns 3 points.
const REVOLUTIONARY_WORDS: &[&str] = &[
    "嘘",
    "間違い",
    "騙されている",
    "真実は",
    "実は",
    "逆に",
    "常識を疑え",
    "業界が隠す",
    "専門家が言わない",
    "裏側",
    "破壊",
    "革命",
    "覆す",
    "否定",
    "暴露",
];

/// Known AI phrases; each one present costs 10 points.
const AI_PHRASES: &[&str] = &["について考えてみましょう", "まとめると", "重要なポイント"];

/// Score a text's contrarian intensity on [0, 100].
pub fn revolutionary_intensity(text: &str) -> u8 {
    let mut score: i32 = 0;

    for word in REVOLUTIONARY_WORDS {
        score += 3 * text.matches(word).count() as i32;
    }

    let chars = text.chars().count();
    if chars > 8000 {
        score += 20;
    } else if chars > 5000 {
        score += 10;
    }

    for phrase in AI_PHRASES {
        if text.contains(phrase) {
            score -= 10;
        }
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(revolutionary_intensity(""), 0);
    }

    #[test]
    fn test_keywords_accumulate() {
        // 嘘 + 暴露 + 裏側 = 9 points
        assert_eq!(revolutionary_intensity("業界の嘘を暴露する。裏側を見ろ。"), 9);
    }

    #[test]
    fn test_ai_phrases_deduct() {
        let text = "嘘だ。について考えてみましょう。";
        // 3 for 嘘, -10 for the AI phrase, clamped at 0
        assert_eq!(revolutionary_intensity(text), 0);
    }

    #[test]
    fn test_length_bonus() {
        let base = "業界の嘘。".repeat(1100); // 5500 chars, 1100 occurrences of 嘘
        let score = revolutionary_intensity(&base);
        assert_eq!(score, 100); // saturates well past the clamp
    }

    #[test]
    fn test_clamped_to_hundred() {
        let text = "嘘".repeat(500);
        assert_eq!(revolutionary_intensity(&text), 100);
    }
}
