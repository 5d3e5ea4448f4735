//! Retry controller behavior against a scripted generator.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use bungo_common::{BungoError, EngineConfig};
use bungo_engine::{
    GenerationOptions, Generator, ProviderError, RetryController, RetryStatus, TaskType,
};

/// Generator that replays a fixed script of responses and counts calls.
struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    calls: AtomicU32,
}

impl ScriptedGenerator {
    fn new(responses: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicU32::new(0),
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Generator for ScriptedGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _task: TaskType,
        _options: &GenerationOptions,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("generator script exhausted")
    }
}

/// Long casual text scoring 100 with CLEAN severity.
fn clean_long() -> String {
    "クソみたいな一日だった。バカな話だろ。最悪だじゃん。".repeat(40)
}

/// Long neutral text scoring 65 (no emotional or colloquial words):
/// MEDIUM severity via the style floor, never rejected outright.
fn medium_long() -> String {
    "業界の真実を書く。それだけだ。".repeat(70)
}

/// Long fully-formal text scoring 35: MEDIUM severity.
fn formal_long() -> String {
    "資料を確認します。".repeat(120)
}

/// Long text opening with a machine acknowledgement; the corrector can
/// strip it, after which the remainder is clean and scores 100.
fn machine_long() -> String {
    format!("承知しました。{}", clean_long())
}

/// Long text matching six distinct manipulation rules - over the
/// reject threshold, and nothing the corrector can remove.
fn manipulation_long() -> String {
    format!(
        "{}あなたは特別だ。あなたには力がある。信じる力だ。夢は叶う。奇跡が起こる。引き寄せの法則だ。",
        clean_long()
    )
}

fn controller() -> RetryController {
    RetryController::new(EngineConfig::default())
}

fn controller_with(config: EngineConfig) -> RetryController {
    RetryController::new(config)
}

async fn run(
    controller: &RetryController,
    generator: &ScriptedGenerator,
) -> Result<bungo_engine::GenerationOutcome, BungoError> {
    controller
        .run(
            generator,
            "第1章を書け",
            TaskType::ChapterWriting,
            &GenerationOptions::default(),
        )
        .await
}

#[tokio::test]
async fn test_first_attempt_accepted_makes_exactly_one_call() {
    let generator = ScriptedGenerator::new(vec![Ok(clean_long())]);
    let outcome = run(&controller(), &generator).await.unwrap();

    assert_eq!(outcome.status, RetryStatus::Accepted);
    assert!(outcome.accepted());
    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.attempts, 1);
    assert_eq!(generator.calls(), 1);
    assert_eq!(outcome.report.recommendation, "content approved");
}

#[tokio::test]
async fn test_accepts_on_later_attempt() {
    let generator = ScriptedGenerator::new(vec![Ok(medium_long()), Ok(clean_long())]);
    let outcome = run(&controller(), &generator).await.unwrap();

    assert_eq!(outcome.status, RetryStatus::Accepted);
    assert_eq!(outcome.attempts, 2);
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn test_short_output_exhausts_with_error() {
    let config = EngineConfig {
        max_retries: 2,
        ..Default::default()
    };
    let generator =
        ScriptedGenerator::new(vec![Ok("短い。".to_string()), Ok("まだ短い。".to_string())]);

    match run(&controller_with(config), &generator).await {
        Err(BungoError::GenerationExhausted { attempts }) => assert_eq!(attempts, 2),
        other => panic!("expected GenerationExhausted, got {:?}", other.map(|o| o.status)),
    }
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn test_exhausted_returns_best_candidate() {
    let config = EngineConfig {
        max_retries: 2,
        ..Default::default()
    };
    // Scores 35 then 65: best must end at 65 (non-decreasing).
    let generator = ScriptedGenerator::new(vec![Ok(formal_long()), Ok(medium_long())]);
    let outcome = run(&controller_with(config), &generator).await.unwrap();

    assert_eq!(outcome.status, RetryStatus::Exhausted);
    assert!(!outcome.accepted());
    assert_eq!(outcome.score, 65);
    assert_eq!(outcome.text, medium_long());
    assert_eq!(outcome.report.recommendation, "style improvement needed");
}

#[tokio::test]
async fn test_best_candidate_survives_worse_followups() {
    let config = EngineConfig {
        max_retries: 2,
        ..Default::default()
    };
    // Scores 65 then 35: the later, worse candidate must not replace
    // the running best.
    let generator = ScriptedGenerator::new(vec![Ok(medium_long()), Ok(formal_long())]);
    let outcome = run(&controller_with(config), &generator).await.unwrap();

    assert_eq!(outcome.score, 65);
    assert_eq!(outcome.text, medium_long());
}

#[tokio::test]
async fn test_autocorrection_recovers_machine_response() {
    let generator = ScriptedGenerator::new(vec![Ok(machine_long())]);
    let outcome = run(&controller(), &generator).await.unwrap();

    assert_eq!(outcome.status, RetryStatus::Accepted);
    assert_eq!(outcome.attempts, 1);
    assert!(!outcome.text.contains("承知しました"));
}

#[tokio::test]
async fn test_unfixable_rejection_discards_candidate() {
    let config = EngineConfig {
        max_retries: 1,
        ..Default::default()
    };
    let generator = ScriptedGenerator::new(vec![Ok(manipulation_long())]);

    match run(&controller_with(config), &generator).await {
        Err(BungoError::GenerationExhausted { attempts }) => assert_eq!(attempts, 1),
        other => panic!("expected GenerationExhausted, got {:?}", other.map(|o| o.status)),
    }
}

#[tokio::test(start_paused = true)]
async fn test_transient_error_backs_off_then_recovers() {
    let generator = ScriptedGenerator::new(vec![
        Err(ProviderError::transient("model overloaded")),
        Ok(clean_long()),
    ]);
    let outcome = run(&controller(), &generator).await.unwrap();

    assert_eq!(outcome.status, RetryStatus::Accepted);
    assert_eq!(outcome.attempts, 2);
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn test_permanent_error_consumes_attempt() {
    let generator = ScriptedGenerator::new(vec![
        Err(ProviderError::permanent("invalid request")),
        Ok(clean_long()),
    ]);
    let outcome = run(&controller(), &generator).await.unwrap();

    assert_eq!(outcome.attempts, 2);
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn test_never_exceeds_max_retries() {
    let config = EngineConfig {
        max_retries: 3,
        ..Default::default()
    };
    let generator = ScriptedGenerator::new(vec![
        Ok(medium_long()),
        Ok(medium_long()),
        Ok(medium_long()),
    ]);
    let outcome = run(&controller_with(config), &generator).await.unwrap();

    assert_eq!(outcome.status, RetryStatus::Exhausted);
    assert_eq!(outcome.attempts, 3);
    assert_eq!(generator.calls(), 3);
}

#[tokio::test]
async fn test_blank_prompt_fails_without_calling_generator() {
    let generator = ScriptedGenerator::new(vec![]);
    let result = controller()
        .run(
            &generator,
            "   ",
            TaskType::ChapterWriting,
            &GenerationOptions::default(),
        )
        .await;

    assert!(matches!(result, Err(BungoError::InvalidInput)));
    assert_eq!(generator.calls(), 0);
}
