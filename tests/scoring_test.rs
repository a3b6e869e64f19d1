use std::sync::Arc;
use timestamp_finder::types::{PipelineError, Result};
use timestamp_finder::{
    parse_judgment, CannedGenerator, LexicalScorer, RelevanceScorer, SemanticScorer, TextGenerator,
};

#[test]
fn parses_a_complete_labeled_response() {
    let raw = "RELEVANT: YES\n\
               SCORE: 85\n\
               EXPLANATION: Directly walks through the update rule.\n\
               KEY_POINTS: - learning rate\n- loss surface\n- convergence";

    let judgment = parse_judgment(raw);
    assert!(judgment.relevant);
    assert_eq!(judgment.score, 85);
    assert_eq!(judgment.explanation, "Directly walks through the update rule.");
    assert!(judgment.key_points.contains("learning rate"));
    assert!(judgment.key_points.contains("convergence"));
}

#[test]
fn missing_labels_default_independently() {
    // No RELEVANT or KEY_POINTS line: those fields default, the rest parse.
    let raw = "SCORE: 40\nEXPLANATION: Mentions the topic in passing.";

    let judgment = parse_judgment(raw);
    assert!(!judgment.relevant);
    assert_eq!(judgment.score, 40);
    assert_eq!(judgment.explanation, "Mentions the topic in passing.");
    assert_eq!(judgment.key_points, "");
}

#[test]
fn garbled_score_defaults_to_zero() {
    let judgment = parse_judgment("RELEVANT: NO\nSCORE: not-a-number\nEXPLANATION: n/a");
    assert!(!judgment.relevant);
    assert_eq!(judgment.score, 0);
}

#[test]
fn score_is_clamped_to_one_hundred() {
    let judgment = parse_judgment("RELEVANT: YES\nSCORE: 250");
    assert_eq!(judgment.score, 100);
}

#[test]
fn bracketed_model_output_still_parses() {
    // Models sometimes echo the template brackets back.
    let judgment = parse_judgment("RELEVANT: [YES]\nSCORE: [72]\nEXPLANATION: Covers it.");
    assert!(judgment.relevant);
    assert_eq!(judgment.score, 72);
}

#[test]
fn empty_response_yields_all_defaults() {
    let judgment = parse_judgment("");
    assert!(!judgment.relevant);
    assert_eq!(judgment.score, 0);
    assert_eq!(judgment.explanation, "");
    assert_eq!(judgment.key_points, "");
}

#[tokio::test]
async fn lexical_scorer_computes_overlap_percentage() {
    let scorer = LexicalScorer;
    let judgment = scorer
        .score("today we derive gradient descent from scratch", "gradient descent")
        .await;

    // Both doubt tokens appear in the segment.
    assert!(judgment.relevant);
    assert_eq!(judgment.score, 100);

    let judgment = scorer
        .score("gradient methods and other optimizers", "gradient descent")
        .await;
    assert!(judgment.relevant);
    assert_eq!(judgment.score, 50);
}

#[tokio::test]
async fn lexical_scorer_with_no_overlap_is_not_relevant() {
    let scorer = LexicalScorer;
    let judgment = scorer.score("cooking pasta al dente", "gradient descent").await;

    assert!(!judgment.relevant);
    assert_eq!(judgment.score, 0);
}

#[tokio::test]
async fn lexical_scorer_guards_against_empty_doubt() {
    let scorer = LexicalScorer;
    let judgment = scorer.score("any segment text at all", "").await;

    assert!(!judgment.relevant);
    assert_eq!(judgment.score, 0);
}

#[tokio::test]
async fn semantic_scorer_round_trips_through_the_generator() {
    let generator = CannedGenerator::new("RELEVANT: NO\nSCORE: 10\nEXPLANATION: Off topic.")
        .with_response(
            "chain rule",
            "RELEVANT: YES\nSCORE: 90\nEXPLANATION: Explains the chain rule.\nKEY_POINTS: chain rule",
        );
    let scorer = SemanticScorer::new(Arc::new(generator));

    let hit = scorer
        .score("the chain rule lets us propagate gradients", "backpropagation")
        .await;
    assert!(hit.relevant);
    assert_eq!(hit.score, 90);

    let miss = scorer.score("unrelated cooking content", "backpropagation").await;
    assert!(!miss.relevant);
    assert_eq!(miss.score, 10);
}

struct FailingGenerator;

#[async_trait::async_trait]
impl TextGenerator for FailingGenerator {
    fn generator_name(&self) -> String {
        "failing".to_string()
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(PipelineError::Generation("backend down".to_string()))
    }
}

#[tokio::test]
async fn semantic_scorer_degrades_when_generation_fails() {
    let scorer = SemanticScorer::new(Arc::new(FailingGenerator));
    let judgment = scorer.score("some segment", "some doubt").await;

    assert!(!judgment.relevant);
    assert_eq!(judgment.score, 0);
    assert_eq!(judgment.explanation, "Analysis failed");
    assert_eq!(judgment.key_points, "");
}

#[tokio::test]
async fn semantic_prompt_carries_doubt_and_segment() {
    // The canned generator keys off prompt content, so a response keyed to
    // the doubt text proves the doubt reaches the prompt verbatim.
    let generator = CannedGenerator::new("RELEVANT: NO\nSCORE: 0")
        .with_response("DOUBT: eigenvalues", "RELEVANT: YES\nSCORE: 80\nEXPLANATION: ok");
    let scorer = SemanticScorer::new(Arc::new(generator));

    let judgment = scorer.score("matrix content", "eigenvalues").await;
    assert!(judgment.relevant);
    assert_eq!(judgment.score, 80);
}
