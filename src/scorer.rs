use crate::gemini::TextGenerator;
use crate::parser::parse_judgment;
use crate::types::RelevanceJudgment;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Strategy for judging how well a transcript segment addresses a doubt.
///
/// Implementations must be pure with respect to their inputs so that
/// segment scoring can run concurrently. A scorer never fails: failure of
/// a backing capability resolves into a "not relevant, score 0" judgment.
#[async_trait]
pub trait RelevanceScorer: Send + Sync {
    fn scorer_name(&self) -> String;

    async fn score(&self, segment_text: &str, doubt: &str) -> RelevanceJudgment;
}

/// Model-backed scorer: asks the generator for a strict labeled-line
/// verdict and parses it field by field.
pub struct SemanticScorer {
    generator: Arc<dyn TextGenerator>,
}

impl SemanticScorer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    fn build_prompt(segment_text: &str, doubt: &str) -> String {
        format!(
            "Analyze if this video transcript segment explains the following concept/doubt:\n\n\
             DOUBT: {doubt}\n\n\
             VIDEO SEGMENT:\n{segment_text}\n\n\
             Analyze and respond in this EXACT format:\n\
             RELEVANT: [YES/NO]\n\
             SCORE: [0-100]\n\
             EXPLANATION: [One sentence explaining why it's relevant or not]\n\
             KEY_POINTS: [List 2-3 key points covered in this segment]\n\n\
             Be strict - only mark as relevant if it DIRECTLY addresses the doubt."
        )
    }
}

#[async_trait]
impl RelevanceScorer for SemanticScorer {
    fn scorer_name(&self) -> String {
        format!("semantic ({})", self.generator.generator_name())
    }

    async fn score(&self, segment_text: &str, doubt: &str) -> RelevanceJudgment {
        let prompt = Self::build_prompt(segment_text, doubt);
        match self.generator.generate(&prompt).await {
            Ok(raw) => parse_judgment(&raw),
            Err(e) => {
                warn!("relevance analysis failed, treating segment as not relevant: {}", e);
                RelevanceJudgment::analysis_failed()
            }
        }
    }
}

/// Cheap word-overlap scorer: the offline fallback strategy.
///
/// Score is the rounded percentage of doubt tokens that also appear in the
/// segment; any overlap at all marks the segment relevant.
pub struct LexicalScorer;

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

#[async_trait]
impl RelevanceScorer for LexicalScorer {
    fn scorer_name(&self) -> String {
        "lexical".to_string()
    }

    async fn score(&self, segment_text: &str, doubt: &str) -> RelevanceJudgment {
        let doubt_words = word_set(doubt);
        let segment_words = word_set(segment_text);
        let overlap = doubt_words.intersection(&segment_words).count();
        // An empty doubt has no tokens to match; avoid dividing by zero.
        let denominator = doubt_words.len().max(1);
        let score = ((100.0 * overlap as f64 / denominator as f64).round() as u32).min(100) as u8;

        debug!("lexical overlap {}/{} -> score {}", overlap, denominator, score);

        RelevanceJudgment {
            relevant: score > 0,
            score,
            explanation: if score > 0 {
                format!("Segment shares {overlap} of {denominator} doubt terms")
            } else {
                "Segment shares no terms with the doubt".to_string()
            },
            key_points: String::new(),
        }
    }
}
