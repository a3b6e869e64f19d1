use crate::scorer::RelevanceScorer;
use crate::types::{Segment, TimestampResult};
use futures::stream::{self, StreamExt};
use tracing::debug;

/// Default number of timestamps surfaced per video.
pub const DEFAULT_TOP_K: usize = 3;

/// Default minimum relevance score for a timestamp to be surfaced.
pub const DEFAULT_RELEVANCE_THRESHOLD: u8 = 60;

const PREVIEW_CHARS: usize = 200;

/// Score every segment against the doubt, keep those at or above the
/// threshold, and return the top `top_k` as user-facing timestamps sorted
/// by score descending.
///
/// All segment scores are collected before any ordering happens; the sort
/// is stable, so ties keep the original segment order. `top_k == 0` and
/// zero kept segments both yield an empty list, not an error.
pub async fn rank_timestamps(
    segments: &[Segment],
    doubt: &str,
    scorer: &dyn RelevanceScorer,
    video_url: &str,
    top_k: usize,
    relevance_threshold: u8,
    max_concurrent_scores: usize,
) -> Vec<TimestampResult> {
    if top_k == 0 || segments.is_empty() {
        return Vec::new();
    }

    let judgments: Vec<_> = stream::iter(segments)
        .map(|segment| async move { scorer.score(&segment.text, doubt).await })
        .buffered(max_concurrent_scores.max(1))
        .collect()
        .await;

    let mut kept: Vec<TimestampResult> = segments
        .iter()
        .zip(judgments)
        .filter(|(_, judgment)| judgment.relevant && judgment.score >= relevance_threshold)
        .map(|(segment, judgment)| TimestampResult {
            start_seconds: segment.start_seconds,
            end_seconds: segment.end_seconds,
            formatted_time: format_timestamp(segment.start_seconds),
            deep_link_url: format!("{}&t={}s", video_url, segment.start_seconds as u64),
            text_preview: preview(&segment.text),
            relevance_score: judgment.score,
            explanation: judgment.explanation,
            key_points: judgment.key_points,
        })
        .collect();

    debug!(
        "kept {} of {} segments at threshold {}",
        kept.len(),
        segments.len(),
        relevance_threshold
    );

    kept.sort_by_key(|result| std::cmp::Reverse(result.relevance_score));
    kept.truncate(top_k);
    kept
}

/// Render seconds as `M:SS`, or `H:MM:SS` once a full hour is reached.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

fn preview(text: &str) -> String {
    let truncated: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", truncated)
}
