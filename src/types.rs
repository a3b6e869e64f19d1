use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single caption line from a video transcript, as supplied by the
/// transcript source. Entries arrive ordered by start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionEntry {
    pub text: String,
    pub start_seconds: f64,
    pub duration_seconds: f64,
}

impl CaptionEntry {
    pub fn new(text: impl Into<String>, start_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            text: text.into(),
            start_seconds,
            duration_seconds,
        }
    }
}

/// A contiguous, time-bounded slice of a transcript; the unit of relevance
/// scoring. `text` is the space-joined concatenation of its entries' text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub source_entries: Vec<CaptionEntry>,
}

/// Verdict produced for one segment against one doubt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceJudgment {
    pub relevant: bool,
    pub score: u8,
    pub explanation: String,
    pub key_points: String,
}

impl RelevanceJudgment {
    /// Judgment used when the scoring backend could not be reached at all.
    pub fn analysis_failed() -> Self {
        Self {
            relevant: false,
            score: 0,
            explanation: "Analysis failed".to_string(),
            key_points: String::new(),
        }
    }
}

/// One in-video jump target surfaced to the learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimestampResult {
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub formatted_time: String,
    pub deep_link_url: String,
    pub text_preview: String,
    pub relevance_score: u8,
    pub explanation: String,
    pub key_points: String,
}

/// Candidate video metadata returned by the search capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMeta {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub duration: String,
    pub views: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
}

/// Per-video outcome. Always part of the response, even when ranking found
/// nothing; `note` explains the empty case to the learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResult {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub duration: String,
    pub views: String,
    pub url: String,
    pub relevant_timestamps: Vec<TimestampResult>,
    pub has_timestamps: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl VideoResult {
    pub fn with_timestamps(meta: VideoMeta, timestamps: Vec<TimestampResult>) -> Self {
        Self {
            video_id: meta.video_id,
            title: meta.title,
            channel: meta.channel,
            duration: meta.duration,
            views: meta.views,
            url: meta.url,
            has_timestamps: !timestamps.is_empty(),
            relevant_timestamps: timestamps,
            note: None,
        }
    }

    pub fn without_timestamps(meta: VideoMeta, note: &str) -> Self {
        Self {
            video_id: meta.video_id,
            title: meta.title,
            channel: meta.channel,
            duration: meta.duration,
            views: meta.views,
            url: meta.url,
            relevant_timestamps: Vec::new(),
            has_timestamps: false,
            note: Some(note.to_string()),
        }
    }
}

/// The unit returned to the caller for one processed doubt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoubtResult {
    pub success: bool,
    pub doubt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub videos: Vec<VideoResult>,
    pub total_videos: usize,
    pub total_timestamps: usize,
}

impl DoubtResult {
    /// The exact shape returned when discovery yields no candidates.
    pub fn no_videos(doubt: &str) -> Self {
        Self {
            success: false,
            doubt: doubt.to_string(),
            message: Some("No videos found".to_string()),
            videos: Vec::new(),
            total_videos: 0,
            total_timestamps: 0,
        }
    }
}

/// A processed doubt as kept in the session history store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoubtRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub result: DoubtResult,
}

impl DoubtRecord {
    pub fn new(result: DoubtResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            result,
        }
    }
}

/// Tuning knobs for the doubt processor.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Minimum span of a transcript segment, in seconds.
    pub window_seconds: f64,
    /// Timestamps surfaced per video.
    pub top_k: usize,
    /// Minimum relevance score (0-100) for a timestamp to be surfaced.
    pub relevance_threshold: u8,
    /// Videos analyzed in flight at once.
    pub max_concurrent_videos: usize,
    /// Segment scoring calls in flight at once within a video.
    pub max_concurrent_scores: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            window_seconds: 60.0,
            top_k: 3,
            relevance_threshold: 60,
            max_concurrent_videos: 4,
            max_concurrent_scores: 4,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("video search error: {0}")]
    Search(String),

    #[error("transcript unavailable for video {video_id}")]
    TranscriptUnavailable { video_id: String },

    #[error("generation error: {0}")]
    Generation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("general error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
