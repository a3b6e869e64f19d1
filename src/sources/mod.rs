mod static_catalog;

pub use static_catalog::{StaticTranscriptLibrary, StaticVideoCatalog};

use crate::types::{CaptionEntry, Result, VideoMeta};
use async_trait::async_trait;

/// Capability that discovers candidate videos for a query.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    fn source_name(&self) -> String;

    /// May return fewer than `max_results`. A failure is treated by the
    /// processor the same as an empty result set.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<VideoMeta>>;
}

/// Capability that fetches time-stamped caption entries for a video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    fn source_name(&self) -> String;

    /// Disabled, missing, and failed transcripts all surface as
    /// [`crate::types::PipelineError::TranscriptUnavailable`].
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<CaptionEntry>>;
}
