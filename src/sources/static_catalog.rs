use super::{TranscriptSource, VideoSearch};
use crate::types::{CaptionEntry, PipelineError, Result, VideoMeta};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// In-memory video catalog for tests and offline demos. A video matches
/// when its registered term appears in the lowercased query.
pub struct StaticVideoCatalog {
    videos: Vec<(String, VideoMeta)>,
}

impl StaticVideoCatalog {
    pub fn new() -> Self {
        Self { videos: Vec::new() }
    }

    pub fn with_video(mut self, match_term: &str, meta: VideoMeta) -> Self {
        self.videos.push((match_term.to_lowercase(), meta));
        self
    }
}

impl Default for StaticVideoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoSearch for StaticVideoCatalog {
    fn source_name(&self) -> String {
        "static catalog".to_string()
    }

    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<VideoMeta>> {
        let query = query.to_lowercase();
        let hits: Vec<VideoMeta> = self
            .videos
            .iter()
            .filter(|(term, _)| query.contains(term.as_str()))
            .map(|(_, meta)| meta.clone())
            .take(max_results)
            .collect();

        debug!("static catalog matched {} of {} videos", hits.len(), self.videos.len());
        Ok(hits)
    }
}

/// In-memory transcript library keyed by video id. Videos without an entry
/// behave like videos with captions disabled.
pub struct StaticTranscriptLibrary {
    transcripts: HashMap<String, Vec<CaptionEntry>>,
}

impl StaticTranscriptLibrary {
    pub fn new() -> Self {
        Self {
            transcripts: HashMap::new(),
        }
    }

    pub fn with_transcript(mut self, video_id: &str, entries: Vec<CaptionEntry>) -> Self {
        self.transcripts.insert(video_id.to_string(), entries);
        self
    }
}

impl Default for StaticTranscriptLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptSource for StaticTranscriptLibrary {
    fn source_name(&self) -> String {
        "static library".to_string()
    }

    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<CaptionEntry>> {
        self.transcripts
            .get(video_id)
            .cloned()
            .ok_or_else(|| PipelineError::TranscriptUnavailable {
                video_id: video_id.to_string(),
            })
    }
}
