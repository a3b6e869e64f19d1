use crate::ranker::rank_timestamps;
use crate::scorer::RelevanceScorer;
use crate::segmenter::segment_transcript;
use crate::sources::{TranscriptSource, VideoSearch};
use crate::store::DoubtStore;
use crate::types::{DoubtRecord, DoubtResult, ProcessorConfig, VideoMeta, VideoResult};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Note attached to a video that stays in the response without timestamps.
const NO_TIMESTAMPS_NOTE: &str =
    "Video is relevant but no transcript available or no specific timestamps found";

/// Orchestrates one doubt end to end: discovery, per-video
/// segmentation/scoring/ranking, and aggregation.
pub struct DoubtProcessor {
    search: Arc<dyn VideoSearch>,
    transcripts: Arc<dyn TranscriptSource>,
    scorer: Arc<dyn RelevanceScorer>,
    history: Option<Arc<dyn DoubtStore>>,
    config: ProcessorConfig,
}

impl DoubtProcessor {
    pub fn new(
        search: Arc<dyn VideoSearch>,
        transcripts: Arc<dyn TranscriptSource>,
        scorer: Arc<dyn RelevanceScorer>,
    ) -> Self {
        debug!(
            "doubt processor wired to {} / {} / {}",
            search.source_name(),
            transcripts.source_name(),
            scorer.scorer_name()
        );
        Self {
            search,
            transcripts,
            scorer,
            history: None,
            config: ProcessorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    /// Record every processed doubt in the given session history store.
    pub fn with_history(mut self, store: Arc<dyn DoubtStore>) -> Self {
        self.history = Some(store);
        self
    }

    /// Process a doubt and return videos with ranked timestamps.
    ///
    /// Never returns an error: discovery failure yields the no-videos
    /// shape, and per-video failures degrade to a video without
    /// timestamps.
    pub async fn process_doubt(&self, doubt: &str, max_videos: usize) -> DoubtResult {
        info!("processing doubt: {}", doubt);

        // Bias discovery toward tutorials and lectures.
        let query = format!("{} tutorial explanation", doubt);
        let videos = match self.search.search(&query, max_videos).await {
            Ok(videos) => videos,
            Err(e) => {
                warn!("video search failed: {}", e);
                Vec::new()
            }
        };

        if videos.is_empty() {
            info!("no candidate videos for doubt");
            let result = DoubtResult::no_videos(doubt);
            self.record(&result).await;
            return result;
        }

        info!("found {} candidate videos", videos.len());

        // buffered yields in input order, so the response keeps discovery
        // order no matter which video finishes first.
        let results: Vec<VideoResult> = stream::iter(videos)
            .map(|video| self.analyze_video(video, doubt))
            .buffered(self.config.max_concurrent_videos.max(1))
            .collect()
            .await;

        let total_timestamps = results
            .iter()
            .map(|video| video.relevant_timestamps.len())
            .sum();

        let result = DoubtResult {
            success: true,
            doubt: doubt.to_string(),
            message: None,
            total_videos: results.len(),
            total_timestamps,
            videos: results,
        };
        self.record(&result).await;
        result
    }

    /// Analyze one video in isolation; any failure degrades to a video
    /// without timestamps rather than aborting the batch.
    async fn analyze_video(&self, video: VideoMeta, doubt: &str) -> VideoResult {
        debug!("analyzing video {}: {}", video.video_id, video.title);

        let entries = match self.transcripts.fetch_transcript(&video.video_id).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("no transcript for {}: {}", video.video_id, e);
                return VideoResult::without_timestamps(video, NO_TIMESTAMPS_NOTE);
            }
        };

        let segments = segment_transcript(&entries, self.config.window_seconds);
        let timestamps = rank_timestamps(
            &segments,
            doubt,
            self.scorer.as_ref(),
            &video.url,
            self.config.top_k,
            self.config.relevance_threshold,
            self.config.max_concurrent_scores,
        )
        .await;

        if timestamps.is_empty() {
            debug!("no segments above threshold for {}", video.video_id);
            return VideoResult::without_timestamps(video, NO_TIMESTAMPS_NOTE);
        }

        info!(
            "{}: {} relevant timestamps",
            video.video_id,
            timestamps.len()
        );
        VideoResult::with_timestamps(video, timestamps)
    }

    async fn record(&self, result: &DoubtResult) {
        if let Some(store) = &self.history {
            if let Err(e) = store.append(DoubtRecord::new(result.clone())).await {
                warn!("failed to record doubt in history: {}", e);
            }
        }
    }
}
