use crate::types::{CaptionEntry, Segment};
use tracing::debug;

/// Default window length in seconds for transcript segmentation.
pub const DEFAULT_WINDOW_SECONDS: f64 = 60.0;

/// Group ordered caption entries into elastic time windows.
///
/// A window closes only once the span from its anchor reaches
/// `window_seconds`, so every segment except possibly the last covers at
/// least that long. Entries are never split, dropped, or reordered: the
/// concatenation of all segments' source entries is exactly the input.
pub fn segment_transcript(entries: &[CaptionEntry], window_seconds: f64) -> Vec<Segment> {
    let mut segments = Vec::new();
    let Some(first) = entries.first() else {
        return segments;
    };

    let mut acc = SegmentAccumulator::new(first.start_seconds);
    for entry in entries {
        if entry.start_seconds - acc.start_seconds >= window_seconds && !acc.is_empty() {
            segments.push(acc.finish());
            acc = SegmentAccumulator::new(entry.start_seconds);
        }
        acc.push(entry);
    }
    if !acc.is_empty() {
        segments.push(acc.finish());
    }

    debug!(
        "segmented {} caption entries into {} windows of >= {}s",
        entries.len(),
        segments.len(),
        window_seconds
    );
    segments
}

struct SegmentAccumulator {
    text: String,
    start_seconds: f64,
    end_seconds: f64,
    entries: Vec<CaptionEntry>,
}

impl SegmentAccumulator {
    fn new(start_seconds: f64) -> Self {
        Self {
            text: String::new(),
            start_seconds,
            end_seconds: start_seconds,
            entries: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push(&mut self, entry: &CaptionEntry) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(entry.text.trim());
        self.end_seconds = entry.start_seconds + entry.duration_seconds;
        self.entries.push(entry.clone());
    }

    fn finish(self) -> Segment {
        Segment {
            text: self.text,
            start_seconds: self.start_seconds,
            end_seconds: self.end_seconds,
            source_entries: self.entries,
        }
    }
}
