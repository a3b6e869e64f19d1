pub mod gemini;
pub mod parser;
pub mod processor;
pub mod ranker;
pub mod report;
pub mod scorer;
pub mod segmenter;
pub mod sources;
pub mod store;
pub mod types;

pub use gemini::{CannedGenerator, GeminiConfig, GeminiGenerator, TextGenerator};
pub use parser::parse_judgment;
pub use processor::DoubtProcessor;
pub use ranker::{format_timestamp, rank_timestamps, DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_TOP_K};
pub use report::render_summary;
pub use scorer::{LexicalScorer, RelevanceScorer, SemanticScorer};
pub use segmenter::{segment_transcript, DEFAULT_WINDOW_SECONDS};
pub use sources::{StaticTranscriptLibrary, StaticVideoCatalog, TranscriptSource, VideoSearch};
pub use store::{DoubtStore, MemoryDoubtStore};
pub use types::*;
