use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use timestamp_finder::{
    render_summary, CaptionEntry, DoubtProcessor, GeminiConfig, GeminiGenerator, LexicalScorer,
    MemoryDoubtStore, RelevanceScorer, SemanticScorer, StaticTranscriptLibrary,
    StaticVideoCatalog, VideoMeta,
};
use tracing::info;

/// Find in-video timestamps that answer a student's doubt.
#[derive(Parser, Debug)]
#[command(name = "timestamp-finder", version, about)]
struct Args {
    /// The doubt to resolve, e.g. "gradient descent in machine learning"
    doubt: String,

    /// Maximum number of candidate videos to analyze
    #[arg(long, default_value_t = 3)]
    max_videos: usize,

    /// Use the Gemini-backed semantic scorer (reads GEMINI_API_KEY)
    #[arg(long)]
    semantic: bool,

    /// Print the raw JSON result instead of the markdown summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let scorer: Arc<dyn RelevanceScorer> = if args.semantic {
        let api_key =
            std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is required for --semantic")?;
        let generator = GeminiGenerator::new(GeminiConfig::new(api_key))?;
        Arc::new(SemanticScorer::new(Arc::new(generator)))
    } else {
        Arc::new(LexicalScorer)
    };

    info!("scoring strategy: {}", scorer.scorer_name());

    let (catalog, library) = demo_catalog();
    let history = Arc::new(MemoryDoubtStore::new());
    let processor = DoubtProcessor::new(Arc::new(catalog), Arc::new(library), scorer)
        .with_history(history);

    let result = processor.process_doubt(&args.doubt, args.max_videos).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_summary(&result));
    }

    Ok(())
}

/// Built-in catalog so the binary demonstrates the pipeline offline. The
/// real deployment swaps in live search and transcript capabilities.
fn demo_catalog() -> (StaticVideoCatalog, StaticTranscriptLibrary) {
    let catalog = StaticVideoCatalog::new()
        .with_video(
            "gradient descent",
            VideoMeta {
                video_id: "gd101".to_string(),
                title: "Gradient Descent, Step by Step".to_string(),
                channel: "StatQuest".to_string(),
                duration: "23:54".to_string(),
                views: "1.2M views".to_string(),
                url: "https://www.youtube.com/watch?v=gd101".to_string(),
                thumbnail_url: None,
            },
        )
        .with_video(
            "backpropagation",
            VideoMeta {
                video_id: "bp202".to_string(),
                title: "What is backpropagation really doing?".to_string(),
                channel: "3Blue1Brown".to_string(),
                duration: "13:54".to_string(),
                views: "4.7M views".to_string(),
                url: "https://www.youtube.com/watch?v=bp202".to_string(),
                thumbnail_url: None,
            },
        );

    let library = StaticTranscriptLibrary::new().with_transcript(
        "gd101",
        vec![
            CaptionEntry::new("welcome back to the channel", 0.0, 4.0),
            CaptionEntry::new("today we talk about optimization", 4.0, 5.0),
            CaptionEntry::new("gradient descent takes small steps downhill", 62.0, 6.0),
            CaptionEntry::new("the learning rate controls the step size", 68.0, 5.0),
            CaptionEntry::new("too large a step and you overshoot the minimum", 125.0, 6.0),
        ],
    );

    (catalog, library)
}
