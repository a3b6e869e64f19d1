use crate::types::DoubtResult;

/// Render a processed doubt as learner-facing markdown.
pub fn render_summary(result: &DoubtResult) -> String {
    if !result.success {
        return "Sorry, I couldn't find relevant videos for your doubt.".to_string();
    }

    let mut summary = format!(
        "**Found {} educational videos for:** {}\n\n",
        result.total_videos, result.doubt
    );

    for (i, video) in result.videos.iter().enumerate() {
        summary.push_str(&format!("**{}. {}**\n", i + 1, video.title));
        summary.push_str(&format!("   Channel: {}\n", video.channel));
        summary.push_str(&format!("   Duration: {}\n", video.duration));
        summary.push_str(&format!("   Views: {}\n\n", video.views));

        if video.has_timestamps {
            summary.push_str("   **Relevant timestamps:**\n");
            for ts in &video.relevant_timestamps {
                summary.push_str(&format!(
                    "   - **{}** - {}\n",
                    ts.formatted_time, ts.explanation
                ));
                summary.push_str(&format!(
                    "     [Watch at {}]({})\n",
                    ts.formatted_time, ts.deep_link_url
                ));
                summary.push_str(&format!("     Relevance: {}%\n\n", ts.relevance_score));
            }
        } else {
            summary.push_str(&format!(
                "   {}\n",
                video.note.as_deref().unwrap_or("Full video recommended")
            ));
            summary.push_str(&format!("   [Watch full video]({})\n\n", video.url));
        }

        summary.push_str("---\n\n");
    }

    summary
}
