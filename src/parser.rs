use crate::types::RelevanceJudgment;

/// Parse a labeled-line relevance response into a judgment.
///
/// Each field is extracted independently; a missing or garbled label
/// defaults that field alone and never invalidates the rest of the parse.
pub fn parse_judgment(raw: &str) -> RelevanceJudgment {
    RelevanceJudgment {
        relevant: parse_relevant(raw),
        score: parse_score(raw),
        explanation: parse_explanation(raw),
        key_points: parse_key_points(raw),
    }
}

/// Value following `label` on its own line, if the label is present.
fn labeled_line<'a>(raw: &'a str, label: &str) -> Option<&'a str> {
    raw.lines()
        .find_map(|line| line.trim_start().strip_prefix(label))
        .map(|rest| rest.trim())
}

fn parse_relevant(raw: &str) -> bool {
    labeled_line(raw, "RELEVANT:")
        .map(|value| value.to_uppercase().contains("YES"))
        .unwrap_or(false)
}

fn parse_score(raw: &str) -> u8 {
    labeled_line(raw, "SCORE:")
        .and_then(|value| {
            let digits: String = value
                .chars()
                .skip_while(|c| !c.is_ascii_digit())
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse::<u32>().ok()
        })
        .map(|score| score.min(100) as u8)
        .unwrap_or(0)
}

fn parse_explanation(raw: &str) -> String {
    labeled_line(raw, "EXPLANATION:").unwrap_or("").to_string()
}

fn parse_key_points(raw: &str) -> String {
    // KEY_POINTS may span multiple lines, so it captures to end of input.
    raw.find("KEY_POINTS:")
        .map(|idx| raw[idx + "KEY_POINTS:".len()..].trim().to_string())
        .unwrap_or_default()
}
