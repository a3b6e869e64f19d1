use timestamp_finder::{segment_transcript, CaptionEntry};

fn entries_every(step: f64, count: usize, duration: f64) -> Vec<CaptionEntry> {
    (0..count)
        .map(|i| CaptionEntry::new(format!("line {}", i), i as f64 * step, duration))
        .collect()
}

#[test]
fn empty_input_yields_no_segments() {
    let segments = segment_transcript(&[], 60.0);
    assert!(segments.is_empty(), "no entries should mean no segments");
}

#[test]
fn single_entry_yields_single_segment() {
    let entries = vec![CaptionEntry::new("hello world", 12.0, 3.5)];
    let segments = segment_transcript(&entries, 60.0);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "hello world");
    assert_eq!(segments[0].start_seconds, 12.0);
    assert_eq!(segments[0].end_seconds, 15.5);
}

#[test]
fn segments_partition_the_input_in_order() {
    let entries = entries_every(7.0, 40, 7.0);
    let segments = segment_transcript(&entries, 60.0);

    let rejoined: Vec<CaptionEntry> = segments
        .iter()
        .flat_map(|segment| segment.source_entries.clone())
        .collect();
    assert_eq!(rejoined, entries, "no entry may be duplicated, dropped, or reordered");

    for segment in &segments {
        assert!(segment.end_seconds >= segment.start_seconds);
        assert!(!segment.text.is_empty(), "no segment may be empty");
    }
}

#[test]
fn window_is_elastic_not_bucket_aligned() {
    // Entries every 7 s: 63 s is the first start that is >= 60 s past the
    // anchor, so the first segment holds the nine entries before it.
    let entries = entries_every(7.0, 12, 7.0);
    let segments = segment_transcript(&entries, 60.0);

    assert_eq!(segments[0].source_entries.len(), 9);
    assert_eq!(segments[0].start_seconds, 0.0);
    assert_eq!(segments[1].start_seconds, 63.0);
}

#[test]
fn entries_spaced_exactly_at_window_each_start_a_segment() {
    let entries = entries_every(60.0, 4, 2.0);
    let segments = segment_transcript(&entries, 60.0);

    assert_eq!(segments.len(), 4);
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.start_seconds, i as f64 * 60.0);
        assert_eq!(segment.source_entries.len(), 1);
    }
}

#[test]
fn entries_spaced_just_under_window_stay_together() {
    let entries = vec![
        CaptionEntry::new("first", 0.0, 2.0),
        CaptionEntry::new("second", 59.999, 2.0),
    ];
    let segments = segment_transcript(&entries, 60.0);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "first second");
}

#[test]
fn anchor_is_the_first_entry_start_not_zero() {
    let entries = vec![
        CaptionEntry::new("intro", 100.0, 4.0),
        CaptionEntry::new("still the intro", 130.0, 4.0),
        CaptionEntry::new("next topic", 160.0, 4.0),
    ];
    let segments = segment_transcript(&entries, 60.0);

    // 160 - 100 >= 60 closes the first window; 130 - 100 does not.
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].start_seconds, 100.0);
    assert_eq!(segments[0].text, "intro still the intro");
    assert_eq!(segments[1].start_seconds, 160.0);
}

#[test]
fn zero_duration_entries_are_accepted() {
    let entries = vec![
        CaptionEntry::new("blip", 0.0, 0.0),
        CaptionEntry::new("blop", 5.0, 0.0),
    ];
    let segments = segment_transcript(&entries, 60.0);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].end_seconds, 5.0);
    assert_eq!(segments[0].source_entries.len(), 2);
}
