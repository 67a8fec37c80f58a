//! Cross-component properties of the preprocessing core.

mod common;

use wikismith::{ChunkPolicy, normalize_text, segment_sections, split_into_chunks};

#[test]
fn normalization_is_idempotent_over_article_text() {
    let raw = common::sample_article();
    let once = normalize_text(raw);
    assert_eq!(normalize_text(&once), once);
}

#[test]
fn segmentation_keeps_every_token_of_the_normalized_text() {
    // Header lines become keys, body lines become values; together they
    // must cover every token of the source.
    let raw = common::sample_article();
    let sections = segment_sections(raw);
    let joined: String = sections
        .iter()
        .flat_map(|(title, body)| [title.as_str(), body.as_str()])
        .collect::<Vec<_>>()
        .join(" ");
    for token in normalize_text(raw).split_whitespace() {
        assert!(
            joined.contains(token),
            "token {token:?} missing after segmentation"
        );
    }
}

#[test]
fn article_text_segments_into_expected_sections() {
    let sections = segment_sections(common::sample_article());
    let titles: Vec<&str> = sections.keys().map(String::as_str).collect();
    assert_eq!(titles, ["Introduction", "History", "Applications"]);
}

#[test]
fn unbroken_paragraph_yields_exactly_one_section() {
    let text = "One single paragraph of prose without any header lines at all.";
    let sections = segment_sections(text);
    assert_eq!(sections.len(), 1);
}

#[test]
fn headers_only_input_falls_back_to_a_content_entry() {
    // Every line classifies as a header, so no body survives and the
    // segmenter falls back to a single entry holding the whole input.
    let text = "First Title\n\nSecond Title\n\nThird Title";
    let sections = segment_sections(text);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections.get("Content").map(String::as_str), Some(text));
}

#[test]
fn segmenter_and_chunker_are_independent() {
    // Both consume the same source; neither needs the other's output.
    let raw = common::sample_article();
    let sections = segment_sections(raw);
    let chunks = split_into_chunks(&normalize_text(raw), &ChunkPolicy::new(80, 10).unwrap());
    assert!(!sections.is_empty());
    assert!(chunks.len() > 1);
}

#[test]
fn chunking_respects_size_and_rebuilds_content() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(40);
    let policy = ChunkPolicy::new(120, 30).unwrap();
    let chunks = split_into_chunks(&text, &policy);
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 120);
    }
    // Trimmed or not, no word of the source disappears.
    let combined = chunks.join(" ");
    for word in ["quick", "brown", "jumps", "lazy"] {
        assert!(combined.contains(word));
    }
}

#[test]
fn short_input_is_a_single_identity_chunk() {
    let policy = ChunkPolicy::new(1000, 200).unwrap();
    assert_eq!(split_into_chunks("hello", &policy), vec!["hello".to_string()]);
}
