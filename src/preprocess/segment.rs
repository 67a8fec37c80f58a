//! Heuristic section segmentation.
//!
//! Wikipedia plaintext extracts (and PDF text) carry no explicit section
//! markup, so headers are recognized by shape: short standalone lines,
//! capitalized, unpunctuated, sitting next to a paragraph break. The
//! classification lives in [`is_section_header`] so the heuristic can be
//! tuned or swapped without touching the accumulation loop.

use indexmap::IndexMap;

use crate::types::SectionMap;

/// Sentinel section that collects everything before the first header.
const INTRO_SECTION: &str = "Introduction";

/// Fallback key used when no usable section was detected.
const FALLBACK_SECTION: &str = "Content";

/// Lines at or above this length are never headers.
const MAX_HEADER_LEN: usize = 100;

/// How far (in bytes, clamped to char boundaries) around a line to look
/// for a blank-line gap.
const GAP_WINDOW: usize = 5;

/// Splits a flat text blob into an ordered title → body mapping.
///
/// Lines are accumulated under a current section name, initialized to
/// `"Introduction"`; a line satisfying [`is_section_header`] starts a
/// fresh section named after itself. Bodies are single-space joins of
/// their accumulated lines; sections whose joined body is empty are
/// dropped.
///
/// Empty (or whitespace-only) input yields an empty map. Non-empty
/// input that produces no usable section falls back to a single
/// `{"Content": <trimmed input>}` entry, so every non-empty input
/// produces at least one entry and no content is ever dropped.
pub fn segment_sections(text: &str) -> SectionMap {
    if text.trim().is_empty() {
        return SectionMap::new();
    }

    let mut bodies: IndexMap<String, Vec<&str>> = IndexMap::new();
    bodies.insert(INTRO_SECTION.to_string(), Vec::new());
    let mut current = INTRO_SECTION.to_string();

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_section_header(line, text) {
            current = line.to_string();
            // Re-entering a seen title resets its body but keeps its
            // original position in the map.
            bodies.insert(current.clone(), Vec::new());
        } else {
            bodies.entry(current.clone()).or_default().push(line);
        }
    }

    let mut sections = SectionMap::new();
    for (title, lines) in bodies {
        let body = lines.join(" ").trim().to_string();
        if !body.is_empty() {
            sections.insert(title, body);
        }
    }

    if sections.is_empty() {
        sections.insert(FALLBACK_SECTION.to_string(), text.trim().to_string());
    }

    sections
}

/// Classifies a line as a section header.
///
/// A line qualifies iff all of:
/// 1. non-empty after trimming,
/// 2. shorter than 100 characters,
/// 3. first character uppercase,
/// 4. no trailing `.` or `,`,
/// 5. not entirely uppercase (excludes acronym lines),
/// 6. adjacent to a blank-line gap: the raw text contains `"\n\n"`
///    within [`GAP_WINDOW`] characters of the line's first occurrence.
///
/// `raw` must be the unnormalized source the line came from; the
/// paragraph-break signal in criterion 6 does not survive newline
/// collapsing.
pub fn is_section_header(line: &str, raw: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }
    if line.chars().count() >= MAX_HEADER_LEN {
        return false;
    }
    let Some(first) = line.chars().next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    if line.ends_with('.') || line.ends_with(',') {
        return false;
    }
    if is_all_uppercase(line) {
        return false;
    }
    near_paragraph_break(line, raw)
}

/// `true` when every cased character is uppercase and at least one
/// cased character exists.
fn is_all_uppercase(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// `true` when a blank-line gap sits within [`GAP_WINDOW`] characters of
/// the line's first occurrence in `raw`.
fn near_paragraph_break(line: &str, raw: &str) -> bool {
    let Some(pos) = raw.find(line) else {
        return false;
    };
    let start = floor_boundary(raw, pos.saturating_sub(GAP_WINDOW));
    let end = ceil_boundary(raw, (pos + line.len() + GAP_WINDOW).min(raw.len()));
    raw[start..end].contains("\n\n")
}

fn floor_boundary(s: &str, mut idx: usize) -> usize {
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_boundary(s: &str, mut idx: usize) -> usize {
    while idx < s.len() && !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(segment_sections("").is_empty());
        assert!(segment_sections("   \n\n  ").is_empty());
    }

    #[test]
    fn single_paragraph_falls_back_to_one_entry() {
        let text = "This is just a single paragraph with no sections or headers.";
        let sections = segment_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get("Introduction").map(String::as_str), Some(text));
    }

    #[test]
    fn detects_headers_next_to_paragraph_breaks() {
        let text = "This article opens with a lead paragraph.\n\nHistory\nThe topic began long ago.\nIt developed over time.\n\nApplications\nIt is used widely today.";
        let sections = segment_sections(text);
        let titles: Vec<&str> = sections.keys().map(String::as_str).collect();
        assert_eq!(titles, ["Introduction", "History", "Applications"]);
        assert_eq!(
            sections.get("History").map(String::as_str),
            Some("The topic began long ago. It developed over time.")
        );
    }

    #[test]
    fn preserves_document_order() {
        let text = "Lead text here.\n\nZebra\nAbout zebras.\n\nApple\nAbout apples.";
        let sections = segment_sections(text);
        let titles: Vec<&str> = sections.keys().map(String::as_str).collect();
        assert_eq!(titles, ["Introduction", "Zebra", "Apple"]);
    }

    #[test]
    fn no_content_is_dropped() {
        // Header lines survive as keys, everything else as values.
        let text = "Opening words of the article.\n\nDetails\nEvery token must survive segmentation.";
        let sections = segment_sections(text);
        let joined: String = sections
            .iter()
            .flat_map(|(title, body)| [title.as_str(), body.as_str()])
            .collect::<Vec<_>>()
            .join(" ");
        for token in text.split_whitespace() {
            assert!(joined.contains(token), "token {token:?} was dropped");
        }
    }

    #[test]
    fn headerless_sections_are_dropped_when_empty() {
        // A detected header followed by nothing usable disappears from
        // the result instead of carrying an empty body.
        let text = "Some lead content here.\n\nGhost Section\n\n";
        let sections = segment_sections(text);
        assert!(!sections.contains_key("Ghost Section"));
        assert!(sections.contains_key("Introduction"));
    }

    #[test]
    fn header_requires_paragraph_break_adjacency() {
        let raw_with_gap = "Intro text.\n\nHistory\nBody.";
        let raw_without_gap = "Intro text.\nHistory\nBody.";
        assert!(is_section_header("History", raw_with_gap));
        assert!(!is_section_header("History", raw_without_gap));
    }

    #[test]
    fn header_rejects_lowercase_start() {
        let raw = "Lead.\n\nhistory\nBody.";
        assert!(!is_section_header("history", raw));
    }

    #[test]
    fn header_rejects_trailing_punctuation() {
        let raw = "Lead.\n\nHistory.\nBody.\n\nHistory,\nMore.";
        assert!(!is_section_header("History.", raw));
        assert!(!is_section_header("History,", raw));
    }

    #[test]
    fn header_rejects_all_uppercase_acronym_lines() {
        let raw = "Lead.\n\nNASA\nBody.";
        assert!(!is_section_header("NASA", raw));
    }

    #[test]
    fn header_rejects_overlong_lines() {
        let long_line = "A".to_string() + &"b".repeat(120);
        let raw = format!("Lead.\n\n{long_line}\nBody.");
        assert!(!is_section_header(&long_line, &raw));
    }

    #[test]
    fn header_detection_handles_multibyte_text() {
        let raw = "Texte d'ouverture.\n\nÉconomie\nLe corps de la section.";
        assert!(is_section_header("Économie", raw));
        let sections = segment_sections(raw);
        assert!(sections.contains_key("Économie"));
    }

    #[test]
    fn repeated_header_resets_its_body() {
        let text = "Lead.\n\nHistory\nFirst take.\n\nHistory\nSecond take.";
        let sections = segment_sections(text);
        assert_eq!(
            sections.get("History").map(String::as_str),
            Some("Second take.")
        );
    }
}
