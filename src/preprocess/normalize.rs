//! Whitespace normalization.

use std::sync::LazyLock;

use regex::Regex;

static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("valid newline-run pattern"));

static HORIZONTAL_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid whitespace-run pattern"));

/// Collapses whitespace runs and trims the result.
///
/// Any whitespace run containing at least one newline becomes a single
/// `\n`; any remaining run of spaces or tabs becomes a single space.
/// Total and idempotent: `normalize_text(normalize_text(x)) ==
/// normalize_text(x)` for every input, and empty input yields empty
/// output.
pub fn normalize_text(text: &str) -> String {
    let collapsed = NEWLINE_RUNS.replace_all(text, "\n");
    let collapsed = HORIZONTAL_RUNS.replace_all(&collapsed, " ");
    collapsed.trim().to_string()
}
