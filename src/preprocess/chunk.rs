//! Bounded, overlapping, sentence-respecting chunking.

use tracing::trace;

use crate::config::ChunkPolicy;

/// Splits `text` into chunks of at most `policy.chunk_size()` characters,
/// adjacent chunks sharing roughly `policy.overlap()` characters.
///
/// A source no longer than one chunk is returned whole (a single chunk,
/// even for the empty string). Longer sources are walked with a cursor:
/// each window is shrunk back to just after its last sentence-terminating
/// period when one exists far enough into the window, the chunk is
/// emitted trimmed, and the cursor advances from the *snapped* end minus
/// the overlap. The overlap is measured from the adjusted boundary, not
/// the originally requested window end; that ordering is what makes
/// overlap removal reconstruct the source.
///
/// All indices are character positions, so multibyte text can never be
/// split inside a scalar value. Total for every validated policy.
pub fn split_into_chunks(text: &str, policy: &ChunkPolicy) -> Vec<String> {
    let chunk_size = policy.chunk_size();
    let overlap = policy.overlap();

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    if len <= chunk_size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < len {
        let tentative = start + chunk_size;
        let mut end = tentative;

        if end < len {
            if let Some(period) = last_period_in(&chars, start, end) {
                let snapped = period + 1;
                // Only snap when the boundary clears the overlap window;
                // a period inside it would stall or reverse the cursor.
                if snapped > start + overlap {
                    end = snapped;
                }
            }
        }

        let upper = end.min(len);
        let chunk: String = chars[start..upper].iter().collect();
        chunks.push(chunk.trim().to_string());

        start = if end < len { end - overlap } else { end };
    }

    trace!(
        source_chars = len,
        chunk_count = chunks.len(),
        chunk_size,
        overlap,
        "split text into chunks"
    );
    chunks
}

/// Index of the last `.` in `chars[start..end)`, if any.
fn last_period_in(chars: &[char], start: usize, end: usize) -> Option<usize> {
    chars[start..end]
        .iter()
        .rposition(|&c| c == '.')
        .map(|offset| start + offset)
}
