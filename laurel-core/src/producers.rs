//! Splitting of the raw producers field.
//!
//! A field such as `"Bob Cavallo, Joe Ruffalo and Steve Fargnoli"` names three
//! producers. Separators are a comma or the lowercase word `and`. The word
//! only counts when it stands alone, bounded on both sides by whitespace or the
//! edge of the field, so names like `Sandra`, `Anderson`, or `Band` stay whole.

const CONJUNCTION: &str = "and";

/// Split a raw producers field into trimmed, non-empty names.
///
/// Order of appearance is preserved and duplicates are kept; callers that
/// group by name merge them.
#[must_use]
pub fn split_producers(raw: &str) -> Vec<&str> {
    raw.split(',')
        .flat_map(split_on_conjunction)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

fn split_on_conjunction(segment: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, _) in segment.match_indices(CONJUNCTION) {
        let end = idx + CONJUNCTION.len();
        if is_word_boundary_before(segment, idx) && is_word_boundary_after(segment, end) {
            pieces.push(&segment[start..idx]);
            start = end;
        }
    }
    pieces.push(&segment[start..]);
    pieces
}

fn is_word_boundary_before(s: &str, idx: usize) -> bool {
    s[..idx].chars().next_back().is_none_or(char::is_whitespace)
}

fn is_word_boundary_after(s: &str, idx: usize) -> bool {
    s[idx..].chars().next().is_none_or(char::is_whitespace)
}
