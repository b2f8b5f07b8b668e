//! Case-insensitive substring matching.
//!
//! Spans are reported as byte offsets into the haystack so callers can
//! slice the matched text directly. Characters are compared through their
//! lowercase mappings one at a time, which keeps the offsets valid even
//! when lowercasing would change a character's encoded length.

use std::ops::Range;

/// Find the first case-insensitive occurrence of `needle` in `haystack`
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return Some(0..0);
    }

    haystack.char_indices().find_map(|(start, _)| {
        match_len_at(&haystack[start..], needle).map(|len| start..start + len)
    })
}

/// Byte length of the prefix of `rest` that matches `needle`, if any
fn match_len_at(rest: &str, needle: &str) -> Option<usize> {
    let mut hay = rest.char_indices();

    for expected in needle.chars() {
        let (_, actual) = hay.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
    }

    Some(hay.next().map_or(rest.len(), |(offset, _)| offset))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
