//! Whitespace classification for the gaps between tokens.
//!
//! The set is the Unicode space, line and paragraph separators plus the
//! ASCII control whitespace (`\t`, `\n`, vertical tab, form feed, `\r`) and
//! the four information separators `U+001C..=U+001F`. The no-break spaces
//! (`U+00A0`, `U+2007`, `U+202F`) are excluded, so they stop the scan like
//! any other unrecognized character.
//!
//! This differs from [`char::is_whitespace`], which accepts the no-break
//! spaces and `U+0085` but rejects the information separators.

/// Returns `true` if `c` separates tokens.
#[inline]
pub const fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{001C}'..='\u{001F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Byte length of the leading whitespace run of `s`.
///
/// The result always lands on a `char` boundary of `s`.
pub fn leading_len(s: &str) -> usize {
    // ASCII fast path: nearly all JSON whitespace is space, tab or newline.
    let ascii = s
        .bytes()
        .take_while(|&b| b.is_ascii() && is_whitespace(char::from(b)))
        .count();
    match s.as_bytes().get(ascii) {
        Some(b) if !b.is_ascii() => {
            let tail = &s[ascii..];
            let rest = tail.trim_start_matches(is_whitespace);
            ascii + (tail.len() - rest.len())
        }
        _ => ascii,
    }
}
