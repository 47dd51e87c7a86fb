// crates/domain/src/filter.rs
//! Character filter applied to every file.
//!
//! The retained alphabet is fixed: printable ASCII (`0x20..=0x7E`) plus
//! carriage return and line feed. Everything else, tabs included, is
//! deleted rather than replaced.

use std::borrow::Cow;

/// Returns `true` when `c` survives the filter.
#[inline]
pub const fn is_retained(c: char) -> bool {
    matches!(c, '\n' | '\r' | ' '..='~')
}

/// Decode `bytes` as UTF-8, substituting U+FFFD for invalid sequences.
///
/// Never fails, whatever the input bytes are.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Remove every character outside the retained alphabet.
pub fn strip_non_printable(text: &str) -> String {
    text.chars().filter(|&c| is_retained(c)).collect()
}

/// Full per-file transform: lossy decode followed by the character filter.
pub fn minify_bytes(bytes: &[u8]) -> String {
    strip_non_printable(&decode_lossy(bytes))
}
