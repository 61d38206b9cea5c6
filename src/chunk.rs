//! Splitting human text into byte-bounded pieces.
//!
//! IRC limits lines by bytes, not characters, so every length here is an
//! encoded (UTF-8) length. Text is split in three passes:
//!
//! 1. at line breaks (CR, LF or CRLF, none of which survive),
//! 2. at the last whitespace that keeps a piece within budget,
//! 3. failing that, at the last character boundary within budget.
//!
//! A multi-byte character is never cut in half.

use crate::encoding::encode;
use crate::error::BuildError;

/// Truncates a string to at most `max_bytes` bytes without breaking
/// a multi-byte UTF-8 codepoint at the end.
///
/// # Examples
///
/// ```
/// use ircwire::chunk::truncate_utf8_safe;
///
/// assert_eq!(truncate_utf8_safe("hello world", 5), "hello");
///
/// // Multi-byte chars are not split
/// assert_eq!(truncate_utf8_safe("Hello 👋 World", 8), "Hello ");
///
/// assert_eq!(truncate_utf8_safe("hi", 10), "hi");
/// ```
#[inline]
pub fn truncate_utf8_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }

    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

/// Split `text` into pieces of at most `max_bytes` bytes, borrowing from
/// the input.
///
/// Pieces produced by a word break have surrounding whitespace trimmed.
/// Empty pieces are dropped. Fails only when `max_bytes` cannot hold a
/// character that has to be emitted.
///
/// ```
/// use ircwire::chunk::split_text;
///
/// let text = "Message to be split into chunks of twenty characters or less.";
/// assert_eq!(
///     split_text(text, 20).unwrap(),
///     ["Message to be split", "into chunks of", "twenty characters or", "less."],
/// );
/// ```
pub fn split_text(text: &str, max_bytes: usize) -> Result<Vec<&str>, BuildError> {
    let mut chunks = Vec::new();

    for segment in line_segments(text) {
        let mut rest = segment;

        while rest.len() > max_bytes {
            let (head, tail) = split_within(rest, max_bytes)?;
            let head = head.trim_end();
            if !head.is_empty() {
                chunks.push(head);
            }
            rest = tail.trim_start();
        }

        if !rest.is_empty() {
            chunks.push(rest);
        }
    }

    Ok(chunks)
}

/// Split `text` into encoded byte strings of at most `max_length` bytes.
///
/// See [`split_text`] for the splitting rules.
pub fn chunk(text: &str, max_length: usize) -> Result<Vec<Vec<u8>>, BuildError> {
    Ok(split_text(text, max_length)?
        .into_iter()
        .map(|piece| encode(piece).into_owned())
        .collect())
}

/// Split on CRLF, then on any lone CR or LF.
fn line_segments(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n")
        .flat_map(|line| line.split(['\r', '\n']))
        .filter(|segment| !segment.is_empty())
}

/// Find a split point at or before `budget` bytes. `s` must be longer
/// than `budget`.
fn split_within(s: &str, budget: usize) -> Result<(&str, &str), BuildError> {
    // A whitespace starting exactly at `budget` still leaves a full-budget head.
    let word_break = s
        .char_indices()
        .take_while(|(i, _)| *i <= budget)
        .filter(|(_, c)| c.is_whitespace())
        .map(|(i, _)| i)
        .last();

    if let Some(i) = word_break {
        return Ok(s.split_at(i));
    }

    let cut = truncate_utf8_safe(s, budget).len();
    if cut == 0 {
        let needed = s.chars().next().map_or(1, char::len_utf8);
        return Err(BuildError::ChunkBudgetTooSmall { budget, needed });
    }
    Ok(s.split_at(cut))
}
