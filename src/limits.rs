//! Line length limits.

/// Maximum length of an IRC line in bytes, CRLF included (RFC 2812 §2.3).
pub const MAX_LINE_LEN: usize = 512;

/// Length of the CRLF terminator.
pub const CRLF_LEN: usize = 2;

/// Byte budget applied to every line built or accepted.
///
/// The limit counts the terminating CRLF, so the default leaves 510 bytes
/// for content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineLimits {
    /// Maximum line length including CRLF.
    pub max_line_len: usize,
}

impl LineLimits {
    /// Create limits with a custom maximum line length (CRLF included).
    pub const fn new(max_line_len: usize) -> Self {
        Self { max_line_len }
    }

    /// Bytes available for content once CRLF is accounted for.
    pub const fn content_budget(&self) -> usize {
        self.max_line_len.saturating_sub(CRLF_LEN)
    }
}

impl Default for LineLimits {
    fn default() -> Self {
        Self::new(MAX_LINE_LEN)
    }
}
