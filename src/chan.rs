//! Channel name rules.
//!
//! RFC 2812 §1.3: channel names begin with `&`, `#`, `+` or `!`, are at
//! most fifty characters long and never contain a space, a comma or
//! control G (BELL, 0x07). Channel names are case insensitive, and so is
//! this check: it never looks at letter case.

/// Valid channel prefix characters.
pub const CHANNEL_PREFIXES: &[char] = &['&', '#', '+', '!'];

/// Characters that are invalid anywhere in a channel name.
const INVALID_CHAN_CHARS: &[char] = &[' ', ',', '\x07'];

/// Maximum channel name length, in characters.
pub const MAX_CHANNEL_LEN: usize = 50;

/// Why a string is not a channel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty.
    Empty,
    /// The input was too long.
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length.
        actual: usize,
    },
    /// Invalid character found at position.
    InvalidChar {
        /// The invalid character.
        ch: char,
        /// Character position in the string.
        position: usize,
    },
    /// Missing channel prefix.
    MissingPrefix,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "input is empty"),
            ValidationError::TooLong { max, actual } => {
                write!(f, "input too long: {} characters (max {})", actual, max)
            }
            ValidationError::InvalidChar { ch, position } => {
                write!(f, "invalid character {:?} at position {}", ch, position)
            }
            ValidationError::MissingPrefix => write!(f, "missing channel prefix"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate an IRC channel name.
///
/// # Examples
///
/// ```
/// use ircwire::chan::validate_channel_name;
///
/// assert!(validate_channel_name("#channel").is_ok());
/// assert!(validate_channel_name("&local").is_ok());
/// assert!(validate_channel_name("channel").is_err()); // Missing prefix
/// assert!(validate_channel_name("#chan nel").is_err()); // Contains space
/// assert!(validate_channel_name("").is_err()); // Empty
/// ```
pub fn validate_channel_name(name: &str) -> Result<(), ValidationError> {
    let first = name.chars().next().ok_or(ValidationError::Empty)?;

    let len = name.chars().count();
    if len > MAX_CHANNEL_LEN {
        return Err(ValidationError::TooLong {
            max: MAX_CHANNEL_LEN,
            actual: len,
        });
    }

    if let Some((position, ch)) = name
        .chars()
        .enumerate()
        .find(|(_, c)| INVALID_CHAN_CHARS.contains(c))
    {
        return Err(ValidationError::InvalidChar { ch, position });
    }

    if !CHANNEL_PREFIXES.contains(&first) {
        return Err(ValidationError::MissingPrefix);
    }

    Ok(())
}

/// Whether `name` is a channel rather than a nick.
#[inline]
pub fn is_channel(name: &str) -> bool {
    validate_channel_name(name).is_ok()
}

/// Channel checks on string types.
pub trait ChannelExt {
    /// Whether this string is a valid channel name.
    fn is_channel(&self) -> bool;
}

impl ChannelExt for str {
    #[inline]
    fn is_channel(&self) -> bool {
        is_channel(self)
    }
}

impl ChannelExt for String {
    #[inline]
    fn is_channel(&self) -> bool {
        is_channel(self)
    }
}
