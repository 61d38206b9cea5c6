//! Building protocol-legal IRC lines.
//!
//! Every line leaving this module has passed [`validate_line`]: it ends in
//! exactly one CRLF, contains no other CR or LF, and fits the byte budget.
//! A CR or LF smuggled through a suffix would let the rest of the suffix
//! run as a second command, so those are rejected, never escaped.
//!
//! The builder does not split or truncate. Long text goes through
//! [`chunk`](crate::chunk) first; see [`privmsg`] for the usual pairing.
//!
//! # Example
//!
//! ```
//! use ircwire::encode::build;
//!
//! let line = build("PRIVMSG", &["#chan"], Some("hi there")).unwrap();
//! assert_eq!(line.as_bytes(), b"PRIVMSG #chan :hi there\r\n");
//!
//! assert!(build("PRIVMSG", &["#chan"], Some("hi\r\nQUIT :bye")).is_err());
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::encoding::encode;
use crate::error::BuildError;
use crate::limits::LineLimits;
use crate::message::Message;

mod command;

pub use self::command::{nick, notice, notice_with, privmsg, privmsg_with, user, Registration};

/// Maximum number of middle parameters; the suffix makes fifteen.
pub const MAX_PARAMS: usize = 14;

const CRLF: &[u8] = b"\r\n";

/// A complete outbound line, CRLF included, that has passed validation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RawLine(Vec<u8>);

impl RawLine {
    /// Validate caller-supplied bytes as a complete line.
    pub fn from_bytes(bytes: Vec<u8>, limits: &LineLimits) -> Result<RawLine, BuildError> {
        validate_line(&bytes, limits)?;
        Ok(RawLine(bytes))
    }

    /// The line including its CRLF.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The line without its CRLF.
    pub fn content(&self) -> &[u8] {
        &self.0[..self.0.len() - CRLF.len()]
    }

    /// Length in bytes, CRLF included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a line holds at least its CRLF.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The line including its CRLF.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for RawLine {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for RawLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawLine")
            .field(&String::from_utf8_lossy(&self.0))
            .finish()
    }
}

/// Check the line-level invariants over a fully assembled line.
///
/// ```
/// use ircwire::encode::validate_line;
/// use ircwire::error::BuildError;
/// use ircwire::LineLimits;
///
/// let limits = LineLimits::default();
/// assert!(validate_line(b"PING :x\r\n", &limits).is_ok());
/// assert_eq!(validate_line(b"PING :x", &limits), Err(BuildError::NoLineEnding));
/// assert_eq!(
///     validate_line(b"PING :x\r\nQUIT\r\n", &limits),
///     Err(BuildError::StrayLineEnding)
/// );
/// ```
pub fn validate_line(line: &[u8], limits: &LineLimits) -> Result<(), BuildError> {
    let content = line
        .strip_suffix(CRLF)
        .ok_or(BuildError::NoLineEnding)?;

    if content.iter().any(|&b| b == b'\r' || b == b'\n') {
        return Err(BuildError::StrayLineEnding);
    }

    if line.len() > limits.max_line_len {
        return Err(BuildError::MessageTooLong {
            actual: line.len(),
            limit: limits.max_line_len,
        });
    }

    Ok(())
}

/// Build one line with the default 512-byte limit.
///
/// `params` may not be empty strings, contain spaces, or start with `:`.
/// Only `suffix` may contain spaces.
pub fn build(command: &str, params: &[&str], suffix: Option<&str>) -> Result<RawLine, BuildError> {
    build_with(command, params, suffix, &LineLimits::default())
}

/// Build one line with custom limits.
pub fn build_with(
    command: &str,
    params: &[&str],
    suffix: Option<&str>,
    limits: &LineLimits,
) -> Result<RawLine, BuildError> {
    assemble(None, command, params, suffix, limits)
}

/// Build one line per suffix, in order, sharing command and parameters.
///
/// Stops at the first line that fails to build.
pub fn build_batch<'a, I>(
    command: &str,
    params: &[&str],
    suffixes: I,
    limits: &LineLimits,
) -> Result<Vec<RawLine>, BuildError>
where
    I: IntoIterator<Item = &'a str>,
{
    suffixes
        .into_iter()
        .map(|suffix| assemble(None, command, params, Some(suffix), limits))
        .collect()
}

/// Build the wire form of a message, prefix included.
pub fn build_message(message: &Message, limits: &LineLimits) -> Result<RawLine, BuildError> {
    let params: Vec<&str> = message.params.iter().map(String::as_str).collect();
    assemble(
        message.prefix.as_deref(),
        &message.command,
        &params,
        message.suffix.as_deref(),
        limits,
    )
}

fn assemble(
    prefix: Option<&str>,
    command: &str,
    params: &[&str],
    suffix: Option<&str>,
    limits: &LineLimits,
) -> Result<RawLine, BuildError> {
    let result = check_fields(prefix, command, params).and_then(|()| {
        let line = write_line(prefix, command, params, suffix);
        validate_line(&line, limits)?;
        Ok(RawLine(line))
    });

    match &result {
        Ok(line) => trace!(command, len = line.len(), "built line"),
        Err(e) => debug!(command, error = %e, "rejected line"),
    }
    result
}

fn check_fields(prefix: Option<&str>, command: &str, params: &[&str]) -> Result<(), BuildError> {
    if command.is_empty() {
        return Err(BuildError::InvalidParameter("empty command".to_string()));
    }
    if command.contains(' ') || command.starts_with(':') {
        return Err(BuildError::InvalidParameter(format!(
            "invalid command {:?}",
            command
        )));
    }

    if let Some(prefix) = prefix {
        if prefix.is_empty() || prefix.contains(' ') {
            return Err(BuildError::InvalidParameter(format!(
                "invalid prefix {:?}",
                prefix
            )));
        }
    }

    if params.len() > MAX_PARAMS {
        return Err(BuildError::InvalidParameter(format!(
            "{} parameters given, at most {} allowed",
            params.len(),
            MAX_PARAMS
        )));
    }

    for param in params {
        if param.is_empty() {
            return Err(BuildError::InvalidParameter("empty parameter".to_string()));
        }
        if param.contains(' ') {
            return Err(BuildError::InvalidParameter(format!(
                "parameter contains a space: {:?}",
                param
            )));
        }
        if param.starts_with(':') {
            return Err(BuildError::InvalidParameter(format!(
                "parameter starts with a colon: {:?}",
                param
            )));
        }
    }

    Ok(())
}

fn write_line(prefix: Option<&str>, command: &str, params: &[&str], suffix: Option<&str>) -> Vec<u8> {
    let mut line = Vec::with_capacity(LineLimits::default().max_line_len);

    if let Some(prefix) = prefix {
        line.push(b':');
        line.extend_from_slice(&encode(prefix));
        line.push(b' ');
    }

    line.extend_from_slice(&encode(command));

    for param in params {
        line.push(b' ');
        line.extend_from_slice(&encode(param));
    }

    if let Some(suffix) = suffix {
        line.extend_from_slice(b" :");
        line.extend_from_slice(&encode(suffix));
    }

    line.extend_from_slice(CRLF);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_privmsg() {
        let line = build("PRIVMSG", &["#chan"], Some("hi there")).unwrap();
        assert_eq!(line.as_bytes(), b"PRIVMSG #chan :hi there\r\n");
        assert_eq!(line.content(), b"PRIVMSG #chan :hi there");
    }

    #[test]
    fn test_build_without_params() {
        assert_eq!(build("QUIT", &[], None).unwrap().as_bytes(), b"QUIT\r\n");
        assert_eq!(
            build("QUIT", &[], Some("")).unwrap().as_bytes(),
            b"QUIT :\r\n"
        );
    }

    #[test]
    fn test_embedded_crlf_rejected() {
        assert_eq!(
            build("PRIVMSG", &["#chan"], Some("Nice \r\nCODE :injection")),
            Err(BuildError::StrayLineEnding)
        );
        assert_eq!(
            build("PRIVMSG", &["#chan"], Some("bare\nfeed")),
            Err(BuildError::StrayLineEnding)
        );
        assert_eq!(
            build("PRIVMSG", &["#chan"], Some("trailing\r\n")),
            Err(BuildError::StrayLineEnding)
        );
    }

    #[test]
    fn test_length_boundary() {
        let limits = LineLimits::default();

        // "FIFTEEN chars :" + payload + CRLF
        let just_right = "a".repeat(495);
        let line = build_with("FIFTEEN", &["chars"], Some(just_right.as_str()), &limits).unwrap();
        assert_eq!(line.len(), 512);

        let too_long = "a".repeat(496);
        assert_eq!(
            build_with("FIFTEEN", &["chars"], Some(too_long.as_str()), &limits),
            Err(BuildError::MessageTooLong {
                actual: 513,
                limit: 512
            })
        );
    }

    #[test]
    fn test_multibyte_counts_bytes() {
        let limits = LineLimits::new(16);
        // "X :" + 4 x 3 bytes + CRLF = 17
        assert!(matches!(
            build_with("X", &[], Some("日本語日"), &limits),
            Err(BuildError::MessageTooLong { actual: 17, .. })
        ));
        assert!(build_with("X", &[], Some("日本語"), &limits).is_ok());
    }

    #[test]
    fn test_invalid_fields() {
        let bad = |r: Result<RawLine, BuildError>| matches!(r, Err(BuildError::InvalidParameter(_)));

        assert!(bad(build("", &[], None)));
        assert!(bad(build("PRIV MSG", &[], None)));
        assert!(bad(build(":PRIVMSG", &[], None)));
        assert!(bad(build("PRIVMSG", &["#a b"], Some("x"))));
        assert!(bad(build("PRIVMSG", &[""], Some("x"))));
        assert!(bad(build("PRIVMSG", &[":sneaky"], None)));

        let fifteen = ["p"; 15];
        assert!(bad(build("X", &fifteen, None)));
        assert!(build("X", &fifteen[..14], Some("last")).is_ok());
    }

    #[test]
    fn test_build_batch_preserves_order() {
        let lines = build_batch(
            "PRIVMSG",
            &["meshy"],
            ["Getting there", "It is almost usable!"],
            &LineLimits::default(),
        )
        .unwrap();
        let raw: Vec<&[u8]> = lines.iter().map(RawLine::as_bytes).collect();
        assert_eq!(
            raw,
            vec![
                &b"PRIVMSG meshy :Getting there\r\n"[..],
                &b"PRIVMSG meshy :It is almost usable!\r\n"[..],
            ]
        );
    }

    #[test]
    fn test_build_batch_fails_fast() {
        let result = build_batch(
            "PRIVMSG",
            &["meshy"],
            ["fine", "not\nfine"],
            &LineLimits::default(),
        );
        assert_eq!(result, Err(BuildError::StrayLineEnding));
    }

    #[test]
    fn test_build_message_with_prefix() {
        let msg = Message::new("JOIN").with_prefix("n!u@h").with_param("#c");
        let line = build_message(&msg, &LineLimits::default()).unwrap();
        assert_eq!(line.as_bytes(), b":n!u@h JOIN #c\r\n");
    }

    #[test]
    fn test_validate_line_order() {
        let limits = LineLimits::new(8);
        assert_eq!(validate_line(b"", &limits), Err(BuildError::NoLineEnding));
        assert_eq!(validate_line(b"\n", &limits), Err(BuildError::NoLineEnding));
        assert_eq!(validate_line(b"\r\n", &limits), Ok(()));
        assert_eq!(
            validate_line(b"A\rB\r\n", &limits),
            Err(BuildError::StrayLineEnding)
        );
        assert!(matches!(
            validate_line(b"TOOLONGX\r\n", &limits),
            Err(BuildError::MessageTooLong { actual: 10, limit: 8 })
        ));
    }

    #[test]
    fn test_raw_line_from_bytes() {
        let limits = LineLimits::default();
        let line = RawLine::from_bytes(b"PING :x\r\n".to_vec(), &limits).unwrap();
        assert_eq!(line.into_bytes(), b"PING :x\r\n");
        assert!(RawLine::from_bytes(b"PING :x".to_vec(), &limits).is_err());
    }
}
