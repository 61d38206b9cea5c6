use std::fmt;
use std::str::FromStr;

use crate::encode::{build_message, RawLine};
use crate::encoding::EncodingChain;
use crate::error::{BuildError, IdentityError, MessageParseError};
use crate::limits::LineLimits;
use crate::prefix::{Identity, IdentityRef};
use crate::response::Response;

use super::MessageRef;

/// A single IRC message.
///
/// Fields are decoded text. `params` holds the middle parameters only;
/// the trailing parameter lives in `suffix` and is present exactly when
/// the line contained a `" :"` separator.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Sender, without the leading `:`.
    pub prefix: Option<String>,
    /// Verb or three-digit numeric, exactly as received.
    pub command: String,
    /// Middle parameters; none contains a space.
    pub params: Vec<String>,
    /// Trailing parameter; may contain spaces.
    pub suffix: Option<String>,
}

impl Message {
    /// Create a message with no prefix, parameters or suffix.
    pub fn new(command: impl Into<String>) -> Self {
        Message {
            prefix: None,
            command: command.into(),
            params: Vec::new(),
            suffix: None,
        }
    }

    /// Parse one line, decoding fields with the default encodings.
    ///
    /// A trailing CRLF (or bare LF) is ignored.
    ///
    /// ```
    /// use ircwire::Message;
    ///
    /// let msg = Message::parse(b":nick!ident@host.example PRIVMSG #chan :hello").unwrap();
    /// assert_eq!(msg.prefix.as_deref(), Some("nick!ident@host.example"));
    /// assert_eq!(msg.command, "PRIVMSG");
    /// assert_eq!(msg.params, vec!["#chan"]);
    /// assert_eq!(msg.suffix.as_deref(), Some("hello"));
    /// ```
    pub fn parse(raw: &[u8]) -> Result<Message, MessageParseError> {
        Self::parse_with(raw, &EncodingChain::new())
    }

    /// Parse one line, decoding fields with `chain` before the defaults.
    pub fn parse_with(raw: &[u8], chain: &EncodingChain) -> Result<Message, MessageParseError> {
        let message = MessageRef::parse(raw)?.decode(chain);
        tracing::trace!(command = %message.command, "parsed message");
        Ok(message)
    }

    /// Set the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Append a middle parameter.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Set the trailing parameter.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Build the wire form of this message, CRLF included.
    ///
    /// The prefix is emitted when present, so parsed messages round-trip.
    pub fn to_raw_line(&self, limits: &LineLimits) -> Result<RawLine, BuildError> {
        build_message(self, limits)
    }

    /// The numeric reply, if the command is a known three-digit code.
    pub fn response(&self) -> Option<Response> {
        self.command.parse().ok()
    }

    /// Split the prefix into nick, ident and host.
    pub fn identity(&self) -> Result<Identity, IdentityError> {
        let prefix = self.prefix.as_deref().ok_or(IdentityError::MissingPrefix)?;
        Ok(IdentityRef::parse(prefix)?.to_identity())
    }

    /// The sender's nick, when the prefix is a user mask.
    pub fn source_nick(&self) -> Option<&str> {
        let prefix = self.prefix.as_deref()?;
        IdentityRef::parse(prefix).ok().map(|id| id.nick)
    }
}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        Message::parse(s.as_bytes())
    }
}

/// Writes the line without its CRLF.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, ":{} ", prefix)?;
        }
        f.write_str(&self.command)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        if let Some(suffix) = &self.suffix {
            write!(f, " :{}", suffix)?;
        }
        Ok(())
    }
}
