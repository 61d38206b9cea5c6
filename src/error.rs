//! Error types for the IRC wire layer.
//!
//! Parsing, name resolution and line building each have their own error
//! enum so callers can match on exactly the failures an operation can
//! produce. [`ProtocolError`] wraps them for the transport, which can hit
//! any of them plus I/O.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An inbound line exceeded the configured limit.
    #[error("line too long: {actual} bytes (limit {limit})")]
    LineTooLong {
        /// Length of the offending line, in bytes.
        actual: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// An encoding label was not recognised.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// An outbound line failed validation.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Failed to parse an IRC message.
    #[error("invalid message: {string}")]
    InvalidMessage {
        /// The raw message, lossily decoded for display.
        string: String,
        /// The underlying parse error.
        #[source]
        cause: MessageParseError,
    },
}

/// Errors encountered when parsing IRC messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Message was empty once the line ending was removed.
    #[error("empty message")]
    EmptyMessage,

    /// Command was missing or began with `:`.
    #[error("invalid command")]
    InvalidCommand,
}

/// Errors encountered when deriving identities and targets from messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdentityError {
    /// A prefix lacked the `@` separating nick from host.
    #[error("malformed prefix: {0}")]
    MalformedPrefix(String),

    /// The message carried no prefix to resolve a sender from.
    #[error("message has no prefix")]
    MissingPrefix,

    /// The message carried no target parameter.
    #[error("message has no target parameter")]
    MissingTarget,
}

/// Errors encountered when assembling outbound lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// A command or parameter broke the field rules.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The assembled line did not end in CRLF.
    #[error("line does not end with CRLF")]
    NoLineEnding,

    /// A CR or LF appeared before the final CRLF.
    #[error("line ending found before end of line")]
    StrayLineEnding,

    /// The assembled line exceeded the byte budget.
    #[error("message too long: {actual} bytes (limit {limit})")]
    MessageTooLong {
        /// Length of the assembled line including CRLF.
        actual: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// A chunk budget could not hold a single character of the text.
    #[error("chunk budget of {budget} bytes cannot hold a {needed}-byte character")]
    ChunkBudgetTooSmall {
        /// Budget requested, in bytes.
        budget: usize,
        /// Encoded width of the character that did not fit.
        needed: usize,
    },
}
