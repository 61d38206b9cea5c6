//! Line codec for `tokio_util` framing.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace, warn};

use crate::encode::{validate_line, RawLine};
use crate::encoding::EncodingChain;
use crate::error::{MessageParseError, ProtocolError};
use crate::limits::LineLimits;
use crate::message::{strip_line_ending, Message};

/// Frames IRC lines: decodes [`Message`]s, encodes [`RawLine`]s.
///
/// Inbound lines end at LF; a preceding CR is dropped. Lines with nothing
/// but whitespace are skipped. A line that is too long or does not parse
/// is consumed and yielded as an `Err` item, never as a decoder error, so
/// the frames behind it keep flowing. Decoder errors are I/O only.
#[derive(Clone, Debug, Default)]
pub struct IrcCodec {
    chain: EncodingChain,
    limits: LineLimits,
    /// Bytes already searched for a newline.
    next_index: usize,
}

impl IrcCodec {
    /// Create a codec with an explicit chain and limits.
    pub fn new(chain: EncodingChain, limits: LineLimits) -> Self {
        IrcCodec {
            chain,
            limits,
            next_index: 0,
        }
    }

    /// Create a codec that tries the named encodings before the defaults.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, ProtocolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(
            EncodingChain::from_labels(labels)?,
            LineLimits::default(),
        ))
    }

    /// The limits applied to both directions.
    pub fn limits(&self) -> &LineLimits {
        &self.limits
    }
}

impl Decoder for IrcCodec {
    type Item = Result<Message, ProtocolError>;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, ProtocolError> {
        let limit = self.limits.max_line_len;

        loop {
            let newline = src[self.next_index..].iter().position(|b| *b == b'\n');

            let line = match newline {
                Some(offset) => {
                    let end = self.next_index + offset + 1;
                    self.next_index = 0;
                    src.split_to(end)
                }
                None if src.len() > limit => {
                    let actual = src.len();
                    src.clear();
                    self.next_index = 0;
                    warn!(actual, limit, "discarding unterminated line");
                    return Ok(Some(Err(ProtocolError::LineTooLong { actual, limit })));
                }
                None => {
                    self.next_index = src.len();
                    return Ok(None);
                }
            };

            if line.len() > limit {
                warn!(actual = line.len(), limit, "discarding long line");
                return Ok(Some(Err(ProtocolError::LineTooLong {
                    actual: line.len(),
                    limit,
                })));
            }

            match Message::parse_with(&line, &self.chain) {
                Ok(message) => return Ok(Some(Ok(message))),
                Err(MessageParseError::EmptyMessage) => {
                    trace!("skipping empty line");
                    continue;
                }
                Err(cause) => {
                    debug!(error = %cause, "unparseable line");
                    return Ok(Some(Err(ProtocolError::InvalidMessage {
                        string: String::from_utf8_lossy(strip_line_ending(&line)).into_owned(),
                        cause,
                    })));
                }
            }
        }
    }
}

impl Encoder<RawLine> for IrcCodec {
    type Error = ProtocolError;

    fn encode(&mut self, line: RawLine, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        validate_line(line.as_bytes(), &self.limits)?;
        dst.extend_from_slice(line.as_bytes());
        Ok(())
    }
}
