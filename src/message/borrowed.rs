use crate::encoding::EncodingChain;
use crate::error::MessageParseError;

use super::nom_parser::parse_message;
use super::Message;

/// A parsed line whose fields borrow the received bytes.
///
/// No text decoding has happened yet; call [`decode`](Self::decode) to get
/// an owned [`Message`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MessageRef<'a> {
    /// Sender, without the leading `:`.
    pub prefix: Option<&'a [u8]>,
    /// Verb or three-digit numeric.
    pub command: &'a [u8],
    /// Middle parameters, in order.
    pub params: Vec<&'a [u8]>,
    /// Trailing parameter, without the leading `:`.
    pub suffix: Option<&'a [u8]>,
    /// The line with its ending removed.
    pub raw: &'a [u8],
}

impl<'a> MessageRef<'a> {
    /// Split a line into its fields. A trailing CRLF or LF is ignored.
    pub fn parse(line: &'a [u8]) -> Result<MessageRef<'a>, MessageParseError> {
        let raw = strip_line_ending(line);

        if raw.iter().all(|&b| b == b' ') {
            return Err(MessageParseError::EmptyMessage);
        }

        let parsed = match parse_message(raw) {
            Ok((_rest, m)) => m,
            Err(_e) => return Err(MessageParseError::InvalidCommand),
        };

        if parsed.command.first() == Some(&b':') {
            return Err(MessageParseError::InvalidCommand);
        }

        Ok(MessageRef {
            prefix: parsed.prefix,
            command: parsed.command,
            params: parsed.params,
            suffix: parsed.suffix,
            raw,
        })
    }

    /// Decode every field with `chain`, falling back to the default encodings.
    pub fn decode(&self, chain: &EncodingChain) -> Message {
        Message {
            prefix: self.prefix.map(|p| chain.decode(p).into_owned()),
            command: chain.decode(self.command).into_owned(),
            params: self
                .params
                .iter()
                .map(|p| chain.decode(p).into_owned())
                .collect(),
            suffix: self.suffix.map(|s| chain.decode(s).into_owned()),
        }
    }
}

/// Remove any trailing CR and LF bytes.
pub(crate) fn strip_line_ending(mut line: &[u8]) -> &[u8] {
    while let Some((&last, rest)) = line.split_last() {
        if last != b'\r' && last != b'\n' {
            break;
        }
        line = rest;
    }
    line
}
