//! Text encoding resolution for bytes of unknown origin.
//!
//! IRC has no negotiated character set. Most networks speak UTF-8 today,
//! but legacy clients still send Latin-1, CP1250, ISO-2022-JP and worse.
//! [`decode`] tries the caller's expected encodings first, then UTF-8,
//! then whatever [`chardetng`] guesses from the bytes, then Windows-1252,
//! which maps every byte and therefore always succeeds.
//!
//! A successful decode only means no malformed sequence was seen. A
//! single-byte encoding will happily turn the wrong bytes into plausible
//! but wrong text; nothing here can detect that.
//!
//! # Example
//!
//! ```
//! use ircwire::encoding::{decode, encode, EncodingChain};
//!
//! let chain = EncodingChain::from_labels(["iso-2022-jp"]).unwrap();
//! assert_eq!(decode(b"\x1b$BEl5~ET\x1b(B", &chain), "東京都");
//!
//! assert_eq!(decode(b"Ume\xe5", &EncodingChain::new()), "Umeå");
//! assert_eq!(decode(b"Miko\xb3aj Kopernik", &EncodingChain::new()), "Mikołaj Kopernik");
//! assert_eq!(&*encode("ಠ_ಠ"), b"\xe0\xb2\xa0_\xe0\xb2\xa0");
//! ```

use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use tracing::{debug, trace};

use crate::error::{ProtocolError, Result};

/// Encodings tried after the caller's chain, in order. Detection runs
/// between the two.
///
/// The last entry accepts every byte sequence.
pub fn default_encodings() -> [&'static Encoding; 2] {
    [UTF_8, WINDOWS_1252]
}

/// Guess the encoding of `raw` from its byte statistics.
///
/// UTF-8 is never guessed; it has already been tried by the time this
/// runs.
pub fn detect(raw: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(raw, true);
    detector.guess(None, false)
}

/// An ordered list of encodings to try before the defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodingChain {
    encodings: Vec<&'static Encoding>,
}

impl EncodingChain {
    /// An empty chain; only the defaults will be tried.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain from WHATWG encoding labels, e.g. `"utf-16"`,
    /// `"iso-2022-jp"` or `"windows-1250"`.
    ///
    /// Underscores are accepted in place of hyphens so that
    /// `"windows_1250"` works too.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut encodings = Vec::new();
        for label in labels {
            let label = label.as_ref();
            let normalized = label.trim().replace('_', "-");
            let encoding = Encoding::for_label(normalized.as_bytes())
                .ok_or_else(|| ProtocolError::UnknownEncoding(label.to_string()))?;
            encodings.push(encoding);
        }
        Ok(Self { encodings })
    }

    /// Append an encoding to the end of the chain.
    #[must_use]
    pub fn with(mut self, encoding: &'static Encoding) -> Self {
        self.encodings.push(encoding);
        self
    }

    /// The caller's encodings, in the order they will be tried.
    pub fn encodings(&self) -> &[&'static Encoding] {
        &self.encodings
    }

    /// Whether the chain holds no caller encodings.
    pub fn is_empty(&self) -> bool {
        self.encodings.is_empty()
    }

    /// Decode `raw` with this chain followed by the defaults.
    pub fn decode<'a>(&self, raw: &'a [u8]) -> Cow<'a, str> {
        decode(raw, self)
    }
}

/// Decode bytes to text, trying `expected` first, then UTF-8, then a
/// detected encoding, then Windows-1252.
///
/// Never fails. A byte-order mark is only removed by the UTF-16
/// encodings; for everything else a leading U+FEFF is text and is kept.
pub fn decode<'a>(raw: &'a [u8], expected: &EncodingChain) -> Cow<'a, str> {
    let [utf8, fallback] = default_encodings();

    for &encoding in expected.encodings.iter().chain([&utf8]) {
        if let Some(text) = attempt(encoding, raw) {
            return text;
        }
    }

    // Plain ASCII never gets this far.
    let detected = detect(raw);
    if detected != fallback {
        if let Some(text) = attempt(detected, raw) {
            return text;
        }
    }

    fallback.decode_without_bom_handling(raw).0
}

fn attempt<'a>(encoding: &'static Encoding, raw: &'a [u8]) -> Option<Cow<'a, str>> {
    let (text, had_errors) = decode_one(encoding, raw);
    if had_errors {
        debug!(encoding = encoding.name(), "decode attempt failed");
        return None;
    }
    trace!(encoding = encoding.name(), len = raw.len(), "decoded");
    Some(text)
}

fn decode_one<'a>(encoding: &'static Encoding, raw: &'a [u8]) -> (Cow<'a, str>, bool) {
    if encoding == UTF_16LE || encoding == UTF_16BE {
        encoding.decode_with_bom_removal(raw)
    } else {
        encoding.decode_without_bom_handling(raw)
    }
}

/// Encode text for the wire. Always UTF-8.
pub fn encode(text: &str) -> Cow<'_, [u8]> {
    UTF_8.encode(text).0
}
