//! # ircwire
//!
//! The wire layer of an IRC client: turning received bytes into messages
//! and outgoing text into protocol-legal lines.
//!
//! ## Features
//!
//! - Line parsing into prefix, command, middle parameters and suffix
//! - Field decoding through an ordered chain of legacy encodings
//! - Line building that refuses embedded line endings and over-long lines
//! - Byte-bounded chunking of human text at word boundaries
//! - Sender and reply-target resolution for PRIVMSG
//! - Optional Tokio codec and framed transport
//!
//! The crate never opens connections, dispatches handlers or keeps
//! client state.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Parsing
//!
//! ```rust
//! use ircwire::Message;
//!
//! let message = Message::parse(b":nick!ident@host.example PRIVMSG #chan :hello\r\n").unwrap();
//! assert_eq!(message.source_nick(), Some("nick"));
//! assert_eq!(message.params, ["#chan"]);
//! assert_eq!(message.suffix.as_deref(), Some("hello"));
//! ```
//!
//! ### Building
//!
//! ```rust
//! use ircwire::encode::{build, privmsg};
//!
//! let line = build("JOIN", &["#rust"], None).unwrap();
//! assert_eq!(line.as_bytes(), b"JOIN #rust\r\n");
//!
//! // Text longer than one line is split at word boundaries.
//! let lines = privmsg("#rust", &"lorem ipsum ".repeat(100)).unwrap();
//! assert!(lines.iter().all(|line| line.len() <= 512));
//! ```

pub mod chan;
pub mod chunk;
pub mod command;
pub mod encode;
pub mod encoding;
pub mod error;
pub mod limits;
pub mod message;
pub mod prefix;
pub mod privmsg;
pub mod response;

#[cfg(feature = "tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
pub mod transport;

pub use self::chan::ChannelExt;
pub use self::chunk::chunk;
pub use self::encode::{build, validate_line, RawLine};
pub use self::encoding::{decode, EncodingChain};
pub use self::error::{BuildError, IdentityError, MessageParseError, ProtocolError};
pub use self::limits::LineLimits;
pub use self::message::{Message, MessageRef};
pub use self::prefix::{split_identity, Identity};
pub use self::privmsg::resolve_privmsg_target;
pub use self::response::Response;

#[cfg(feature = "tokio")]
pub use self::transport::{IrcCodec, Transport};
