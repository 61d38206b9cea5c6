//! Line transport over any async byte stream.
//!
//! [`Transport`] frames a stream the caller has already connected (TCP,
//! TLS, an in-memory pipe) with [`IrcCodec`]. It never opens sockets or
//! reconnects.
//!
//! ```no_run
//! # async fn run() -> ircwire::error::Result<()> {
//! use ircwire::encode::Registration;
//! use ircwire::transport::Transport;
//!
//! let stream = tokio::net::TcpStream::connect("irc.example.com:6667").await?;
//! let mut transport = Transport::new(stream);
//!
//! transport
//!     .send_batch(Registration::new("meshy", "Meshy Bot").lines()?)
//!     .await?;
//!
//! while let Some(message) = transport.read_message().await? {
//!     println!("{}", message);
//! }
//! # Ok(())
//! # }
//! ```

use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::Framed;
use tracing::trace;

use crate::encode::{validate_line, RawLine};
use crate::error::Result;
use crate::message::Message;

mod codec;

pub use self::codec::IrcCodec;

/// A framed IRC connection.
#[derive(Debug)]
pub struct Transport<S> {
    framed: Framed<S, IrcCodec>,
}

impl<S> Transport<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Frame `stream` with the default encodings and limits.
    pub fn new(stream: S) -> Self {
        Self::with_codec(stream, IrcCodec::default())
    }

    /// Frame `stream` with a configured codec.
    pub fn with_codec(stream: S, codec: IrcCodec) -> Self {
        Transport {
            framed: Framed::new(stream, codec),
        }
    }

    /// Read the next message. `Ok(None)` means the peer closed the stream.
    ///
    /// A line that cannot be parsed or is too long is returned as an error
    /// and dropped; the following call reads the next line, including one
    /// already buffered. An I/O error ends the stream.
    pub async fn read_message(&mut self) -> Result<Option<Message>> {
        self.framed.next().await.transpose()?.transpose()
    }

    /// Write one line and flush.
    pub async fn send(&mut self, line: RawLine) -> Result<()> {
        trace!(len = line.len(), "sending line");
        self.framed.send(line).await
    }

    /// Write lines in order and flush once.
    ///
    /// Every line is checked against the codec's limits before the first
    /// is written, so a bad line anywhere means nothing is sent.
    pub async fn send_batch<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = RawLine>,
    {
        let lines: Vec<RawLine> = lines.into_iter().collect();
        let limits = *self.framed.codec().limits();
        for line in &lines {
            validate_line(line.as_bytes(), &limits)?;
        }

        trace!(count = lines.len(), "sending batch");
        for line in lines {
            self.framed.feed(line).await?;
        }
        self.framed.flush().await
    }

    /// The underlying stream.
    pub fn get_ref(&self) -> &S {
        self.framed.get_ref()
    }

    /// Release the stream. Buffered, unread input is lost.
    pub fn into_inner(self) -> S {
        self.framed.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{build, privmsg};
    use crate::encoding::EncodingChain;
    use crate::error::ProtocolError;
    use crate::limits::LineLimits;
    use std::time::Duration;
    use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt};
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_read_messages_until_close() {
        let (client, mut server) = duplex(1024);
        let mut transport = Transport::new(client);

        server
            .write_all(b":srv 001 meshy :Welcome\r\nPING :123\r\n")
            .await
            .unwrap();
        drop(server);

        let welcome = transport.read_message().await.unwrap().unwrap();
        assert_eq!(welcome.command, "001");
        let ping = transport.read_message().await.unwrap().unwrap();
        assert_eq!(ping.suffix.as_deref(), Some("123"));
        assert!(transport.read_message().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_bad_line_does_not_end_stream() {
        let (client, mut server) = duplex(1024);
        let mut transport = Transport::new(client);

        server.write_all(b":prefix-only\r\nPING :x\r\n").await.unwrap();
        drop(server);

        assert!(matches!(
            transport.read_message().await,
            Err(ProtocolError::InvalidMessage { .. })
        ));
        let ping = transport.read_message().await.unwrap().unwrap();
        assert_eq!(ping.command, "PING");
        assert!(transport.read_message().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_buffered_line_after_bad_line_while_open() {
        let (client, mut server) = duplex(1024);
        let mut transport = Transport::new(client);

        server.write_all(b":prefix-only\r\nPING :x\r\n").await.unwrap();

        assert!(matches!(
            transport.read_message().await,
            Err(ProtocolError::InvalidMessage { .. })
        ));
        let ping = timeout(Duration::from_millis(500), transport.read_message())
            .await
            .expect("buffered line read without new input")
            .unwrap()
            .unwrap();
        assert_eq!(ping.command, "PING");

        // The peer is still connected, so nothing further is ready.
        assert!(timeout(Duration::from_millis(50), transport.read_message())
            .await
            .is_err());
        drop(server);
    }

    #[tokio::test]
    async fn test_long_line_then_next_while_open() {
        let (client, mut server) = duplex(1024);
        let codec = IrcCodec::new(EncodingChain::new(), LineLimits::new(16));
        let mut transport = Transport::with_codec(client, codec);

        server
            .write_all(b"PRIVMSG #c :far too long\r\nPING :y\r\n")
            .await
            .unwrap();

        assert!(matches!(
            transport.read_message().await,
            Err(ProtocolError::LineTooLong { .. })
        ));
        let ping = timeout(Duration::from_millis(500), transport.read_message())
            .await
            .expect("buffered line read without new input")
            .unwrap()
            .unwrap();
        assert_eq!(ping.suffix.as_deref(), Some("y"));
        drop(server);
    }

    #[tokio::test]
    async fn test_send_batch_in_order() {
        let (client, mut server) = duplex(1024);
        let mut transport = Transport::new(client);

        let lines = privmsg("#channel", "Multi\r\nline\r\nmessage.").unwrap();
        transport.send_batch(lines).await.unwrap();
        drop(transport);

        let mut received = Vec::new();
        server.read_to_end(&mut received).await.unwrap();
        assert_eq!(
            received,
            b"PRIVMSG #channel :Multi\r\nPRIVMSG #channel :line\r\nPRIVMSG #channel :message.\r\n"
        );
    }

    #[tokio::test]
    async fn test_send_batch_all_or_nothing() {
        let (client, mut server) = duplex(1024);
        let codec = IrcCodec::new(EncodingChain::new(), LineLimits::new(12));
        let mut transport = Transport::with_codec(client, codec);

        let lines = vec![
            build("PING", &[], Some("a")).unwrap(),
            build("PRIVMSG", &["#c"], Some("too long")).unwrap(),
        ];
        assert!(matches!(
            transport.send_batch(lines).await,
            Err(ProtocolError::Build(_))
        ));

        transport.send(build("PONG", &[], Some("b")).unwrap()).await.unwrap();
        drop(transport);

        let mut received = Vec::new();
        server.read_to_end(&mut received).await.unwrap();
        assert_eq!(received, b"PONG :b\r\n");
    }
}
