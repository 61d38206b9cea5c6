//! Wire-level behaviour checks against RFC 2812 framing rules.
//!
//! Run with: `cargo test --test wire_compliance`

use ircwire::chan::is_channel;
use ircwire::chunk::{chunk, split_text};
use ircwire::encode::{build, build_with, privmsg, validate_line};
use ircwire::encoding::{decode, encode, EncodingChain};
use ircwire::error::BuildError;
use ircwire::{resolve_privmsg_target, LineLimits, Message};

// =============================================================================
// BUILDING
// =============================================================================

mod building {
    use super::*;

    #[test]
    fn test_privmsg_line() {
        let line = build("PRIVMSG", &["#chan"], Some("hi there")).unwrap();
        assert_eq!(line.as_bytes(), b"PRIVMSG #chan :hi there\r\n");
    }

    #[test]
    fn test_embedded_line_ending_is_injection() {
        let result = build("PRIVMSG", &["meshy"], Some("Nice \r\nCODE :injection you have there"));
        assert_eq!(result, Err(BuildError::StrayLineEnding));
    }

    #[test]
    fn test_missing_line_ending() {
        assert_eq!(
            validate_line(
                b"PRIVMSG meshy :Nice line ending you have forgotten there",
                &LineLimits::default()
            ),
            Err(BuildError::NoLineEnding)
        );
    }

    #[test]
    fn test_512_bytes_ok_513_rejected() {
        let limits = LineLimits::default();
        let ok = build_with("FIFTEEN", &["chars"], Some("a".repeat(495).as_str()), &limits).unwrap();
        assert_eq!(ok.len(), 512);

        assert!(matches!(
            build_with("FIFTEEN", &["chars"], Some("a".repeat(496).as_str()), &limits),
            Err(BuildError::MessageTooLong { actual: 513, limit: 512 })
        ));
    }

    #[test]
    fn test_chunked_privmsg_never_exceeds_limit() {
        let text = "失敗を繰り返すことで、成功に至る。".repeat(40);
        let lines = privmsg("#channel", &text).unwrap();
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 512);
            assert!(std::str::from_utf8(line.as_bytes()).is_ok());
        }
    }
}

// =============================================================================
// CHUNKING
// =============================================================================

mod chunking {
    use super::*;

    #[test]
    fn test_english_word_breaks() {
        let chunks = chunk("Message to be split into chunks of twenty characters or less.", 20).unwrap();
        assert_eq!(
            chunks,
            vec![
                b"Message to be split".to_vec(),
                b"into chunks of".to_vec(),
                b"twenty characters or".to_vec(),
                b"less.".to_vec(),
            ]
        );
    }

    #[test]
    fn test_japanese_whole_characters() {
        let text = "失敗を繰り返すことで、成功に至る。";
        let pieces = split_text(text, 20).unwrap();
        for piece in &pieces {
            assert!(piece.len() <= 20);
        }
        assert_eq!(pieces.concat(), text);
    }
}

// =============================================================================
// PARSING
// =============================================================================

mod parsing {
    use super::*;

    #[test]
    fn test_full_line() {
        let message = Message::parse(b":nick!ident@host.example PRIVMSG #chan :hello").unwrap();
        assert_eq!(message.prefix.as_deref(), Some("nick!ident@host.example"));
        assert_eq!(message.command, "PRIVMSG");
        assert_eq!(message.params, ["#chan"]);
        assert_eq!(message.suffix.as_deref(), Some("hello"));
    }

    #[test]
    fn test_line_endings_ignored() {
        let crlf = Message::parse(b"PING :x\r\n").unwrap();
        let lf = Message::parse(b"PING :x\n").unwrap();
        let none = Message::parse(b"PING :x").unwrap();
        assert_eq!(crlf, lf);
        assert_eq!(lf, none);
    }

    #[test]
    fn test_fields_starting_with_bom_survive() {
        let message = Message::new("PRIVMSG")
            .with_param("\u{FEFF}#c")
            .with_suffix("\u{FEFF}x");
        let line = message.to_raw_line(&LineLimits::default()).unwrap();
        assert_eq!(Message::parse(line.as_bytes()).unwrap(), message);
    }

    #[test]
    fn test_privmsg_reply_target() {
        let message: Message = ":meshy!m@example.com PRIVMSG #rust :hello".parse().unwrap();
        assert_eq!(resolve_privmsg_target(&message).unwrap().channel, "#rust");

        let message: Message = ":meshy!m@example.com PRIVMSG ircwire :hello".parse().unwrap();
        assert_eq!(resolve_privmsg_target(&message).unwrap().channel, "meshy");
    }
}

// =============================================================================
// ENCODINGS
// =============================================================================

mod encodings {
    use super::*;

    #[test]
    fn test_decode_never_fails() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = decode(&bytes, &EncodingChain::new());
        assert!(text.starts_with("\0\u{1}\u{2}"));
    }

    #[test]
    fn test_utf8_round_trip() {
        for text in ["plain", "Umeå", "東京都", "ಠ_ಠ", "\u{FEFF}bom", ""] {
            assert_eq!(decode(&encode(text), &EncodingChain::new()), text);
        }
    }

    #[test]
    fn test_expected_encoding_wins() {
        let chain = EncodingChain::from_labels(["windows_1250"]).unwrap();
        assert_eq!(decode(b"Ume\xe5", &chain), "Umeĺ");
        assert_eq!(decode(b"Ume\xe5", &EncodingChain::new()), "Umeå");
    }

    #[test]
    fn test_detected_without_hint() {
        let text = decode(b"Miko\xb3aj Kopernik", &EncodingChain::new());
        assert_eq!(text, "Mikołaj Kopernik");
    }
}

// =============================================================================
// CHANNEL NAMES
// =============================================================================

mod channels {
    use super::*;

    #[test]
    fn test_reserved_first_characters() {
        for name in ["#a", "&a", "+a", "!a"] {
            assert!(is_channel(name));
        }
        for name in ["a", "@a", ":a", ""] {
            assert!(!is_channel(name));
        }
    }

    #[test]
    fn test_case_does_not_matter() {
        assert!(is_channel("#MiXeD"));
        assert!(!is_channel("#Mi,Xed"));
        assert!(!is_channel("#MI,XED"));
    }
}
