//! Integration tests for message parsing and serialization
//!
//! These tests verify that messages can be parsed from lines and then
//! built back into lines that parse to equal messages. Byte-identical
//! output is not required: `PRIVMSG #c word` and `PRIVMSG #c :word` carry
//! the same fields in different slots and are both legal.

use ircwire::{LineLimits, Message};

fn round_trip(original: &str) {
    let message: Message = original.parse().expect("Failed to parse message");
    let line = message
        .to_raw_line(&LineLimits::default())
        .expect("Failed to build message");

    let reparsed = Message::parse(line.as_bytes()).expect("Failed to reparse message");
    assert_eq!(message, reparsed);
}

#[test]
fn test_message_round_trip_simple() {
    round_trip("PING :irc.example.com");
}

#[test]
fn test_message_round_trip_with_prefix() {
    round_trip(":nick!user@host PRIVMSG #channel :Hello, world!");
}

#[test]
fn test_message_round_trip_numeric_response() {
    round_trip(":server 001 nickname :Welcome to the IRC Network");
}

#[test]
fn test_message_round_trip_many_params() {
    round_trip(":irc.example.com 005 meshy CHANTYPES=# NICKLEN=30 PREFIX=(ov)@+ :are supported");
}

#[test]
fn test_message_round_trip_empty_suffix() {
    round_trip("TOPIC #channel :");
}

#[test]
fn test_message_round_trip_suffix_with_colons() {
    round_trip("PRIVMSG #channel :: look :: colons ::");
}

#[test]
fn test_message_round_trip_no_suffix() {
    round_trip("MODE #channel +o meshy");
}

#[test]
fn test_display_matches_wire_content() {
    let message: Message = ":a!b@c KICK #chan victim :bye now".parse().unwrap();
    let line = message.to_raw_line(&LineLimits::default()).unwrap();
    assert_eq!(message.to_string().as_bytes(), line.content());
}

#[test]
fn test_suffix_and_trailing_param_parse_differently() {
    let bare: Message = "PRIVMSG #c word".parse().unwrap();
    let colon: Message = "PRIVMSG #c :word".parse().unwrap();

    assert_eq!(bare.params, ["#c", "word"]);
    assert_eq!(bare.suffix, None);
    assert_eq!(colon.params, ["#c"]);
    assert_eq!(colon.suffix.as_deref(), Some("word"));
}

#[test]
fn test_round_trip_legacy_encoding() {
    let message = Message::parse(b":srv NOTICE * :Ume\xe5").unwrap();
    assert_eq!(message.suffix.as_deref(), Some("Umeå"));

    // Rebuilt lines are always UTF-8.
    let line = message.to_raw_line(&LineLimits::default()).unwrap();
    assert_eq!(line.as_bytes(), ":srv NOTICE * :Umeå\r\n".as_bytes());
    assert_eq!(Message::parse(line.as_bytes()).unwrap(), message);
}
