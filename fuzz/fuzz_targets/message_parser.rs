//! Fuzz target for IRC line parsing.
//!
//! Arbitrary bytes go straight to the parser: undecodable input is the
//! normal case on IRC, not an edge case.

#![no_main]

use ircwire::{LineLimits, Message};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(message) = Message::parse(data) else {
        return;
    };

    // Anything parsed either rebuilds into a valid line or is rejected
    // with an error, never a panic.
    if let Ok(line) = message.to_raw_line(&LineLimits::default()) {
        assert!(ircwire::validate_line(line.as_bytes(), &LineLimits::default()).is_ok());
    }
});
