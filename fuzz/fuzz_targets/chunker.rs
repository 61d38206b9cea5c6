//! Fuzz target for text chunking.

#![no_main]

use ircwire::chunk::split_text;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, u8)| {
    let (text, budget) = input;
    let budget = usize::from(budget);

    if let Ok(pieces) = split_text(text, budget) {
        for piece in pieces {
            assert!(!piece.is_empty());
            assert!(piece.len() <= budget);
            assert!(!piece.contains(['\r', '\n']));
        }
    }
});
