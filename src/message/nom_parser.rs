//! Nom-based IRC line parser.
//!
//! Works on raw bytes: every delimiter in the IRC grammar is ASCII, so
//! fields can be split before anyone decides which text encoding the
//! sender used.

use nom::{
    bytes::complete::{take_till1, take_while},
    character::complete::char,
    combinator::opt,
    error::{context, VerboseError},
    sequence::preceded,
    IResult,
};

type ParseResult<'a, O> = IResult<&'a [u8], O, VerboseError<&'a [u8]>>;

/// Parse message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &[u8]) -> ParseResult<'_, &[u8]> {
    context(
        "parsing message prefix",
        preceded(char(':'), take_till1(|b: u8| b == b' ')),
    )(input)
}

fn spaces(input: &[u8]) -> ParseResult<'_, &[u8]> {
    take_while(|b: u8| b == b' ')(input)
}

/// A single space-free token: the command or a middle parameter.
fn token(input: &[u8]) -> ParseResult<'_, &[u8]> {
    take_till1(|b: u8| b == b' ')(input)
}

/// Parse one IRC line (line ending already removed) into its components.
///
/// ```text
/// [:prefix] <command> [params...] [:suffix]
/// ```
///
/// Runs of spaces between fields are treated as one separator. The suffix
/// is everything after the first parameter-position `:`, spaces included.
pub fn parse_message(input: &[u8]) -> ParseResult<'_, ParsedMessage<'_>> {
    let (input, prefix) = context("parsing optional prefix", opt(parse_prefix))(input)?;
    let (input, _) = spaces(input)?;

    let (input, command) = context("parsing required command", token)(input)?;

    let mut params = Vec::new();
    let mut suffix = None;
    let mut rest = input;

    loop {
        let (after_spaces, _) = spaces(rest)?;
        rest = after_spaces;

        match rest.first() {
            None => break,
            Some(b':') => {
                suffix = Some(&rest[1..]);
                rest = &rest[rest.len()..];
                break;
            }
            Some(_) => {
                let (after_param, param) = token(rest)?;
                params.push(param);
                rest = after_param;
            }
        }
    }

    Ok((
        rest,
        ParsedMessage {
            prefix,
            command,
            params,
            suffix,
        },
    ))
}

/// A parsed IRC line holding slices of the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    /// Prefix without the leading `:`.
    pub prefix: Option<&'a [u8]>,
    /// The command or numeric.
    pub command: &'a [u8],
    /// Middle parameters, in order.
    pub params: Vec<&'a [u8]>,
    /// Trailing parameter without the leading `:`.
    pub suffix: Option<&'a [u8]>,
}
