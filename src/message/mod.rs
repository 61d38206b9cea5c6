//! The IRC message model and line parser.

mod borrowed;
mod nom_parser;
mod types;

pub use self::borrowed::MessageRef;
#[cfg(feature = "tokio")]
pub(crate) use self::borrowed::strip_line_ending;
pub use self::nom_parser::ParsedMessage;
pub use self::types::Message;
