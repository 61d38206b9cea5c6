//! Line constructors for the commands a client sends most.

use crate::chunk::split_text;
use crate::command::{NICK, NOTICE, PRIVMSG, USER};
use crate::error::BuildError;
use crate::limits::LineLimits;

use super::{build, build_batch, RawLine};

/// Build `PRIVMSG` lines for `text`, one per chunk, with the default limits.
///
/// Line breaks in `text` start a new line; long lines are split at word
/// boundaries to fit what is left of the 512 bytes once the command and
/// target are accounted for.
///
/// ```
/// use ircwire::encode::privmsg;
///
/// let lines = privmsg("#channel", "Multi\r\nline\r\nmessage.").unwrap();
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[1].as_bytes(), b"PRIVMSG #channel :line\r\n");
/// ```
pub fn privmsg(target: &str, text: &str) -> Result<Vec<RawLine>, BuildError> {
    privmsg_with(target, text, &LineLimits::default())
}

/// [`privmsg`] with custom limits.
pub fn privmsg_with(
    target: &str,
    text: &str,
    limits: &LineLimits,
) -> Result<Vec<RawLine>, BuildError> {
    chunked(PRIVMSG, target, text, limits)
}

/// Build `NOTICE` lines for `text`; see [`privmsg`].
pub fn notice(target: &str, text: &str) -> Result<Vec<RawLine>, BuildError> {
    notice_with(target, text, &LineLimits::default())
}

/// [`notice`] with custom limits.
pub fn notice_with(
    target: &str,
    text: &str,
    limits: &LineLimits,
) -> Result<Vec<RawLine>, BuildError> {
    chunked(NOTICE, target, text, limits)
}

/// `NICK <nick>`
pub fn nick(nick: &str) -> Result<RawLine, BuildError> {
    build(NICK, &[nick], None)
}

/// `USER <user> 0 * :<real name>`
pub fn user(user: &str, real_name: &str) -> Result<RawLine, BuildError> {
    build(USER, &[user, "0", "*"], Some(real_name))
}

fn chunked(
    command: &str,
    target: &str,
    text: &str,
    limits: &LineLimits,
) -> Result<Vec<RawLine>, BuildError> {
    // "<command> <target> :<text>"
    let overhead = command.len() + 1 + target.len() + 2;
    let budget = limits.content_budget().saturating_sub(overhead);
    let pieces = split_text(text, budget)?;
    build_batch(command, &[target], pieces, limits)
}

/// The details a client announces when it connects.
///
/// ```
/// use ircwire::encode::Registration;
///
/// let lines = Registration::new("anick", "Real Name").lines().unwrap();
/// assert_eq!(lines[0].as_bytes(), b"USER anick 0 * :Real Name\r\n");
/// assert_eq!(lines[1].as_bytes(), b"NICK anick\r\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    /// Nickname for `NICK`.
    pub nick: String,
    /// Free text for the `USER` suffix.
    pub real_name: String,
    /// Username for `USER`; the nick when unset.
    pub user: Option<String>,
}

impl Registration {
    /// Registration with the username defaulting to the nick.
    pub fn new(nick: impl Into<String>, real_name: impl Into<String>) -> Self {
        Registration {
            nick: nick.into(),
            real_name: real_name.into(),
            user: None,
        }
    }

    /// Use a username other than the nick.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Check every field at once, reporting all missing ones together.
    pub fn validate(&self) -> Result<(), BuildError> {
        let mut missing = Vec::new();
        if self.nick.is_empty() {
            missing.push("nick");
        }
        if self.real_name.is_empty() {
            missing.push("real_name");
        }
        if self.user.as_deref() == Some("") {
            missing.push("user");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(BuildError::InvalidParameter(format!(
                "Required attribute(s) missing: {}",
                missing.join(", ")
            )))
        }
    }

    /// `USER` followed by `NICK`, the order servers expect on connect.
    pub fn lines(&self) -> Result<Vec<RawLine>, BuildError> {
        self.validate()?;
        let username = self.user.as_deref().unwrap_or(&self.nick);
        Ok(vec![user(username, &self.real_name)?, nick(&self.nick)?])
    }
}
