use std::fmt;

use crate::error::IdentityError;

/// The sender of a message, split into its parts.
///
/// Prefixes take one of two shapes:
///
/// ```text
/// nick!ident@host     ident reported by the server
/// ~nick@host          no ident; the leading `~` is dropped
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity {
    /// Nickname, without any `~`.
    pub nick: String,
    /// Ident reply; `None` for the `~nick@host` shape.
    pub ident: Option<String>,
    /// Hostname or cloak.
    pub host: String,
}

/// Borrowed form of [`Identity`], slicing the original prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IdentityRef<'a> {
    pub nick: &'a str,
    pub ident: Option<&'a str>,
    pub host: &'a str,
}

impl<'a> IdentityRef<'a> {
    /// Split a raw prefix. Fails if there is no `@`.
    pub fn parse(raw: &'a str) -> Result<IdentityRef<'a>, IdentityError> {
        let malformed = || IdentityError::MalformedPrefix(raw.to_string());

        if let Some((nick, rest)) = raw.split_once('!') {
            let (ident, host) = rest.split_once('@').ok_or_else(malformed)?;
            Ok(IdentityRef {
                nick,
                ident: Some(ident),
                host,
            })
        } else {
            let (nick, host) = raw.split_once('@').ok_or_else(malformed)?;
            Ok(IdentityRef {
                nick: nick.trim_start_matches('~'),
                ident: None,
                host,
            })
        }
    }

    pub fn to_identity(&self) -> Identity {
        Identity {
            nick: self.nick.to_string(),
            ident: self.ident.map(str::to_string),
            host: self.host.to_string(),
        }
    }
}

/// Split a raw prefix into nick, optional ident and host.
///
/// ```
/// use ircwire::prefix::split_identity;
///
/// let id = split_identity("meshy!ident@example.com").unwrap();
/// assert_eq!(id.nick, "meshy");
/// assert_eq!(id.ident.as_deref(), Some("ident"));
///
/// let id = split_identity("~meshy@example.com").unwrap();
/// assert_eq!(id.nick, "meshy");
/// assert_eq!(id.ident, None);
///
/// assert!(split_identity("irc.example.com").is_err());
/// ```
pub fn split_identity(raw_prefix: &str) -> Result<Identity, IdentityError> {
    IdentityRef::parse(raw_prefix).map(|id| id.to_identity())
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ident {
            Some(ident) => write!(f, "{}!{}@{}", self.nick, ident, self.host),
            None => write!(f, "{}@{}", self.nick, self.host),
        }
    }
}
