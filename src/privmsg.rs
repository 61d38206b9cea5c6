//! Reply-target resolution for received PRIVMSG and NOTICE lines.

use crate::chan::is_channel;
use crate::error::IdentityError;
use crate::message::Message;
use crate::prefix::IdentityRef;

/// The parts of a received PRIVMSG, borrowed from the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Privmsg<'a> {
    /// Where a reply should go: the channel, or the sender for private messages.
    pub channel: &'a str,
    /// The target as written on the wire.
    pub target: &'a str,
    /// Nickname of the sender.
    pub sender_nick: &'a str,
    /// The full prefix of the sender.
    pub raw_sender: &'a str,
    /// Message text. Falls back to the second parameter when the sender
    /// omitted the `:`, and to the empty string when there is none.
    pub body: &'a str,
}

/// Resolve the reply target of a PRIVMSG.
///
/// A message sent to a channel is answered in that channel; a message
/// sent to us directly is answered to the sender's nick.
///
/// ```
/// use ircwire::{privmsg::resolve_privmsg_target, Message};
///
/// let msg: Message = ":meshy!m@host PRIVMSG ircwire :hi".parse().unwrap();
/// let pm = resolve_privmsg_target(&msg).unwrap();
/// assert_eq!(pm.channel, "meshy");
/// assert_eq!(pm.body, "hi");
/// ```
pub fn resolve_privmsg_target(message: &Message) -> Result<Privmsg<'_>, IdentityError> {
    let target = message
        .params
        .first()
        .map(String::as_str)
        .ok_or(IdentityError::MissingTarget)?;
    let raw_sender = message
        .prefix
        .as_deref()
        .ok_or(IdentityError::MissingPrefix)?;
    let sender_nick = IdentityRef::parse(raw_sender)?.nick;

    let channel = if is_channel(target) {
        target
    } else {
        sender_nick
    };

    let body = message
        .suffix
        .as_deref()
        .or_else(|| message.params.get(1).map(String::as_str))
        .unwrap_or("");

    Ok(Privmsg {
        channel,
        target,
        sender_nick,
        raw_sender,
        body,
    })
}
