//! Command verbs from RFC 2812 section 3.
//!
//! Commands are compared as received; servers send them upper-case, but
//! nothing here folds case.

// Registration
pub const NICK: &str = "NICK";
pub const PASS: &str = "PASS";
pub const QUIT: &str = "QUIT";
/// Sent when registering a new user.
pub const USER: &str = "USER";

// Channel operations
pub const INVITE: &str = "INVITE";
pub const JOIN: &str = "JOIN";
pub const KICK: &str = "KICK";
pub const LIST: &str = "LIST";
pub const MODE: &str = "MODE";
pub const NAMES: &str = "NAMES";
pub const PART: &str = "PART";
pub const TOPIC: &str = "TOPIC";

// Server queries and operator commands
pub const ADMIN: &str = "ADMIN";
pub const CONNECT: &str = "CONNECT";
pub const INFO: &str = "INFO";
pub const LINKS: &str = "LINKS";
pub const OPER: &str = "OPER";
pub const REHASH: &str = "REHASH";
pub const RESTART: &str = "RESTART";
/// Sent when registering as a server.
pub const SERVER: &str = "SERVER";
pub const SQUIT: &str = "SQUIT";
pub const STATS: &str = "STATS";
pub const SUMMON: &str = "SUMMON";
pub const TIME: &str = "TIME";
pub const TRACE: &str = "TRACE";
pub const VERSION: &str = "VERSION";
pub const WALLOPS: &str = "WALLOPS";

// Sending messages
pub const NOTICE: &str = "NOTICE";
pub const PRIVMSG: &str = "PRIVMSG";

// User queries
pub const WHO: &str = "WHO";
pub const WHOIS: &str = "WHOIS";
pub const WHOWAS: &str = "WHOWAS";

// Miscellaneous
pub const ERROR: &str = "ERROR";
pub const KILL: &str = "KILL";
pub const PING: &str = "PING";
pub const PONG: &str = "PONG";

// Optional features
pub const AWAY: &str = "AWAY";
pub const USERS: &str = "USERS";
pub const USERHOST: &str = "USERHOST";
pub const ISON: &str = "ISON";
