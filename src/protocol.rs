//! Serial Command Protocol
//!
//! Line-oriented ASCII commands from the host and the acknowledgements the
//! firmware writes back. One command per line, one response per command
//! (or none, for unrecognized input).
//!
//! | Request   | Response               |
//! |-----------|------------------------|
//! | `PTT_ON`  | `PTT_ACK`              |
//! | `PTT_OFF` | `PTT_ACK`              |
//! | `CH<nn>`  | `CH<nn>_OK` / `CH_ERR` |
//! | `PING`    | `PONG`                 |
//! | other     | (silence)              |
//!
//! `CMD_ERR` is sent when a recognized command fails inside the radio layer.

use core::fmt;

use heapless::String;

use crate::config::RESPONSE_MAX_LEN;
use crate::types::Channel;

/// Channel command prefix
const CHANNEL_PREFIX: &str = "CH";

/// Command parsed from one input line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Key the transmitter
    PttOn,
    /// Release the transmitter
    PttOff,
    /// Select a channel (not yet range-checked)
    SetChannel(i64),
    /// `CH` prefix followed by something that is not an integer
    ChannelParseError,
    /// `CH` prefix on a line too long to keep in full
    ChannelTooLong,
    /// Liveness check
    Ping,
    /// Anything else (trimmed line)
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parse a raw line
    ///
    /// Surrounding whitespace is ignored. Matching is case-sensitive and the
    /// first rule that matches wins.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let cmd = line.trim();

        match cmd {
            "PTT_ON" => Self::PttOn,
            "PTT_OFF" => Self::PttOff,
            _ if cmd.starts_with(CHANNEL_PREFIX) => {
                Self::parse_channel(&cmd[CHANNEL_PREFIX.len()..])
            }
            "PING" => Self::Ping,
            _ => Self::Unknown(cmd),
        }
    }

    /// Parse the kept prefix of a truncated line
    ///
    /// The argument of a `CH` command cannot be recovered and is rejected.
    /// Anything else is unknown, even if the prefix spells a command.
    #[must_use]
    pub fn parse_truncated(prefix: &'a str) -> Self {
        let cmd = prefix.trim();

        if cmd.starts_with(CHANNEL_PREFIX) {
            Self::ChannelTooLong
        } else {
            Self::Unknown(cmd)
        }
    }

    fn parse_channel(arg: &str) -> Self {
        // `CH 5` is accepted; `CH5X` and `CH` are not.
        match arg.trim().parse::<i64>() {
            Ok(n) => Self::SetChannel(n),
            Err(_) => Self::ChannelParseError,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Command<'_> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::PttOn => defmt::write!(f, "PttOn"),
            Self::PttOff => defmt::write!(f, "PttOff"),
            Self::SetChannel(n) => defmt::write!(f, "SetChannel({})", n),
            Self::ChannelParseError => defmt::write!(f, "ChannelParseError"),
            Self::ChannelTooLong => defmt::write!(f, "ChannelTooLong"),
            Self::Ping => defmt::write!(f, "Ping"),
            Self::Unknown(raw) => defmt::write!(f, "Unknown({})", raw),
        }
    }
}

/// Acknowledgement written back to the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// `PTT_ACK`
    PttAck,
    /// `CH<nn>_OK`, channel zero-padded to two digits
    ChannelOk(Channel),
    /// `CH_ERR`
    ChannelError,
    /// `PONG`
    Pong,
    /// `CMD_ERR`
    CommandError,
}

impl Response {
    /// Format the wire text (without line terminator)
    #[must_use]
    pub fn wire_text(&self) -> String<RESPONSE_MAX_LEN> {
        let mut buffer = String::new();
        let written = fmt::write(&mut buffer, format_args!("{}", self));
        debug_assert!(written.is_ok(), "response exceeds RESPONSE_MAX_LEN");
        buffer
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PttAck => f.write_str("PTT_ACK"),
            Self::ChannelOk(ch) => write!(f, "CH{:02}_OK", ch.as_u8()),
            Self::ChannelError => f.write_str("CH_ERR"),
            Self::Pong => f.write_str("PONG"),
            Self::CommandError => f.write_str("CMD_ERR"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Response {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::PttAck => defmt::write!(f, "PTT_ACK"),
            Self::ChannelOk(ch) => defmt::write!(f, "{}_OK", ch),
            Self::ChannelError => defmt::write!(f, "CH_ERR"),
            Self::Pong => defmt::write!(f, "PONG"),
            Self::CommandError => defmt::write!(f, "CMD_ERR"),
        }
    }
}
