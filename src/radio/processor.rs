//! Command Processor
//!
//! Applies parsed protocol commands to the [`DeviceState`] and the radio
//! collaborator. Every command yields an [`Outcome`] that keeps success,
//! validation failure and internal fault apart; the wire response is derived
//! from it.

use core::fmt;

use super::control::{RadioControl, RadioFault};
use super::state::DeviceState;
use crate::protocol::{Command, Response};
use crate::serial::RxLine;
use crate::types::{Channel, TxState};

/// Malformed or out-of-range command argument
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Channel number outside the preset range
    ChannelOutOfRange(i64),
    /// Channel argument is not an integer
    ChannelNotNumeric,
    /// Channel command was truncated by the receive buffer
    ChannelTooLong,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelOutOfRange(n) => write!(f, "channel {n} out of range"),
            Self::ChannelNotNumeric => write!(f, "channel is not a number"),
            Self::ChannelTooLong => write!(f, "channel command too long"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ValidationError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ChannelOutOfRange(n) => defmt::write!(f, "channel {} out of range", n),
            Self::ChannelNotNumeric => defmt::write!(f, "channel is not a number"),
            Self::ChannelTooLong => defmt::write!(f, "channel command too long"),
        }
    }
}

/// Unexpected failure while applying a recognized command
///
/// Sub-steps that ran before the failure are not rolled back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InternalFault(pub RadioFault);

impl fmt::Display for InternalFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal fault: {}", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for InternalFault {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "internal fault: {}", self.0);
    }
}

impl From<RadioFault> for InternalFault {
    fn from(fault: RadioFault) -> Self {
        Self(fault)
    }
}

/// Result of processing one command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Command applied
    Applied(Response),
    /// Argument rejected, state unchanged
    Rejected(ValidationError),
    /// Radio layer failed part-way through
    Fault(InternalFault),
    /// Unrecognized input, nothing sent
    Ignored,
}

impl Outcome {
    /// Response to write back, if any
    #[must_use]
    pub const fn response(&self) -> Option<Response> {
        match self {
            Self::Applied(response) => Some(*response),
            Self::Rejected(_) => Some(Response::ChannelError),
            Self::Fault(_) => Some(Response::CommandError),
            Self::Ignored => None,
        }
    }

    /// Check if the command was applied
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Outcome {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Applied(r) => defmt::write!(f, "Applied({})", r),
            Self::Rejected(e) => defmt::write!(f, "Rejected({})", e),
            Self::Fault(e) => defmt::write!(f, "Fault({})", e),
            Self::Ignored => defmt::write!(f, "Ignored"),
        }
    }
}

/// Applies commands through an injected radio collaborator
pub struct CommandProcessor<R> {
    radio: R,
}

impl<R: RadioControl> CommandProcessor<R> {
    /// Create a processor driving `radio`
    pub const fn new(radio: R) -> Self {
        Self { radio }
    }

    /// Get the radio collaborator
    pub const fn radio(&self) -> &R {
        &self.radio
    }

    /// Get the radio collaborator mutably
    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Parse and apply one input line
    pub fn handle_line(&mut self, line: &str, state: &mut DeviceState) -> Outcome {
        self.handle(Command::parse(line), line, state)
    }

    /// Parse and apply a line from the transport
    ///
    /// Truncated lines go through [`Command::parse_truncated`].
    pub fn handle_received(&mut self, line: &RxLine, state: &mut DeviceState) -> Outcome {
        let text = line.as_str();
        if line.is_truncated() {
            self.handle(Command::parse_truncated(text), text, state)
        } else {
            self.handle(Command::parse(text), text, state)
        }
    }

    fn handle(&mut self, cmd: Command<'_>, line: &str, state: &mut DeviceState) -> Outcome {
        debug!("RX: {}", line.trim());

        let outcome = self.apply(cmd, state);
        match &outcome {
            Outcome::Ignored => info!("ignoring unknown command: {}", line.trim()),
            Outcome::Rejected(e) => warn!("rejected: {}", e),
            Outcome::Fault(e) => error!("command failed: {}", e),
            Outcome::Applied(_) => {}
        }
        outcome
    }

    /// Apply a parsed command to the device state
    pub fn apply(&mut self, cmd: Command<'_>, state: &mut DeviceState) -> Outcome {
        match self.try_apply(cmd, state) {
            Ok(Some(response)) => Outcome::Applied(response),
            Ok(None) => Outcome::Ignored,
            Err(Reject::Invalid(e)) => Outcome::Rejected(e),
            Err(Reject::Fault(e)) => Outcome::Fault(e),
        }
    }

    fn try_apply(
        &mut self,
        cmd: Command<'_>,
        state: &mut DeviceState,
    ) -> Result<Option<Response>, Reject> {
        let response = match cmd {
            Command::PttOn => {
                state.set_tx(TxState::Tx);
                self.radio.enable_transmit()?;
                Response::PttAck
            }
            Command::PttOff => {
                state.set_tx(TxState::Rx);
                self.radio.disable_transmit()?;
                Response::PttAck
            }
            Command::SetChannel(n) => {
                let channel = Channel::new(n).ok_or(ValidationError::ChannelOutOfRange(n))?;
                state.set_channel(channel);
                self.radio.tune(channel)?;
                Response::ChannelOk(channel)
            }
            Command::ChannelParseError => return Err(ValidationError::ChannelNotNumeric.into()),
            Command::ChannelTooLong => return Err(ValidationError::ChannelTooLong.into()),
            Command::Ping => Response::Pong,
            Command::Unknown(_) => return Ok(None),
        };
        Ok(Some(response))
    }
}

/// Internal early-exit reasons for `try_apply`
enum Reject {
    Invalid(ValidationError),
    Fault(InternalFault),
}

impl From<ValidationError> for Reject {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

impl From<RadioFault> for Reject {
    fn from(fault: RadioFault) -> Self {
        Self::Fault(InternalFault(fault))
    }
}
