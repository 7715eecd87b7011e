//! Shared types used across the firmware
//!
//! Domain types that enforce invariants at construction time so the rest
//! of the codebase never sees an invalid value.

use core::fmt;

use crate::config::{CHANNEL_MAX, CHANNEL_MIN, DEFAULT_CHANNEL};

/// Radio channel preset with validation
///
/// Only values in `CHANNEL_MIN..=CHANNEL_MAX` can be constructed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u8);

impl Channel {
    /// Lowest channel
    pub const MIN: Self = Self(CHANNEL_MIN);

    /// Highest channel
    pub const MAX: Self = Self(CHANNEL_MAX);

    /// Create a channel, returns None if out of range
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn new(n: i64) -> Option<Self> {
        if n >= CHANNEL_MIN as i64 && n <= CHANNEL_MAX as i64 {
            Some(Self(n as u8))
        } else {
            None
        }
    }

    /// Get the channel number
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Iterate over every valid channel in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (CHANNEL_MIN..=CHANNEL_MAX).map(Self)
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self(DEFAULT_CHANNEL)
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel({})", self.0)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CH{:02}", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Channel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CH{}", self.0);
    }
}

/// Transmit/receive state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TxState {
    /// Receiving (PTT released)
    #[default]
    Rx,
    /// Transmitting (PTT keyed)
    Tx,
}

impl TxState {
    /// Check if transmitting
    #[must_use]
    pub const fn is_transmitting(self) -> bool {
        matches!(self, Self::Tx)
    }
}

impl fmt::Display for TxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rx => write!(f, "RX"),
            Self::Tx => write!(f, "TX"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TxState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Rx => defmt::write!(f, "RX"),
            Self::Tx => defmt::write!(f, "TX"),
        }
    }
}
