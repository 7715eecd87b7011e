//! Device State
//!
//! The single mutable record the command processor operates on. There is
//! exactly one instance, owned by the command loop and lent out by `&mut`.

use crate::types::{Channel, TxState};

/// Channel selection and PTT flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceState {
    /// Active channel preset
    channel: Channel,
    /// Transmit flag
    tx: TxState,
}

impl DeviceState {
    /// Create the power-up state (channel 1, receiving)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the active channel
    #[must_use]
    pub const fn current_channel(&self) -> Channel {
        self.channel
    }

    /// Get the TX/RX state
    #[must_use]
    pub const fn tx_state(&self) -> TxState {
        self.tx
    }

    /// Check if transmitting
    #[must_use]
    pub const fn is_transmitting(&self) -> bool {
        self.tx.is_transmitting()
    }

    /// Set channel (returns new state)
    #[must_use]
    pub const fn with_channel(self, channel: Channel) -> Self {
        Self { channel, ..self }
    }

    /// Set TX/RX state (returns new state)
    #[must_use]
    pub const fn with_tx(self, tx: TxState) -> Self {
        Self { tx, ..self }
    }

    pub(crate) fn set_channel(&mut self, channel: Channel) {
        self.channel = channel;
    }

    pub(crate) fn set_tx(&mut self, tx: TxState) {
        self.tx = tx;
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DeviceState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Device({}, {})", self.channel, self.tx);
    }
}
