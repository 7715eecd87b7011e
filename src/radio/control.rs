//! Radio Hardware Control
//!
//! The command processor drives the radio through [`RadioControl`] and never
//! depends on a concrete implementation. Tuning hardware is not modelled
//! here; [`NullRadio`] and [`PttLineRadio`] only log channel changes.

use core::fmt;

use embedded_hal::digital::OutputPin;

use crate::types::Channel;

/// Failure reported by a radio collaborator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioFault {
    /// PTT line could not be driven
    Ptt,
    /// Channel could not be tuned
    Tuner,
}

impl fmt::Display for RadioFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ptt => write!(f, "PTT line fault"),
            Self::Tuner => write!(f, "tuner fault"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RadioFault {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Ptt => defmt::write!(f, "PTT line fault"),
            Self::Tuner => defmt::write!(f, "tuner fault"),
        }
    }
}

/// Radio hardware actions invoked by the command processor
pub trait RadioControl {
    /// Key the transmitter
    fn enable_transmit(&mut self) -> Result<(), RadioFault>;

    /// Release the transmitter
    fn disable_transmit(&mut self) -> Result<(), RadioFault>;

    /// Tune to a channel preset
    fn tune(&mut self, channel: Channel) -> Result<(), RadioFault>;
}

impl<T: RadioControl + ?Sized> RadioControl for &mut T {
    fn enable_transmit(&mut self) -> Result<(), RadioFault> {
        (**self).enable_transmit()
    }

    fn disable_transmit(&mut self) -> Result<(), RadioFault> {
        (**self).disable_transmit()
    }

    fn tune(&mut self, channel: Channel) -> Result<(), RadioFault> {
        (**self).tune(channel)
    }
}

/// Radio with no hardware attached
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRadio;

impl RadioControl for NullRadio {
    fn enable_transmit(&mut self) -> Result<(), RadioFault> {
        trace!("radio: transmit enable (no hardware)");
        Ok(())
    }

    fn disable_transmit(&mut self) -> Result<(), RadioFault> {
        trace!("radio: transmit disable (no hardware)");
        Ok(())
    }

    fn tune(&mut self, channel: Channel) -> Result<(), RadioFault> {
        trace!("radio: tune {} (no hardware)", channel);
        Ok(())
    }
}

/// Radio keyed through a single PTT output line (active high)
pub struct PttLineRadio<P> {
    ptt: P,
    keyed: bool,
}

impl<P: OutputPin> PttLineRadio<P> {
    /// Wrap a PTT output pin
    ///
    /// The pin is driven low so the radio starts out receiving.
    pub fn new(mut ptt: P) -> Result<Self, RadioFault> {
        ptt.set_low().map_err(|_| RadioFault::Ptt)?;
        Ok(Self { ptt, keyed: false })
    }

    /// Check if the PTT line is currently driven high
    #[must_use]
    pub const fn is_keyed(&self) -> bool {
        self.keyed
    }

    /// Get the underlying pin mutably
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.ptt
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.ptt
    }
}

impl<P: OutputPin> RadioControl for PttLineRadio<P> {
    fn enable_transmit(&mut self) -> Result<(), RadioFault> {
        self.ptt.set_high().map_err(|_| RadioFault::Ptt)?;
        self.keyed = true;
        Ok(())
    }

    fn disable_transmit(&mut self) -> Result<(), RadioFault> {
        self.ptt.set_low().map_err(|_| RadioFault::Ptt)?;
        self.keyed = false;
        Ok(())
    }

    fn tune(&mut self, channel: Channel) -> Result<(), RadioFault> {
        // No synthesizer on this board; the host tunes the radio itself.
        debug!("radio: channel {} selected", channel);
        Ok(())
    }
}
