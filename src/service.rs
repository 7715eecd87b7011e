//! Command Loop
//!
//! Composes the serial transport, the command processor and the single
//! [`DeviceState`]. Each [`CommandLoop::step`] performs at most one poll and
//! at most one parse/apply/respond cycle; nothing it does can end the loop.
//!
//! ```text
//!   poll() ──line──▶ handle_received() ──outcome──▶ send(response)
//!     ▲                                                  │
//!     └────────────────── idle delay ◀───────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use embedded_io::{Read, ReadReady, Write};

use crate::config::IDLE_DELAY_MS;
use crate::radio::control::RadioControl;
use crate::radio::processor::{CommandProcessor, Outcome};
use crate::radio::state::DeviceState;
use crate::serial::SerialTransport;

/// Serial command loop
pub struct CommandLoop<P, R> {
    transport: SerialTransport<P>,
    processor: CommandProcessor<R>,
    state: DeviceState,
}

impl<P, R> CommandLoop<P, R>
where
    P: Read + ReadReady + Write,
    R: RadioControl,
{
    /// Create a loop in the power-up state
    pub fn new(port: P, radio: R) -> Self {
        Self::with_state(port, radio, DeviceState::new())
    }

    /// Create a loop starting from a given state
    pub fn with_state(port: P, radio: R, state: DeviceState) -> Self {
        Self {
            transport: SerialTransport::new(port),
            processor: CommandProcessor::new(radio),
            state,
        }
    }

    /// Run one iteration
    ///
    /// Returns the outcome of the command processed this iteration, or
    /// `None` if no complete line was available.
    pub fn step(&mut self) -> Option<Outcome> {
        let line = self.transport.poll()?;
        let outcome = self.processor.handle_received(&line, &mut self.state);

        if let Some(response) = outcome.response() {
            let text = response.wire_text();
            if let Err(e) = self.transport.send(&text) {
                warn!("response {} not sent: {}", text.as_str(), e);
            }
        }
        Some(outcome)
    }

    /// Run a bounded number of iterations with the idle delay between them
    ///
    /// Returns the number of commands processed.
    pub fn run_for<D: DelayNs>(&mut self, iterations: usize, delay: &mut D) -> usize {
        let mut processed = 0;
        for _ in 0..iterations {
            if self.step().is_some() {
                processed += 1;
            }
            delay.delay_ms(IDLE_DELAY_MS);
        }
        processed
    }

    /// Get the device state
    pub const fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Get the serial transport
    pub const fn transport(&self) -> &SerialTransport<P> {
        &self.transport
    }

    /// Get the serial transport mutably
    pub fn transport_mut(&mut self) -> &mut SerialTransport<P> {
        &mut self.transport
    }

    /// Get the command processor
    pub const fn processor(&self) -> &CommandProcessor<R> {
        &self.processor
    }

    /// Get the command processor mutably
    pub fn processor_mut(&mut self) -> &mut CommandProcessor<R> {
        &mut self.processor
    }
}
