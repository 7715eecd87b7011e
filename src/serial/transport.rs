//! Transport Poller
//!
//! Non-blocking line reception and line-terminated transmission. Read
//! failures are logged and reported as "no line"; write failures are
//! returned to the caller.

use core::fmt;

use embedded_io::{Error as _, ErrorKind, Read, ReadReady, Write};

use super::line::{LineBuffer, RxLine};
use crate::config::LINE_TERMINATOR;

/// Failure at the serial boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportError {
    /// Receive side failed
    Read(ErrorKind),
    /// Transmit side failed
    Write(ErrorKind),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(kind) => write!(f, "serial read failed: {kind:?}"),
            Self::Write(kind) => write!(f, "serial write failed: {kind:?}"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TransportError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Read(kind) => defmt::write!(f, "serial read failed: {}", kind),
            Self::Write(kind) => defmt::write!(f, "serial write failed: {}", kind),
        }
    }
}

/// Line-framed serial link
pub struct SerialTransport<P> {
    port: P,
    line: LineBuffer,
}

impl<P> SerialTransport<P>
where
    P: Read + ReadReady + Write,
{
    /// Wrap a serial port
    pub const fn new(port: P) -> Self {
        Self {
            port,
            line: LineBuffer::new(),
        }
    }

    /// Poll for a complete line
    ///
    /// Drains bytes the port already holds and returns as soon as a line is
    /// complete. Returns `None` without waiting when no full line is
    /// available or the port reports an error.
    pub fn poll(&mut self) -> Option<RxLine> {
        loop {
            match self.port.read_ready() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    warn!("{}", TransportError::Read(e.kind()));
                    return None;
                }
            }

            let mut byte = [0u8; 1];
            match self.port.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(line) = self.line.push(byte[0]) {
                        return Some(line);
                    }
                }
                Err(e) => {
                    warn!("{}", TransportError::Read(e.kind()));
                    return None;
                }
            }
        }
    }

    /// Send one line, appending the terminator
    pub fn send(&mut self, text: &str) -> Result<(), TransportError> {
        self.port
            .write_all(text.as_bytes())
            .and_then(|()| self.port.write_all(&[LINE_TERMINATOR]))
            .and_then(|()| self.port.flush())
            .map_err(|e| TransportError::Write(e.kind()))
    }

    /// Get the partial line buffer
    pub const fn pending(&self) -> &LineBuffer {
        &self.line
    }

    /// Get the underlying port
    pub const fn port(&self) -> &P {
        &self.port
    }

    /// Get the underlying port mutably
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Release the underlying port
    pub fn into_inner(self) -> P {
        self.port
    }
}
