//! Shared test doubles for the host test suites.

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_io::{ErrorKind, ErrorType, Read, ReadReady, Write};
use radio_link::radio::control::{RadioControl, RadioFault};
use radio_link::types::Channel;

// ============================================================================
// Serial Port
// ============================================================================

/// Scripted serial port with injectable failures
#[derive(Debug, Default)]
pub struct MockPort {
    /// Bytes waiting to be read
    pub rx: VecDeque<u8>,
    /// Bytes written by the firmware
    pub tx: Vec<u8>,
    /// Number of upcoming `read_ready` calls that fail
    pub ready_errors: usize,
    /// Number of upcoming `read` calls that fail
    pub read_errors: usize,
    /// Number of upcoming `write` calls that fail
    pub write_errors: usize,
}

impl MockPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw bytes for reception
    pub fn feed(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Queue a line (terminator appended)
    pub fn feed_line(&mut self, line: &str) {
        self.feed(line.as_bytes());
        self.feed(b"\n");
    }

    /// Written output split into lines
    pub fn sent_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.tx)
            .split_terminator('\n')
            .map(str::to_owned)
            .collect()
    }

    /// Drain written output as lines
    pub fn take_sent(&mut self) -> Vec<String> {
        let lines = self.sent_lines();
        self.tx.clear();
        lines
    }
}

impl ErrorType for MockPort {
    type Error = ErrorKind;
}

impl ReadReady for MockPort {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        if self.ready_errors > 0 {
            self.ready_errors -= 1;
            return Err(ErrorKind::Other);
        }
        Ok(!self.rx.is_empty())
    }
}

impl Read for MockPort {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.read_errors > 0 {
            self.read_errors -= 1;
            return Err(ErrorKind::InvalidData);
        }
        let n = buf.len().min(self.rx.len());
        for (slot, byte) in buf.iter_mut().zip(self.rx.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl Write for MockPort {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.write_errors > 0 {
            self.write_errors -= 1;
            return Err(ErrorKind::BrokenPipe);
        }
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ============================================================================
// Radio
// ============================================================================

/// Collaborator call as seen by the radio
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioCall {
    EnableTransmit,
    DisableTransmit,
    Tune(u8),
}

/// Radio that records every call and can be told to fail
#[derive(Debug, Default)]
pub struct RecordingRadio {
    pub calls: Vec<RadioCall>,
    pub fail_ptt: bool,
    pub fail_tune: bool,
}

impl RecordingRadio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_ptt() -> Self {
        Self {
            fail_ptt: true,
            ..Self::default()
        }
    }

    pub fn failing_tune() -> Self {
        Self {
            fail_tune: true,
            ..Self::default()
        }
    }
}

impl RadioControl for RecordingRadio {
    fn enable_transmit(&mut self) -> Result<(), RadioFault> {
        self.calls.push(RadioCall::EnableTransmit);
        if self.fail_ptt {
            Err(RadioFault::Ptt)
        } else {
            Ok(())
        }
    }

    fn disable_transmit(&mut self) -> Result<(), RadioFault> {
        self.calls.push(RadioCall::DisableTransmit);
        if self.fail_ptt {
            Err(RadioFault::Ptt)
        } else {
            Ok(())
        }
    }

    fn tune(&mut self, channel: Channel) -> Result<(), RadioFault> {
        self.calls.push(RadioCall::Tune(channel.as_u8()));
        if self.fail_tune {
            Err(RadioFault::Tuner)
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// GPIO and Delay
// ============================================================================

/// Output pin that records its level
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    pub writes: usize,
    pub fail: bool,
}

impl digital::ErrorType for MockPin {
    type Error = digital::ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(digital::ErrorKind::Other);
        }
        self.high = false;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(digital::ErrorKind::Other);
        }
        self.high = true;
        self.writes += 1;
        Ok(())
    }
}

/// Delay that records requested milliseconds instead of sleeping
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub delays_ms: Vec<u32>,
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}
