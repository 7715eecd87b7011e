//! Line Accumulation
//!
//! Collects received bytes until a line terminator arrives and decodes the
//! line as text.

use heapless::String;

use crate::config::{LINE_BUFFER_SIZE, LINE_TERMINATOR};

/// Decoded command line
pub type Line = String<LINE_BUFFER_SIZE>;

/// Decode bytes as UTF-8, dropping invalid sequences
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> Line {
    let mut line = Line::new();
    for chunk in bytes.utf8_chunks() {
        if line.push_str(chunk.valid()).is_err() {
            break;
        }
    }
    line
}

/// Line handed up by the transport
///
/// A truncated line kept only its first [`LINE_BUFFER_SIZE`] bytes; the rest
/// was dropped before the terminator arrived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RxLine {
    text: Line,
    truncated: bool,
}

impl RxLine {
    /// Wrap a line that arrived in full
    #[must_use]
    pub fn complete(text: Line) -> Self {
        Self {
            text,
            truncated: false,
        }
    }

    /// Wrap the kept prefix of an over-long line
    #[must_use]
    pub fn truncated(prefix: Line) -> Self {
        Self {
            text: prefix,
            truncated: true,
        }
    }

    /// Get the decoded text
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Check if content was dropped from this line
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Fixed-capacity line accumulator
///
/// Bytes of an unterminated line are kept across calls. Past
/// [`LINE_BUFFER_SIZE`] bytes further input is dropped until the terminator,
/// and the line is handed up marked as truncated. Dropped ASCII whitespace
/// does not count, since commands are trimmed before parsing.
pub struct LineBuffer {
    buffer: [u8; LINE_BUFFER_SIZE],
    len: usize,
    overflowed: bool,
}

impl LineBuffer {
    /// Create an empty line buffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: [0; LINE_BUFFER_SIZE],
            len: 0,
            overflowed: false,
        }
    }

    /// Feed one byte
    ///
    /// Returns the decoded line (terminator stripped) once a terminator is
    /// seen.
    pub fn push(&mut self, byte: u8) -> Option<RxLine> {
        if byte == LINE_TERMINATOR {
            let text = decode_lossy(&self.buffer[..self.len]);
            let line = if self.overflowed {
                warn!("line longer than {} bytes truncated", LINE_BUFFER_SIZE);
                RxLine::truncated(text)
            } else {
                RxLine::complete(text)
            };
            self.clear();
            return Some(line);
        }

        if self.len < LINE_BUFFER_SIZE {
            self.buffer[self.len] = byte;
            self.len += 1;
        } else if !byte.is_ascii_whitespace() {
            self.overflowed = true;
        }
        None
    }

    /// Discard any partial line
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflowed = false;
    }

    /// Get number of buffered bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the current line has overflowed
    #[must_use]
    pub const fn is_overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
