//! Serial Transport
//!
//! Line framing over a byte-oriented serial port. The port is anything that
//! implements the `embedded-io` blocking traits plus `ReadReady`, so the same
//! code runs against the STM32 buffered UART and against host test doubles.

pub mod line;
pub mod transport;

pub use line::{decode_lossy, LineBuffer, RxLine};
pub use transport::{SerialTransport, TransportError};
