//! Radio Link Firmware Library
//!
//! Serial command loop for a microcontroller radio interface. A host sends
//! newline-terminated ASCII commands (`PTT_ON`, `PTT_OFF`, `CH<nn>`, `PING`)
//! and the firmware keys the transmitter, selects a channel preset, and
//! acknowledges each command on the same link.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       COMMAND LOOP                           │
//! │         poll ─▶ parse ─▶ apply ─▶ respond ─▶ idle            │
//! ├─────────────────────────────────────────────────────────────┤
//! │   PROTOCOL            │   RADIO                              │
//! │   Command / Response  │   DeviceState  │  CommandProcessor   │
//! ├─────────────────────────────────────────────────────────────┤
//! │   SERIAL TRANSPORT    │   RADIO CONTROL                      │
//! │   LineBuffer / Poller │   PTT line  │  tuner (stub)          │
//! ├─────────────────────────────────────────────────────────────┤
//! │        embedded-io / embedded-hal  ·  embassy-stm32          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **No ambient state**: the device state is a value lent by `&mut`
//! - **Closed command set**: parsing yields an enum that is matched exhaustively
//! - **Failures stay local**: transport errors, bad arguments and radio faults
//!   degrade a single response and never stop the loop
//! - **Hardware behind traits**: the serial port and radio are injected, so
//!   all protocol logic runs on the host under test

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

#[macro_use]
mod fmt;

/// Serial Transport
///
/// Line framing and lossy decoding over an `embedded-io` port.
pub mod serial;

/// Communication Protocol
///
/// Command parsing and response formatting.
pub mod protocol;

/// Radio Control Logic
///
/// Device state, radio collaborator and command processor.
pub mod radio;

/// Command Loop
///
/// Ties transport, processor and state together.
pub mod service;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::protocol::{Command, Response};
    pub use crate::radio::control::{NullRadio, PttLineRadio, RadioControl, RadioFault};
    pub use crate::radio::processor::{CommandProcessor, InternalFault, Outcome, ValidationError};
    pub use crate::radio::state::DeviceState;
    pub use crate::serial::{RxLine, SerialTransport, TransportError};
    pub use crate::service::CommandLoop;
    pub use crate::types::*;

    // Embassy
    #[cfg(feature = "embedded")]
    pub use embassy_time::{Duration, Instant, Timer};

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
