//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the radio link firmware.
//! Serial parameters, pin mappings, buffer sizes and protocol limits are
//! centralized here.

/// Serial link baud rate (matches the host-side USB serial adapter)
pub const SERIAL_BAUD_RATE: u32 = 9_600;

/// Line terminator for both requests and responses
pub const LINE_TERMINATOR: u8 = b'\n';

/// Receive line buffer size in bytes, excluding the terminator
///
/// Longer lines are truncated to this length and flagged.
pub const LINE_BUFFER_SIZE: usize = 64;

/// Maximum formatted response length, excluding the terminator
pub const RESPONSE_MAX_LEN: usize = 16;

/// Interrupt-driven UART receive ring size
pub const UART_RX_BUFFER_SIZE: usize = 128;

/// Interrupt-driven UART transmit ring size
pub const UART_TX_BUFFER_SIZE: usize = 64;

/// Idle delay between loop iterations in milliseconds
pub const IDLE_DELAY_MS: u32 = 10;

/// Lowest selectable channel
pub const CHANNEL_MIN: u8 = 1;

/// Highest selectable channel
pub const CHANNEL_MAX: u8 = 16;

/// Channel selected at power-up
pub const DEFAULT_CHANNEL: u8 = CHANNEL_MIN;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Status LED (directly on MCU)
    pub const LED_STATUS: &str = "PA5";

    /// USART1 TX (to host)
    pub const UART_TX: &str = "PA9";

    /// USART1 RX (from host)
    pub const UART_RX: &str = "PA10";

    /// PTT output to the radio (active high)
    pub const PTT_OUT: &str = "PB0";
}

/// Serial line coding (baud rate, framing)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerialConfig {
    /// Baud rate
    pub baud_rate: u32,
    /// Data bits
    pub data_bits: u8,
    /// Stop bits
    pub stop_bits: StopBits,
    /// Parity
    pub parity: Parity,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: SERIAL_BAUD_RATE,
            data_bits: 8,
            stop_bits: StopBits::One,
            parity: Parity::None,
        }
    }
}

#[cfg(feature = "embedded")]
impl From<SerialConfig> for embassy_stm32::usart::Config {
    fn from(serial: SerialConfig) -> Self {
        use embassy_stm32::usart;

        let mut config = usart::Config::default();
        config.baudrate = serial.baud_rate;
        config.data_bits = usart::DataBits::DataBits8;
        config.stop_bits = match serial.stop_bits {
            StopBits::One => usart::StopBits::STOP1,
            StopBits::Two => usart::StopBits::STOP2,
        };
        config.parity = match serial.parity {
            Parity::None => usart::Parity::ParityNone,
            Parity::Even => usart::Parity::ParityEven,
            Parity::Odd => usart::Parity::ParityOdd,
        };
        config
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SerialConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} baud", self.baud_rate);
    }
}

/// Stop bits configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StopBits {
    /// One stop bit
    #[default]
    One,
    /// Two stop bits
    Two,
}

/// Parity configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parity {
    /// No parity
    #[default]
    None,
    /// Odd parity
    Odd,
    /// Even parity
    Even,
}
