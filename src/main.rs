//! Radio Link Main Application
//!
//! Entry point for the STM32G474 radio link firmware.
//! Brings up the UART and PTT line, then runs the command loop forever.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::usart::{self, BufferedUart};
use embassy_stm32::{bind_interrupts, peripherals};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use radio_link::prelude::*;

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    USART1 => usart::BufferedInterruptHandler<peripherals::USART1>;
});

static UART_TX_BUF: StaticCell<[u8; UART_TX_BUFFER_SIZE]> = StaticCell::new();
static UART_RX_BUF: StaticCell<[u8; UART_RX_BUFFER_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Radio Link Firmware v{}", env!("CARGO_PKG_VERSION"));
    info!("starting...");

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // Status LED, see pins::LED_STATUS
    let led = Output::new(p.PA5, Level::Low, Speed::Low);

    // USART1: PA9 = TX, PA10 = RX
    let serial = SerialConfig::default();
    let uart = BufferedUart::new(
        p.USART1,
        Irqs,
        p.PA10, // RX
        p.PA9,  // TX
        UART_TX_BUF.init([0; UART_TX_BUFFER_SIZE]),
        UART_RX_BUF.init([0; UART_RX_BUFFER_SIZE]),
        serial.into(),
    )
    .unwrap();

    info!("USART1 initialized at {}", serial);

    // PTT output on PB0, released at power-up
    let ptt = Output::new(p.PB0, Level::Low, Speed::Low);
    let radio = PttLineRadio::new(ptt).unwrap();

    // Spawn background tasks
    spawner.spawn(heartbeat_task(led)).unwrap();

    let mut link = CommandLoop::new(uart, radio);

    info!("waiting for commands...");

    loop {
        if let Some(outcome) = link.step() {
            trace!("{} -> {}", outcome, link.state());
        }
        Timer::after(Duration::from_millis(u64::from(IDLE_DELAY_MS))).await;
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        led.set_low();
        Timer::after(Duration::from_millis(900)).await;
    }
}
