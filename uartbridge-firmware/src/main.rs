//! UART bridge test console firmware
//!
//! Runs the operator test console on UART0 of an RP2040 board. All console
//! traffic passes through the buffered XON/XOFF bridge.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use uartbridge_console::ConsoleConfig;
use uartbridge_hal::{IoTransport, UartConfig};

mod board;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Hardware FIFO backing buffers; the bridge rings sit above these
const UART_BUF_SIZE: usize = 256;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("UART bridge firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let line = UartConfig::default();
    let console_config = ConsoleConfig::default();
    info!("Line settings: {:?}", line);

    let tx_buf = TX_BUF.init([0u8; UART_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, board::uart_config(&line));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART0 initialized");

    let transport = IoTransport::new(rx, board::ReadyTx(tx));
    if let Err(e) = spawner.spawn(tasks::console_task(transport, line, console_config)) {
        error!("Console task not spawned: {:?}", e);
        loop {
            cortex_m::asm::wfi();
        }
    }

    info!("Console task spawned, firmware running");
}

