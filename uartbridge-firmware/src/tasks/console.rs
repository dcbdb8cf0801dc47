//! Operator console task
//!
//! Owns the bridge and UART0 and runs the test menu forever.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::Delay;

use uartbridge_console::{Console, ConsoleConfig, ConsoleError, MenuOutcome};
use uartbridge_core::DEFAULT_CAPACITY;
use uartbridge_hal::{IoTransport, UartConfig};

use crate::board::ReadyTx;

/// UART0 seen as a byte transport
pub type BoardTransport = IoTransport<BufferedUartRx, ReadyTx>;

/// Console task - banner once, then the menu loop
///
/// The console waits through the blocking `embassy_time::Delay` and never
/// awaits, so this task holds the executor for good. It is the only task;
/// any task added later needs its own executor or an async console loop.
#[embassy_executor::task]
pub async fn console_task(transport: BoardTransport, line: UartConfig, config: ConsoleConfig) {
    info!("Console task started");

    let mut console: Console<_, _, DEFAULT_CAPACITY> = Console::new(transport, Delay, config);
    info!(
        "Bridge ready: {} bytes per direction, flow control {}",
        console.bridge().capacity(),
        console.bridge().flow_control_enabled()
    );

    if let Err(e) = console.start(&line) {
        warn!("Banner not sent: {:?}", e);
    }

    loop {
        match console.run_once() {
            Ok(MenuOutcome::TimedOut) => {
                trace!("Menu timeout, stats {:?}", console.statistics());
            }
            Ok(MenuOutcome::Invalid(key)) => {
                debug!("Invalid menu key {=u8:#x}", key);
            }
            Ok(MenuOutcome::Completed(command)) => {
                info!("{:?} finished, stats {:?}", command, console.statistics());
            }
            Err(ConsoleError::IdleTimeout) => {
                info!("Session idle, back to menu");
            }
            Err(ConsoleError::FlushTimeout) => {
                warn!(
                    "Output stalled with {} bytes pending, resetting bridge",
                    console.bridge().tx_pending()
                );
                console.bridge_mut().reset();
            }
        }
    }
}
