//! Board UART glue
//!
//! Maps the portable line settings onto the RP2040 UART peripheral and
//! adapts its buffered TX half for non-blocking use.

use defmt::*;
use embassy_rp::uart::{self, BufferedUartTx};
use embedded_io::{ErrorType, Write, WriteReady};

use uartbridge_hal::uart::{DataBits, Parity, StopBits};
use uartbridge_hal::UartConfig;

/// Build the peripheral config for `line`
///
/// The PL011 has no 9-bit mode; such a request runs with 8 data bits.
pub fn uart_config(line: &UartConfig) -> uart::Config {
    let mut config = uart::Config::default();
    config.baudrate = line.baudrate;
    config.data_bits = match line.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
        DataBits::Nine => {
            warn!("9 data bits unsupported, using 8");
            uart::DataBits::DataBits8
        }
    };
    config.parity = match line.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    config.stop_bits = match line.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    config
}

/// Buffered TX half that reports when a write will not wait
///
/// `BufferedUartTx::write` spins while its ring is full. An idle UART
/// has drained that ring, so a single byte written then is taken at once.
pub struct ReadyTx(pub BufferedUartTx);

impl ErrorType for ReadyTx {
    type Error = <BufferedUartTx as ErrorType>::Error;
}

impl WriteReady for ReadyTx {
    fn write_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.busy())
    }
}

impl Write for ReadyTx {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.0.blocking_write(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.blocking_flush()
    }
}
