//! UART serial communication abstractions
//!
//! Provides polled byte-level traits that a chip-specific UART, a test
//! double, or an [`IoTransport`](crate::io::IoTransport) adapter implement.

/// Errors reported by a transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The transmitter could not take the byte right now
    Rejected,
    /// The underlying peripheral reported an error
    Io(embedded_io::ErrorKind),
}

impl From<embedded_io::ErrorKind> for TransportError {
    fn from(kind: embedded_io::ErrorKind) -> Self {
        Self::Io(kind)
    }
}

/// UART receiver
///
/// Polls for a single received byte.
pub trait ByteRx {
    /// Take one byte if one is waiting
    ///
    /// Never waits. `None` means "nothing this cycle", not an error.
    fn try_receive_byte(&mut self) -> Option<u8>;
}

/// UART transmitter
///
/// Offers a single byte to the transmitter.
pub trait ByteTx {
    /// Offer one byte to the transmitter
    ///
    /// Returns `Err(TransportError::Rejected)` when the byte was not taken.
    fn try_send_byte(&mut self, byte: u8) -> Result<(), TransportError>;

    /// Offer every byte of `data` in order, stopping at the first rejection
    ///
    /// Returns the number of bytes accepted.
    fn send_bytes(&mut self, data: &[u8]) -> usize {
        let mut sent = 0;
        for &byte in data {
            if self.try_send_byte(byte).is_err() {
                break;
            }
            sent += 1;
        }
        sent
    }
}

/// Combined UART interface
///
/// For UARTs that provide both TX and RX on a single peripheral.
pub trait ByteTransport: ByteTx + ByteRx {}

// Blanket implementation
impl<T: ByteTx + ByteRx> ByteTransport for T {}

impl<T: ByteRx + ?Sized> ByteRx for &mut T {
    fn try_receive_byte(&mut self) -> Option<u8> {
        (**self).try_receive_byte()
    }
}

impl<T: ByteTx + ?Sized> ByteTx for &mut T {
    fn try_send_byte(&mut self, byte: u8) -> Result<(), TransportError> {
        (**self).try_send_byte(byte)
    }
}

/// UART configuration
///
/// Line settings established once at startup. The bridge itself never
/// reads them; they are applied by the board layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
