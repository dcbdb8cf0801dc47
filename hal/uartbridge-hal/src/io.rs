//! `embedded-io` adapter
//!
//! Wraps a buffered UART half pair so it can be polled byte by byte.
//! Both halves must report readiness: `read` and `write` are only called
//! when they will not wait, so a bridge cycle never blocks.

use embedded_io::{Error as _, ErrorKind, Read, ReadReady, Write, WriteReady};

use crate::uart::{ByteRx, ByteTx, TransportError};

/// Byte transport over an `embedded-io` reader and writer
pub struct IoTransport<R, W> {
    rx: R,
    tx: W,
    read_errors: u32,
}

impl<R, W> IoTransport<R, W> {
    /// Create a transport from the receive and transmit halves
    pub fn new(rx: R, tx: W) -> Self {
        Self {
            rx,
            tx,
            read_errors: 0,
        }
    }

    /// Number of receive errors swallowed since creation
    pub fn read_errors(&self) -> u32 {
        self.read_errors
    }

    /// Give back the wrapped halves
    pub fn into_parts(self) -> (R, W) {
        (self.rx, self.tx)
    }

    fn note_read_error(&mut self, _kind: ErrorKind) {
        self.read_errors = self.read_errors.saturating_add(1);
        #[cfg(feature = "defmt")]
        defmt::warn!("UART read error: {:?}", _kind);
    }
}

impl<R: Read + ReadReady, W> ByteRx for IoTransport<R, W> {
    fn try_receive_byte(&mut self) -> Option<u8> {
        match self.rx.read_ready() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                self.note_read_error(e.kind());
                return None;
            }
        }

        let mut buf = [0u8; 1];
        match self.rx.read(&mut buf) {
            Ok(1) => Some(buf[0]),
            Ok(_) => None,
            Err(e) => {
                self.note_read_error(e.kind());
                None
            }
        }
    }
}

impl<R, W: Write + WriteReady> ByteTx for IoTransport<R, W> {
    fn try_send_byte(&mut self, byte: u8) -> Result<(), TransportError> {
        if !self.tx.write_ready().map_err(|e| e.kind())? {
            return Err(TransportError::Rejected);
        }

        match self.tx.write(&[byte]) {
            // A writer that takes nothing is closed, not full
            Ok(0) => Err(ErrorKind::WriteZero.into()),
            Ok(_) => Ok(()),
            Err(e) => Err(e.kind().into()),
        }
    }
}
