//! Scripted transport for bridge tests

use heapless::{Deque, Vec};
use uartbridge_hal::{ByteRx, ByteTx, TransportError};

pub const MOCK_DEPTH: usize = 512;

/// Transport fed from a script, recording everything sent
pub struct MockTransport {
    pub inbound: Deque<u8, MOCK_DEPTH>,
    pub sent: Vec<u8, MOCK_DEPTH>,
    pub accept: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            inbound: Deque::new(),
            sent: Vec::new(),
            accept: true,
        }
    }

    pub fn with_inbound(bytes: &[u8]) -> Self {
        let mut transport = Self::new();
        for &byte in bytes {
            transport.push_inbound(byte);
        }
        transport
    }

    pub fn push_inbound(&mut self, byte: u8) {
        self.inbound.push_back(byte).unwrap();
    }
}

impl ByteRx for MockTransport {
    fn try_receive_byte(&mut self) -> Option<u8> {
        self.inbound.pop_front()
    }
}

impl ByteTx for MockTransport {
    fn try_send_byte(&mut self, byte: u8) -> Result<(), TransportError> {
        if !self.accept {
            return Err(TransportError::Rejected);
        }
        self.sent.push(byte).map_err(|_| TransportError::Rejected)
    }
}
