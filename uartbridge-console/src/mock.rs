//! Scripted transport and delay for console tests

use embedded_hal::delay::DelayNs;
use heapless::{Deque, Vec};
use uartbridge_hal::{ByteRx, ByteTx, TransportError};

use crate::config::ConsoleConfig;

pub const SCRIPT_DEPTH: usize = 2048;
pub const SENT_DEPTH: usize = 4096;

#[derive(Debug, Clone, Copy)]
enum Step {
    Byte(u8),
    /// One poll with nothing to read
    Gap,
}

/// Transport that replays a script of input bytes and gaps
pub struct MockTransport {
    script: Deque<Step, SCRIPT_DEPTH>,
    pub sent: Vec<u8, SENT_DEPTH>,
    pub accept: bool,
    /// Take only every n-th byte offered, rejecting the rest
    pub accept_every: usize,
    offered: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            script: Deque::new(),
            sent: Vec::new(),
            accept: true,
            accept_every: 1,
            offered: 0,
        }
    }

    pub fn with_inbound(bytes: &[u8]) -> Self {
        let mut transport = Self::new();
        transport.push_inbound(bytes);
        transport
    }

    pub fn push_inbound(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.script.push_back(Step::Byte(byte)).unwrap();
        }
    }

    /// Make `byte` readable only after `gaps` empty polls
    pub fn push_inbound_after(&mut self, gaps: usize, byte: u8) {
        for _ in 0..gaps {
            self.script.push_back(Step::Gap).unwrap();
        }
        self.script.push_back(Step::Byte(byte)).unwrap();
    }

    pub fn sent_contains(&self, text: &str) -> bool {
        let needle = text.as_bytes();
        needle.is_empty() || self.sent.windows(needle.len()).any(|w| w == needle)
    }
}

impl ByteRx for MockTransport {
    fn try_receive_byte(&mut self) -> Option<u8> {
        match self.script.pop_front()? {
            Step::Byte(byte) => Some(byte),
            Step::Gap => None,
        }
    }
}

impl ByteTx for MockTransport {
    fn try_send_byte(&mut self, byte: u8) -> Result<(), TransportError> {
        if !self.accept {
            return Err(TransportError::Rejected);
        }
        self.offered += 1;
        if self.offered % self.accept_every.max(1) != 0 {
            return Err(TransportError::Rejected);
        }
        self.sent.push(byte).map_err(|_| TransportError::Rejected)
    }
}

/// Delay that only records how long it was asked to wait
pub struct MockDelay {
    elapsed_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { elapsed_ns: 0 }
    }

    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_ns / 1_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}

/// Short timeouts so scripted sessions finish quickly
pub fn test_config() -> ConsoleConfig {
    ConsoleConfig {
        menu_timeout_ms: 50,
        poll_interval_us: 1_000,
        echo_poll_interval_us: 100,
        message_gap_ms: 5,
        flush_timeout_ms: 20,
        session_idle_timeout_ms: Some(100),
        ..Default::default()
    }
}
