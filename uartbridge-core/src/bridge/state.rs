//! Bridge state and queue operations

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::policy::Watermarks;
use crate::buffer::CircularBuffer;
use crate::config::BridgeConfig;

/// Snapshot of the bridge counters and ring levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BridgeStats {
    /// Bytes handed to the transport since the last reset
    pub bytes_transmitted: u32,
    /// Bytes stored in the RX ring since the last reset
    pub bytes_received: u32,
    /// RX overruns and transport rejections since the last reset
    pub error_count: u32,
    /// Bytes waiting in the RX ring
    pub rx_available: usize,
    /// Free bytes in the TX ring
    pub tx_space_available: usize,
}

/// Buffered serial bridge with `N` bytes per direction
///
/// Owned by a single driver loop. Nothing here blocks; sharing it with an
/// interrupt handler needs an outer critical-section mutex.
#[derive(Debug, Clone)]
pub struct Bridge<const N: usize> {
    pub(super) tx: CircularBuffer<N>,
    pub(super) rx: CircularBuffer<N>,
    pub(super) bytes_transmitted: u32,
    pub(super) bytes_received: u32,
    pub(super) error_count: u32,
    pub(super) flow_control_enabled: bool,
    /// Set by a received XOFF, cleared by XON or low-water recovery
    pub(super) transmission_paused: bool,
    pub(super) watermarks: Watermarks,
}

impl<const N: usize> Default for Bridge<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Bridge<N> {
    /// Create a bridge with empty rings and flow control enabled
    pub fn new() -> Self {
        Self::with_config(BridgeConfig::default())
    }

    /// Create a bridge with explicit settings
    pub fn with_config(config: BridgeConfig) -> Self {
        Self {
            tx: CircularBuffer::new(),
            rx: CircularBuffer::new(),
            bytes_transmitted: 0,
            bytes_received: 0,
            error_count: 0,
            flow_control_enabled: config.flow_control,
            transmission_paused: false,
            watermarks: Watermarks::for_capacity(N),
        }
    }

    /// Queue bytes for transmission
    ///
    /// Stops at the first byte that does not fit. Returns how many were
    /// queued; a short count is a normal outcome, not an error.
    pub fn enqueue_outbound(&mut self, data: &[u8]) -> usize {
        let mut queued = 0;
        for &byte in data {
            if self.tx.put(byte).is_err() {
                break;
            }
            queued += 1;
        }
        queued
    }

    /// Move received bytes into `buf` in arrival order
    ///
    /// Takes at most `buf.len()` bytes. Returns the number copied.
    pub fn read_inbound(&mut self, buf: &mut [u8]) -> usize {
        let mut read = 0;
        for slot in buf.iter_mut() {
            match self.rx.get() {
                Ok(byte) => *slot = byte,
                Err(_) => break,
            }
            read += 1;
        }
        read
    }

    /// Take up to `max` received bytes
    ///
    /// The result also never exceeds the vector capacity `M`.
    pub fn dequeue_inbound<const M: usize>(&mut self, max: usize) -> Vec<u8, M> {
        let mut out = Vec::new();
        while out.len() < max {
            let Ok(byte) = self.rx.get() else {
                break;
            };
            if out.push(byte).is_err() {
                break;
            }
        }
        out
    }

    /// Take the oldest received byte
    pub fn pop_inbound(&mut self) -> Option<u8> {
        self.rx.get().ok()
    }

    /// Current counters and ring levels
    pub fn statistics(&self) -> BridgeStats {
        BridgeStats {
            bytes_transmitted: self.bytes_transmitted,
            bytes_received: self.bytes_received,
            error_count: self.error_count,
            rx_available: self.rx_available(),
            tx_space_available: self.tx_space_available(),
        }
    }

    /// Enable or disable XON/XOFF handling
    ///
    /// Disabling always resumes local transmission.
    pub fn set_flow_control(&mut self, enabled: bool) {
        self.flow_control_enabled = enabled;
        if !enabled {
            self.transmission_paused = false;
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("Flow control {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Drop all buffered data and zero the counters
    ///
    /// The flow control setting is kept.
    pub fn reset(&mut self) {
        self.tx.clear();
        self.rx.clear();
        self.tx.reset_overflow_count();
        self.rx.reset_overflow_count();
        self.bytes_transmitted = 0;
        self.bytes_received = 0;
        self.error_count = 0;
        self.transmission_paused = false;
        #[cfg(feature = "defmt")]
        defmt::info!("Bridge reset");
    }

    /// Received bytes waiting to be read
    pub fn rx_available(&self) -> usize {
        self.rx.occupied()
    }

    /// Bytes that can still be queued for transmission
    pub fn tx_space_available(&self) -> usize {
        self.tx.free_space()
    }

    /// Bytes queued but not yet sent
    pub fn tx_pending(&self) -> usize {
        self.tx.occupied()
    }

    /// Whether the remote side has paused our transmission
    pub fn is_paused(&self) -> bool {
        self.transmission_paused
    }

    pub fn flow_control_enabled(&self) -> bool {
        self.flow_control_enabled
    }

    /// Ring capacity per direction
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn watermarks(&self) -> Watermarks {
        self.watermarks
    }

    /// RX fill above which XOFF is sent
    pub fn high_water(&self) -> usize {
        self.watermarks.high
    }

    /// RX fill below which a paused link is resumed
    pub fn low_water(&self) -> usize {
        self.watermarks.low
    }

    /// Rejected writes into the TX ring since the last reset
    pub fn tx_overflow_count(&self) -> u32 {
        self.tx.overflow_count()
    }

    /// Rejected writes into the RX ring since the last reset
    pub fn rx_overflow_count(&self) -> u32 {
        self.rx.overflow_count()
    }
}
