//! Console I/O on top of the bridge
//!
//! Output is queued into the bridge TX ring and input is taken from the RX
//! ring. While waiting for either, the console pumps the bridge and then
//! yields through the delay provider for one poll interval.

use embedded_hal::delay::DelayNs;
use uartbridge_core::{Bridge, BridgeStats, CycleReport};
use uartbridge_hal::ByteTransport;

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;

/// Bounded wait measured in poll intervals actually slept
///
/// Each wait counts at least 1 us so a zero poll interval still expires.
pub(crate) struct Deadline {
    limit_us: Option<u64>,
    waited_us: u64,
}

impl Deadline {
    pub(crate) fn new(timeout_ms: Option<u32>) -> Self {
        Self {
            limit_us: timeout_ms.map(|ms| u64::from(ms) * 1_000),
            waited_us: 0,
        }
    }

    pub(crate) fn expired(&self) -> bool {
        self.limit_us.is_some_and(|limit| self.waited_us >= limit)
    }

    pub(crate) fn wait<D: DelayNs>(&mut self, delay: &mut D, step_us: u32) {
        let step_us = step_us.max(1);
        delay.delay_us(step_us);
        self.waited_us = self.waited_us.saturating_add(u64::from(step_us));
    }
}

/// Test console owning a bridge with `N` bytes per direction
pub struct Console<T, D, const N: usize> {
    pub(crate) bridge: Bridge<N>,
    pub(crate) transport: T,
    pub(crate) delay: D,
    pub(crate) config: ConsoleConfig,
}

impl<T: ByteTransport, D: DelayNs, const N: usize> Console<T, D, N> {
    /// Create a console around a transport and delay provider
    pub fn new(transport: T, delay: D, config: ConsoleConfig) -> Self {
        Self {
            bridge: Bridge::with_config(config.bridge),
            transport,
            delay,
            config,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn bridge(&self) -> &Bridge<N> {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut Bridge<N> {
        &mut self.bridge
    }

    pub fn statistics(&self) -> BridgeStats {
        self.bridge.statistics()
    }

    /// Give back the transport and delay provider
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    /// Run one bridge cycle
    pub fn pump(&mut self) -> CycleReport {
        self.bridge.process(&mut self.transport)
    }

    /// Queue `data` for output, pumping the bridge while the TX ring is full
    ///
    /// Fails once `flush_timeout_ms` passes without a byte going out.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), ConsoleError> {
        let mut remaining = data;
        let mut deadline = Deadline::new(Some(self.config.flush_timeout_ms));

        loop {
            let queued = self.bridge.enqueue_outbound(remaining);
            remaining = &remaining[queued..];
            if remaining.is_empty() {
                return Ok(());
            }

            let report = self.pump();
            if report.transmitted.is_some() {
                deadline = Deadline::new(Some(self.config.flush_timeout_ms));
            } else {
                if deadline.expired() {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Output stalled, {} bytes not queued", remaining.len());
                    return Err(ConsoleError::FlushTimeout);
                }
                deadline.wait(&mut self.delay, self.config.poll_interval_us);
            }
        }
    }

    pub fn write_str(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.write_bytes(text.as_bytes())
    }

    /// Pump until every queued byte has been sent
    ///
    /// Same progress timeout as [`Self::write_bytes`].
    pub fn flush(&mut self) -> Result<(), ConsoleError> {
        let mut deadline = Deadline::new(Some(self.config.flush_timeout_ms));

        while self.bridge.tx_pending() > 0 {
            let report = self.pump();
            if report.transmitted.is_some() {
                deadline = Deadline::new(Some(self.config.flush_timeout_ms));
            } else {
                if deadline.expired() {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Flush stalled, {} bytes pending", self.bridge.tx_pending());
                    return Err(ConsoleError::FlushTimeout);
                }
                deadline.wait(&mut self.delay, self.config.poll_interval_us);
            }
        }
        Ok(())
    }

    /// Wait for one received byte
    ///
    /// Returns `None` once `timeout_ms` has passed without input. With no
    /// timeout the wait only ends when a byte arrives.
    pub fn read_byte(&mut self, timeout_ms: Option<u32>, poll_us: u32) -> Option<u8> {
        let mut deadline = Deadline::new(timeout_ms);

        loop {
            if let Some(byte) = self.bridge.pop_inbound() {
                return Some(byte);
            }

            let report = self.pump();
            if let Some(byte) = self.bridge.pop_inbound() {
                return Some(byte);
            }

            if report.is_idle() {
                if deadline.expired() {
                    return None;
                }
                deadline.wait(&mut self.delay, poll_us);
            }
        }
    }

    /// Keep the bridge running for `ms` milliseconds
    pub fn pause_ms(&mut self, ms: u32) {
        let mut deadline = Deadline::new(Some(ms));
        while !deadline.expired() {
            self.pump();
            deadline.wait(&mut self.delay, self.config.poll_interval_us);
        }
    }
}
