//! Console configuration
//!
//! Timing settings for the test console, next to the bridge settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uartbridge_core::BridgeConfig;

/// Console timing and bridge settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsoleConfig {
    /// How long to wait for a menu key before redrawing the menu
    pub menu_timeout_ms: u32,
    /// Delay between polls while waiting for input
    pub poll_interval_us: u32,
    /// Delay between polls in continuous echo mode
    pub echo_poll_interval_us: u32,
    /// Pause after each canned test message
    pub message_gap_ms: u32,
    /// Give up on queued output after this long without progress
    pub flush_timeout_ms: u32,
    /// End an interactive test after this long without input
    ///
    /// `None` waits forever.
    pub session_idle_timeout_ms: Option<u32>,
    /// Settings applied to the bridge at construction
    pub bridge: BridgeConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            menu_timeout_ms: 10_000,
            poll_interval_us: 1_000,
            echo_poll_interval_us: 100,
            message_gap_ms: 1_000,
            flush_timeout_ms: 1_000,
            session_idle_timeout_ms: None,
            bridge: BridgeConfig::default(),
        }
    }
}
