//! Bridge configuration
//!
//! Capacity is the `N` const parameter of [`Bridge`](crate::bridge::Bridge);
//! the watermarks are derived from it and are not configurable.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference ring capacity per direction
pub const DEFAULT_CAPACITY: usize = 2048;

/// Runtime bridge settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BridgeConfig {
    /// Honour and emit XON/XOFF
    pub flow_control: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self { flow_control: true }
    }
}
