//! Board-agnostic core of the UART bridge
//!
//! This crate contains the parts of the bridge that do not depend on a
//! specific UART peripheral:
//!
//! - Fixed-capacity circular byte buffer with overflow counting
//! - Bridge state (TX/RX rings, counters, pause flag)
//! - XON/XOFF hysteresis policy
//! - The polling cycle that moves bytes between the rings and a transport
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod bridge;
pub mod buffer;
pub mod config;

pub use bridge::{Bridge, BridgeStats, CycleReport, FlowAction, Intake, Watermarks};
pub use buffer::{BufferError, CircularBuffer};
pub use config::{BridgeConfig, DEFAULT_CAPACITY};

/// Bridge with the reference capacity of 2048 bytes per direction
pub type DefaultBridge = Bridge<DEFAULT_CAPACITY>;
