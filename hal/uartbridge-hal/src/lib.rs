//! UART Bridge Hardware Abstraction Layer
//!
//! This crate defines the byte transport the bridge drives. A transport is
//! a full-duplex serial channel polled one byte at a time: reading never
//! waits for data and writing either accepts the byte or rejects it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  uartbridge-core / uartbridge-console   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  uartbridge-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-io UART (board HAL)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::ByteRx`], [`uart::ByteTx`] - Non-blocking byte I/O
//! - [`uart::ByteTransport`] - Both directions on one peripheral
//! - [`io::IoTransport`] - Adapter for `embedded-io` readers and writers

#![no_std]
#![deny(unsafe_code)]

pub mod io;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use io::IoTransport;
pub use uart::{ByteRx, ByteTransport, ByteTx, TransportError, UartConfig};
