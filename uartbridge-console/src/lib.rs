//! Operator test console for the UART bridge
//!
//! A menu-driven harness that exercises the serial link through the
//! bridge's queue API:
//!
//! 1. Echo test (type and see echo, `q` quits)
//! 2. Canned test messages
//! 3. Receive capture until ESC, then a byte count
//! 4. Continuous echo until `EXIT`/`exit`
//! 5. Bridge statistics
//!
//! The console owns the bridge and the transport. Every wait pumps
//! [`Bridge::process`](uartbridge_core::Bridge::process), so console
//! output and operator input always pass through the bridge rings.
//! Waits are bounded by millisecond timeouts and yield through an
//! `embedded-hal` delay instead of spinning.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod error;
pub mod session;

#[cfg(test)]
mod mock;

pub use config::ConsoleConfig;
pub use console::Console;
pub use error::ConsoleError;
pub use session::MenuOutcome;
