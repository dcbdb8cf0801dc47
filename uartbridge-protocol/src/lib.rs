//! UART Console Protocol
//!
//! This crate defines the byte-level conventions shared by the bridge and
//! the operator console on the board's debug UART:
//!
//! - Software flow control sentinels (XON/XOFF)
//! - Single-key menu commands
//! - The `EXIT` sentinel that ends continuous echo mode
//!
//! # Flow Control
//!
//! ```text
//!  receiver RX fill         line
//! ┌───────────────┐
//! │ > 75%         │ ──────► XOFF (0x13)  remote sender pauses
//! │ < 37.5%       │ ──────► XON  (0x11)  remote sender resumes
//! └───────────────┘
//! ```
//!
//! The sentinels are fixed protocol constants, not configuration.

#![no_std]
#![deny(unsafe_code)]

pub mod flow;
pub mod menu;
pub mod sentinel;

pub use flow::{FlowSignal, XOFF, XON};
pub use menu::{is_quit_key, MenuCommand, ESCAPE};
pub use sentinel::ExitDetector;
