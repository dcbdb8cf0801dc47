//! USB-to-UART bridge
//!
//! Two rings (outbound TX, inbound RX), byte counters and the XON/XOFF
//! pause flag. The owner calls [`Bridge::process`] once per loop
//! iteration; each call moves at most one byte in each direction.
//!
//! ```text
//!  enqueue_outbound ──► [ TX ring ] ──► process ──► transport
//!  dequeue_inbound  ◄── [ RX ring ] ◄── process ◄── transport
//! ```

pub mod cycle;
pub mod policy;
pub mod state;

#[cfg(test)]
pub(crate) mod mock;

pub use cycle::{CycleReport, Intake};
pub use policy::{FlowAction, Watermarks};
pub use state::{Bridge, BridgeStats};
