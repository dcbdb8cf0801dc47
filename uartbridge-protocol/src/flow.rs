//! XON/XOFF software flow control bytes

/// DC1 - resume transmission
pub const XON: u8 = 0x11;

/// DC3 - pause transmission
pub const XOFF: u8 = 0x13;

/// A flow control signal carried in-band on the serial line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlowSignal {
    /// Resume sending
    Xon,
    /// Stop sending
    Xoff,
}

impl FlowSignal {
    /// Wire byte for this signal
    pub const fn byte(self) -> u8 {
        match self {
            FlowSignal::Xon => XON,
            FlowSignal::Xoff => XOFF,
        }
    }

    /// Classify a received byte
    ///
    /// Returns `None` for ordinary data bytes.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            XON => Some(FlowSignal::Xon),
            XOFF => Some(FlowSignal::Xoff),
            _ => None,
        }
    }
}
