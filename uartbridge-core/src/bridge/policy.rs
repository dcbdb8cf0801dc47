//! Flow control hysteresis
//!
//! XOFF is requested above the high watermark (75% of capacity) and XON
//! below the low watermark (half of the high one, about 37.5%). The gap
//! between the two keeps the link from chattering around one threshold.

/// Action requested by the policy for this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlowAction {
    /// Inside the band, nothing to send
    Hold,
    /// RX above high water, ask the remote sender to stop
    SendXoff,
    /// RX recovered below low water while paused, resume
    SendXon,
}

/// RX occupancy thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Watermarks {
    /// Occupancy above which XOFF is sent
    pub high: usize,
    /// Occupancy below which XON is sent
    pub low: usize,
}

impl Watermarks {
    /// Derive the watermarks for a ring capacity
    pub const fn for_capacity(capacity: usize) -> Self {
        let high = capacity * 3 / 4;
        Self {
            high,
            low: high / 2,
        }
    }

    /// Decide what to signal for the current RX fill and pause state
    pub fn evaluate(&self, rx_occupied: usize, paused: bool) -> FlowAction {
        if rx_occupied > self.high && !paused {
            FlowAction::SendXoff
        } else if rx_occupied < self.low && paused {
            FlowAction::SendXon
        } else {
            FlowAction::Hold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_capacity_watermarks() {
        let marks = Watermarks::for_capacity(2048);
        assert_eq!(marks.high, 1536);
        assert_eq!(marks.low, 768);
    }

    #[test]
    fn test_small_capacity_watermarks() {
        let marks = Watermarks::for_capacity(100);
        assert_eq!(marks.high, 75);
        assert_eq!(marks.low, 37);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let marks = Watermarks::for_capacity(100);
        assert_eq!(marks.evaluate(75, false), FlowAction::Hold);
        assert_eq!(marks.evaluate(76, false), FlowAction::SendXoff);
        assert_eq!(marks.evaluate(37, true), FlowAction::Hold);
        assert_eq!(marks.evaluate(36, true), FlowAction::SendXon);
    }

    #[test]
    fn test_band_holds_either_state() {
        let marks = Watermarks::for_capacity(100);
        for fill in 37..=75 {
            assert_eq!(marks.evaluate(fill, false), FlowAction::Hold);
            assert_eq!(marks.evaluate(fill, true), FlowAction::Hold);
        }
    }

    #[test]
    fn test_paused_suppresses_xoff() {
        let marks = Watermarks::for_capacity(100);
        assert_eq!(marks.evaluate(100, true), FlowAction::Hold);
    }

    #[test]
    fn test_running_never_sends_xon() {
        let marks = Watermarks::for_capacity(100);
        assert_eq!(marks.evaluate(0, false), FlowAction::Hold);
    }
}
