//! One polling cycle of the bridge
//!
//! Order within a cycle:
//! 1. take at most one byte from the transport (XON/XOFF end the cycle)
//! 2. send at most one queued byte unless paused
//! 3. re-evaluate the RX watermarks and signal the remote sender

use uartbridge_hal::{ByteTransport, ByteTx};
use uartbridge_protocol::FlowSignal;

use super::policy::FlowAction;
use super::state::Bridge;

/// What happened to the byte taken from the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Intake {
    /// Data byte stored in the RX ring
    Stored(u8),
    /// Data byte lost, RX ring full
    Dropped(u8),
    /// Remote flow control signal, consumed
    Signal(FlowSignal),
}

/// Observable outcome of one [`Bridge::process`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Inbound byte handling, `None` if the transport had nothing
    pub received: Option<Intake>,
    /// Outbound byte accepted by the transport
    pub transmitted: Option<u8>,
    /// Flow control byte accepted by the transport
    pub flow_signal: Option<FlowSignal>,
}

impl CycleReport {
    /// Nothing moved in either direction
    pub fn is_idle(&self) -> bool {
        self.received.is_none() && self.transmitted.is_none() && self.flow_signal.is_none()
    }
}

impl<const N: usize> Bridge<N> {
    /// Run one polling cycle against `transport`
    pub fn process<T: ByteTransport + ?Sized>(&mut self, transport: &mut T) -> CycleReport {
        let mut report = CycleReport::default();

        if let Some(byte) = transport.try_receive_byte() {
            let intake = self.intake(byte);
            report.received = Some(intake);
            if let Intake::Signal(_) = intake {
                return report;
            }
        }

        report.transmitted = self.drain_one(transport);
        report.flow_signal = self.regulate(transport);
        report
    }

    fn intake(&mut self, byte: u8) -> Intake {
        if self.flow_control_enabled {
            match FlowSignal::from_byte(byte) {
                Some(FlowSignal::Xoff) => {
                    self.transmission_paused = true;
                    #[cfg(feature = "defmt")]
                    defmt::trace!("XOFF received, transmission paused");
                    return Intake::Signal(FlowSignal::Xoff);
                }
                Some(FlowSignal::Xon) => {
                    self.transmission_paused = false;
                    #[cfg(feature = "defmt")]
                    defmt::trace!("XON received, transmission resumed");
                    return Intake::Signal(FlowSignal::Xon);
                }
                None => {}
            }
        }

        match self.rx.put(byte) {
            Ok(()) => {
                self.bytes_received = self.bytes_received.saturating_add(1);
                Intake::Stored(byte)
            }
            Err(_) => {
                self.error_count = self.error_count.saturating_add(1);
                Intake::Dropped(byte)
            }
        }
    }

    /// Hand the oldest queued byte to the transport
    ///
    /// A rejected byte stays at the head of the TX ring for the next cycle.
    fn drain_one<T: ByteTx + ?Sized>(&mut self, transport: &mut T) -> Option<u8> {
        if self.transmission_paused {
            return None;
        }
        let byte = self.tx.peek()?;

        match transport.try_send_byte(byte) {
            Ok(()) => {
                let _ = self.tx.get();
                self.bytes_transmitted = self.bytes_transmitted.saturating_add(1);
                Some(byte)
            }
            Err(_e) => {
                self.error_count = self.error_count.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("Transport rejected TX byte: {:?}", _e);
                None
            }
        }
    }

    fn regulate<T: ByteTx + ?Sized>(&mut self, transport: &mut T) -> Option<FlowSignal> {
        if !self.flow_control_enabled {
            return None;
        }

        let signal = match self
            .watermarks
            .evaluate(self.rx.occupied(), self.transmission_paused)
        {
            FlowAction::Hold => return None,
            // Governs the remote sender only; the local pause flag is
            // driven by what the remote side tells us.
            FlowAction::SendXoff => FlowSignal::Xoff,
            FlowAction::SendXon => {
                self.transmission_paused = false;
                FlowSignal::Xon
            }
        };

        match transport.try_send_byte(signal.byte()) {
            Ok(()) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Sent {:?} at RX fill {}", signal, self.rx.occupied());
                Some(signal)
            }
            Err(_e) => {
                self.error_count = self.error_count.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("Transport rejected {:?}: {:?}", signal, _e);
                None
            }
        }
    }
}
