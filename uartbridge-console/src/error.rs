//! Console errors

/// Reasons a console operation gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError {
    /// No operator input within the session idle timeout
    IdleTimeout,
    /// Queued output could not be sent within the flush timeout
    FlushTimeout,
}
