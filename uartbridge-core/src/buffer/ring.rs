//! Circular buffer implementation
//!
//! `head` is the next write slot, `tail` the next read slot. The number of
//! held bytes is tracked in `count`, so a full ring (`head == tail`,
//! `count == N`) is never confused with an empty one.

/// Errors from ring operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// Write rejected, ring is at capacity
    Full,
    /// Read rejected, ring holds no data
    Empty,
}

/// Fixed-capacity FIFO byte queue
///
/// All operations are O(1) and never allocate.
#[derive(Debug, Clone)]
pub struct CircularBuffer<const N: usize> {
    storage: [u8; N],
    head: usize,
    tail: usize,
    count: usize,
    overflow_count: u32,
}

impl<const N: usize> Default for CircularBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CircularBuffer<N> {
    const NON_ZERO: () = assert!(N > 0, "circular buffer capacity must be positive");

    /// Create an empty buffer
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        Self {
            storage: [0; N],
            head: 0,
            tail: 0,
            count: 0,
            overflow_count: 0,
        }
    }

    /// Append one byte
    ///
    /// On a full buffer the byte is discarded, the overflow counter is
    /// incremented and nothing else changes.
    pub fn put(&mut self, byte: u8) -> Result<(), BufferError> {
        if self.count == N {
            self.overflow_count = self.overflow_count.saturating_add(1);
            return Err(BufferError::Full);
        }

        self.storage[self.head] = byte;
        self.head = (self.head + 1) % N;
        self.count += 1;
        Ok(())
    }

    /// Remove the oldest byte
    pub fn get(&mut self) -> Result<u8, BufferError> {
        if self.count == 0 {
            return Err(BufferError::Empty);
        }

        let byte = self.storage[self.tail];
        self.tail = (self.tail + 1) % N;
        self.count -= 1;
        Ok(byte)
    }

    /// Look at the oldest byte without removing it
    pub fn peek(&self) -> Option<u8> {
        if self.count == 0 {
            None
        } else {
            Some(self.storage[self.tail])
        }
    }

    /// Number of bytes held
    pub fn occupied(&self) -> usize {
        self.count
    }

    /// Number of bytes that can still be written
    pub fn free_space(&self) -> usize {
        N - self.count
    }

    /// Fixed capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Writes rejected since creation or the last counter reset
    pub fn overflow_count(&self) -> u32 {
        self.overflow_count
    }

    /// Drop all held bytes
    ///
    /// The overflow counter is kept; see [`Self::reset_overflow_count`].
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Zero the overflow counter
    pub fn reset_overflow_count(&mut self) {
        self.overflow_count = 0;
    }
}
