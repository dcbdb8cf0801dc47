//! `EXIT` sentinel detection for continuous echo mode
//!
//! A match starts on `E` or `e` and takes the next three bytes. The four
//! bytes must spell exactly `EXIT` or `exit`; mixed case does not count.
//! An `E`/`e` anywhere restarts the match, any other byte outside a match
//! is ignored.

use heapless::Vec;

/// Length of the exit word
pub const EXIT_LEN: usize = 4;

/// Accepted spellings of the exit word
const EXIT_WORDS: [&[u8; EXIT_LEN]; 2] = [b"EXIT", b"exit"];

/// Byte-fed detector for the exit word
#[derive(Debug, Clone, Default)]
pub struct ExitDetector {
    window: Vec<u8, EXIT_LEN>,
}

impl ExitDetector {
    /// Create a detector with an empty window
    pub fn new() -> Self {
        Self { window: Vec::new() }
    }

    /// Drop any partial match
    pub fn reset(&mut self) {
        self.window.clear();
    }

    /// Number of bytes in the current partial match
    pub fn pending(&self) -> usize {
        self.window.len()
    }

    /// Feed one byte
    ///
    /// Returns `true` when this byte completes `EXIT` or `exit`.
    pub fn feed(&mut self, byte: u8) -> bool {
        if byte == b'E' || byte == b'e' {
            self.window.clear();
            // Window was just cleared, push cannot fail
            let _ = self.window.push(byte);
            return false;
        }

        if self.window.is_empty() {
            return false;
        }

        let _ = self.window.push(byte);
        if self.window.len() < EXIT_LEN {
            return false;
        }

        let matched = EXIT_WORDS
            .iter()
            .any(|word| self.window.as_slice() == word.as_slice());
        self.window.clear();
        matched
    }

    /// Feed several bytes
    ///
    /// Returns the index of the byte that completed the exit word, if any.
    /// Bytes after the match are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Option<usize> {
        bytes.iter().position(|&byte| self.feed(byte))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_upper_and_lower_case_match() {
        let mut detector = ExitDetector::new();
        assert_eq!(detector.feed_bytes(b"EXIT"), Some(3));

        let mut detector = ExitDetector::new();
        assert_eq!(detector.feed_bytes(b"exit"), Some(3));
    }

    #[test]
    fn test_mixed_case_does_not_match() {
        let mut detector = ExitDetector::new();
        assert_eq!(detector.feed_bytes(b"Exit"), None);
        assert_eq!(detector.pending(), 0);
    }

    #[test]
    fn test_e_restarts_match() {
        let mut detector = ExitDetector::new();
        assert_eq!(detector.feed_bytes(b"EXEXIT"), Some(5));
    }

    #[test]
    fn test_failed_word_clears_window() {
        let mut detector = ExitDetector::new();
        assert_eq!(detector.feed_bytes(b"EXIX"), None);
        assert_eq!(detector.pending(), 0);
        assert_eq!(detector.feed_bytes(b"XIT"), None);
    }

    #[test]
    fn test_bytes_outside_match_ignored() {
        let mut detector = ExitDetector::new();
        assert!(!detector.feed(b'x'));
        assert_eq!(detector.pending(), 0);
        assert!(!detector.feed(b'e'));
        assert_eq!(detector.pending(), 1);
        detector.reset();
        assert_eq!(detector.pending(), 0);
    }

    proptest! {
        #[test]
        fn prop_exit_detected_after_any_prefix(
            prefix in proptest::collection::vec(any::<u8>(), 0..64)
        ) {
            let mut detector = ExitDetector::new();
            // The prefix may itself contain an exit word; only the tail matters
            let _ = detector.feed_bytes(&prefix);
            prop_assert_eq!(detector.feed_bytes(b"EXIT"), Some(3));
        }
    }
}
