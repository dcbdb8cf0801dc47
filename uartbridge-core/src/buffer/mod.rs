//! Fixed-capacity byte ring
//!
//! Storage is allocated inline at construction and never resized.

pub mod ring;

pub use ring::{BufferError, CircularBuffer};
