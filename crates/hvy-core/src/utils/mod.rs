//! Data structure utilities.
//!
//! - [`RingBuffer`] - fixed-capacity FIFO buffer backing the system log

mod ring_buffer;

pub use ring_buffer::RingBuffer;
