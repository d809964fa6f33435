//! Log Aligner
//!
//! Pairs the reader (PCD) and tag (PICC) sides of an NFC sniffer capture
//! line by line, one anti-collision exchange at a time.

pub mod alignment;
pub mod trace;

pub use alignment::{
    align, block_size, find_anchors, parse_exchange_count, AlignedPair, Alignment, ANCHOR_MARKER,
};
pub use trace::Trace;
