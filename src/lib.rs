//! Tagscope - NFC Capture Diagnostics
//!
//! Two small tools for looking at NFC sniffer captures by hand:
//! 1. Log Aligner - pairs the reader and tag hex-dump traces line by line,
//!    one anti-collision exchange at a time
//! 2. Channel Plotter - shows both channels of a stereo probe recording
//!    against time
//!
//! The tools share nothing but the error type and CLI conventions.

pub mod align;
pub mod cli;
pub mod config;
pub mod error;
pub mod wave;

pub use error::{Result, TagscopeError};
