//! Channel Plotter
//!
//! Loads a stereo probe recording and shows both channels over time.

pub mod capture;
pub mod plot;

pub use capture::{split_channels, time_axis, AudioParams, StereoCapture};
pub use plot::ChannelPlotApp;
