//! CLI Command Implementations
//!
//! Implements the actual logic behind each binary.

use std::io::Write;

use log::info;

use crate::align::{align, Trace};
use crate::config::{AlignConfig, OutputFormat, PlotConfig};
use crate::error::Result;
use crate::wave::{plot, StereoCapture};

/// Load both traces, align them and write the listing to `out`.
///
/// Nothing is written unless the whole alignment succeeds.
pub fn run_align<W: Write>(config: &AlignConfig, out: W) -> Result<()> {
    let reader = Trace::load(&config.reader_path)?;
    let tag = Trace::load(&config.tag_path)?;

    let alignment = align(&reader, &tag, config.exchanges, &config.marker)?;
    info!(
        "Aligned {} exchanges of {} lines",
        alignment.anchors().len(),
        alignment.block_size()
    );

    match config.format {
        OutputFormat::Text => alignment.write_text(out),
        OutputFormat::Json => alignment.write_json(out),
    }
}

/// Load the capture and show it until the window is closed.
pub fn run_plot(config: &PlotConfig) -> Result<()> {
    let capture = StereoCapture::load(&config.input)?;
    info!(
        "Plotting {:.3}s of audio from {}",
        capture.duration_secs(),
        config.input.display()
    );

    plot::show(&capture, &config.title)
}
