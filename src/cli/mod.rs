//! CLI Module
//!
//! Argument definitions for the `tagscope-align` and `tagscope-plot` binaries.

pub mod commands;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::align::{parse_exchange_count, ANCHOR_MARKER};
use crate::config::{
    AlignConfig, OutputFormat, PlotConfig, DEFAULT_CAPTURE, DEFAULT_READER_TRACE,
    DEFAULT_TAG_TRACE,
};
use crate::error::TagscopeError;

/// Print NFC reader and tag traces interleaved, one exchange at a time
#[derive(Parser, Debug)]
#[command(name = "tagscope-align")]
#[command(version, about, long_about = None)]
pub struct AlignCli {
    /// Expected number of exchanges in the tag trace
    #[arg(value_parser = parse_exchange_count)]
    pub exchanges: NonZeroUsize,

    /// Reader (PCD) trace file
    #[arg(short, long, default_value = DEFAULT_READER_TRACE)]
    pub reader: PathBuf,

    /// Tag (PICC) trace file
    #[arg(short, long, default_value = DEFAULT_TAG_TRACE)]
    pub tag: PathBuf,

    /// Reader line that opens an exchange
    #[arg(short, long, default_value = ANCHOR_MARKER)]
    pub marker: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Plot both channels of a stereo 16-bit WAV capture
#[derive(Parser, Debug)]
#[command(name = "tagscope-plot")]
#[command(version, about, long_about = None)]
pub struct PlotCli {
    /// WAV capture file
    #[arg(short, long, default_value = DEFAULT_CAPTURE)]
    pub input: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl From<AlignCli> for AlignConfig {
    fn from(cli: AlignCli) -> Self {
        AlignConfig {
            reader_path: cli.reader,
            tag_path: cli.tag,
            marker: cli.marker,
            exchanges: cli.exchanges,
            format: cli.format.into(),
        }
    }
}

impl From<PlotCli> for PlotConfig {
    fn from(cli: PlotCli) -> Self {
        PlotConfig {
            input: cli.input,
            ..PlotConfig::default()
        }
    }
}

/// Default log filter for the `-v` flag
pub fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Wrap a failed run for `main`, pointing at the capture files when they are the cause
pub fn failure_context(err: TagscopeError, action: String) -> anyhow::Error {
    let capture = err.is_capture_error();
    let err = anyhow::Error::new(err).context(action);
    if capture {
        err.context("capture data looks malformed; check the capture files")
    } else {
        err
    }
}
