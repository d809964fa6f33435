//! Run configuration
//!
//! Every input the tools read is carried here explicitly. The defaults are
//! the file names the capture rig writes.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::align::ANCHOR_MARKER;

/// Default reader (PCD) trace file
pub const DEFAULT_READER_TRACE: &str = "nfc_case.txt";

/// Default tag (PICC) trace file
pub const DEFAULT_TAG_TRACE: &str = "nfc_case_tag.txt";

/// Default stereo capture file
pub const DEFAULT_CAPTURE: &str = "card.wav";

/// Output format for the log aligner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `reader -> ` / `  tag  -> ` line pairs
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Configuration for one log aligner run
#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Reader trace path
    pub reader_path: PathBuf,
    /// Tag trace path
    pub tag_path: PathBuf,
    /// Line that opens an anti-collision exchange
    pub marker: String,
    /// Expected number of exchanges in the tag trace
    pub exchanges: NonZeroUsize,
    pub format: OutputFormat,
}

impl AlignConfig {
    /// Create a config with default paths and marker
    pub fn new(exchanges: NonZeroUsize) -> Self {
        AlignConfig {
            reader_path: PathBuf::from(DEFAULT_READER_TRACE),
            tag_path: PathBuf::from(DEFAULT_TAG_TRACE),
            marker: ANCHOR_MARKER.to_string(),
            exchanges,
            format: OutputFormat::default(),
        }
    }
}

/// Configuration for one channel plotter run
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// WAV capture path
    pub input: PathBuf,
    /// Window title
    pub title: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            input: PathBuf::from(DEFAULT_CAPTURE),
            title: "Tagscope - Channel Plot".to_string(),
        }
    }
}
