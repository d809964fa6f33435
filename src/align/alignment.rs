//! Reader/tag trace alignment
//!
//! The reader trace is cut into exchanges at every anti-collision marker.
//! Each exchange starts on the header line just before its marker and spans
//! `block_size` lines. The tag trace holds the same exchanges back to back,
//! so exchange `k` starts at tag line `k * block_size`.
//!
//! The whole alignment is built before anything is rendered, so a capture
//! that doesn't line up fails without printing a partial listing.

use std::io::Write;
use std::num::NonZeroUsize;

use log::debug;
use serde::Serialize;

use crate::align::trace::Trace;
use crate::error::{Result, TagscopeError};

/// Reader line that opens an anti-collision SELECT (cascade level 1)
pub const ANCHOR_MARKER: &str = "93 20 ";

/// One reader line paired with its tag line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlignedPair<'a> {
    /// Rank of the anchor this pair belongs to
    pub exchange: usize,
    /// Offset within the exchange block
    pub offset: usize,
    pub reader: &'a str,
    pub tag: &'a str,
}

/// Complete alignment of a reader trace against a tag trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment<'a> {
    anchors: Vec<usize>,
    block_size: usize,
    pairs: Vec<AlignedPair<'a>>,
}

impl<'a> Alignment<'a> {
    /// Reader line indices where each exchange starts
    pub fn anchors(&self) -> &[usize] {
        &self.anchors
    }

    /// Lines per exchange in both traces
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn pairs(&self) -> &[AlignedPair<'a>] {
        &self.pairs
    }

    /// Write the interleaved listing
    pub fn write_text<W: Write>(&self, mut out: W) -> Result<()> {
        for pair in &self.pairs {
            writeln!(out, "reader -> {}", pair.reader)?;
            writeln!(out, "  tag  -> {}", pair.tag)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write the alignment as pretty JSON
    pub fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

/// Parse the expected exchange count given on the command line
///
/// # Errors
/// * `InvalidExchangeCount` - If the value is empty, zero, negative or not a number
pub fn parse_exchange_count(value: &str) -> Result<NonZeroUsize> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| TagscopeError::InvalidExchangeCount {
            value: value.to_string(),
        })
}

/// Find the start of every exchange in the reader trace
///
/// Returns the index of the line *before* each line equal to `marker`, in
/// file order. That line is the exchange header the capture format puts
/// ahead of the SELECT.
///
/// # Errors
/// * `AnchorWithoutHeader` - If the marker is the first line of the trace
pub fn find_anchors(reader: &Trace, marker: &str) -> Result<Vec<usize>> {
    reader
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| line.as_str() == marker)
        .map(|(i, _)| {
            i.checked_sub(1)
                .ok_or_else(|| TagscopeError::AnchorWithoutHeader { line: i })
        })
        .collect()
}

/// Lines per exchange: tag trace length divided by the exchange count
///
/// Truncating division; a remainder is silently dropped.
pub fn block_size(tag_len: usize, exchanges: NonZeroUsize) -> usize {
    tag_len / exchanges.get()
}

/// Pair every exchange block of `reader` with its block in `tag`
///
/// # Errors
/// * `AnchorWithoutHeader` - If the marker is the first reader line
/// * `BlockOutOfRange` - If an exchange block runs past the end of either trace
pub fn align<'a>(
    reader: &'a Trace,
    tag: &'a Trace,
    exchanges: NonZeroUsize,
    marker: &str,
) -> Result<Alignment<'a>> {
    let anchors = find_anchors(reader, marker)?;
    let block_size = block_size(tag.len(), exchanges);
    debug!(
        "Found {} anchors at {:?}, block size {}",
        anchors.len(),
        anchors,
        block_size
    );

    // Each pair takes a distinct tag line, so a valid listing never outgrows the tag trace.
    let mut pairs = Vec::with_capacity(anchors.len().saturating_mul(block_size).min(tag.len()));
    for (exchange, &start) in anchors.iter().enumerate() {
        let tag_start = exchange * block_size;
        for offset in 0..block_size {
            pairs.push(AlignedPair {
                exchange,
                offset,
                reader: line_at(reader, "reader", start + offset)?,
                tag: line_at(tag, "tag", tag_start + offset)?,
            });
        }
    }

    Ok(Alignment {
        anchors,
        block_size,
        pairs,
    })
}

fn line_at<'a>(trace: &'a Trace, name: &'static str, index: usize) -> Result<&'a str> {
    trace.line(index).ok_or_else(|| TagscopeError::BlockOutOfRange {
        trace: name,
        index,
        len: trace.len(),
    })
}
