//! Stereo WAV capture loading
//!
//! The probe rig records the field into a 2-channel, 16-bit PCM WAV file.
//! Anything else is rejected; there is no resampling or format conversion.

use std::io::Read;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec};
use log::info;

use crate::error::{Result, TagscopeError};

const CAPTURE_CHANNELS: u16 = 2;
const CAPTURE_BITS: u16 = 16;

/// Header parameters of a WAV capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioParams {
    pub channels: u16,
    /// Bytes per sample
    pub sample_width: u16,
    pub frame_rate: u32,
    pub frame_count: u32,
}

impl AudioParams {
    pub fn from_spec(spec: &WavSpec, frame_count: u32) -> Self {
        AudioParams {
            channels: spec.channels,
            sample_width: spec.bits_per_sample / 8,
            frame_rate: spec.sample_rate,
            frame_count,
        }
    }
}

/// Both channels of a capture plus their shared time axis
#[derive(Debug, Clone, PartialEq)]
pub struct StereoCapture {
    params: AudioParams,
    channels: [Vec<i16>; 2],
    time: Vec<f64>,
}

impl StereoCapture {
    /// Load a stereo 16-bit PCM WAV file
    ///
    /// # Errors
    /// * `FileNotFound` - If the file does not exist
    /// * `AudioReadError` - If the file is not a readable WAV file
    /// * `UnsupportedFormat` - If the audio is not 2-channel 16-bit PCM
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TagscopeError::FileNotFound {
                path: path.display().to_string(),
                source: None,
            });
        }

        let origin = path.display().to_string();
        let reader = WavReader::open(path).map_err(|e| TagscopeError::AudioReadError {
            path: origin.clone(),
            source: e,
        })?;

        Self::from_wav(reader, &origin)
    }

    /// Decode an already opened WAV stream
    ///
    /// `origin` names the source in error messages.
    pub fn from_wav<R: Read>(reader: WavReader<R>, origin: &str) -> Result<Self> {
        let spec = reader.spec();
        let params = AudioParams::from_spec(&spec, reader.duration());

        if spec.channels != CAPTURE_CHANNELS {
            return Err(TagscopeError::UnsupportedFormat {
                details: format!("{}-channel audio (only stereo supported)", spec.channels),
            });
        }

        if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != CAPTURE_BITS {
            return Err(TagscopeError::UnsupportedFormat {
                details: format!(
                    "{}-bit {:?} samples (only 16-bit integer PCM supported)",
                    spec.bits_per_sample, spec.sample_format
                ),
            });
        }

        info!(
            "{}: {} channels, {} bytes/sample, {} Hz, {} frames",
            origin, params.channels, params.sample_width, params.frame_rate, params.frame_count
        );

        let samples = reader
            .into_samples::<i16>()
            .collect::<std::result::Result<Vec<i16>, _>>()
            .map_err(|e| TagscopeError::AudioReadError {
                path: origin.to_string(),
                source: e,
            })?;

        let channels = split_channels(&samples)?;
        if channels[0].len() != params.frame_count as usize {
            return Err(TagscopeError::UnsupportedFormat {
                details: format!(
                    "header declares {} frames but {} were decoded",
                    params.frame_count,
                    channels[0].len()
                ),
            });
        }

        let time = time_axis(channels[0].len(), params.frame_rate)?;

        Ok(StereoCapture {
            params,
            channels,
            time,
        })
    }

    pub fn params(&self) -> &AudioParams {
        &self.params
    }

    /// Samples of channel 0 or 1, `None` for any other index
    pub fn channel(&self, index: usize) -> Option<&[i16]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Timestamp in seconds of every frame
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn num_frames(&self) -> usize {
        self.time.len()
    }

    pub fn duration_secs(&self) -> f64 {
        self.num_frames() as f64 / self.params.frame_rate as f64
    }

    /// `[time, sample]` points for one channel, `None` for an index past 1
    pub fn channel_points(&self, index: usize) -> Option<Vec<[f64; 2]>> {
        self.channels
            .get(index)
            .map(|samples| points(&self.time, samples))
    }

    /// `[time, sample]` points for both channels
    pub fn stereo_points(&self) -> [Vec<[f64; 2]>; 2] {
        [
            points(&self.time, &self.channels[0]),
            points(&self.time, &self.channels[1]),
        ]
    }
}

fn points(time: &[f64], samples: &[i16]) -> Vec<[f64; 2]> {
    time.iter()
        .zip(samples)
        .map(|(&t, &s)| [t, f64::from(s)])
        .collect()
}

/// De-interleave samples from [L,R,L,R,...] to [[L,L,...], [R,R,...]]
///
/// # Errors
/// * `UnsupportedFormat` - If the sample count is odd
pub fn split_channels(samples: &[i16]) -> Result<[Vec<i16>; 2]> {
    if samples.len() % 2 != 0 {
        return Err(TagscopeError::UnsupportedFormat {
            details: format!("{} samples cannot be split into 2 channels", samples.len()),
        });
    }

    let frames = samples.len() / 2;
    let mut left = Vec::with_capacity(frames);
    let mut right = Vec::with_capacity(frames);
    for frame in samples.chunks_exact(2) {
        left.push(frame[0]);
        right.push(frame[1]);
    }

    Ok([left, right])
}

/// Timestamps `i * (1 / frame_rate)` for `i` in `0..frame_count`
///
/// # Errors
/// * `UnsupportedFormat` - If the frame rate is zero
pub fn time_axis(frame_count: usize, frame_rate: u32) -> Result<Vec<f64>> {
    if frame_rate == 0 {
        return Err(TagscopeError::UnsupportedFormat {
            details: "frame rate of 0 Hz".to_string(),
        });
    }

    let step = 1.0 / frame_rate as f64;
    Ok((0..frame_count).map(|i| i as f64 * step).collect())
}
