//! Channel Plotter Tests
//!
//! Load synthetic captures from disk and check what would be plotted.

use std::path::Path;

use approx::assert_relative_eq;
use hound::{SampleFormat, WavSpec, WavWriter};
use tempfile::tempdir;

use tagscope::wave::StereoCapture;

fn write_wav(path: &Path, channels: u16, sample_rate: u32, samples: &[i16]) {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn test_channel_separation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.wav");

    let left: Vec<i16> = (0..1000).map(|i| (i * 7 % 2000 - 1000) as i16).collect();
    let right: Vec<i16> = (0..1000).map(|i| i16::MAX - i as i16).collect();
    let interleaved: Vec<i16> = left
        .iter()
        .zip(&right)
        .flat_map(|(&l, &r)| [l, r])
        .collect();
    write_wav(&path, 2, 44100, &interleaved);

    let capture = StereoCapture::load(&path).unwrap();
    assert_eq!(capture.channel(0), Some(left.as_slice()));
    assert_eq!(capture.channel(1), Some(right.as_slice()));
    assert_eq!(capture.params().frame_count, 1000);
    assert_eq!(capture.params().sample_width, 2);
}

#[test]
fn test_time_axis_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.wav");
    write_wav(&path, 2, 44100, &[0, 0, 1, 1, 2, 2, 3, 3]);

    let capture = StereoCapture::load(&path).unwrap();
    let time = capture.time();
    assert_eq!(time.len(), 4);
    for (i, &t) in time.iter().enumerate() {
        assert_relative_eq!(t, i as f64 / 44100.0, epsilon = 1e-12);
    }
}

#[test]
fn test_extreme_sample_values_survive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.wav");
    write_wav(&path, 2, 8000, &[i16::MIN, i16::MAX, i16::MAX, i16::MIN]);

    let capture = StereoCapture::load(&path).unwrap();
    assert_eq!(capture.channel(0), Some(&[i16::MIN, i16::MAX][..]));
    assert_eq!(capture.channel(1), Some(&[i16::MAX, i16::MIN][..]));
}

#[test]
fn test_mono_capture_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.wav");
    write_wav(&path, 1, 44100, &[1, 2, 3, 4]);

    let err = StereoCapture::load(&path).unwrap_err();
    assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");
}

#[test]
fn test_float_capture_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.wav");
    let spec = WavSpec {
        channels: 2,
        sample_rate: 44100,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(&path, spec).unwrap();
    for s in [0.5f32, -0.5, 0.25, -0.25] {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();

    let err = StereoCapture::load(&path).unwrap_err();
    assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");
}

#[test]
fn test_not_a_wav_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.wav");
    std::fs::write(&path, b"not a riff header").unwrap();

    let err = StereoCapture::load(&path).unwrap_err();
    assert_eq!(err.error_code(), "AUDIO_READ_ERROR");
}

#[test]
fn test_missing_capture() {
    let dir = tempdir().unwrap();
    let err = StereoCapture::load(&dir.path().join("card.wav")).unwrap_err();
    assert_eq!(err.error_code(), "FILE_NOT_FOUND");
}
