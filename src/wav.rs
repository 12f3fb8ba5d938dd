//! WAV decoding
//!
//! Opens a wav container with hound, validates it against what the ROM
//! audio path can play (16-bit integer pcm, mono or stereo), and decodes
//! it to a flat mono sample buffer.

use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::error::ConvertError;

/// Stream parameters read once from the container header.
#[derive(Debug, Clone, Copy)]
pub struct WavInfo {
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_rate: u32,
    pub frames: u32,
}

/// Decode a wav file to mono samples, downmixing stereo by averaging.
///
/// Validation happens before any frame is decoded: non-16-bit or
/// float-format input fails with `UnsupportedFormat`, and channel counts
/// other than 1 or 2 fail with `UnsupportedChannels` rather than being
/// mis-read as stereo.
pub fn read_mono_samples(path: &Path) -> Result<(WavInfo, Vec<i16>), ConvertError> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let info = WavInfo {
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        sample_rate: spec.sample_rate,
        frames: reader.duration(),
    };

    if spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int {
        return Err(ConvertError::UnsupportedFormat {
            bits: spec.bits_per_sample,
        });
    }

    match spec.channels {
        1 | 2 => {}
        n => return Err(ConvertError::UnsupportedChannels(n)),
    }

    // a zero rate parses cleanly but would divide by zero in the
    // duration macro, so reject it with the other header checks
    if spec.sample_rate == 0 {
        return Err(ConvertError::ZeroSampleRate);
    }

    let raw = reader
        .samples::<i16>()
        .collect::<Result<Vec<i16>, hound::Error>>()?;

    let samples = if spec.channels == 1 {
        raw
    } else {
        downmix_stereo(&raw)
    };

    Ok((info, samples))
}

/// Average interleaved stereo pairs into mono samples.
///
/// Uses c-style truncating division, matching what the generated data is
/// compared against on the ROM side: `(-3 + 2) / 2 == 0`, not -1.
pub fn downmix_stereo(interleaved: &[i16]) -> Vec<i16> {
    interleaved
        .chunks_exact(2)
        .map(|lr| ((lr[0] as i32 + lr[1] as i32) / 2) as i16)
        .collect()
}
