//! Conversion pipeline
//!
//! Ties wav decoding to c emission: check the input, decode it, derive
//! the output paths, then write the source/header pair sequentially.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cgen::{self, AudioParams};
use crate::error::ConvertError;
use crate::wav;

/// What a finished conversion produced.
#[derive(Debug)]
pub struct ConversionReport {
    pub source_path: PathBuf,
    pub header_path: PathBuf,
    pub sample_count: usize,
    pub byte_size: usize,
    pub sample_rate: u32,
    pub duration_ms: u64,
}

/// Convert a 16-bit pcm wav file into a `<out_dir>/<stem>_data.c` /
/// `<stem>_data.h` pair embedding the samples as `const int16_t`.
///
/// Nothing is written until the input has fully decoded; if the header
/// write fails after the source write succeeded, the source file is left
/// behind (the two writes are sequential, not transactional).
pub fn convert(
    input: &Path,
    array_name: &str,
    out_dir: &Path,
) -> Result<ConversionReport, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::FileNotFound(input.to_path_buf()));
    }

    let (info, samples) = wav::read_mono_samples(input)?;

    println!(
        "  {} ch, {} hz, {}-bit, {} frames",
        info.channels, info.sample_rate, info.bits_per_sample, info.frames
    );
    if info.channels == 2 {
        println!("  Downmixing stereo to mono...");
    }

    let stem = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_string_lossy();
    let source_path = out_dir.join(format!("{stem}_data.c"));
    let header_path = source_path.with_extension("h");

    let params = AudioParams {
        sample_rate: info.sample_rate,
        sample_count: samples.len(),
    };
    let input_name = input.display().to_string();
    let header_file_name = header_path
        .file_name()
        .unwrap_or(header_path.as_os_str())
        .to_string_lossy()
        .into_owned();

    let source = cgen::render_source(&input_name, array_name, &params, &samples);
    let header = cgen::render_header(&header_file_name, array_name, &params);

    fs::create_dir_all(out_dir)?;
    fs::write(&source_path, source)?;
    fs::write(&header_path, header)?;

    Ok(ConversionReport {
        source_path,
        header_path,
        sample_count: samples.len(),
        byte_size: samples.len() * 2,
        sample_rate: info.sample_rate,
        duration_ms: params.duration_ms(),
    })
}
