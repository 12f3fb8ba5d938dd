//! Conversion errors
//!
//! Every failure is terminal for the run; variants exist for diagnostic
//! clarity, not differing recovery.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("unsupported sample width: {bits}-bit (only 16-bit integer pcm is supported)")]
    UnsupportedFormat { bits: u16 },
    #[error("unsupported channel count: {0} (only mono and stereo are supported)")]
    UnsupportedChannels(u16),
    #[error("invalid sample rate: 0 hz")]
    ZeroSampleRate,
    #[error("malformed wav file: {0}")]
    Malformed(#[from] hound::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
