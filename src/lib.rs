//! gtwav - WAV to C array converter library
//!
//! This library exposes the internal modules for testing purposes.

pub mod cgen;
pub mod convert;
pub mod error;
pub mod wav;
