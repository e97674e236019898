//! avsample - audio sample format descriptors
//!
//! A compact value-type library for describing PCM audio: bit-packed sample
//! format tags (bit depth, signedness, integer/float, planar/packed), a small
//! channel layout set with raw FFmpeg bitmask fidelity, and exact integer
//! arithmetic between byte counts, frame counts, and microsecond durations.
//!
//! # Architecture
//!
//! - `samplefmt`: the bit-packed [`SampleFormat`] tag and [`SampleType`]
//! - `channel`: the closed [`ChannelLayout`] tag set
//! - `format`: the [`AudioFormat`] descriptor and its calculators
//! - `ffcompat`: FFmpeg enumeration constants the mapping tables translate
//!   to and from (integers only, no linkage)
//! - `error`: error types for the textual parsing boundary
//!
//! The descriptor performs no I/O, decoding, or resampling; it is a pure
//! descriptor and calculator. Invalid inputs never panic or error: they
//! degrade to sentinel states (`Unknown`, `Unsupported`, calculator results
//! of 0) and [`AudioFormat::is_valid`] is the single validity check.

pub mod channel;
pub mod error;
pub mod ffcompat;
pub mod format;
pub mod samplefmt;

pub use channel::ChannelLayout;
pub use error::{Error, Result};
pub use format::AudioFormat;
pub use samplefmt::{SampleFormat, SampleType};

/// avsample version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
