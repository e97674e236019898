//! Audio sample format definitions
//!
//! Sample format tags are bit-packed: the byte width of one sample lives in
//! the bits above [`MASK_BITS`], and the low bits carry the integer/signed/
//! planar/byte-order flags. Size class and flags are therefore extracted in
//! O(1) without a lookup table. Tag values at or above `64 << MASK_BITS` are
//! reserved for special formats.

use crate::error::Error;
use crate::ffcompat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of low bits reserved for the flag masks
pub const MASK_BITS: u32 = 5;
/// Flag bit: integer sample values
pub const INT_MASK: u32 = 1;
/// Flag bit: signed integer sample values
pub const SIGNED_MASK: u32 = 1 << 1;
/// Flag bit: planar storage (one plane per channel)
pub const PLANAR_MASK: u32 = 1 << 2;
/// Flag bit: non-native byte order (reserved, unset in all current variants)
pub const BYTE_ORDER_MASK: u32 = 1 << 3;

/// Audio sample format
///
/// Discriminants encode `(bytes_per_sample << MASK_BITS) | flags`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleFormat {
    /// Unknown format
    Unknown = 0,
    /// Unsigned 8-bit
    Unsigned8 = (1 << MASK_BITS) | INT_MASK,
    /// Signed 8-bit
    Signed8 = (1 << MASK_BITS) | SIGNED_MASK | INT_MASK,
    /// Unsigned 16-bit
    Unsigned16 = (2 << MASK_BITS) | INT_MASK,
    /// Signed 16-bit
    Signed16 = (2 << MASK_BITS) | SIGNED_MASK | INT_MASK,
    /// Unsigned 24-bit
    Unsigned24 = (3 << MASK_BITS) | INT_MASK,
    /// Signed 24-bit
    Signed24 = (3 << MASK_BITS) | SIGNED_MASK | INT_MASK,
    /// Unsigned 32-bit
    Unsigned32 = (4 << MASK_BITS) | INT_MASK,
    /// Signed 32-bit
    Signed32 = (4 << MASK_BITS) | SIGNED_MASK | INT_MASK,
    /// 32-bit float
    Float = 4 << MASK_BITS,
    /// 64-bit float
    Double = 8 << MASK_BITS,
    /// Unsigned 8-bit planar
    Unsigned8Planar = (1 << MASK_BITS) | PLANAR_MASK | INT_MASK,
    /// Signed 16-bit planar
    Signed16Planar = (2 << MASK_BITS) | PLANAR_MASK | SIGNED_MASK | INT_MASK,
    /// Signed 32-bit planar
    Signed32Planar = (4 << MASK_BITS) | PLANAR_MASK | SIGNED_MASK | INT_MASK,
    /// 32-bit float planar
    FloatPlanar = (4 << MASK_BITS) | PLANAR_MASK,
    /// 64-bit float planar
    DoublePlanar = (8 << MASK_BITS) | PLANAR_MASK,
}

/// Sample value classification derived from the format flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleType {
    /// Integer samples
    Int,
    /// 32-bit float samples
    Float,
    /// 64-bit float samples
    Double,
}

impl SampleFormat {
    /// Alias for the format of not-yet-probed input
    pub const INPUT: SampleFormat = SampleFormat::Unknown;

    /// All defined formats, `Unknown` included
    pub const ALL: [SampleFormat; 16] = [
        SampleFormat::Unknown,
        SampleFormat::Unsigned8,
        SampleFormat::Signed8,
        SampleFormat::Unsigned16,
        SampleFormat::Signed16,
        SampleFormat::Unsigned24,
        SampleFormat::Signed24,
        SampleFormat::Unsigned32,
        SampleFormat::Signed32,
        SampleFormat::Float,
        SampleFormat::Double,
        SampleFormat::Unsigned8Planar,
        SampleFormat::Signed16Planar,
        SampleFormat::Signed32Planar,
        SampleFormat::FloatPlanar,
        SampleFormat::DoublePlanar,
    ];

    /// Get the raw bit-packed tag value
    pub fn bits(&self) -> u32 {
        *self as u32
    }

    /// Reconstruct a format from its bit-packed tag value
    ///
    /// Values that do not name a defined format (reserved or garbage) map to
    /// `Unknown`.
    pub fn from_bits(bits: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.bits() == bits)
            .unwrap_or(SampleFormat::Unknown)
    }

    /// Get the size in bytes of one sample
    ///
    /// The size class is carried in the tag bits above `MASK_BITS`, so this
    /// is 0 for `Unknown` and one of {1, 2, 3, 4, 8} otherwise.
    pub fn sample_size(&self) -> usize {
        (self.bits() >> MASK_BITS) as usize
    }

    /// Check if this is a planar format
    pub fn is_planar(&self) -> bool {
        self.bits() & PLANAR_MASK != 0
    }

    /// Check if this is a packed (interleaved) format
    pub fn is_packed(&self) -> bool {
        *self != SampleFormat::Unknown && !self.is_planar()
    }

    /// Check if this is an integer format
    pub fn is_integer(&self) -> bool {
        self.bits() & INT_MASK != 0
    }

    /// Check if this is a floating point format
    pub fn is_float(&self) -> bool {
        *self != SampleFormat::Unknown && !self.is_integer()
    }

    /// Check if this is a signed integer format
    pub fn is_signed(&self) -> bool {
        self.bits() & SIGNED_MASK != 0
    }

    /// Check if this is an unsigned integer format
    pub fn is_unsigned(&self) -> bool {
        self.is_integer() && !self.is_signed()
    }

    /// Classify the sample values, `None` for `Unknown`
    pub fn sample_type(&self) -> Option<SampleType> {
        if *self == SampleFormat::Unknown {
            None
        } else if self.is_integer() {
            Some(SampleType::Int)
        } else if self.sample_size() == 8 {
            Some(SampleType::Double)
        } else {
            Some(SampleType::Float)
        }
    }

    /// Get the packed equivalent of this format
    ///
    /// Identity for formats that are already packed or have no packed
    /// counterpart in the defined set.
    pub fn to_packed(&self) -> Self {
        match self {
            SampleFormat::Unsigned8Planar => SampleFormat::Unsigned8,
            SampleFormat::Signed16Planar => SampleFormat::Signed16,
            SampleFormat::Signed32Planar => SampleFormat::Signed32,
            SampleFormat::FloatPlanar => SampleFormat::Float,
            SampleFormat::DoublePlanar => SampleFormat::Double,
            _ => *self,
        }
    }

    /// Get the planar equivalent of this format
    ///
    /// Identity for formats that are already planar or have no planar
    /// counterpart in the defined set.
    pub fn to_planar(&self) -> Self {
        match self {
            SampleFormat::Unsigned8 => SampleFormat::Unsigned8Planar,
            SampleFormat::Signed16 => SampleFormat::Signed16Planar,
            SampleFormat::Signed32 => SampleFormat::Signed32Planar,
            SampleFormat::Float => SampleFormat::FloatPlanar,
            SampleFormat::Double => SampleFormat::DoublePlanar,
            _ => *self,
        }
    }

    /// Translate an FFmpeg `AVSampleFormat` code
    ///
    /// Codes with no counterpart in the defined set (including `S64`/`S64P`)
    /// map to `Unknown`.
    pub fn from_ffmpeg(code: i32) -> Self {
        match code {
            ffcompat::SAMPLE_FMT_U8 => SampleFormat::Unsigned8,
            ffcompat::SAMPLE_FMT_S16 => SampleFormat::Signed16,
            ffcompat::SAMPLE_FMT_S32 => SampleFormat::Signed32,
            ffcompat::SAMPLE_FMT_FLT => SampleFormat::Float,
            ffcompat::SAMPLE_FMT_DBL => SampleFormat::Double,
            ffcompat::SAMPLE_FMT_U8P => SampleFormat::Unsigned8Planar,
            ffcompat::SAMPLE_FMT_S16P => SampleFormat::Signed16Planar,
            ffcompat::SAMPLE_FMT_S32P => SampleFormat::Signed32Planar,
            ffcompat::SAMPLE_FMT_FLTP => SampleFormat::FloatPlanar,
            ffcompat::SAMPLE_FMT_DBLP => SampleFormat::DoublePlanar,
            _ => {
                tracing::trace!("unmapped FFmpeg sample format code {}", code);
                SampleFormat::Unknown
            }
        }
    }

    /// Translate to an FFmpeg `AVSampleFormat` code
    ///
    /// `Unknown` and formats FFmpeg has no code for (signed 8-bit, unsigned
    /// 16/24/32-bit, signed 24-bit) yield `SAMPLE_FMT_NONE`.
    pub fn to_ffmpeg(&self) -> i32 {
        match self {
            SampleFormat::Unsigned8 => ffcompat::SAMPLE_FMT_U8,
            SampleFormat::Signed16 => ffcompat::SAMPLE_FMT_S16,
            SampleFormat::Signed32 => ffcompat::SAMPLE_FMT_S32,
            SampleFormat::Float => ffcompat::SAMPLE_FMT_FLT,
            SampleFormat::Double => ffcompat::SAMPLE_FMT_DBL,
            SampleFormat::Unsigned8Planar => ffcompat::SAMPLE_FMT_U8P,
            SampleFormat::Signed16Planar => ffcompat::SAMPLE_FMT_S16P,
            SampleFormat::Signed32Planar => ffcompat::SAMPLE_FMT_S32P,
            SampleFormat::FloatPlanar => ffcompat::SAMPLE_FMT_FLTP,
            SampleFormat::DoublePlanar => ffcompat::SAMPLE_FMT_DBLP,
            _ => ffcompat::SAMPLE_FMT_NONE,
        }
    }

    /// Get the format name
    pub fn name(&self) -> &'static str {
        match self {
            SampleFormat::Unknown => "unknown",
            SampleFormat::Unsigned8 => "u8",
            SampleFormat::Signed8 => "s8",
            SampleFormat::Unsigned16 => "u16",
            SampleFormat::Signed16 => "s16",
            SampleFormat::Unsigned24 => "u24",
            SampleFormat::Signed24 => "s24",
            SampleFormat::Unsigned32 => "u32",
            SampleFormat::Signed32 => "s32",
            SampleFormat::Float => "f32",
            SampleFormat::Double => "f64",
            SampleFormat::Unsigned8Planar => "u8p",
            SampleFormat::Signed16Planar => "s16p",
            SampleFormat::Signed32Planar => "s32p",
            SampleFormat::FloatPlanar => "f32p",
            SampleFormat::DoublePlanar => "f64p",
        }
    }
}

impl Default for SampleFormat {
    fn default() -> Self {
        SampleFormat::Unknown
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| *f != SampleFormat::Unknown && f.name() == s)
            .ok_or_else(|| Error::unsupported(format!("sample format name '{}'", s)))
    }
}
