//! FFmpeg enumeration constants for sample formats and channel layouts
//!
//! The descriptor types translate to and from FFmpeg's native codes purely as
//! integers; there is no linkage against libavutil. The values here mirror
//! `AVSampleFormat` and the `AV_CH_*` bitmask space, so adding support for a
//! new external code only requires extending the mapping tables.

/// `AV_SAMPLE_FMT_NONE`, the invalid sample format sentinel
pub const SAMPLE_FMT_NONE: i32 = -1;
/// `AV_SAMPLE_FMT_U8`, unsigned 8-bit packed
pub const SAMPLE_FMT_U8: i32 = 0;
/// `AV_SAMPLE_FMT_S16`, signed 16-bit packed
pub const SAMPLE_FMT_S16: i32 = 1;
/// `AV_SAMPLE_FMT_S32`, signed 32-bit packed
pub const SAMPLE_FMT_S32: i32 = 2;
/// `AV_SAMPLE_FMT_FLT`, 32-bit float packed
pub const SAMPLE_FMT_FLT: i32 = 3;
/// `AV_SAMPLE_FMT_DBL`, 64-bit float packed
pub const SAMPLE_FMT_DBL: i32 = 4;
/// `AV_SAMPLE_FMT_U8P`, unsigned 8-bit planar
pub const SAMPLE_FMT_U8P: i32 = 5;
/// `AV_SAMPLE_FMT_S16P`, signed 16-bit planar
pub const SAMPLE_FMT_S16P: i32 = 6;
/// `AV_SAMPLE_FMT_S32P`, signed 32-bit planar
pub const SAMPLE_FMT_S32P: i32 = 7;
/// `AV_SAMPLE_FMT_FLTP`, 32-bit float planar
pub const SAMPLE_FMT_FLTP: i32 = 8;
/// `AV_SAMPLE_FMT_DBLP`, 64-bit float planar
pub const SAMPLE_FMT_DBLP: i32 = 9;
/// `AV_SAMPLE_FMT_S64`, signed 64-bit packed (no descriptor counterpart)
pub const SAMPLE_FMT_S64: i32 = 10;
/// `AV_SAMPLE_FMT_S64P`, signed 64-bit planar (no descriptor counterpart)
pub const SAMPLE_FMT_S64P: i32 = 11;

/// `AV_CH_FRONT_LEFT`
pub const CH_FRONT_LEFT: i64 = 0x1;
/// `AV_CH_FRONT_RIGHT`
pub const CH_FRONT_RIGHT: i64 = 0x2;
/// `AV_CH_FRONT_CENTER`
pub const CH_FRONT_CENTER: i64 = 0x4;
/// `AV_CH_LOW_FREQUENCY`
pub const CH_LOW_FREQUENCY: i64 = 0x8;
/// `AV_CH_BACK_LEFT`
pub const CH_BACK_LEFT: i64 = 0x10;
/// `AV_CH_BACK_RIGHT`
pub const CH_BACK_RIGHT: i64 = 0x20;
/// `AV_CH_BACK_CENTER`
pub const CH_BACK_CENTER: i64 = 0x100;
/// `AV_CH_SIDE_LEFT`
pub const CH_SIDE_LEFT: i64 = 0x200;
/// `AV_CH_SIDE_RIGHT`
pub const CH_SIDE_RIGHT: i64 = 0x400;

/// `AV_CH_LAYOUT_MONO` (front center only)
pub const CH_LAYOUT_MONO: i64 = CH_FRONT_CENTER;
/// `AV_CH_LAYOUT_STEREO`
pub const CH_LAYOUT_STEREO: i64 = CH_FRONT_LEFT | CH_FRONT_RIGHT;
/// `AV_CH_LAYOUT_2POINT1`
pub const CH_LAYOUT_2POINT1: i64 = CH_LAYOUT_STEREO | CH_LOW_FREQUENCY;
/// `AV_CH_LAYOUT_SURROUND` (3.0)
pub const CH_LAYOUT_SURROUND: i64 = CH_LAYOUT_STEREO | CH_FRONT_CENTER;
/// `AV_CH_LAYOUT_4POINT0`
pub const CH_LAYOUT_4POINT0: i64 = CH_LAYOUT_SURROUND | CH_BACK_CENTER;
/// `AV_CH_LAYOUT_QUAD`
pub const CH_LAYOUT_QUAD: i64 = CH_LAYOUT_STEREO | CH_BACK_LEFT | CH_BACK_RIGHT;
/// `AV_CH_LAYOUT_5POINT0_BACK`
pub const CH_LAYOUT_5POINT0_BACK: i64 = CH_LAYOUT_SURROUND | CH_BACK_LEFT | CH_BACK_RIGHT;
/// `AV_CH_LAYOUT_5POINT1_BACK` (the common "5.1")
pub const CH_LAYOUT_5POINT1_BACK: i64 = CH_LAYOUT_5POINT0_BACK | CH_LOW_FREQUENCY;
/// `AV_CH_LAYOUT_5POINT0` (side speakers)
pub const CH_LAYOUT_5POINT0: i64 = CH_LAYOUT_SURROUND | CH_SIDE_LEFT | CH_SIDE_RIGHT;
/// `AV_CH_LAYOUT_5POINT1` (side speakers)
pub const CH_LAYOUT_5POINT1: i64 = CH_LAYOUT_5POINT0 | CH_LOW_FREQUENCY;
/// `AV_CH_LAYOUT_6POINT1`
pub const CH_LAYOUT_6POINT1: i64 = CH_LAYOUT_5POINT1 | CH_BACK_CENTER;
/// `AV_CH_LAYOUT_7POINT1`
pub const CH_LAYOUT_7POINT1: i64 = CH_LAYOUT_5POINT1 | CH_BACK_LEFT | CH_BACK_RIGHT;

/// Default channel layout for a channel count
///
/// Mirrors FFmpeg's `av_get_default_channel_layout` table for 1 to 8
/// channels. Returns 0 (unspecified) for counts outside that range.
pub fn default_channel_layout(channels: i32) -> i64 {
    match channels {
        1 => CH_LAYOUT_MONO,
        2 => CH_LAYOUT_STEREO,
        3 => CH_LAYOUT_2POINT1,
        4 => CH_LAYOUT_4POINT0,
        5 => CH_LAYOUT_5POINT0_BACK,
        6 => CH_LAYOUT_5POINT1_BACK,
        7 => CH_LAYOUT_6POINT1,
        8 => CH_LAYOUT_7POINT1,
        _ => 0,
    }
}

/// Number of channels described by a layout bitmask
///
/// Mirrors `av_get_channel_layout_nb_channels`: one channel per set bit.
pub fn channel_count(layout: i64) -> i32 {
    layout.count_ones() as i32
}
