//! Audio format descriptor
//!
//! [`AudioFormat`] bundles a sample rate, channel count, channel layout, and
//! sample format, and derives byte/frame/duration quantities from them. It is
//! a plain `Copy` value: copies are cheap and fully independent, so instances
//! can be shared across threads freely as long as no one mutates a shared
//! reference.

use crate::channel::ChannelLayout;
use crate::ffcompat;
use crate::samplefmt::SampleFormat;
use serde::{Deserialize, Serialize};
use std::fmt;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// An audio sample format descriptor
///
/// Default-constructed descriptors are invalid (0 Hz, 0 channels, unknown
/// format). Mutators keep the channel count and layout consistent with each
/// other; the raw FFmpeg layout code is stored alongside the tag so that
/// layouts outside the closed tag set survive a round trip through the
/// descriptor.
///
/// Equality covers the sample rate, channel count, layout tag, and sample
/// format. The raw FFmpeg layout code is deliberately excluded: two
/// descriptors that agree on those four attributes compare equal even if
/// their raw codes differ.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AudioFormat {
    sample_rate: i32,
    channels: i32,
    channel_layout_ff: i64,
    channel_layout: ChannelLayout,
    sample_format: SampleFormat,
}

impl AudioFormat {
    /// Create a descriptor with the given rate, channel count, and format
    ///
    /// The channel layout is derived from the channel count the same way
    /// [`set_channels`](Self::set_channels) derives it.
    pub fn new(sample_rate: i32, channels: i32, sample_format: SampleFormat) -> Self {
        let mut format = AudioFormat::default();
        format.set_sample_rate(sample_rate);
        format.set_channels(channels);
        format.set_sample_format(sample_format);
        format
    }

    /// Check if the descriptor is usable
    ///
    /// Holds iff the sample rate and channel count are positive and the
    /// sample format is known. Every calculator returns 0 when this is false.
    pub fn is_valid(&self) -> bool {
        self.sample_rate > 0 && self.channels > 0 && self.sample_format != SampleFormat::Unknown
    }

    /// Check if the active sample format is planar
    pub fn is_planar(&self) -> bool {
        self.sample_format.is_planar()
    }

    /// Number of data planes: the channel count for planar formats, 1 otherwise
    pub fn plane_count(&self) -> i32 {
        if self.is_planar() {
            self.channels
        } else {
            1
        }
    }

    /// Get the sample rate in Hz
    pub fn sample_rate(&self) -> i32 {
        self.sample_rate
    }

    /// Set the sample rate in Hz
    ///
    /// Stored unvalidated; a rate of 0 or below leaves the descriptor invalid.
    pub fn set_sample_rate(&mut self, sample_rate: i32) {
        self.sample_rate = sample_rate;
    }

    /// Get the channel count
    pub fn channels(&self) -> i32 {
        self.channels
    }

    /// Set the channel count
    ///
    /// If the count does not match the current layout's canonical count, the
    /// layout is reset to the default for that count (1 -> mono, 2 -> stereo,
    /// anything else -> unsupported with FFmpeg's default bitmask for the
    /// count, 0 when there is none).
    pub fn set_channels(&mut self, channels: i32) {
        self.channels = channels;
        if self.channel_layout.channels() != channels {
            self.channel_layout = ChannelLayout::default_for_channels(channels);
            self.channel_layout_ff = ffcompat::default_channel_layout(channels);
        }
    }

    /// Get the channel layout tag
    pub fn channel_layout(&self) -> ChannelLayout {
        self.channel_layout
    }

    /// Set the channel layout from the closed tag set
    ///
    /// Updates the raw FFmpeg code and, for every tag but `Unsupported`, the
    /// channel count. `Unsupported` keeps the caller-supplied count since the
    /// tag alone does not determine one.
    pub fn set_channel_layout(&mut self, layout: ChannelLayout) {
        self.channel_layout = layout;
        self.channel_layout_ff = layout.to_ffmpeg();
        let channels = layout.channels();
        if channels > 0 {
            self.channels = channels;
        }
    }

    /// Get the raw FFmpeg channel layout bitmask
    ///
    /// Preserved verbatim from
    /// [`set_channel_layout_ffmpeg`](Self::set_channel_layout_ffmpeg) even
    /// when the tag is `Unsupported`.
    pub fn channel_layout_ffmpeg(&self) -> i64 {
        self.channel_layout_ff
    }

    /// Set the channel layout from a raw FFmpeg bitmask
    ///
    /// The tag is derived by the lossy closed-set mapping and the channel
    /// count from the bitmask's population count, but the raw code itself is
    /// kept with full fidelity.
    pub fn set_channel_layout_ffmpeg(&mut self, layout: i64) {
        self.channel_layout_ff = layout;
        self.channel_layout = ChannelLayout::from_ffmpeg(layout);
        self.channels = ffcompat::channel_count(layout);
    }

    /// Get the channel layout name
    pub fn channel_layout_name(&self) -> &'static str {
        self.channel_layout.name()
    }

    /// Get the sample format
    pub fn sample_format(&self) -> SampleFormat {
        self.sample_format
    }

    /// Set the sample format
    pub fn set_sample_format(&mut self, sample_format: SampleFormat) {
        self.sample_format = sample_format;
    }

    /// Get the sample format as an FFmpeg `AVSampleFormat` code
    pub fn sample_format_ffmpeg(&self) -> i32 {
        self.sample_format.to_ffmpeg()
    }

    /// Set the sample format from an FFmpeg `AVSampleFormat` code
    ///
    /// Unmapped codes set `SampleFormat::Unknown`.
    pub fn set_sample_format_ffmpeg(&mut self, code: i32) {
        self.sample_format = SampleFormat::from_ffmpeg(code);
    }

    /// Get the sample format name
    pub fn sample_format_name(&self) -> &'static str {
        self.sample_format.name()
    }

    /// Bytes per sample, 0 if the descriptor is invalid
    pub fn bytes_per_sample(&self) -> usize {
        if !self.is_valid() {
            return 0;
        }
        self.sample_format.sample_size()
    }

    /// Synonym for [`bytes_per_sample`](Self::bytes_per_sample)
    pub fn sample_size(&self) -> usize {
        self.bytes_per_sample()
    }

    /// Bytes per frame (one sample per channel), 0 if invalid
    ///
    /// Planar and packed formats agree here: splitting storage across planes
    /// does not change the logical byte count of a frame.
    pub fn bytes_per_frame(&self) -> usize {
        self.bytes_per_sample() * self.channels.max(0) as usize
    }

    /// Bytes per second of audio, 0 if invalid
    pub fn bytes_per_second(&self) -> i64 {
        self.sample_rate.max(0) as i64 * self.bytes_per_frame() as i64
    }

    /// Bit rate in bits per second, 0 if invalid
    pub fn bit_rate(&self) -> i64 {
        self.bytes_per_second() * 8
    }

    /// Bytes occupied by a number of frames, 0 if invalid
    pub fn bytes_for_frames(&self, frame_count: i64) -> i64 {
        frame_count * self.bytes_per_frame() as i64
    }

    /// Whole frames contained in a byte count, 0 if invalid
    ///
    /// Floor division: `bytes_for_frames(frames_for_bytes(b)) <= b`.
    pub fn frames_for_bytes(&self, byte_count: i64) -> i64 {
        let bytes_per_frame = self.bytes_per_frame() as i64;
        if bytes_per_frame == 0 {
            return 0;
        }
        byte_count / bytes_per_frame
    }

    /// Whole frames contained in a duration in microseconds, 0 if invalid
    ///
    /// Truncates toward zero, as do all duration conversions here.
    pub fn frames_for_duration(&self, duration_us: i64) -> i64 {
        if !self.is_valid() {
            return 0;
        }
        duration_us * self.sample_rate as i64 / MICROS_PER_SECOND
    }

    /// Duration in microseconds of a number of frames, 0 if invalid
    pub fn duration_for_frames(&self, frame_count: i64) -> i64 {
        if !self.is_valid() {
            return 0;
        }
        frame_count * MICROS_PER_SECOND / self.sample_rate as i64
    }

    /// Bytes occupied by a duration in microseconds, 0 if invalid
    ///
    /// Companion of [`duration_for_bytes`](Self::duration_for_bytes): the two
    /// are exact inverses whenever no truncation loss occurs.
    pub fn bytes_for_duration(&self, duration_us: i64) -> i64 {
        self.frames_for_duration(duration_us) * self.bytes_per_frame() as i64
    }

    /// Duration in microseconds of a byte count, 0 if invalid
    pub fn duration_for_bytes(&self, byte_count: i64) -> i64 {
        self.duration_for_frames(self.frames_for_bytes(byte_count))
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        AudioFormat {
            sample_rate: 0,
            channels: 0,
            channel_layout_ff: 0,
            channel_layout: ChannelLayout::Unsupported,
            sample_format: SampleFormat::Unknown,
        }
    }
}

impl PartialEq for AudioFormat {
    fn eq(&self, other: &Self) -> bool {
        self.sample_rate == other.sample_rate
            && self.channels == other.channels
            && self.channel_layout == other.channel_layout
            && self.sample_format == other.sample_format
    }
}

impl Eq for AudioFormat {}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Hz, {} ch, {}, {}",
            self.sample_rate,
            self.channels,
            self.sample_format.name(),
            self.channel_layout.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cd_format() -> AudioFormat {
        AudioFormat::new(44100, 2, SampleFormat::Signed16)
    }

    #[test]
    fn test_default_is_invalid() {
        let format = AudioFormat::default();
        assert!(!format.is_valid());
        assert_eq!(format.sample_format(), SampleFormat::Unknown);
        assert_eq!(format.channel_layout(), ChannelLayout::Unsupported);
        assert_eq!(format.channels(), 0);
    }

    #[test]
    fn test_new_derives_layout() {
        let format = cd_format();
        assert!(format.is_valid());
        assert_eq!(format.channel_layout(), ChannelLayout::Stereo);
        assert_eq!(
            format.channel_layout_ffmpeg(),
            ffcompat::CH_LAYOUT_STEREO
        );
    }

    #[test]
    fn test_set_channels_resets_layout() {
        let mut format = cd_format();

        format.set_channels(1);
        assert_eq!(format.channel_layout(), ChannelLayout::Center);
        assert_eq!(format.channel_layout_ffmpeg(), ffcompat::CH_LAYOUT_MONO);

        format.set_channels(2);
        assert_eq!(format.channel_layout(), ChannelLayout::Stereo);

        format.set_channels(6);
        assert_eq!(format.channel_layout(), ChannelLayout::Unsupported);
        assert_eq!(
            format.channel_layout_ffmpeg(),
            ffcompat::CH_LAYOUT_5POINT1_BACK
        );
    }

    #[test]
    fn test_set_channels_keeps_matching_layout() {
        let mut format = cd_format();
        format.set_channel_layout(ChannelLayout::Left);
        assert_eq!(format.channels(), 1);

        // 1 channel already matches Left's canonical count
        format.set_channels(1);
        assert_eq!(format.channel_layout(), ChannelLayout::Left);
    }

    #[test]
    fn test_set_channel_layout_updates_channels() {
        let mut format = cd_format();
        format.set_channel_layout(ChannelLayout::MONO);
        assert_eq!(format.channels(), 1);
        assert_eq!(format.channel_layout_name(), "mono");

        // Unsupported keeps the caller-supplied count
        format.set_channels(6);
        format.set_channel_layout(ChannelLayout::Unsupported);
        assert_eq!(format.channels(), 6);
    }

    #[test]
    fn test_raw_layout_fidelity() {
        let mut format = cd_format();
        format.set_channel_layout_ffmpeg(ffcompat::CH_LAYOUT_5POINT1_BACK);
        assert_eq!(format.channel_layout(), ChannelLayout::Unsupported);
        assert_eq!(
            format.channel_layout_ffmpeg(),
            ffcompat::CH_LAYOUT_5POINT1_BACK
        );
        assert_eq!(format.channels(), 6);
    }

    #[test]
    fn test_sample_format_ffmpeg_accessors() {
        let mut format = cd_format();
        assert_eq!(format.sample_format_ffmpeg(), ffcompat::SAMPLE_FMT_S16);

        format.set_sample_format_ffmpeg(ffcompat::SAMPLE_FMT_FLTP);
        assert_eq!(format.sample_format(), SampleFormat::FloatPlanar);

        format.set_sample_format_ffmpeg(999);
        assert_eq!(format.sample_format(), SampleFormat::Unknown);
        assert!(!format.is_valid());
    }

    #[test]
    fn test_plane_count() {
        let mut format = cd_format();
        assert_eq!(format.plane_count(), 1);

        format.set_sample_format(SampleFormat::Signed16Planar);
        assert!(format.is_planar());
        assert_eq!(format.plane_count(), 2);

        // Frame byte count is layout-independent
        assert_eq!(format.bytes_per_frame(), 4);
    }

    #[test]
    fn test_cd_quality_arithmetic() {
        let format = cd_format();
        assert_eq!(format.bytes_per_sample(), 2);
        assert_eq!(format.sample_size(), 2);
        assert_eq!(format.bytes_per_frame(), 4);
        assert_eq!(format.bytes_per_second(), 176_400);
        assert_eq!(format.bit_rate(), 1_411_200);
    }

    #[test]
    fn test_duration_conversions() {
        let format = cd_format();
        assert_eq!(format.bytes_for_duration(MICROS_PER_SECOND), 176_400);
        assert_eq!(format.duration_for_bytes(176_400), MICROS_PER_SECOND);
        assert_eq!(format.frames_for_duration(MICROS_PER_SECOND), 44_100);
        assert_eq!(format.duration_for_frames(44_100), MICROS_PER_SECOND);
    }

    #[test]
    fn test_frame_byte_floor_inverse() {
        let format = cd_format();
        for bytes in [0i64, 1, 3, 4, 5, 4095, 176_400, 176_401] {
            let round_trip = format.bytes_for_frames(format.frames_for_bytes(bytes));
            assert!(round_trip <= bytes);
            assert!(bytes - round_trip < format.bytes_per_frame() as i64);
        }
    }

    #[test]
    fn test_long_duration_no_overflow() {
        let format = AudioFormat::new(192_000, 64, SampleFormat::Double);
        let day_us = 24 * 3600 * MICROS_PER_SECOND;
        let bytes = format.bytes_for_duration(day_us);
        assert_eq!(bytes, 192_000 * 64 * 8 * 24 * 3600);
        assert_eq!(format.duration_for_bytes(bytes), day_us);
    }

    #[test]
    fn test_invalid_format_calculators_return_zero() {
        let mut format = cd_format();
        format.set_sample_rate(0);
        assert!(!format.is_valid());
        assert_eq!(format.bytes_per_sample(), 0);
        assert_eq!(format.bytes_per_frame(), 0);
        assert_eq!(format.bytes_per_second(), 0);
        assert_eq!(format.bit_rate(), 0);
        assert_eq!(format.bytes_for_frames(100), 0);
        assert_eq!(format.frames_for_bytes(100), 0);
        assert_eq!(format.bytes_for_duration(MICROS_PER_SECOND), 0);
        assert_eq!(format.duration_for_bytes(176_400), 0);
        assert_eq!(format.frames_for_duration(MICROS_PER_SECOND), 0);
        assert_eq!(format.duration_for_frames(100), 0);

        let mut format = cd_format();
        format.set_sample_format(SampleFormat::Unknown);
        assert!(!format.is_valid());
        assert_eq!(format.bytes_per_frame(), 0);

        let mut format = cd_format();
        format.set_channels(-1);
        assert!(!format.is_valid());
        assert_eq!(format.bytes_per_frame(), 0);
    }

    #[test]
    fn test_equality_ignores_raw_layout_code() {
        let mut a = cd_format();
        let b = cd_format();
        assert_eq!(a, b);

        // Same four attributes, different raw code
        a.set_channel_layout_ffmpeg(ffcompat::CH_LAYOUT_5POINT1_BACK);
        let mut c = cd_format();
        c.set_channel_layout_ffmpeg(ffcompat::CH_LAYOUT_5POINT1);
        assert_eq!(a.channels(), c.channels());
        assert_eq!(a, c);

        let mut d = cd_format();
        d.set_sample_rate(48_000);
        assert_ne!(b, d);
    }

    #[test]
    fn test_copies_are_independent() {
        let original = cd_format();
        let mut copy = original;
        copy.set_sample_rate(48_000);
        copy.set_channels(6);
        assert_eq!(original.sample_rate(), 44_100);
        assert_eq!(original.channels(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(cd_format().to_string(), "44100 Hz, 2 ch, s16, stereo");
    }
}
