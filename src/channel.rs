//! Channel layout definitions
//!
//! The layout tag set is deliberately small: the handful of layouts the
//! descriptor names directly, with everything else collapsing to
//! [`ChannelLayout::Unsupported`]. FFmpeg describes layouts as 64-bit
//! position bitmasks with dozens of defined combinations; callers that need
//! full fidelity use the raw-code accessors on
//! [`AudioFormat`](crate::AudioFormat), which keep the original bitmask even
//! when the tag is `Unsupported`.

use crate::error::Error;
use crate::ffcompat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel layout tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelLayout {
    /// Single front-left channel
    Left,
    /// Single front-right channel
    Right,
    /// Single center channel (mono)
    Center,
    /// Front left + front right
    Stereo,
    /// Any layout outside the defined set
    Unsupported,
}

impl ChannelLayout {
    /// Alias: mono is a single center channel
    pub const MONO: ChannelLayout = ChannelLayout::Center;

    /// Canonical channel count for this layout
    ///
    /// `Unsupported` yields 0: the count is not derivable from the tag and
    /// must come from the raw FFmpeg code or the caller.
    pub fn channels(&self) -> i32 {
        match self {
            ChannelLayout::Left | ChannelLayout::Right | ChannelLayout::Center => 1,
            ChannelLayout::Stereo => 2,
            ChannelLayout::Unsupported => 0,
        }
    }

    /// Default layout tag for a channel count
    pub fn default_for_channels(channels: i32) -> Self {
        match channels {
            1 => ChannelLayout::Center,
            2 => ChannelLayout::Stereo,
            _ => ChannelLayout::Unsupported,
        }
    }

    /// Translate an FFmpeg channel layout bitmask
    ///
    /// Only the bitmasks with an exact counterpart in the tag set are
    /// recognized; everything else (5.1, 7.1, ...) maps to `Unsupported`.
    /// This is intentionally lossy.
    pub fn from_ffmpeg(layout: i64) -> Self {
        match layout {
            ffcompat::CH_FRONT_LEFT => ChannelLayout::Left,
            ffcompat::CH_FRONT_RIGHT => ChannelLayout::Right,
            ffcompat::CH_LAYOUT_MONO => ChannelLayout::Center,
            ffcompat::CH_LAYOUT_STEREO => ChannelLayout::Stereo,
            _ => {
                tracing::trace!("unmapped FFmpeg channel layout {:#x}", layout);
                ChannelLayout::Unsupported
            }
        }
    }

    /// Translate to an FFmpeg channel layout bitmask
    ///
    /// `Unsupported` yields 0, FFmpeg's "unspecified" layout, since no single
    /// bitmask can stand in for an unknown layout.
    pub fn to_ffmpeg(&self) -> i64 {
        match self {
            ChannelLayout::Left => ffcompat::CH_FRONT_LEFT,
            ChannelLayout::Right => ffcompat::CH_FRONT_RIGHT,
            ChannelLayout::Center => ffcompat::CH_LAYOUT_MONO,
            ChannelLayout::Stereo => ffcompat::CH_LAYOUT_STEREO,
            ChannelLayout::Unsupported => 0,
        }
    }

    /// Get the layout name
    pub fn name(&self) -> &'static str {
        match self {
            ChannelLayout::Left => "left",
            ChannelLayout::Right => "right",
            ChannelLayout::Center => "mono",
            ChannelLayout::Stereo => "stereo",
            ChannelLayout::Unsupported => "unsupported",
        }
    }
}

impl Default for ChannelLayout {
    fn default() -> Self {
        ChannelLayout::Unsupported
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ChannelLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(ChannelLayout::Left),
            "right" => Ok(ChannelLayout::Right),
            "mono" | "center" => Ok(ChannelLayout::Center),
            "stereo" => Ok(ChannelLayout::Stereo),
            _ => Err(Error::unsupported(format!("channel layout name '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_channel_counts() {
        assert_eq!(ChannelLayout::Left.channels(), 1);
        assert_eq!(ChannelLayout::Right.channels(), 1);
        assert_eq!(ChannelLayout::Center.channels(), 1);
        assert_eq!(ChannelLayout::Stereo.channels(), 2);
        assert_eq!(ChannelLayout::Unsupported.channels(), 0);
    }

    #[test]
    fn test_mono_alias() {
        assert_eq!(ChannelLayout::MONO, ChannelLayout::Center);
        assert_eq!(ChannelLayout::MONO.name(), "mono");
    }

    #[test]
    fn test_default_for_channels() {
        assert_eq!(ChannelLayout::default_for_channels(1), ChannelLayout::Center);
        assert_eq!(ChannelLayout::default_for_channels(2), ChannelLayout::Stereo);
        assert_eq!(
            ChannelLayout::default_for_channels(6),
            ChannelLayout::Unsupported
        );
        assert_eq!(
            ChannelLayout::default_for_channels(0),
            ChannelLayout::Unsupported
        );
    }

    #[test]
    fn test_ffmpeg_round_trip() {
        for layout in [
            ChannelLayout::Left,
            ChannelLayout::Right,
            ChannelLayout::Center,
            ChannelLayout::Stereo,
        ] {
            assert_eq!(ChannelLayout::from_ffmpeg(layout.to_ffmpeg()), layout);
        }
        assert_eq!(ChannelLayout::Unsupported.to_ffmpeg(), 0);
        assert_eq!(ChannelLayout::from_ffmpeg(0), ChannelLayout::Unsupported);
    }

    #[test]
    fn test_surround_layouts_are_unsupported() {
        assert_eq!(
            ChannelLayout::from_ffmpeg(ffcompat::CH_LAYOUT_5POINT1_BACK),
            ChannelLayout::Unsupported
        );
        assert_eq!(
            ChannelLayout::from_ffmpeg(ffcompat::CH_LAYOUT_7POINT1),
            ChannelLayout::Unsupported
        );
    }

    #[test]
    fn test_name_parse() {
        assert_eq!("stereo".parse::<ChannelLayout>().unwrap(), ChannelLayout::Stereo);
        assert_eq!("center".parse::<ChannelLayout>().unwrap(), ChannelLayout::Center);
        assert_eq!("mono".parse::<ChannelLayout>().unwrap(), ChannelLayout::MONO);
        assert!("5.1".parse::<ChannelLayout>().is_err());
    }
}
