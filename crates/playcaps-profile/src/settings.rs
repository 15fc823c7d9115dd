//! Persisted user preferences that shape the profile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which subtitle formats the user wants burned into the video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleBurnIn {
    /// Render whatever the client can.
    #[default]
    #[serde(alias = "")]
    Auto,
    /// Burn in image formats (PGS) only.
    OnlyImageFormats,
    /// Burn in image formats and styled text (ASS/SSA).
    AllComplexFormats,
    /// Burn in everything.
    All,
}

impl fmt::Display for SubtitleBurnIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::OnlyImageFormats => write!(f, "onlyimageformats"),
            Self::AllComplexFormats => write!(f, "allcomplexformats"),
            Self::All => write!(f, "all"),
        }
    }
}

/// User settings read during a profile build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserSettings {
    /// Prefer fragmented MP4 over MPEG-TS for HLS.
    pub prefer_fmp4_hls_container: bool,

    /// Request one-second HLS segments.
    pub limit_segment_length: bool,

    /// Channel count override; `-1` (or any non-positive value) means auto.
    pub allowed_audio_channels: i32,

    /// Advertise DTS regardless of detection.
    pub enable_dts: bool,

    /// Advertise TrueHD regardless of detection.
    pub enable_true_hd: bool,

    /// Direct play FLAC music only after remuxing into MP4.
    pub always_remux_flac: bool,

    /// Never direct play MP3 music files as-is.
    pub always_remux_mp3: bool,

    /// Ask for constant-bitrate audio in HLS audio transcodes.
    pub disable_vbr_audio: bool,

    pub subtitle_burn_in: SubtitleBurnIn,

    /// Opt-in to client-side PGS rendering.
    pub subtitle_render_pgs: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            prefer_fmp4_hls_container: false,
            limit_segment_length: false,
            allowed_audio_channels: -1,
            enable_dts: false,
            enable_true_hd: false,
            always_remux_flac: false,
            always_remux_mp3: false,
            disable_vbr_audio: false,
            subtitle_burn_in: SubtitleBurnIn::Auto,
            subtitle_render_pgs: false,
        }
    }
}

impl UserSettings {
    /// The user pinned a channel count.
    pub fn restricts_audio_channels(&self) -> bool {
        self.allowed_audio_channels > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = UserSettings::default();
        assert_eq!(settings.allowed_audio_channels, -1);
        assert!(!settings.restricts_audio_channels());
        assert_eq!(settings.subtitle_burn_in, SubtitleBurnIn::Auto);
    }

    #[test]
    fn test_burn_in_parsing() {
        let settings: UserSettings =
            toml::from_str("subtitle_burn_in = \"allcomplexformats\"\n").unwrap();
        assert_eq!(settings.subtitle_burn_in, SubtitleBurnIn::AllComplexFormats);

        let settings: UserSettings = toml::from_str("subtitle_burn_in = \"\"\n").unwrap();
        assert_eq!(settings.subtitle_burn_in, SubtitleBurnIn::Auto);

        assert!(toml::from_str::<UserSettings>("subtitle_burn_in = \"some\"\n").is_err());
    }

    #[test]
    fn test_burn_in_display_matches_wire() {
        for burn_in in [
            SubtitleBurnIn::Auto,
            SubtitleBurnIn::OnlyImageFormats,
            SubtitleBurnIn::AllComplexFormats,
            SubtitleBurnIn::All,
        ] {
            let json = serde_json::to_string(&burn_in).unwrap();
            assert_eq!(json, format!("\"{}\"", burn_in));
        }
    }

    #[test]
    fn test_unknown_setting_rejected() {
        assert!(toml::from_str::<UserSettings>("enable_atmos = true\n").is_err());
    }
}
