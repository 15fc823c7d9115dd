//! Per-call overrides for a profile build.

use serde::{Deserialize, Serialize};

/// Caller-supplied overrides. Every field is optional; an absent value falls
/// back to detection, and a present one always wins over detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileOptions {
    /// Adds a `Width` cap to the H.264, HEVC and AV1 codec profiles.
    pub max_video_width: Option<u32>,
    /// Audio codecs removed from every video profile, HLS included.
    pub disable_video_audio_codecs: Vec<String>,
    /// Audio codecs removed from both HLS codec lists.
    pub disable_hls_video_audio_codecs: Vec<String>,
    /// `Some(true)` forces HEVC support; `Some(false)` still detects.
    pub supports_hevc: Option<bool>,
    pub supports_dts: Option<bool>,
    pub supports_true_hd: Option<bool>,
    pub supports_mp2_video_audio: Option<bool>,
    /// `Some(false)` suppresses every HLS video profile.
    pub enable_hls: Option<bool>,
    /// ASS/SSA external rendering; defaults to enabled.
    pub enable_ssa_render: bool,
    /// PGS external rendering; defaults to enabled, still needs user opt-in.
    pub enable_pgs_render: bool,
    /// Second attempt after a failed playback start: skip ASS/SSA/PGS.
    pub is_retry: bool,
    /// Physical channel count used when the user has not restricted channels.
    pub audio_channels: Option<u32>,
    pub supports_hdr10: Option<bool>,
    pub supports_hlg: Option<bool>,
    pub supports_dolby_vision: Option<bool>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            max_video_width: None,
            disable_video_audio_codecs: Vec::new(),
            disable_hls_video_audio_codecs: Vec::new(),
            supports_hevc: None,
            supports_dts: None,
            supports_true_hd: None,
            supports_mp2_video_audio: None,
            enable_hls: None,
            enable_ssa_render: true,
            enable_pgs_render: true,
            is_retry: false,
            audio_channels: None,
            supports_hdr10: None,
            supports_hlg: None,
            supports_dolby_vision: None,
        }
    }
}

impl ProfileOptions {
    pub fn hls_enabled(&self) -> bool {
        self.enable_hls != Some(false)
    }
}
