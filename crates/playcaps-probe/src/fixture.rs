//! A table-backed [`MediaHost`] for fixtures, tests and the CLI.

use crate::host::{CanPlay, MediaHost};
use playcaps_common::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Host whose answers come from lookup tables.
///
/// MIME type strings are matched exactly, so a fixture must spell them the
/// way the probes do (see the `*_MIME` constants in each probe module).
/// Unlisted types answer [`CanPlay::No`].
///
/// ```toml
/// max_channel_count = 2
/// text_tracks = true
/// media_source = true
///
/// [video]
/// 'video/mp4; codecs="avc1.42E01E, mp4a.40.2"' = "probably"
///
/// [audio]
/// "audio/mpeg" = "maybe"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticHost {
    pub video: BTreeMap<String, CanPlay>,
    pub audio: BTreeMap<String, CanPlay>,
    pub max_channel_count: Option<u32>,
    pub text_tracks: bool,
    pub audio_tracks: bool,
    pub canvas_2d: bool,
    pub media_source: bool,
    pub native_shell: bool,
    /// Answer of the UHD panel query; `None` means the API is missing.
    pub ud_panel: Option<bool>,
    /// When set, the UHD panel query throws with this platform error code.
    pub ud_panel_error_code: Option<i32>,
}

impl StaticHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `answer` for `mime_type` on the video probe element.
    pub fn video_type(mut self, mime_type: &str, answer: CanPlay) -> Self {
        self.video.insert(mime_type.to_string(), answer);
        self
    }

    /// Answer `answer` for `mime_type` on the audio probe element.
    pub fn audio_type(mut self, mime_type: &str, answer: CanPlay) -> Self {
        self.audio.insert(mime_type.to_string(), answer);
        self
    }

    /// Answer `"probably"` for every listed video type.
    pub fn video_types(mut self, mime_types: &[&str]) -> Self {
        for mime_type in mime_types {
            self.video.insert(mime_type.to_string(), CanPlay::Probably);
        }
        self
    }

    /// Answer `"probably"` for every listed audio type.
    pub fn audio_types(mut self, mime_types: &[&str]) -> Self {
        for mime_type in mime_types {
            self.audio.insert(mime_type.to_string(), CanPlay::Probably);
        }
        self
    }

    pub fn channels(mut self, count: u32) -> Self {
        self.max_channel_count = Some(count);
        self
    }
}

impl MediaHost for StaticHost {
    fn video_can_play_type(&self, mime_type: &str) -> CanPlay {
        self.video.get(mime_type).copied().unwrap_or_default()
    }

    fn audio_can_play_type(&self, mime_type: &str) -> CanPlay {
        self.audio.get(mime_type).copied().unwrap_or_default()
    }

    fn max_channel_count(&self) -> Option<u32> {
        self.max_channel_count
    }

    fn has_text_tracks(&self) -> bool {
        self.text_tracks
    }

    fn has_audio_tracks(&self) -> bool {
        self.audio_tracks
    }

    fn has_canvas_2d(&self) -> bool {
        self.canvas_2d
    }

    fn has_media_source(&self) -> bool {
        self.media_source
    }

    fn has_native_shell(&self) -> bool {
        self.native_shell
    }

    fn is_ud_panel_supported(&self) -> Result<bool> {
        if let Some(code) = self.ud_panel_error_code {
            return Err(Error::host_query(
                "productinfo.isUdPanelSupported",
                format!("error code = {}", code),
            ));
        }
        self.ud_panel
            .ok_or_else(|| Error::unavailable("webapis.productinfo"))
    }
}
