//! Transcoding fallbacks: HLS audio, progressive audio, and HLS video.

use playcaps_common::{DlnaProfileType, EncodingContext, StreamProtocol};
use playcaps_probe::{audio_codecs, features, Environment, ProfileOptions};

use crate::codec_lists::{AudioCodecLists, VideoCodecLists};
use crate::model::{DirectPlayProfile, TranscodingProfile};
use crate::settings::UserSettings;

/// Progressive streaming audio transcodes, in preference order.
pub const STREAMING_AUDIO_FORMATS: [&str; 4] = ["aac", "mp3", "opus", "wav"];

/// Static (download) audio transcodes, in preference order.
pub const STATIC_AUDIO_FORMATS: [&str; 4] = ["opus", "mp3", "aac", "wav"];

/// Segmenting knobs shared by every HLS transcoding profile of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HlsSettings {
    pub fmp4: bool,
    pub break_on_non_key_frames: bool,
    pub min_segments: &'static str,
    pub segment_length: Option<u32>,
    pub max_audio_channels: u32,
}

impl HlsSettings {
    pub fn detect(env: &Environment, settings: &UserSettings, max_audio_channels: u32) -> Self {
        let browser = env.identity();

        // Apple and legacy Edge players stall on segments that don't start on
        // a keyframe, as does anything going through MSE.
        let break_on_non_key_frames =
            browser.ios || browser.osx || browser.edge || !features::can_play_native_hls(env);

        let mut fmp4 = settings.prefer_fmp4_hls_container;
        if (browser.safari || browser.tizen || browser.web0s)
            && !features::can_play_native_hls_in_fmp4(env)
        {
            fmp4 = false;
        }

        Self {
            fmp4,
            break_on_non_key_frames,
            min_segments: if browser.is_apple_os() { "2" } else { "1" },
            segment_length: settings.limit_segment_length.then_some(1),
            max_audio_channels,
        }
    }

    fn profile(
        &self,
        container: &str,
        profile_type: DlnaProfileType,
        audio_codec: String,
        video_codec: Option<String>,
    ) -> TranscodingProfile {
        TranscodingProfile {
            container: container.to_string(),
            profile_type,
            audio_codec,
            video_codec,
            context: EncodingContext::Streaming,
            protocol: StreamProtocol::Hls,
            max_audio_channels: self.max_audio_channels.to_string(),
            min_segments: Some(self.min_segments.to_string()),
            break_on_non_key_frames: Some(self.break_on_non_key_frames),
            segment_length: None,
            enable_audio_vbr_encoding: None,
            apply_conditions: Vec::new(),
        }
    }
}

/// Audio transcodes: AAC over HLS (when HLS plays and the identity allows HLS
/// audio), then the progressive streaming formats, then the static ones.
pub fn audio_transcoding_profiles(
    env: &Environment,
    settings: &UserSettings,
    hls: &HlsSettings,
) -> Vec<TranscodingProfile> {
    let mut profiles = Vec::new();

    if features::can_play_hls(env) && env.identity().hls_audio_enabled() {
        let container = if hls.fmp4 { "mp4" } else { "ts" };
        let mut profile = hls.profile(container, DlnaProfileType::Audio, "aac".to_string(), None);
        profile.enable_audio_vbr_encoding = Some(!settings.disable_vbr_audio);
        profiles.push(profile);
    }

    let channels = hls.max_audio_channels;
    for format in STREAMING_AUDIO_FORMATS {
        if audio_codecs::can_play_audio_format(env, format) {
            profiles.push(TranscodingProfile::http_audio(
                format,
                EncodingContext::Streaming,
                channels,
            ));
        }
    }
    for format in STATIC_AUDIO_FORMATS {
        if audio_codecs::can_play_audio_format(env, format) {
            profiles.push(TranscodingProfile::http_audio(
                format,
                EncodingContext::Static,
                channels,
            ));
        }
    }

    profiles
}

/// HLS video entries, each a direct play `hls` profile paired with the
/// matching transcoding profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HlsVideoProfiles {
    pub direct_play: Vec<DirectPlayProfile>,
    pub transcoding: Vec<TranscodingProfile>,
}

/// The fMP4 pair comes first and only when fMP4 is enabled; the TS pair
/// follows. A pair is skipped when either of its codec lists is empty, and
/// nothing is emitted when HLS can't play or the caller disabled it.
pub fn hls_video_profiles(
    env: &Environment,
    options: &ProfileOptions,
    video: &VideoCodecLists,
    audio: &AudioCodecLists,
    hls: &HlsSettings,
) -> HlsVideoProfiles {
    let mut out = HlsVideoProfiles::default();

    if !features::can_play_hls(env) || !options.hls_enabled() {
        tracing::debug!("HLS video unavailable, skipping HLS profiles");
        return out;
    }

    let pairs = [
        (hls.fmp4, "mp4", &video.hls_fmp4, &audio.hls_fmp4),
        (true, "ts", &video.hls_ts, &audio.hls_ts),
    ];

    for (enabled, container, video_codecs, audio_codecs) in pairs {
        if !enabled || video_codecs.is_empty() || audio_codecs.is_empty() {
            continue;
        }

        out.direct_play
            .push(DirectPlayProfile::video("hls", video_codecs, audio_codecs));

        let mut profile = hls.profile(
            container,
            DlnaProfileType::Video,
            audio_codecs.join(","),
            Some(video_codecs.join(",")),
        );
        profile.segment_length = hls.segment_length;
        out.transcoding.push(profile);
    }

    out
}
