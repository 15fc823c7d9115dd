//! Plain-text capability report for the `probe` command.

use playcaps_probe::{
    audio_codecs, bitrate, containers, features, hdr, video_codecs, Environment, ProfileOptions,
};
use playcaps_profile::UserSettings;
use std::fmt;

/// Every probe answer for one environment, grouped by section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: &'static str,
    pub entries: Vec<(&'static str, String)>,
}

fn yes_no(value: bool) -> String {
    let answer = if value { "yes" } else { "no" };
    answer.to_string()
}

fn optional<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl ProbeReport {
    pub fn collect(env: &Environment, settings: &UserSettings, options: &ProfileOptions) -> Self {
        let h264 = video_codecs::h264_level(env);
        let hevc = video_codecs::hevc_level(env);
        let av1 = video_codecs::av1_level(env);

        let video = ReportSection {
            title: "Video",
            entries: vec![
                ("h264", yes_no(video_codecs::can_play_h264(env))),
                ("h264 profiles", h264.profiles),
                ("h264 level", h264.max_level.to_string()),
                ("hevc", yes_no(video_codecs::can_play_hevc(env, options))),
                ("hevc profiles", hevc.profiles),
                ("hevc level", hevc.max_level.to_string()),
                ("av1", yes_no(video_codecs::can_play_av1(env))),
                ("av1 level", av1.max_level.to_string()),
                ("vp8", yes_no(video_codecs::can_play_vp8(env))),
                ("vp9", yes_no(video_codecs::can_play_vp9(env))),
                ("mpeg2video", yes_no(containers::supports_mpeg2_video(env))),
                ("vc1", yes_no(containers::supports_vc1(env))),
            ],
        };

        let audio = ReportSection {
            title: "Audio",
            entries: vec![
                ("aac", yes_no(audio_codecs::supports_aac_video_audio(env))),
                ("he-aac", yes_no(audio_codecs::supports_he_aac_video_audio(env))),
                ("mp3", yes_no(audio_codecs::supports_mp3_video_audio(env))),
                ("mp3 in hls", yes_no(audio_codecs::supports_mp3_in_hls(env))),
                ("ac3", yes_no(audio_codecs::supports_ac3(env))),
                ("eac3", yes_no(audio_codecs::supports_eac3(env))),
                ("ac3 in hls", yes_no(audio_codecs::supports_ac3_in_hls(env))),
                ("dts", optional(audio_codecs::can_play_dts(env))),
                ("opus", yes_no(audio_codecs::can_play_audio_format(env, "opus"))),
                ("safari opus", yes_no(audio_codecs::safari_supports_opus(env))),
                ("flac", yes_no(audio_codecs::can_play_audio_format(env, "flac"))),
                ("alac", yes_no(audio_codecs::can_play_audio_format(env, "alac"))),
            ],
        };

        let platform = ReportSection {
            title: "Playback",
            entries: vec![
                ("mkv", yes_no(containers::can_play_mkv(env))),
                ("ts", yes_no(containers::can_play_ts(env))),
                ("hls", yes_no(features::can_play_hls(env))),
                ("native hls", yes_no(features::can_play_native_hls(env))),
                (
                    "native hls fmp4",
                    yes_no(features::can_play_native_hls_in_fmp4(env)),
                ),
                ("text tracks", yes_no(features::supports_text_tracks(env))),
                ("canvas 2d", yes_no(features::supports_canvas_2d(env))),
                ("anamorphic", yes_no(features::supports_anamorphic_video(env))),
                ("secondary audio", yes_no(features::can_play_secondary_audio(env))),
            ],
        };

        let dovi_profiles: Vec<String> = hdr::dolby_vision_profiles_hevc(env)
            .iter()
            .map(u8::to_string)
            .collect();
        let hdr_section = ReportSection {
            title: "HDR",
            entries: vec![
                ("hdr10", yes_no(hdr::supports_hdr10(env, options))),
                ("hlg", yes_no(hdr::supports_hlg(env, options))),
                ("dolby vision", yes_no(hdr::supports_dolby_vision(env, options))),
                ("dolby vision hevc profiles", dovi_profiles.join(",")),
                ("dolby vision av1", yes_no(hdr::supports_dolby_vision_av1(env))),
            ],
        };

        let limits = ReportSection {
            title: "Limits",
            entries: vec![
                (
                    "audio channels",
                    bitrate::physical_audio_channels(env, settings.allowed_audio_channels, options)
                        .to_string(),
                ),
                ("speaker count", optional(env.features().speaker_count)),
                (
                    "max video bitrate",
                    optional(bitrate::global_max_video_bitrate(env)),
                ),
                ("max streaming bitrate", bitrate::max_streaming_bitrate().to_string()),
            ],
        };

        Self {
            sections: vec![video, audio, platform, hdr_section, limits],
        }
    }

    /// Look up one answer by its label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}:", section.title)?;
            for (label, value) in &section.entries {
                writeln!(f, "  {:<28} {}", label, value)?;
            }
        }
        Ok(())
    }
}
