//! Direct play profiles for progressive video containers and music formats.

use playcaps_probe::{audio_codecs, containers, Environment};

use crate::codec_lists::{AudioCodecLists, VideoCodecLists, VideoFacts};
use crate::model::DirectPlayProfile;
use crate::settings::UserSettings;

/// Containers whose native support depends on the platform rather than on a
/// codec probe, in emission order.
pub const LEGACY_VIDEO_CONTAINERS: [&str; 14] = [
    "m2ts", "wmv", "ts", "asf", "avi", "mpg", "mpeg", "flv", "3gp", "mts", "trp", "vob", "vro",
    "mov",
];

/// Music formats offered for direct play, in emission order.
pub const AUDIO_DIRECT_PLAY_FORMATS: [&str; 11] = [
    "opus", "mp3", "mp2", "aac", "flac", "alac", "webma", "wma", "wav", "ogg", "oga",
];

/// WebM, then MP4, then Matroska (sharing the MP4 lists), then the legacy
/// containers.
///
/// A container is emitted only when both its video and its audio list are
/// non-empty; an empty codec field would read as "any codec".
pub fn video_direct_play_profiles(
    env: &Environment,
    facts: &VideoFacts,
    video: &VideoCodecLists,
    audio: &AudioCodecLists,
) -> Vec<DirectPlayProfile> {
    let mut profiles = Vec::new();

    if !video.webm.is_empty() && !audio.webm.is_empty() {
        profiles.push(DirectPlayProfile::video("webm", &video.webm, &audio.webm));
    }

    if !video.mp4.is_empty() && !audio.video_audio.is_empty() {
        profiles.push(DirectPlayProfile::video(
            "mp4,m4v",
            &video.mp4,
            &audio.video_audio,
        ));

        if containers::can_play_mkv(env) {
            profiles.push(DirectPlayProfile::video("mkv", &video.mp4, &audio.video_audio));
        }
    }

    profiles.extend(LEGACY_VIDEO_CONTAINERS.iter().filter_map(|container| {
        legacy_container_profile(container, env, facts, &audio.video_audio)
    }));

    profiles
}

/// Direct play entry for one legacy container, or `None` when the platform
/// cannot play it.
///
/// Only avi (Tizen 4+), mov, m2ts and ts carry a video codec list of their
/// own. The other containers are dropped even where the platform plays them,
/// as is any container left without audio codecs.
pub fn legacy_container_profile(
    container: &str,
    env: &Environment,
    facts: &VideoFacts,
    video_audio: &[&'static str],
) -> Option<DirectPlayProfile> {
    let browser = env.identity();
    let legacy = browser.is_legacy_media_platform();

    let mut profile_container = container;
    let mut video_codecs: Vec<&'static str> = Vec::new();

    let supported = match container {
        "asf" | "wmv" | "mpg" | "mpeg" => legacy,
        "avi" => {
            // Newer Samsung sets dropped XviD/DivX.
            if browser.tizen_at_least(4.0) {
                video_codecs.push("h264");
                if facts.hevc {
                    video_codecs.push("hevc");
                }
            }
            legacy
        }
        "flv" | "3gp" | "mts" | "trp" | "vob" | "vro" => browser.tizen,
        "mov" => {
            video_codecs.push("h264");
            browser.safari
                || browser.tizen
                || browser.web0s
                || browser.chrome
                || browser.edge_chromium
                || browser.edge_uwp
        }
        "m2ts" => {
            video_codecs.push("h264");
            if facts.vc1 {
                video_codecs.push("vc1");
            }
            if facts.mpeg2video {
                video_codecs.push("mpeg2video");
            }
            legacy
        }
        "ts" => {
            video_codecs.push("h264");
            // No HEVC in progressive TS outside the TV platforms.
            if (browser.tizen || browser.web0s) && facts.hevc {
                video_codecs.push("hevc");
            }
            if facts.vc1 {
                video_codecs.push("vc1");
            }
            if facts.mpeg2video {
                video_codecs.push("mpeg2video");
            }
            profile_container = "ts,mpegts";
            containers::can_play_ts(env)
        }
        _ => false,
    };

    if !supported {
        return None;
    }

    if video_codecs.is_empty() {
        tracing::debug!("Skipping {}: no video codec list", container);
        return None;
    }
    if video_audio.is_empty() {
        tracing::debug!("Skipping {}: no playable audio codec", container);
        return None;
    }

    Some(DirectPlayProfile::video(
        profile_container,
        &video_codecs,
        video_audio,
    ))
}

/// Music direct play entries.
///
/// Each playable format gets a bare container entry, with these extras:
/// MP3 without HLS support also plays from TS, FLAC is remuxed into MP4 when
/// the user asks for it, MP3 is never offered bare when the user asks for
/// remuxing, Opus and WebM audio also play from a WebM container, and AAC and
/// ALAC also play from M4A/M4B. Safari 17+ additionally plays Opus in MP4.
pub fn audio_direct_play_profiles(env: &Environment, settings: &UserSettings) -> Vec<DirectPlayProfile> {
    let mp3_in_hls = audio_codecs::supports_mp3_in_hls(env);
    let mut profiles = Vec::new();

    for format in AUDIO_DIRECT_PLAY_FORMATS {
        if !audio_codecs::can_play_audio_format(env, format) {
            continue;
        }

        if format == "mp3" && !mp3_in_hls {
            profiles.push(DirectPlayProfile::audio_with_codec("ts", "mp3"));
        }

        if format == "flac" && settings.always_remux_flac {
            profiles.push(DirectPlayProfile::audio_with_codec("mp4", "flac"));
        } else if format != "mp3" || !settings.always_remux_mp3 {
            profiles.push(DirectPlayProfile::audio(format));
        }

        if format == "opus" || format == "webma" {
            profiles.push(DirectPlayProfile::audio_with_codec("webm", format));
        }

        if format == "aac" || format == "alac" {
            profiles.push(DirectPlayProfile::audio_with_codec("m4a", format));
            profiles.push(DirectPlayProfile::audio_with_codec("m4b", format));
        }
    }

    if audio_codecs::safari_supports_opus(env) {
        profiles.push(DirectPlayProfile::audio_with_codec("mp4", "opus"));
    }

    profiles
}
