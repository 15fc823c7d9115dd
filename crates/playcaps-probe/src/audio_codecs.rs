//! Audio codec probes, both standalone and muxed alongside video.

use crate::environment::Environment;

pub const AAC_VIDEO_AUDIO_MIME: &str = r#"video/mp4; codecs="avc1.640029, mp4a.40.2""#;
pub const HE_AAC_VIDEO_AUDIO_MIME: &str = r#"video/mp4; codecs="avc1.640029, mp4a.40.5""#;

/// MP3 alongside H.264 in MP4 under its three object type spellings.
pub const MP3_VIDEO_AUDIO_MIMES: [&str; 3] = [
    r#"video/mp4; codecs="avc1.640029, mp4a.69""#,
    r#"video/mp4; codecs="avc1.640029, mp4a.6B""#,
    r#"video/mp4; codecs="avc1.640029, mp3""#,
];

pub const AC3_MIME: &str = r#"audio/mp4; codecs="ac-3""#;
pub const EAC3_MIME: &str = r#"audio/mp4; codecs="ec-3""#;

pub const AC3_IN_HLS_MIMES: [&str; 2] = [
    r#"application/x-mpegurl; codecs="avc1.42E01E, ac-3""#,
    r#"application/vnd.apple.mpegURL; codecs="avc1.42E01E, ac-3""#,
];

pub const MP3_IN_HLS_MIMES: [&str; 2] = [
    r#"application/x-mpegurl; codecs="avc1.64001E, mp4a.40.34""#,
    r#"application/vnd.apple.mpegURL; codecs="avc1.64001E, mp4a.40.34""#,
];

pub const DTS_MIMES: [&str; 2] = [
    r#"video/mp4; codecs="dts-""#,
    r#"video/mp4; codecs="dts+""#,
];

/// Opus in a Core Audio Format wrapper, Safari's only opus path.
pub const CAF_OPUS_MIME: &str = r#"audio/x-caf; codecs="opus""#;

/// Whether the audio probe element can play a standalone audio format.
///
/// `format` is the server's container/codec token (`flac`, `opus`, `webma`,
/// `wma`, ...). Platform shortcuts apply first; everything else is answered by
/// the audio element. MPEG-1 layer II never plays standalone.
pub fn can_play_audio_format(env: &Environment, format: &str) -> bool {
    let browser = env.identity();

    let type_string = match format {
        "flac" | "asf" => {
            if browser.tizen || browser.web0s || browser.edge_uwp {
                return true;
            }
            "audio/flac".to_string()
        }
        "wma" => {
            if browser.tizen || browser.edge_uwp {
                return true;
            }
            "audio/wma".to_string()
        }
        "opus" => {
            if browser.web0s {
                return browser.web0s_at_least(3.5);
            }
            r#"audio/ogg; codecs="opus""#.to_string()
        }
        "alac" => {
            if browser.ios || (browser.osx && browser.safari) {
                return true;
            }
            "audio/alac".to_string()
        }
        "mp2" => return false,
        "webma" => "audio/webm".to_string(),
        other => format!("audio/{}", other),
    };

    env.audio(&type_string)
}

pub fn supports_aac_video_audio(env: &Environment) -> bool {
    env.video(AAC_VIDEO_AUDIO_MIME)
}

/// HE-AAC (SBR) muxed with video.
pub fn supports_he_aac_video_audio(env: &Environment) -> bool {
    env.video(HE_AAC_VIDEO_AUDIO_MIME)
}

pub fn supports_mp3_video_audio(env: &Environment) -> bool {
    MP3_VIDEO_AUDIO_MIMES.iter().any(|mime| env.video(mime))
}

pub fn supports_ac3(env: &Environment) -> bool {
    let browser = env.identity();
    if browser.edge_uwp || browser.tizen || browser.web0s {
        return true;
    }

    if browser.ios && browser.ios_below(11.0) {
        return false;
    }

    env.video(AC3_MIME)
}

pub fn supports_eac3(env: &Environment) -> bool {
    let browser = env.identity();
    if browser.tizen || browser.web0s {
        return true;
    }

    if browser.ios && browser.ios_below(11.0) {
        return false;
    }

    env.video(EAC3_MIME)
}

pub fn supports_ac3_in_hls(env: &Environment) -> bool {
    let browser = env.identity();
    if browser.tizen || browser.web0s {
        return true;
    }

    AC3_IN_HLS_MIMES.iter().any(|mime| env.video(mime))
}

pub fn supports_mp3_in_hls(env: &Environment) -> bool {
    MP3_IN_HLS_MIMES.iter().any(|mime| env.video(mime))
}

/// DTS detection is three-valued: `Some(false)` on platforms known to have
/// dropped DTS, `Some(true)` when a probe passes, and `None` when nothing is
/// known (which callers treat as unsupported).
pub fn can_play_dts(env: &Environment) -> Option<bool> {
    let browser = env.identity();
    if browser.tizen_at_least(4.0) || (browser.web0s_at_least(5.0) && browser.web0s_below(23.0)) {
        return Some(false);
    }

    if DTS_MIMES.iter().any(|mime| env.video(mime)) {
        return Some(true);
    }

    None
}

/// Safari 17+ decodes opus, but only from CAF or MP4 and with channel limits.
pub fn safari_supports_opus(env: &Environment) -> bool {
    let browser = env.identity();
    browser.safari && browser.version_at_least(17) && env.audio(CAF_OPUS_MIME)
}
