//! Video codec playability and decoder level probes.

use crate::environment::Environment;
use crate::options::ProfileOptions;

/// H.264 baseline with AAC-LC in MP4.
pub const H264_BASELINE_MIME: &str = r#"video/mp4; codecs="avc1.42E01E, mp4a.40.2""#;

/// HEVC main level 4.0, probed under both sample entry tags with and without
/// the constraint byte.
pub const HEVC_MAIN_MIMES: [&str; 4] = [
    r#"video/mp4; codecs="hvc1.1.L120""#,
    r#"video/mp4; codecs="hev1.1.L120""#,
    r#"video/mp4; codecs="hvc1.1.0.L120""#,
    r#"video/mp4; codecs="hev1.1.0.L120""#,
];

/// AV1 main level 5.3 at 8 and 10 bits.
pub const AV1_MAIN_MIMES: [&str; 2] = [
    r#"video/mp4; codecs="av01.0.15M.08""#,
    r#"video/mp4; codecs="av01.0.15M.10""#,
];

pub const VP8_MIME: &str = r#"video/webm; codecs="vp8""#;
pub const VP9_MIME: &str = r#"video/webm; codecs="vp9""#;

/// H.264 high profile at levels 5.1 and 5.2.
pub const H264_LEVEL_51_MIME: &str = r#"video/mp4; codecs="avc1.640833""#;
pub const H264_LEVEL_52_MIME: &str = r#"video/mp4; codecs="avc1.640834""#;
/// H.264 high 10 profile at level 5.1.
pub const H264_HIGH_10_MIME: &str = r#"video/mp4; codecs="avc1.6e0033""#;

const H264_BASE_PROFILES: &str = "high|main|baseline|constrained baseline";

/// HEVC probes in ascending capability: (profile idc, level, profiles granted).
/// A later hit overrides an earlier one.
const HEVC_LEVEL_STEPS: &[(u8, u32, &str)] = &[
    (1, 123, "main"),
    (2, 123, "main|main 10"),
    (2, 153, "main|main 10"),
    (2, 183, "main|main 10"),
    (2, 186, "main|main 10"),
];

/// Profiles and highest level a decoder accepts, in the server's notation
/// (`|`-separated profile names, level as the integer the server reports).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLevel {
    pub profiles: String,
    pub max_level: u32,
}

pub fn can_play_h264(env: &Environment) -> bool {
    env.video(H264_BASELINE_MIME)
}

/// HEVC is trusted blindly on Tizen, Xbox One and webOS, forced by
/// `supports_hevc`, and hard-denied on PS4. Elsewhere any of the four
/// main-profile probes must pass; `supports_hevc = Some(false)` does not
/// suppress them.
pub fn can_play_hevc(env: &Environment, options: &ProfileOptions) -> bool {
    let browser = env.identity();
    if browser.tizen || browser.xbox_one || browser.web0s || options.supports_hevc == Some(true) {
        return true;
    }

    if browser.ps4 {
        return false;
    }

    HEVC_MAIN_MIMES.iter().any(|mime| env.video(mime))
}

/// AV1 is trusted on Tizen 5.5+ and webOS 5+; elsewhere both the 8-bit and
/// the 10-bit probe must pass.
pub fn can_play_av1(env: &Environment) -> bool {
    let browser = env.identity();
    if browser.tizen_at_least(5.5) || browser.web0s_at_least(5.0) {
        return true;
    }

    AV1_MAIN_MIMES.iter().all(|mime| env.video(mime))
}

pub fn can_play_vp8(env: &Environment) -> bool {
    env.video(VP8_MIME)
}

pub fn can_play_vp9(env: &Environment) -> bool {
    env.video(VP9_MIME)
}

pub fn h264_level(env: &Environment) -> CodecLevel {
    let browser = env.identity();

    let mut max_level = 42;
    if browser.tizen || browser.web0s || env.video(H264_LEVEL_51_MIME) {
        max_level = 51;
    }
    if (browser.tizen_at_least(5.0) && env.host().has_native_shell())
        || env.video(H264_LEVEL_52_MIME)
    {
        max_level = 52;
    }

    let mut profiles = H264_BASE_PROFILES.to_string();
    if env.video(H264_HIGH_10_MIME)
        && !browser.safari
        && !browser.ios
        && !browser.web0s
        && !browser.edge
        && !browser.mobile
        && !browser.tizen
    {
        profiles.push_str("|high 10");
    }

    CodecLevel {
        profiles,
        max_level,
    }
}

pub fn hevc_level(env: &Environment) -> CodecLevel {
    let mut level = CodecLevel {
        profiles: "main".to_string(),
        max_level: 120,
    };

    for &(profile_idc, max_level, profiles) in HEVC_LEVEL_STEPS {
        let playable = ["hvc1", "hev1"].iter().any(|tag| {
            env.video(&format!(
                r#"video/mp4; codecs="{}.{}.4.L{}""#,
                tag, profile_idc, max_level
            ))
        });
        if playable {
            level = CodecLevel {
                profiles: profiles.to_string(),
                max_level,
            };
        }
    }

    level
}

pub fn av1_level(env: &Environment) -> CodecLevel {
    let mut max_level = 15;
    for candidate in 16..=19 {
        let playable = ["08", "10"].iter().all(|depth| {
            env.video(&format!(
                r#"video/mp4; codecs="av01.0.{}M.{}""#,
                candidate, depth
            ))
        });
        if playable {
            max_level = candidate;
        }
    }

    CodecLevel {
        profiles: "main".to_string(),
        max_level,
    }
}
