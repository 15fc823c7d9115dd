//! HDR10, HLG and Dolby Vision support.
//!
//! Explicit options always win. Without one, HDR10 and HLG come from a
//! browser/platform allow-list; Dolby Vision profiles are probed per codec
//! tag.

use crate::environment::Environment;
use crate::options::ProfileOptions;

pub const DOVI_HEVC_PROFILE_5_MIME: &str = r#"video/mp4; codecs="dvh1.05.06""#;
pub const DOVI_HEVC_PROFILE_8_MIME: &str = r#"video/mp4; codecs="dvh1.08.06""#;
pub const DOVI_AV1_PROFILE_10_MIME: &str = r#"video/mp4; codecs="dav1.10.06""#;

pub fn supports_hdr10(env: &Environment, options: &ProfileOptions) -> bool {
    if let Some(forced) = options.supports_hdr10 {
        return forced;
    }

    let browser = env.identity();
    browser.vidaa
        || browser.tizen
        || browser.web0s
        || (browser.safari && ((browser.ios && browser.ios_at_least(11.0)) || browser.osx))
        || (browser.edge_chromium && browser.version_at_least(121))
        || (browser.chrome && !browser.mobile)
        || (browser.firefox
            && browser.osx
            && !browser.iphone
            && !browser.ipod
            && !browser.ipad
            && browser.version_at_least(100))
}

/// HLG follows HDR10 unless forced.
pub fn supports_hlg(env: &Environment, options: &ProfileOptions) -> bool {
    options
        .supports_hlg
        .unwrap_or_else(|| supports_hdr10(env, options))
}

pub fn supports_dolby_vision(env: &Environment, options: &ProfileOptions) -> bool {
    if let Some(forced) = options.supports_dolby_vision {
        return forced;
    }

    let browser = env.identity();
    browser.safari && ((browser.ios && browser.ios_at_least(13.0)) || browser.osx)
}

/// Dolby Vision HEVC profiles (5 and/or 8) the decoder accepts.
///
/// Xbox One supports both without probing. webOS 4+ plays profile 8 even
/// when its probe answers "no".
pub fn dolby_vision_profiles_hevc(env: &Environment) -> Vec<u8> {
    let browser = env.identity();
    if browser.xbox_one {
        return vec![5, 8];
    }

    let mut profiles = Vec::new();
    if env.video(DOVI_HEVC_PROFILE_5_MIME) {
        profiles.push(5);
    }
    if env.video(DOVI_HEVC_PROFILE_8_MIME) || browser.web0s_at_least(4.0) {
        profiles.push(8);
    }
    profiles
}

/// Dolby Vision profile 10 (AV1).
pub fn supports_dolby_vision_av1(env: &Environment) -> bool {
    env.video(DOVI_AV1_PROFILE_10_MIME)
}
