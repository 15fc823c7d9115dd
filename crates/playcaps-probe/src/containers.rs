//! Container-level probes.

use crate::environment::Environment;

pub const MKV_MIMES: [&str; 2] = ["video/x-matroska", "video/mkv"];
pub const VC1_MIME: &str = r#"video/mp4; codecs="vc-1""#;

/// Matroska direct play.
///
/// VIDAA and Firefox never get it, Tizen and webOS always do. Elsewhere a
/// Matroska probe decides, with Chromium Edge on Windows and EdgeHTML UWP
/// trusted even when the probe answers "no".
pub fn can_play_mkv(env: &Environment) -> bool {
    let browser = env.identity();
    if browser.vidaa {
        return false;
    }

    if browser.tizen || browser.web0s {
        return true;
    }

    if browser.firefox {
        return false;
    }

    if MKV_MIMES.iter().any(|mime| env.video(mime)) {
        return true;
    }

    if browser.edge_chromium && browser.windows {
        return true;
    }

    browser.edge_uwp
}

/// MPEG transport streams outside HLS.
pub fn can_play_ts(env: &Environment) -> bool {
    env.identity().is_legacy_media_platform()
}

pub fn supports_mpeg2_video(env: &Environment) -> bool {
    env.identity().is_legacy_media_platform()
}

/// VC-1 is trusted on legacy media platforms and otherwise needs a
/// confirming probe.
pub fn supports_vc1(env: &Environment) -> bool {
    env.identity().is_legacy_media_platform() || env.video(VC1_MIME)
}
