//! Bitrate ceilings and physical audio channel count.

use crate::audio_codecs::{supports_ac3, supports_eac3};
use crate::environment::Environment;
use crate::options::ProfileOptions;

/// Flat streaming ceiling in bits per second.
pub const MAX_STREAMING_BITRATE: u64 = 120_000_000;
/// Ceiling for static (download) transfers.
pub const MAX_STATIC_BITRATE: u64 = 100_000_000;
/// Music transcodes never exceed this, whatever the streaming ceiling.
pub const MUSIC_TRANSCODING_BITRATE_CAP: u64 = 384_000;

const PS4_MAX_VIDEO_BITRATE: u64 = 8_000_000;
const XBOX_ONE_MAX_VIDEO_BITRATE: u64 = 12_000_000;
const TIZEN_FHD_MAX_VIDEO_BITRATE: u64 = 20_000_000;

pub fn max_streaming_bitrate() -> u64 {
    MAX_STREAMING_BITRATE
}

/// Hard video bitrate cap for consoles and full-HD Tizen panels.
///
/// The Tizen panel query can throw; a failure is logged and treated as "not
/// a full-HD panel", so no additional cap applies.
pub fn global_max_video_bitrate(env: &Environment) -> Option<u64> {
    let browser = env.identity();

    let mut is_tizen_fhd = false;
    if browser.tizen {
        match env.host().is_ud_panel_supported() {
            Ok(is_tizen_uhd) => is_tizen_fhd = !is_tizen_uhd,
            Err(e) => {
                tracing::warn!(error = %e, "isUdPanelSupported() failed, assuming UHD panel");
            }
        }
    }

    if browser.ps4 {
        Some(PS4_MAX_VIDEO_BITRATE)
    } else if browser.xbox_one {
        Some(XBOX_ONE_MAX_VIDEO_BITRATE)
    } else if browser.tizen && is_tizen_fhd {
        Some(TIZEN_FHD_MAX_VIDEO_BITRATE)
    } else {
        None
    }
}

/// Browsers that pass multichannel audio through to the output device.
fn is_surround_capable(env: &Environment) -> bool {
    let browser = env.identity();
    browser.safari
        || browser.chrome
        || browser.edge_chromium
        || browser.firefox
        || browser.tv
        || browser.ps4
        || browser.xbox_one
}

/// Number of output channels to advertise.
///
/// Precedence: the user's allowed-channels setting (when positive), then
/// `options.audio_channels`, then a heuristic over AC-3/E-AC-3 support, the
/// speaker count and the surround-capable browser list. An unknown speaker
/// count assumes stereo unless the browser is surround capable.
pub fn physical_audio_channels(
    env: &Environment,
    allowed_audio_channels: i32,
    options: &ProfileOptions,
) -> u32 {
    if allowed_audio_channels > 0 {
        return allowed_audio_channels as u32;
    }

    if let Some(channels) = options.audio_channels.filter(|&c| c > 0) {
        return channels;
    }

    let surround = is_surround_capable(env);
    let ac3_or_eac3 = supports_ac3(env) || supports_eac3(env);
    let speaker_count = env.features().speaker_count.unwrap_or(0);

    if ac3_or_eac3 && surround {
        return speaker_count.max(6);
    }

    if speaker_count > 2 {
        return if surround { speaker_count } else { 2 };
    }

    if speaker_count > 0 {
        return speaker_count;
    }

    if surround {
        6
    } else {
        2
    }
}
