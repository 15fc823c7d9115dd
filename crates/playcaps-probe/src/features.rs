//! Playback feature detection: HLS paths, subtitle rendering surfaces,
//! anamorphic video and secondary audio tracks.

use crate::environment::Environment;
use crate::host::MediaHost;
use crate::identity::BrowserIdentity;

pub const NATIVE_HLS_MIMES: [&str; 2] = ["application/x-mpegURL", "application/vnd.apple.mpegURL"];

pub(crate) fn native_hls(identity: &BrowserIdentity, host: &dyn MediaHost) -> bool {
    identity.tizen
        || NATIVE_HLS_MIMES
            .iter()
            .any(|mime| host.video_can_play_type(mime).is_playable())
}

/// The media element plays HLS playlists itself.
pub fn can_play_native_hls(env: &Environment) -> bool {
    native_hls(env.identity(), env.host())
}

/// HLS through the native player or Media Source Extensions.
pub fn can_play_hls(env: &Environment) -> bool {
    env.features().hls
}

/// The native HLS player accepts fragmented-MP4 segments.
pub fn can_play_native_hls_in_fmp4(env: &Environment) -> bool {
    let browser = env.identity();
    if browser.tizen_at_least(5.0) || browser.web0s_at_least(3.5) {
        return true;
    }

    (browser.ios && browser.ios_at_least(11.0)) || browser.osx
}

pub fn supports_text_tracks(env: &Environment) -> bool {
    env.features().text_tracks
}

pub fn supports_canvas_2d(env: &Environment) -> bool {
    env.features().canvas_2d
}

pub fn supports_anamorphic_video(env: &Environment) -> bool {
    env.identity().tizen_at_least(6.0)
}

/// Switching between audio tracks of one stream.
///
/// Needs `audioTracks`; Firefox exposes it but cannot switch. Tizen works
/// only from 5.5 up to (not including) 8, webOS from 4.
pub fn can_play_secondary_audio(env: &Environment) -> bool {
    let browser = env.identity();
    env.host().has_audio_tracks()
        && !browser.firefox
        && ((browser.tizen_at_least(5.5) && browser.tizen_below(8.0)) || !browser.tizen)
        && (browser.web0s_at_least(4.0) || browser.web0s_version.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticHost;

    #[test]
    fn test_hls_via_mse_or_native() {
        let env = Environment::new(BrowserIdentity::default(), StaticHost::new());
        assert!(!can_play_hls(&env));
        assert!(!can_play_native_hls(&env));

        let mse = StaticHost {
            media_source: true,
            ..Default::default()
        };
        let env = Environment::new(BrowserIdentity::default(), mse);
        assert!(can_play_hls(&env));
        assert!(!can_play_native_hls(&env));

        let native = StaticHost::new().video_types(&[NATIVE_HLS_MIMES[1]]);
        let env = Environment::new(BrowserIdentity::default(), native);
        assert!(can_play_hls(&env));
        assert!(can_play_native_hls(&env));
    }

    #[test]
    fn test_fmp4_hls_platforms() {
        let ios10 = BrowserIdentity {
            ios: true,
            ios_version: Some(10.0),
            ..Default::default()
        };
        assert!(!can_play_native_hls_in_fmp4(&Environment::new(ios10, StaticHost::new())));

        let mac = BrowserIdentity {
            osx: true,
            ..Default::default()
        };
        assert!(can_play_native_hls_in_fmp4(&Environment::new(mac, StaticHost::new())));

        let old_webos = BrowserIdentity {
            web0s: true,
            web0s_version: Some(3.0),
            ..Default::default()
        };
        assert!(!can_play_native_hls_in_fmp4(&Environment::new(
            old_webos,
            StaticHost::new()
        )));
    }

    #[test]
    fn test_anamorphic_on_recent_tizen_only() {
        let tizen = |v| BrowserIdentity {
            tizen: true,
            tizen_version: Some(v),
            ..Default::default()
        };
        assert!(!supports_anamorphic_video(&Environment::new(tizen(5.5), StaticHost::new())));
        assert!(supports_anamorphic_video(&Environment::new(tizen(6.0), StaticHost::new())));
    }

    #[test]
    fn test_secondary_audio_rules() {
        let tracks = StaticHost {
            audio_tracks: true,
            ..Default::default()
        };

        let chrome = BrowserIdentity {
            chrome: true,
            ..Default::default()
        };
        assert!(can_play_secondary_audio(&Environment::new(chrome.clone(), tracks.clone())));
        assert!(!can_play_secondary_audio(&Environment::new(chrome, StaticHost::new())));

        let firefox = BrowserIdentity {
            firefox: true,
            ..Default::default()
        };
        assert!(!can_play_secondary_audio(&Environment::new(firefox, tracks.clone())));

        let tizen = |v| BrowserIdentity {
            tizen: true,
            tizen_version: Some(v),
            ..Default::default()
        };
        assert!(!can_play_secondary_audio(&Environment::new(tizen(5.0), tracks.clone())));
        assert!(can_play_secondary_audio(&Environment::new(tizen(6.5), tracks.clone())));
        assert!(!can_play_secondary_audio(&Environment::new(tizen(8.0), tracks.clone())));

        let webos = BrowserIdentity {
            web0s: true,
            web0s_version: Some(3.5),
            ..Default::default()
        };
        assert!(!can_play_secondary_audio(&Environment::new(webos, tracks)));
    }
}
