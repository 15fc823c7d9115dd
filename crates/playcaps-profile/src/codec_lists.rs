//! Ordered codec lists for each container family.
//!
//! Every list is produced by one table of `(target, codec, predicate)` rules.
//! Rules are evaluated in table order, a codec lands in its target list at
//! most once, and the disable lists from [`ProfileOptions`] are applied last.
//! Vorbis is part of the table, so it is subject to the disable lists like
//! every other codec.

use playcaps_probe::{
    audio_codecs, containers, video_codecs, BrowserIdentity, Environment, ProfileOptions,
};

use crate::settings::UserSettings;

use self::AudioTarget as A;
use self::VideoTarget as V;

/// Audio codec lists, one per container family that carries video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioTarget {
    /// Progressive MP4/MKV/TS/legacy containers.
    VideoAudio,
    /// HLS with MPEG-TS segments.
    HlsTs,
    /// HLS with fragmented-MP4 segments.
    HlsFmp4,
    Webm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoTarget {
    Mp4,
    Webm,
    HlsTs,
    HlsFmp4,
}

/// One entry of a codec table.
pub struct CodecRule<T, F> {
    pub target: T,
    pub codec: &'static str,
    pub when: fn(&F, &BrowserIdentity) -> bool,
}

/// Audio capabilities the audio rules consult, detected once per build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioFacts {
    pub aac: bool,
    pub mp3: bool,
    pub mp3_in_hls: bool,
    pub ac3: bool,
    pub eac3: bool,
    pub ac3_in_hls: bool,
    pub mp2: bool,
    pub dts: bool,
    pub true_hd: bool,
    pub opus: bool,
    pub safari_opus: bool,
    pub flac: bool,
    pub alac: bool,
    /// VP8 decodes, which is what makes Vorbis in video worth offering.
    pub vp8: bool,
}

impl AudioFacts {
    pub fn detect(env: &Environment, settings: &UserSettings, options: &ProfileOptions) -> Self {
        let mp3 = audio_codecs::supports_mp3_video_audio(env);

        Self {
            aac: audio_codecs::supports_aac_video_audio(env),
            mp3,
            mp3_in_hls: audio_codecs::supports_mp3_in_hls(env),
            ac3: audio_codecs::supports_ac3(env),
            eac3: audio_codecs::supports_eac3(env),
            ac3_in_hls: audio_codecs::supports_ac3_in_hls(env),
            mp2: supports_mp2_video_audio(env.identity(), mp3, options),
            dts: supports_dts(env, settings, options),
            true_hd: settings.enable_true_hd || options.supports_true_hd == Some(true),
            opus: audio_codecs::can_play_audio_format(env, "opus"),
            safari_opus: audio_codecs::safari_supports_opus(env),
            flac: audio_codecs::can_play_audio_format(env, "flac"),
            alac: audio_codecs::can_play_audio_format(env, "alac"),
            vp8: video_codecs::can_play_vp8(env),
        }
    }
}

fn supports_mp2_video_audio(browser: &BrowserIdentity, mp3: bool, options: &ProfileOptions) -> bool {
    if let Some(forced) = options.supports_mp2_video_audio {
        return forced;
    }

    let mut supported = browser.is_legacy_media_platform();
    if mp3
        && (browser.chrome
            || browser.edge_chromium
            || (browser.firefox && browser.version_at_least(83)))
    {
        supported = true;
    }

    // Android HLS.js can't remux MP2.
    supported && !browser.android
}

/// The user setting wins, then the caller's option, then detection.
fn supports_dts(env: &Environment, settings: &UserSettings, options: &ProfileOptions) -> bool {
    if settings.enable_dts {
        return true;
    }
    match options.supports_dts {
        Some(forced) => forced,
        None => audio_codecs::can_play_dts(env).unwrap_or(false),
    }
}

/// Video capabilities the video rules consult.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoFacts {
    pub h264: bool,
    pub hevc: bool,
    pub av1: bool,
    pub vp8: bool,
    pub vp9: bool,
    pub mpeg2video: bool,
    pub vc1: bool,
}

impl VideoFacts {
    pub fn detect(env: &Environment, options: &ProfileOptions) -> Self {
        Self {
            h264: video_codecs::can_play_h264(env),
            hevc: video_codecs::can_play_hevc(env, options),
            av1: video_codecs::can_play_av1(env),
            vp8: video_codecs::can_play_vp8(env),
            vp9: video_codecs::can_play_vp9(env),
            mpeg2video: containers::supports_mpeg2_video(env),
            vc1: containers::supports_vc1(env),
        }
    }
}

type AudioRule = CodecRule<AudioTarget, AudioFacts>;
type VideoRule = CodecRule<VideoTarget, VideoFacts>;

const fn audio(
    target: AudioTarget,
    codec: &'static str,
    when: fn(&AudioFacts, &BrowserIdentity) -> bool,
) -> AudioRule {
    CodecRule { target, codec, when }
}

const fn video(
    target: VideoTarget,
    codec: &'static str,
    when: fn(&VideoFacts, &BrowserIdentity) -> bool,
) -> VideoRule {
    CodecRule { target, codec, when }
}

fn ac3_in_hls_fmp4(f: &AudioFacts, b: &BrowserIdentity) -> bool {
    f.ac3 && (b.edge_chromium || f.ac3_in_hls)
}

/// Safari only decodes VP9/AV1 in WebM on 15 and 16.
fn webm_allowed(b: &BrowserIdentity) -> bool {
    !b.safari || (b.version_at_least(15) && b.version_below(17))
}

pub static AUDIO_CODEC_RULES: &[AudioRule] = &[
    audio(A::VideoAudio, "aac", |f, _| f.aac),
    audio(A::VideoAudio, "mp3", |f, _| f.mp3),
    audio(A::VideoAudio, "ac3", |f, _| f.ac3),
    audio(A::VideoAudio, "eac3", |f, _| f.ac3 && f.eac3),
    audio(A::VideoAudio, "mp2", |f, _| f.mp2),
    audio(A::VideoAudio, "dca", |f, _| f.dts),
    audio(A::VideoAudio, "dts", |f, _| f.dts),
    audio(A::VideoAudio, "pcm_s16le", |_, b| b.tizen || b.web0s),
    audio(A::VideoAudio, "pcm_s24le", |_, b| b.tizen || b.web0s),
    audio(A::VideoAudio, "truehd", |f, _| f.true_hd),
    audio(A::VideoAudio, "aac_latm", |_, b| b.tizen),
    audio(A::VideoAudio, "opus", |f, _| f.opus || f.safari_opus),
    audio(A::VideoAudio, "flac", |f, b| f.flac && !b.tizen),
    audio(A::VideoAudio, "alac", |f, _| f.alac),
    audio(A::VideoAudio, "vorbis", |f, b| (!b.safari && f.vp8) || b.tizen),
    audio(A::HlsTs, "aac", |f, _| f.aac),
    audio(A::HlsTs, "mp3", |f, b| b.safari || (f.mp3 && !b.ps4)),
    audio(A::HlsTs, "ac3", |f, _| f.ac3 && f.ac3_in_hls),
    audio(A::HlsTs, "eac3", |f, _| f.ac3 && f.ac3_in_hls && f.eac3),
    audio(A::HlsTs, "mp2", |f, _| f.mp2),
    audio(A::HlsTs, "opus", |f, b| f.opus && b.tizen),
    audio(A::HlsFmp4, "aac", |f, _| f.aac),
    audio(A::HlsFmp4, "mp3", |f, _| f.mp3_in_hls),
    audio(A::HlsFmp4, "ac3", ac3_in_hls_fmp4),
    audio(A::HlsFmp4, "eac3", |f, b| ac3_in_hls_fmp4(f, b) && f.eac3),
    audio(A::HlsFmp4, "mp2", |f, _| f.mp2),
    audio(A::HlsFmp4, "opus", |f, _| f.opus || f.safari_opus),
    audio(A::HlsFmp4, "flac", |f, b| f.flac && !b.tizen),
    audio(A::HlsFmp4, "alac", |f, _| f.alac),
    audio(A::Webm, "vorbis", |_, _| true),
    audio(A::Webm, "opus", |f, _| f.opus || f.safari_opus),
];

pub static VIDEO_CODEC_RULES: &[VideoRule] = &[
    video(V::HlsFmp4, "av1", |f, b| {
        f.av1
            && (b.safari
                || (!b.mobile && (b.edge_chromium || b.firefox || b.chrome || b.opera)))
    }),
    video(V::HlsFmp4, "hevc", |f, b| {
        f.hevc
            && (b.edge_chromium
                || b.safari
                || b.tizen
                || b.web0s
                || (b.chrome && (!b.android || b.version_at_least(105)))
                || (b.opera && !b.mobile)
                || (b.firefox && b.version_at_least(134)))
    }),
    video(V::HlsFmp4, "h264", |f, _| f.h264),
    video(V::HlsFmp4, "vp9", |f, b| {
        f.vp9 && (b.safari || b.edge_chromium || b.chrome || b.firefox)
    }),
    video(V::Mp4, "h264", |f, _| f.h264),
    video(V::Mp4, "hevc", |f, _| f.hevc),
    video(V::Mp4, "mpeg2video", |f, _| f.mpeg2video),
    video(V::Mp4, "vc1", |f, _| f.vc1),
    video(V::Mp4, "msmpeg4v2", |_, b| b.tizen),
    video(V::Mp4, "vp9", |f, b| f.vp9 && !b.ios && !(b.firefox && b.osx)),
    video(V::Mp4, "av1", |f, _| f.av1),
    video(V::HlsTs, "h264", |f, _| f.h264),
    video(V::HlsTs, "hevc", |f, b| f.hevc && (b.tizen || b.web0s || b.vidaa)),
    video(V::Webm, "vp8", |f, _| f.vp8),
    video(V::Webm, "vp9", |f, b| f.vp9 && webm_allowed(b)),
    video(V::Webm, "av1", |f, b| f.av1 && webm_allowed(b)),
];

/// Collect the codecs of every matching rule for `target`, in table order and
/// without repeats.
pub fn collect<T, F>(
    rules: &[CodecRule<T, F>],
    target: T,
    facts: &F,
    browser: &BrowserIdentity,
) -> Vec<&'static str>
where
    T: PartialEq + Copy,
{
    let mut codecs: Vec<&'static str> = Vec::new();
    for rule in rules.iter().filter(|r| r.target == target) {
        if (rule.when)(facts, browser) && !codecs.contains(&rule.codec) {
            tracing::trace!(codec = rule.codec, "Codec rule matched");
            codecs.push(rule.codec);
        }
    }
    codecs
}

fn without(mut codecs: Vec<&'static str>, disabled: &[String]) -> Vec<&'static str> {
    codecs.retain(|codec| !disabled.iter().any(|d| d == codec));
    codecs
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioCodecLists {
    pub video_audio: Vec<&'static str>,
    pub hls_ts: Vec<&'static str>,
    pub hls_fmp4: Vec<&'static str>,
    pub webm: Vec<&'static str>,
}

impl AudioCodecLists {
    /// Evaluate the audio table and apply the disable lists.
    ///
    /// `disable_video_audio_codecs` applies to every list, since HLS direct
    /// play profiles are video profiles too; `disable_hls_video_audio_codecs`
    /// applies to the two HLS lists only.
    pub fn assemble(facts: &AudioFacts, browser: &BrowserIdentity, options: &ProfileOptions) -> Self {
        let list = |target| collect(AUDIO_CODEC_RULES, target, facts, browser);
        let progressive = &options.disable_video_audio_codecs;
        let hls = &options.disable_hls_video_audio_codecs;

        Self {
            video_audio: without(list(AudioTarget::VideoAudio), progressive),
            hls_ts: without(without(list(AudioTarget::HlsTs), progressive), hls),
            hls_fmp4: without(without(list(AudioTarget::HlsFmp4), progressive), hls),
            webm: without(list(AudioTarget::Webm), progressive),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoCodecLists {
    pub mp4: Vec<&'static str>,
    pub webm: Vec<&'static str>,
    pub hls_ts: Vec<&'static str>,
    pub hls_fmp4: Vec<&'static str>,
}

impl VideoCodecLists {
    pub fn assemble(facts: &VideoFacts, browser: &BrowserIdentity) -> Self {
        let list = |target| collect(VIDEO_CODEC_RULES, target, facts, browser);
        Self {
            mp4: list(VideoTarget::Mp4),
            webm: list(VideoTarget::Webm),
            hls_ts: list(VideoTarget::HlsTs),
            hls_fmp4: list(VideoTarget::HlsFmp4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_audio() -> AudioFacts {
        AudioFacts {
            aac: true,
            mp3: true,
            mp3_in_hls: true,
            ac3: true,
            eac3: true,
            ac3_in_hls: true,
            mp2: true,
            dts: true,
            true_hd: true,
            opus: true,
            safari_opus: false,
            flac: true,
            alac: true,
            vp8: true,
        }
    }

    fn all_video() -> VideoFacts {
        VideoFacts {
            h264: true,
            hevc: true,
            av1: true,
            vp8: true,
            vp9: true,
            mpeg2video: true,
            vc1: true,
        }
    }

    #[test]
    fn test_video_audio_priority_order() {
        let browser = BrowserIdentity {
            web0s: true,
            ..Default::default()
        };
        let codecs = collect(AUDIO_CODEC_RULES, AudioTarget::VideoAudio, &all_audio(), &browser);
        assert_eq!(
            codecs,
            vec![
                "aac", "mp3", "ac3", "eac3", "mp2", "dca", "dts", "pcm_s16le", "pcm_s24le",
                "truehd", "opus", "flac", "alac", "vorbis"
            ]
        );
    }

    #[test]
    fn test_eac3_requires_ac3() {
        let facts = AudioFacts {
            ac3: false,
            eac3: true,
            ..all_audio()
        };
        let codecs = collect(
            AUDIO_CODEC_RULES,
            AudioTarget::VideoAudio,
            &facts,
            &BrowserIdentity::default(),
        );
        assert!(!codecs.contains(&"eac3"));
    }

    #[test]
    fn test_tizen_drops_flac_but_gets_latm() {
        let browser = BrowserIdentity {
            tizen: true,
            ..Default::default()
        };
        let codecs = collect(AUDIO_CODEC_RULES, AudioTarget::VideoAudio, &all_audio(), &browser);
        assert!(codecs.contains(&"aac_latm"));
        assert!(!codecs.contains(&"flac"));
        assert!(codecs.contains(&"vorbis"));
    }

    #[test]
    fn test_safari_without_vp8_has_no_vorbis() {
        let browser = BrowserIdentity {
            safari: true,
            ..Default::default()
        };
        let codecs = collect(AUDIO_CODEC_RULES, AudioTarget::VideoAudio, &all_audio(), &browser);
        assert!(!codecs.contains(&"vorbis"));
    }

    #[test]
    fn test_hls_ts_mp3_rules() {
        let ps4 = BrowserIdentity {
            ps4: true,
            ..Default::default()
        };
        let codecs = collect(AUDIO_CODEC_RULES, AudioTarget::HlsTs, &all_audio(), &ps4);
        assert!(!codecs.contains(&"mp3"));

        let safari = BrowserIdentity {
            safari: true,
            ..Default::default()
        };
        let facts = AudioFacts {
            mp3: false,
            ..all_audio()
        };
        let codecs = collect(AUDIO_CODEC_RULES, AudioTarget::HlsTs, &facts, &safari);
        assert!(codecs.contains(&"mp3"));
    }

    #[test]
    fn test_hls_ts_opus_only_on_tizen() {
        let chrome = BrowserIdentity {
            chrome: true,
            ..Default::default()
        };
        let codecs = collect(AUDIO_CODEC_RULES, AudioTarget::HlsTs, &all_audio(), &chrome);
        assert_eq!(codecs, vec!["aac", "mp3", "ac3", "eac3", "mp2"]);
    }

    #[test]
    fn test_edge_chromium_fmp4_ac3_without_hls_probe() {
        let edge = BrowserIdentity {
            edge_chromium: true,
            ..Default::default()
        };
        let facts = AudioFacts {
            ac3_in_hls: false,
            ..all_audio()
        };
        let codecs = collect(AUDIO_CODEC_RULES, AudioTarget::HlsFmp4, &facts, &edge);
        assert_eq!(
            codecs,
            vec!["aac", "mp3", "ac3", "eac3", "mp2", "opus", "flac", "alac"]
        );
    }

    #[test]
    fn test_webm_audio_always_has_vorbis() {
        let codecs = collect(
            AUDIO_CODEC_RULES,
            AudioTarget::Webm,
            &AudioFacts::default(),
            &BrowserIdentity::default(),
        );
        assert_eq!(codecs, vec!["vorbis"]);
    }

    #[test]
    fn test_disable_lists_scope() {
        let options = ProfileOptions {
            disable_video_audio_codecs: vec!["mp3".to_string(), "vorbis".to_string()],
            disable_hls_video_audio_codecs: vec!["ac3".to_string()],
            ..Default::default()
        };
        let lists = AudioCodecLists::assemble(&all_audio(), &BrowserIdentity::default(), &options);
        assert!(!lists.video_audio.contains(&"mp3"));
        assert!(!lists.video_audio.contains(&"vorbis"));
        assert!(!lists.webm.contains(&"vorbis"));
        assert!(!lists.hls_ts.contains(&"mp3"));
        assert!(!lists.hls_fmp4.contains(&"mp3"));
        assert!(!lists.hls_ts.contains(&"ac3"));
        assert!(!lists.hls_fmp4.contains(&"ac3"));
        assert!(lists.video_audio.contains(&"ac3"));
    }

    #[test]
    fn test_mp4_video_order() {
        let browser = BrowserIdentity {
            tizen: true,
            ..Default::default()
        };
        let codecs = collect(VIDEO_CODEC_RULES, VideoTarget::Mp4, &all_video(), &browser);
        assert_eq!(
            codecs,
            vec!["h264", "hevc", "mpeg2video", "vc1", "msmpeg4v2", "vp9", "av1"]
        );
    }

    #[test]
    fn test_vp9_not_in_mp4_on_ios_or_firefox_mac() {
        let ios = BrowserIdentity {
            ios: true,
            ..Default::default()
        };
        let firefox_mac = BrowserIdentity {
            firefox: true,
            osx: true,
            ..Default::default()
        };
        for browser in [ios, firefox_mac] {
            let codecs = collect(VIDEO_CODEC_RULES, VideoTarget::Mp4, &all_video(), &browser);
            assert!(!codecs.contains(&"vp9"));
        }
    }

    #[test]
    fn test_safari_webm_window() {
        let safari = |v| BrowserIdentity {
            safari: true,
            version_major: Some(v),
            ..Default::default()
        };
        let codecs = collect(VIDEO_CODEC_RULES, VideoTarget::Webm, &all_video(), &safari(15));
        assert_eq!(codecs, vec!["vp8", "vp9", "av1"]);

        let codecs = collect(VIDEO_CODEC_RULES, VideoTarget::Webm, &all_video(), &safari(17));
        assert_eq!(codecs, vec!["vp8"]);
    }

    #[test]
    fn test_hls_fmp4_video_preference() {
        let chrome = BrowserIdentity {
            chrome: true,
            version_major: Some(124),
            ..Default::default()
        };
        let codecs = collect(VIDEO_CODEC_RULES, VideoTarget::HlsFmp4, &all_video(), &chrome);
        assert_eq!(codecs, vec!["av1", "hevc", "h264", "vp9"]);

        let old_android_chrome = BrowserIdentity {
            chrome: true,
            android: true,
            mobile: true,
            version_major: Some(100),
            ..Default::default()
        };
        let codecs = collect(
            VIDEO_CODEC_RULES,
            VideoTarget::HlsFmp4,
            &all_video(),
            &old_android_chrome,
        );
        assert_eq!(codecs, vec!["h264", "vp9"]);
    }

    #[test]
    fn test_hls_ts_hevc_on_tv_platforms_only() {
        let chrome = BrowserIdentity {
            chrome: true,
            ..Default::default()
        };
        let codecs = collect(VIDEO_CODEC_RULES, VideoTarget::HlsTs, &all_video(), &chrome);
        assert_eq!(codecs, vec!["h264"]);

        let vidaa = BrowserIdentity {
            vidaa: true,
            ..Default::default()
        };
        let codecs = collect(VIDEO_CODEC_RULES, VideoTarget::HlsTs, &all_video(), &vidaa);
        assert_eq!(codecs, vec!["h264", "hevc"]);
    }

    #[test]
    fn test_mp2_detection() {
        let chrome = BrowserIdentity {
            chrome: true,
            ..Default::default()
        };
        let options = ProfileOptions::default();
        assert!(supports_mp2_video_audio(&chrome, true, &options));
        assert!(!supports_mp2_video_audio(&chrome, false, &options));

        let old_firefox = BrowserIdentity {
            firefox: true,
            version_major: Some(80),
            ..Default::default()
        };
        assert!(!supports_mp2_video_audio(&old_firefox, true, &options));

        let android = BrowserIdentity {
            chrome: true,
            android: true,
            ..Default::default()
        };
        assert!(!supports_mp2_video_audio(&android, true, &options));

        let forced = ProfileOptions {
            supports_mp2_video_audio: Some(true),
            ..Default::default()
        };
        assert!(supports_mp2_video_audio(&android, false, &forced));
    }
}
