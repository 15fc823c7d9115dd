//! Container and codec conditions.

use playcaps_common::{CodecType, DlnaProfileType, ProfileConditionType, ProfileConditionValue};
use playcaps_probe::{audio_codecs, bitrate, features, hdr, video_codecs};
use playcaps_probe::{Environment, ProfileOptions};

use crate::model::{CodecProfile, ContainerProfile, ProfileCondition};
use crate::settings::UserSettings;

use playcaps_common::ProfileConditionType::{EqualsAny, LessThanEqual, NotEquals};

/// Older Tizen demuxers give up on files with too many streams.
pub fn container_profiles(env: &Environment) -> Vec<ContainerProfile> {
    if !env.identity().tizen_below(6.5) {
        return Vec::new();
    }

    vec![ContainerProfile {
        profile_type: DlnaProfileType::Video,
        conditions: vec![ProfileCondition::soft(
            LessThanEqual,
            ProfileConditionValue::NumStreams,
            "32",
        )],
    }]
}

fn not_secondary_audio() -> ProfileCondition {
    ProfileCondition::soft(
        ProfileConditionType::Equals,
        ProfileConditionValue::IsSecondaryAudio,
        "false",
    )
}

/// Stereo cap used for codecs the platform only decodes in stereo.
pub fn stereo_only() -> ProfileCondition {
    ProfileCondition::soft(LessThanEqual, ProfileConditionValue::AudioChannels, "2")
}

/// AAC-in-video restrictions, then channel limits for all audio and all
/// video audio. Profiles without conditions are left out.
pub fn audio_codec_profiles(
    env: &Environment,
    settings: &UserSettings,
    max_audio_channels: u32,
) -> Vec<CodecProfile> {
    let secondary_audio = features::can_play_secondary_audio(env);
    let mut profiles = Vec::new();

    let mut aac = Vec::new();
    if !audio_codecs::supports_he_aac_video_audio(env) {
        aac.push(ProfileCondition::new(
            NotEquals,
            ProfileConditionValue::AudioProfile,
            "HE-AAC",
        ));
    }
    if !secondary_audio {
        aac.push(not_secondary_audio());
    }
    if !aac.is_empty() {
        profiles.push(CodecProfile {
            codec_type: CodecType::VideoAudio,
            codec: Some("aac".to_string()),
            conditions: aac,
        });
    }

    let mut all_audio = Vec::new();
    let mut all_video_audio = Vec::new();
    if settings.restricts_audio_channels() {
        let channels = ProfileCondition::soft(
            LessThanEqual,
            ProfileConditionValue::AudioChannels,
            max_audio_channels.to_string(),
        );
        all_audio.push(channels.clone());
        all_video_audio.push(channels);
    }
    if !secondary_audio {
        all_video_audio.push(not_secondary_audio());
    }

    if !all_audio.is_empty() {
        profiles.push(CodecProfile {
            codec_type: CodecType::Audio,
            codec: None,
            conditions: all_audio,
        });
    }
    if !all_video_audio.is_empty() {
        profiles.push(CodecProfile {
            codec_type: CodecType::VideoAudio,
            codec: None,
            conditions: all_video_audio,
        });
    }

    profiles
}

const HDR10_RANGES: &str = "|HDR10|HDR10Plus";
const DOVI_HDR10_FALLBACK_RANGES: &str =
    "|DOVIWithHDR10|DOVIWithHDR10Plus|DOVIWithEL|DOVIWithELHDR10Plus|DOVIInvalid";
const DOVI_PROFILE_8_RANGES: &str = "|DOVIWithHDR10|DOVIWithHLG|DOVIWithSDR|DOVIWithHDR10Plus";
const DOVI_EL_RANGES: &str = "|DOVIWithEL|DOVIWithELHDR10Plus|DOVIInvalid";

/// `|`-separated video range types per codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRangeTypes {
    pub h264: String,
    pub hevc: String,
    pub vp9: String,
    pub av1: String,
}

impl VideoRangeTypes {
    pub fn detect(env: &Environment, options: &ProfileOptions) -> Self {
        let browser = env.identity();
        let mut ranges = Self {
            h264: "SDR".to_string(),
            hevc: "SDR".to_string(),
            vp9: "SDR".to_string(),
            av1: "SDR".to_string(),
        };

        // Tizen 3+ plays the base layer of any Dolby Vision stream.
        let tizen_dovi_fallback = browser.tizen_at_least(3.0);

        if tizen_dovi_fallback {
            ranges.hevc.push_str("|DOVIWithSDR");
        }

        if hdr::supports_hdr10(env, options) {
            ranges.hevc.push_str(HDR10_RANGES);
            ranges.vp9.push_str(HDR10_RANGES);
            ranges.av1.push_str(HDR10_RANGES);

            if tizen_dovi_fallback || browser.vidaa {
                ranges.hevc.push_str(DOVI_HDR10_FALLBACK_RANGES);
                ranges.av1.push_str(DOVI_HDR10_FALLBACK_RANGES);
            }
        }

        if hdr::supports_hlg(env, options) {
            ranges.hevc.push_str("|HLG");
            ranges.vp9.push_str("|HLG");
            ranges.av1.push_str("|HLG");

            if tizen_dovi_fallback {
                ranges.hevc.push_str("|DOVIWithHLG");
            }
        }

        if hdr::supports_dolby_vision(env, options) {
            let profiles = hdr::dolby_vision_profiles_hevc(env);
            if profiles.contains(&5) {
                ranges.hevc.push_str("|DOVI");
            }
            if profiles.contains(&8) {
                ranges.hevc.push_str(DOVI_PROFILE_8_RANGES);
            }
            if browser.web0s {
                ranges.hevc.push_str(DOVI_EL_RANGES);
            }

            if hdr::supports_dolby_vision_av1(env) {
                ranges.av1.push_str("|DOVI");
                ranges.av1.push_str(DOVI_PROFILE_8_RANGES);
                if browser.web0s {
                    ranges.av1.push_str(DOVI_EL_RANGES);
                }
            }
        }

        ranges
    }
}

fn video_profile(codec: &str, conditions: Vec<ProfileCondition>) -> CodecProfile {
    CodecProfile {
        codec_type: CodecType::Video,
        codec: Some(codec.to_string()),
        conditions,
    }
}

fn level_conditions(level: &video_codecs::CodecLevel, ranges: &str) -> Vec<ProfileCondition> {
    vec![
        ProfileCondition::soft(EqualsAny, ProfileConditionValue::VideoProfile, &level.profiles),
        ProfileCondition::soft(EqualsAny, ProfileConditionValue::VideoRangeType, ranges),
        ProfileCondition::soft(
            LessThanEqual,
            ProfileConditionValue::VideoLevel,
            level.max_level.to_string(),
        ),
    ]
}

/// Video codec profiles, always in the order h264, hevc, vp9, av1.
pub fn video_codec_profiles(env: &Environment, options: &ProfileOptions) -> Vec<CodecProfile> {
    let browser = env.identity();
    let ranges = VideoRangeTypes::detect(env, options);

    let mut h264 = level_conditions(&video_codecs::h264_level(env), &ranges.h264);
    let mut hevc = level_conditions(&video_codecs::hevc_level(env), &ranges.hevc);
    let vp9 = vec![ProfileCondition::soft(
        EqualsAny,
        ProfileConditionValue::VideoRangeType,
        &ranges.vp9,
    )];
    let mut av1 = level_conditions(&video_codecs::av1_level(env), &ranges.av1);

    if !features::supports_anamorphic_video(env) {
        let cond = ProfileCondition::soft(NotEquals, ProfileConditionValue::IsAnamorphic, "true");
        h264.push(cond.clone());
        hevc.push(cond.clone());
        av1.push(cond);
    }

    if !browser.is_legacy_media_platform() {
        let cond = ProfileCondition::soft(NotEquals, ProfileConditionValue::IsInterlaced, "true");
        h264.push(cond.clone());
        hevc.push(cond);
    }

    if let Some(width) = options.max_video_width.filter(|&w| w > 0) {
        let cond = ProfileCondition::soft(
            LessThanEqual,
            ProfileConditionValue::Width,
            width.to_string(),
        );
        h264.push(cond.clone());
        hevc.push(cond.clone());
        av1.push(cond);
    }

    if let Some(max_bitrate) = bitrate::global_max_video_bitrate(env) {
        let cond = ProfileCondition::required(
            LessThanEqual,
            ProfileConditionValue::VideoBitrate,
            max_bitrate.to_string(),
        );
        h264.push(cond.clone());
        hevc.push(cond.clone());
        av1.push(cond);
    }

    if browser.safari {
        hevc.push(ProfileCondition::required(
            EqualsAny,
            ProfileConditionValue::VideoCodecTag,
            "hvc1|dvh1",
        ));
        hevc.push(ProfileCondition::required(
            LessThanEqual,
            ProfileConditionValue::VideoFramerate,
            "60",
        ));
    }

    vec![
        video_profile("h264", h264),
        video_profile("hevc", hevc),
        video_profile("vp9", vp9),
        video_profile("av1", av1),
    ]
}
