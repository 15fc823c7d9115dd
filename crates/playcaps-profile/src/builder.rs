//! Device profile assembly.

use playcaps_common::DlnaProfileType;
use playcaps_probe::{bitrate, Environment, ProfileOptions};

use crate::codec_lists::{AudioCodecLists, AudioFacts, VideoCodecLists, VideoFacts};
use crate::codec_profiles::{audio_codec_profiles, container_profiles, video_codec_profiles};
use crate::direct_play::{audio_direct_play_profiles, video_direct_play_profiles};
use crate::model::{DeviceProfile, ResponseProfile};
use crate::post_pass::{apply_splits, channel_limited_splits};
use crate::settings::UserSettings;
use crate::subtitles::subtitle_profiles;
use crate::transcoding::{audio_transcoding_profiles, hls_video_profiles, HlsSettings};

/// Build the device profile for one playback attempt.
///
/// Never fails: a capability that can't be determined is treated as absent.
/// The result depends only on the three inputs, so building twice from the
/// same environment yields identical profiles.
pub fn build_device_profile(
    env: &Environment,
    settings: &UserSettings,
    options: &ProfileOptions,
) -> DeviceProfile {
    let browser = env.identity();
    let max_streaming_bitrate = bitrate::max_streaming_bitrate();
    let max_audio_channels =
        bitrate::physical_audio_channels(env, settings.allowed_audio_channels, options);

    let audio_facts = AudioFacts::detect(env, settings, options);
    let video_facts = VideoFacts::detect(env, options);
    let audio_lists = AudioCodecLists::assemble(&audio_facts, browser, options);
    let video_lists = VideoCodecLists::assemble(&video_facts, browser);

    tracing::debug!(
        video_audio = ?audio_lists.video_audio,
        mp4 = ?video_lists.mp4,
        channels = max_audio_channels,
        "Assembled codec lists"
    );

    let mut direct_play_profiles =
        video_direct_play_profiles(env, &video_facts, &video_lists, &audio_lists);
    direct_play_profiles.extend(audio_direct_play_profiles(env, settings));

    let hls = HlsSettings::detect(env, settings, max_audio_channels);
    let mut transcoding_profiles = audio_transcoding_profiles(env, settings, &hls);

    let hls_video = hls_video_profiles(env, options, &video_lists, &audio_lists, &hls);
    direct_play_profiles.extend(hls_video.direct_play);
    transcoding_profiles.extend(hls_video.transcoding);

    let mut codec_profiles = audio_codec_profiles(env, settings, max_audio_channels);

    let splits = channel_limited_splits(env);
    codec_profiles.extend(splits.iter().map(|split| split.codec_profile()));
    let transcoding_profiles = apply_splits(transcoding_profiles, &splits);

    codec_profiles.extend(video_codec_profiles(env, options));

    let profile = DeviceProfile {
        max_streaming_bitrate,
        max_static_bitrate: bitrate::MAX_STATIC_BITRATE,
        music_streaming_transcoding_bitrate: max_streaming_bitrate
            .min(bitrate::MUSIC_TRANSCODING_BITRATE_CAP),
        direct_play_profiles,
        transcoding_profiles,
        container_profiles: container_profiles(env),
        codec_profiles,
        subtitle_profiles: subtitle_profiles(env, settings, options),
        response_profiles: vec![ResponseProfile {
            profile_type: DlnaProfileType::Video,
            container: "m4v".to_string(),
            mime_type: "video/mp4".to_string(),
        }],
    };

    tracing::debug!(
        direct_play = profile.direct_play_profiles.len(),
        transcoding = profile.transcoding_profiles.len(),
        codec = profile.codec_profiles.len(),
        subtitles = profile.subtitle_profiles.len(),
        "Built device profile"
    );

    profile
}
