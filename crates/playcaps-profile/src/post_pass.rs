//! Channel-limited codec splits.
//!
//! Some platforms decode a codec only in stereo. Rather than dropping the
//! codec, every video transcoding profile that lists it gets a sibling
//! profile carrying just that codec plus a channel condition, and the codec
//! is removed from the original.

use playcaps_common::{CodecType, DlnaProfileType};
use playcaps_probe::{audio_codecs, Environment};

use crate::codec_profiles::stereo_only;
use crate::model::{CodecProfile, ProfileCondition, TranscodingProfile};

/// One codec to split out, with the conditions its split profiles apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecSplit {
    pub codec: &'static str,
    pub conditions: Vec<ProfileCondition>,
}

impl CodecSplit {
    /// The VideoAudio codec profile advertising the same limit.
    pub fn codec_profile(&self) -> CodecProfile {
        CodecProfile {
            codec_type: CodecType::VideoAudio,
            codec: Some(self.codec.to_string()),
            conditions: self.conditions.clone(),
        }
    }
}

type SplitRule = (&'static str, fn(&Environment) -> bool);

/// webOS decodes FLAC in video only in stereo; so does Safari 17+ for Opus.
const SPLIT_RULES: &[SplitRule] = &[
    ("flac", |env| env.identity().web0s),
    ("opus", audio_codecs::safari_supports_opus),
];

/// Splits that apply to this environment, in application order.
pub fn channel_limited_splits(env: &Environment) -> Vec<CodecSplit> {
    SPLIT_RULES
        .iter()
        .filter(|(_, applies)| applies(env))
        .map(|&(codec, _)| CodecSplit {
            codec,
            conditions: vec![stereo_only()],
        })
        .collect()
}

/// Split `codec` out of every video profile that lists it.
///
/// Profiles keep their order; the split profiles are appended after all of
/// them, in the order of their originals. Audio profiles and video profiles
/// without the codec pass through untouched.
pub fn split_audio_codec(
    mut profiles: Vec<TranscodingProfile>,
    codec: &str,
    conditions: &[ProfileCondition],
) -> Vec<TranscodingProfile> {
    let mut splits = Vec::new();

    for profile in profiles.iter_mut() {
        if profile.profile_type != DlnaProfileType::Video
            || !profile.audio_codecs().any(|c| c == codec)
        {
            continue;
        }

        let mut split = profile.clone();
        split.audio_codec = codec.to_string();
        split.apply_conditions.extend_from_slice(conditions);
        splits.push(split);

        profile.audio_codec = profile
            .audio_codecs()
            .filter(|c| *c != codec)
            .collect::<Vec<_>>()
            .join(",");
    }

    if !splits.is_empty() {
        tracing::debug!("Split {} out of {} transcoding profile(s)", codec, splits.len());
    }

    profiles.extend(splits);
    profiles
}

/// Apply each split in turn.
pub fn apply_splits(
    mut profiles: Vec<TranscodingProfile>,
    splits: &[CodecSplit],
) -> Vec<TranscodingProfile> {
    for split in splits {
        profiles = split_audio_codec(profiles, split.codec, &split.conditions);
    }
    profiles
}
