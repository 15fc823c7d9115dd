//! Device profile records.
//!
//! These serialize verbatim into the play-session request body, so field
//! names are PascalCase and optional fields are omitted rather than sent as
//! `null`.

use playcaps_common::{
    CodecType, DlnaProfileType, EncodingContext, ProfileConditionType, ProfileConditionValue,
    StreamProtocol, SubtitleDeliveryMethod,
};
use serde::{Deserialize, Serialize};

/// Everything the server needs to decide between direct play and transcoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceProfile {
    pub max_streaming_bitrate: u64,
    pub max_static_bitrate: u64,
    pub music_streaming_transcoding_bitrate: u64,
    pub direct_play_profiles: Vec<DirectPlayProfile>,
    pub transcoding_profiles: Vec<TranscodingProfile>,
    pub container_profiles: Vec<ContainerProfile>,
    pub codec_profiles: Vec<CodecProfile>,
    pub subtitle_profiles: Vec<SubtitleProfile>,
    pub response_profiles: Vec<ResponseProfile>,
}

impl DeviceProfile {
    /// Serialize to the JSON request body shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A container/codec combination the server may send unmodified.
///
/// Codec fields are comma-separated and ordered by preference. An absent
/// codec field means "any".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectPlayProfile {
    pub container: String,
    #[serde(rename = "Type")]
    pub profile_type: DlnaProfileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_codec: Option<String>,
}

impl DirectPlayProfile {
    pub fn video(container: impl Into<String>, video_codecs: &[&str], audio_codecs: &[&str]) -> Self {
        Self {
            container: container.into(),
            profile_type: DlnaProfileType::Video,
            video_codec: Some(video_codecs.join(",")),
            audio_codec: Some(audio_codecs.join(",")),
        }
    }

    /// Audio-only container with no codec restriction.
    pub fn audio(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            profile_type: DlnaProfileType::Audio,
            video_codec: None,
            audio_codec: None,
        }
    }

    /// Audio-only container restricted to one codec.
    pub fn audio_with_codec(container: impl Into<String>, codec: impl Into<String>) -> Self {
        Self {
            audio_codec: Some(codec.into()),
            ..Self::audio(container)
        }
    }
}

/// A fallback encode target used when direct play is ruled out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscodingProfile {
    pub container: String,
    #[serde(rename = "Type")]
    pub profile_type: DlnaProfileType,
    pub audio_codec: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
    pub context: EncodingContext,
    pub protocol: StreamProtocol,
    pub max_audio_channels: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_segments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_on_non_key_frames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_audio_vbr_encoding: Option<bool>,
    /// Conditions the source must meet for this profile to be chosen.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apply_conditions: Vec<ProfileCondition>,
}

impl TranscodingProfile {
    /// Progressive HTTP audio transcode to a single format.
    pub fn http_audio(format: &str, context: EncodingContext, max_audio_channels: u32) -> Self {
        Self {
            container: format.to_string(),
            profile_type: DlnaProfileType::Audio,
            audio_codec: format.to_string(),
            video_codec: None,
            context,
            protocol: StreamProtocol::Http,
            max_audio_channels: max_audio_channels.to_string(),
            min_segments: None,
            break_on_non_key_frames: None,
            segment_length: None,
            enable_audio_vbr_encoding: None,
            apply_conditions: Vec::new(),
        }
    }

    /// The audio codecs as a list.
    pub fn audio_codecs(&self) -> impl Iterator<Item = &str> {
        self.audio_codec.split(',').filter(|c| !c.is_empty())
    }
}

/// One comparison the server evaluates against stream metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileCondition {
    pub condition: ProfileConditionType,
    pub property: ProfileConditionValue,
    pub value: String,
    /// `Some(false)` marks a soft condition, `Some(true)` a hard one the
    /// decision engine enforces. `None` leaves it to the server default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
}

impl ProfileCondition {
    pub fn new(
        condition: ProfileConditionType,
        property: ProfileConditionValue,
        value: impl Into<String>,
    ) -> Self {
        Self {
            condition,
            property,
            value: value.into(),
            is_required: None,
        }
    }

    pub fn soft(
        condition: ProfileConditionType,
        property: ProfileConditionValue,
        value: impl Into<String>,
    ) -> Self {
        Self {
            is_required: Some(false),
            ..Self::new(condition, property, value)
        }
    }

    pub fn required(
        condition: ProfileConditionType,
        property: ProfileConditionValue,
        value: impl Into<String>,
    ) -> Self {
        Self {
            is_required: Some(true),
            ..Self::new(condition, property, value)
        }
    }
}

/// Conditions on one codec (or on all codecs of a stream class when `codec`
/// is absent). Conditions are ANDed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodecProfile {
    #[serde(rename = "Type")]
    pub codec_type: CodecType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    pub conditions: Vec<ProfileCondition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerProfile {
    #[serde(rename = "Type")]
    pub profile_type: DlnaProfileType,
    pub conditions: Vec<ProfileCondition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubtitleProfile {
    pub format: String,
    pub method: SubtitleDeliveryMethod,
}

impl SubtitleProfile {
    pub fn external(format: &str) -> Self {
        Self {
            format: format.to_string(),
            method: SubtitleDeliveryMethod::External,
        }
    }
}

/// MIME type hint the server uses when responding with a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseProfile {
    #[serde(rename = "Type")]
    pub profile_type: DlnaProfileType,
    pub container: String,
    pub mime_type: String,
}
