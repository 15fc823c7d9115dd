//! Wire enums shared by device profile sections.
//!
//! The media server matches these by exact string equality, so every variant
//! serializes to the same token its `Display` impl prints. Variant names are
//! PascalCase on the wire except [`StreamProtocol`], which is lowercase.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a direct play, transcoding, container or response profile applies
/// to video or audio-only media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DlnaProfileType {
    /// Video items (the profile may also constrain their audio).
    Video,
    /// Audio-only items.
    Audio,
}

impl DlnaProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Audio => "Audio",
        }
    }
}

impl fmt::Display for DlnaProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stream class a codec profile constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodecType {
    /// A video stream.
    Video,
    /// An audio stream that accompanies a video stream.
    VideoAudio,
    /// An audio stream of an audio-only item.
    Audio,
}

impl CodecType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::VideoAudio => "VideoAudio",
            Self::Audio => "Audio",
        }
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator of a profile condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileConditionType {
    /// The property equals the value.
    Equals,
    /// The property differs from the value.
    NotEquals,
    /// The property equals one of the `|`-separated values.
    EqualsAny,
    /// The numeric property is at most the value.
    LessThanEqual,
    /// The numeric property is at least the value.
    GreaterThanEqual,
}

impl ProfileConditionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "Equals",
            Self::NotEquals => "NotEquals",
            Self::EqualsAny => "EqualsAny",
            Self::LessThanEqual => "LessThanEqual",
            Self::GreaterThanEqual => "GreaterThanEqual",
        }
    }
}

impl fmt::Display for ProfileConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stream metadata property a profile condition is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileConditionValue {
    AudioChannels,
    AudioProfile,
    IsSecondaryAudio,
    VideoProfile,
    VideoRangeType,
    VideoLevel,
    IsAnamorphic,
    IsInterlaced,
    Width,
    VideoBitrate,
    VideoCodecTag,
    VideoFramerate,
    NumStreams,
}

impl ProfileConditionValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AudioChannels => "AudioChannels",
            Self::AudioProfile => "AudioProfile",
            Self::IsSecondaryAudio => "IsSecondaryAudio",
            Self::VideoProfile => "VideoProfile",
            Self::VideoRangeType => "VideoRangeType",
            Self::VideoLevel => "VideoLevel",
            Self::IsAnamorphic => "IsAnamorphic",
            Self::IsInterlaced => "IsInterlaced",
            Self::Width => "Width",
            Self::VideoBitrate => "VideoBitrate",
            Self::VideoCodecTag => "VideoCodecTag",
            Self::VideoFramerate => "VideoFramerate",
            Self::NumStreams => "NumStreams",
        }
    }
}

impl fmt::Display for ProfileConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a transcoding profile applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncodingContext {
    /// Live playback.
    Streaming,
    /// Download or sync of a complete file.
    Static,
}

impl EncodingContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Streaming => "Streaming",
            Self::Static => "Static",
        }
    }
}

impl fmt::Display for EncodingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery protocol of a transcoding profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamProtocol {
    /// Progressive HTTP download.
    Http,
    /// HTTP Live Streaming.
    Hls,
}

impl StreamProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Hls => "hls",
        }
    }
}

impl fmt::Display for StreamProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the client receives a subtitle stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubtitleDeliveryMethod {
    /// Delivered as a separate file the client renders itself.
    External,
}

impl fmt::Display for SubtitleDeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External => write!(f, "External"),
        }
    }
}

impl std::str::FromStr for ProfileConditionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Equals" => Ok(Self::Equals),
            "NotEquals" => Ok(Self::NotEquals),
            "EqualsAny" => Ok(Self::EqualsAny),
            "LessThanEqual" => Ok(Self::LessThanEqual),
            "GreaterThanEqual" => Ok(Self::GreaterThanEqual),
            _ => Err(format!("Invalid condition type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_type_serialization() {
        let json = serde_json::to_string(&DlnaProfileType::Video).unwrap();
        assert_eq!(json, r#""Video""#);

        let json = serde_json::to_string(&DlnaProfileType::Audio).unwrap();
        assert_eq!(json, r#""Audio""#);
    }

    #[test]
    fn test_codec_type_serialization() {
        let json = serde_json::to_string(&CodecType::VideoAudio).unwrap();
        assert_eq!(json, r#""VideoAudio""#);

        let ct: CodecType = serde_json::from_str(r#""Audio""#).unwrap();
        assert_eq!(ct, CodecType::Audio);
    }

    #[test]
    fn test_condition_type_matches_display() {
        for ct in [
            ProfileConditionType::Equals,
            ProfileConditionType::NotEquals,
            ProfileConditionType::EqualsAny,
            ProfileConditionType::LessThanEqual,
            ProfileConditionType::GreaterThanEqual,
        ] {
            let json = serde_json::to_string(&ct).unwrap();
            assert_eq!(json, format!("\"{}\"", ct));
            assert_eq!(ct.to_string().parse::<ProfileConditionType>(), Ok(ct));
        }
        assert!("lessthanequal".parse::<ProfileConditionType>().is_err());
    }

    #[test]
    fn test_condition_value_matches_display() {
        for value in [
            ProfileConditionValue::VideoRangeType,
            ProfileConditionValue::IsSecondaryAudio,
            ProfileConditionValue::VideoCodecTag,
            ProfileConditionValue::NumStreams,
        ] {
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, format!("\"{}\"", value));
        }
    }

    #[test]
    fn test_protocol_is_lowercase() {
        assert_eq!(serde_json::to_string(&StreamProtocol::Hls).unwrap(), r#""hls""#);
        assert_eq!(StreamProtocol::Http.to_string(), "http");
    }

    #[test]
    fn test_context_and_method_display() {
        assert_eq!(EncodingContext::Streaming.to_string(), "Streaming");
        assert_eq!(EncodingContext::Static.to_string(), "Static");
        assert_eq!(SubtitleDeliveryMethod::External.to_string(), "External");
        assert_eq!(
            serde_json::to_string(&SubtitleDeliveryMethod::External).unwrap(),
            r#""External""#
        );
    }
}
