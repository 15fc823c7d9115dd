//! The browser surface probes query.
//!
//! [`MediaHost`] abstracts the detached `<video>`/`<audio>` probe elements and
//! the handful of platform globals capability detection reads. A web build
//! implements it over the DOM; tests and the CLI use
//! [`StaticHost`](crate::StaticHost).

use playcaps_common::{Error, Result};
use serde::Deserialize;
use std::fmt;

/// Answer of `HTMLMediaElement.canPlayType`.
///
/// Browsers answer `"probably"`, `"maybe"` or `""`; some legacy engines answer
/// `"no"`, which is treated the same as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CanPlay {
    #[default]
    No,
    Maybe,
    Probably,
}

impl CanPlay {
    /// Interpret a raw `canPlayType` answer. Unknown answers are negative.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim() {
            "probably" => Self::Probably,
            "maybe" => Self::Maybe,
            _ => Self::No,
        }
    }

    /// Any non-negative answer counts as playable.
    pub fn is_playable(self) -> bool {
        self != Self::No
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::No => "",
            Self::Maybe => "maybe",
            Self::Probably => "probably",
        }
    }
}

impl TryFrom<String> for CanPlay {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        match value.as_str() {
            "probably" => Ok(Self::Probably),
            "maybe" => Ok(Self::Maybe),
            "" | "no" => Ok(Self::No),
            other => Err(Error::invalid_input(format!(
                "unknown canPlayType answer: {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for CanPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Browser and platform APIs consulted by capability probes.
///
/// Implementations must be side-effect free: the probe elements are never
/// attached to a document and every query is idempotent. Optional APIs have
/// defaults describing a host where the API is missing.
pub trait MediaHost: Send + Sync {
    /// `canPlayType` on a detached `<video>` element.
    fn video_can_play_type(&self, mime_type: &str) -> CanPlay;

    /// `canPlayType` on a detached `<audio>` element.
    fn audio_can_play_type(&self, mime_type: &str) -> CanPlay;

    /// `AudioContext.destination.maxChannelCount`, or `None` when no
    /// `AudioContext` constructor exists.
    fn max_channel_count(&self) -> Option<u32> {
        None
    }

    /// A `<video>` element exposes `textTracks`.
    fn has_text_tracks(&self) -> bool {
        false
    }

    /// A `<video>` element exposes `audioTracks`.
    fn has_audio_tracks(&self) -> bool {
        false
    }

    /// A `<canvas>` element yields a 2D context.
    fn has_canvas_2d(&self) -> bool {
        false
    }

    /// `window.MediaSource` exists.
    fn has_media_source(&self) -> bool {
        false
    }

    /// The page runs inside a native app shell (`window.NativeShell`).
    fn has_native_shell(&self) -> bool {
        false
    }

    /// Samsung `webapis.productinfo.isUdPanelSupported()`. This is the one
    /// platform query that can throw.
    fn is_ud_panel_supported(&self) -> Result<bool> {
        Err(Error::unavailable("webapis.productinfo"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_answer() {
        assert_eq!(CanPlay::from_answer("probably"), CanPlay::Probably);
        assert_eq!(CanPlay::from_answer("maybe"), CanPlay::Maybe);
        assert_eq!(CanPlay::from_answer(""), CanPlay::No);
        assert_eq!(CanPlay::from_answer("no"), CanPlay::No);
        assert_eq!(CanPlay::from_answer("whatever"), CanPlay::No);
    }

    #[test]
    fn test_is_playable() {
        assert!(CanPlay::Probably.is_playable());
        assert!(CanPlay::Maybe.is_playable());
        assert!(!CanPlay::No.is_playable());
    }

    #[test]
    fn test_try_from_rejects_unknown() {
        assert_eq!(CanPlay::try_from("no".to_string()).unwrap(), CanPlay::No);
        assert!(matches!(
            CanPlay::try_from("yes".to_string()),
            Err(Error::InvalidInput(_))
        ));
    }

    struct NothingHost;

    impl MediaHost for NothingHost {
        fn video_can_play_type(&self, _mime_type: &str) -> CanPlay {
            CanPlay::No
        }

        fn audio_can_play_type(&self, _mime_type: &str) -> CanPlay {
            CanPlay::No
        }
    }

    #[test]
    fn test_default_host_apis_are_absent() {
        let host = NothingHost;
        assert_eq!(host.max_channel_count(), None);
        assert!(!host.has_text_tracks());
        assert!(!host.has_media_source());
        assert!(matches!(
            host.is_ud_panel_supported(),
            Err(Error::Unavailable(_))
        ));
    }
}
