//! The explicit probe environment.
//!
//! An [`Environment`] pairs a [`BrowserIdentity`] with a [`MediaHost`] and
//! snapshots the feature checks that only need answering once per page
//! lifetime. Construct one at session start and pass it to every profile
//! build; rebuilding it yields the same snapshot, so there is nothing to
//! invalidate.

use crate::features;
use crate::host::MediaHost;
use crate::identity::BrowserIdentity;
use std::fmt;
use std::sync::Arc;

/// Answers computed once when the environment is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSnapshot {
    /// Output channel count of the default `AudioContext`, `None` when the
    /// API is absent.
    pub speaker_count: Option<u32>,
    pub text_tracks: bool,
    pub canvas_2d: bool,
    /// Native HLS or Media Source Extensions playback.
    pub hls: bool,
}

impl FeatureSnapshot {
    fn detect(identity: &BrowserIdentity, host: &dyn MediaHost) -> Self {
        Self {
            speaker_count: host.max_channel_count(),
            text_tracks: identity.tizen || host.has_text_tracks(),
            canvas_2d: host.has_canvas_2d(),
            hls: features::native_hls(identity, host) || host.has_media_source(),
        }
    }
}

/// Browser identity, host APIs and memoized feature answers.
#[derive(Clone)]
pub struct Environment {
    identity: BrowserIdentity,
    host: Arc<dyn MediaHost>,
    features: FeatureSnapshot,
}

impl Environment {
    pub fn new(identity: BrowserIdentity, host: impl MediaHost + 'static) -> Self {
        Self::from_shared(identity, Arc::new(host))
    }

    /// Build an environment over a host that is shared with other callers.
    pub fn from_shared(identity: BrowserIdentity, host: Arc<dyn MediaHost>) -> Self {
        let features = FeatureSnapshot::detect(&identity, host.as_ref());
        tracing::debug!(?features, "Detected browser features");
        Self {
            identity,
            host,
            features,
        }
    }

    pub fn identity(&self) -> &BrowserIdentity {
        &self.identity
    }

    pub fn host(&self) -> &dyn MediaHost {
        self.host.as_ref()
    }

    pub fn features(&self) -> &FeatureSnapshot {
        &self.features
    }

    /// `canPlayType` on the video probe element answered anything but "no".
    pub fn video(&self, mime_type: &str) -> bool {
        self.host.video_can_play_type(mime_type).is_playable()
    }

    /// `canPlayType` on the audio probe element answered anything but "no".
    pub fn audio(&self, mime_type: &str) -> bool {
        self.host.audio_can_play_type(mime_type).is_playable()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("identity", &self.identity)
            .field("features", &self.features)
            .finish_non_exhaustive()
    }
}
