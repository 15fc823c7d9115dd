//! # playcaps-probe
//!
//! Browser media capability probes.
//!
//! Each probe answers one question (can this browser decode HEVC? play
//! Matroska? pass 5.1 audio through?) from three inputs only: the
//! [`BrowserIdentity`], the [`MediaHost`] probe elements, and the caller's
//! [`ProfileOptions`]. Probes never fail outward; a missing capability is
//! `false`, `None` or an empty list, and host API failures are logged and
//! treated as absent.
//!
//! ## Example
//!
//! ```
//! use playcaps_probe::{video_codecs, BrowserIdentity, Environment, ProfileOptions, StaticHost};
//!
//! let identity = BrowserIdentity {
//!     chrome: true,
//!     version_major: Some(124),
//!     ..Default::default()
//! };
//! let host = StaticHost::new().video_types(&[video_codecs::H264_BASELINE_MIME]);
//! let env = Environment::new(identity, host);
//!
//! assert!(video_codecs::can_play_h264(&env));
//! assert!(!video_codecs::can_play_hevc(&env, &ProfileOptions::default()));
//! ```

pub mod audio_codecs;
pub mod bitrate;
pub mod containers;
pub mod environment;
pub mod features;
pub mod fixture;
pub mod hdr;
pub mod host;
pub mod identity;
pub mod options;
pub mod video_codecs;

// Re-exports
pub use environment::{Environment, FeatureSnapshot};
pub use fixture::StaticHost;
pub use host::{CanPlay, MediaHost};
pub use identity::BrowserIdentity;
pub use options::ProfileOptions;
pub use video_codecs::CodecLevel;
