//! # playcaps-profile
//!
//! Assembles the device profile a media server uses to choose between direct
//! play and transcoding for a browser client.
//!
//! ## Example
//!
//! ```
//! use playcaps_probe::{video_codecs, BrowserIdentity, Environment, StaticHost};
//! use playcaps_profile::{build_device_profile, ProfileOptions, UserSettings};
//!
//! let identity = BrowserIdentity {
//!     chrome: true,
//!     version_major: Some(124),
//!     ..Default::default()
//! };
//! let host = StaticHost::new().video_types(&[video_codecs::H264_BASELINE_MIME]);
//! let env = Environment::new(identity, host);
//!
//! let profile = build_device_profile(&env, &UserSettings::default(), &ProfileOptions::default());
//! assert_eq!(profile.direct_play_profiles[0].container, "mp4,m4v");
//! ```

pub mod builder;
pub mod codec_lists;
pub mod codec_profiles;
pub mod direct_play;
pub mod model;
pub mod post_pass;
pub mod settings;
pub mod subtitles;
pub mod transcoding;

// Re-exports
pub use builder::build_device_profile;
pub use model::{
    CodecProfile, ContainerProfile, DeviceProfile, DirectPlayProfile, ProfileCondition,
    ResponseProfile, SubtitleProfile, TranscodingProfile,
};
pub use playcaps_probe::ProfileOptions;
pub use settings::{SubtitleBurnIn, UserSettings};
