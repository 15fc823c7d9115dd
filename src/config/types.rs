use playcaps_probe::{BrowserIdentity, ProfileOptions, StaticHost};
use playcaps_profile::UserSettings;
use serde::Deserialize;

/// One environment fixture: who the browser is, what its probe elements
/// answer, and the settings and options a profile build runs with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub identity: BrowserIdentity,

    #[serde(default)]
    pub settings: UserSettings,

    #[serde(default)]
    pub options: ProfileOptions,

    #[serde(default)]
    pub host: StaticHost,
}

/// Upper bound for `settings.allowed_audio_channels` (7.1).
pub const MAX_ALLOWED_AUDIO_CHANNELS: i32 = 8;
