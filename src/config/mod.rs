mod types;

pub use types::*;

use anyhow::{Context, Result};
use playcaps_probe::Environment;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./playcaps.toml", "~/.config/playcaps/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    tracing::debug!("No config file found, using built-in defaults");
    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let channels = config.settings.allowed_audio_channels;
    if channels != -1 && !(1..=MAX_ALLOWED_AUDIO_CHANNELS).contains(&channels) {
        anyhow::bail!(
            "settings.allowed_audio_channels must be -1 (auto) or 1..={}, got {}",
            MAX_ALLOWED_AUDIO_CHANNELS,
            channels
        );
    }

    if config.options.max_video_width == Some(0) {
        anyhow::bail!("options.max_video_width cannot be 0");
    }

    if config.options.audio_channels == Some(0) {
        anyhow::bail!("options.audio_channels cannot be 0");
    }

    if config.host.ud_panel_error_code.is_some() && !config.identity.tizen {
        tracing::warn!("host.ud_panel_error_code is only consulted on Tizen");
    }

    Ok(())
}

impl Config {
    /// The probe environment this fixture describes.
    pub fn environment(&self) -> Environment {
        Environment::new(self.identity.clone(), self.host.clone())
    }
}
