mod cli;

use playcaps::{build_device_profile, config, report::ProbeReport};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "playcaps=debug,playcaps_profile=trace,playcaps_probe=debug".to_string()
        } else {
            "playcaps=info,playcaps_profile=info,playcaps_probe=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Profile { pretty } => print_profile(cli.config.as_deref(), pretty),
        Commands::Probe => print_probe_report(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("playcaps {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn print_profile(config_path: Option<&Path>, pretty: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let env = config.environment();

    let profile = build_device_profile(&env, &config.settings, &config.options);

    let json = if pretty {
        profile.to_json_pretty()
    } else {
        profile.to_json()
    }
    .context("Failed to serialize device profile")?;
    println!("{}", json);

    Ok(())
}

fn print_probe_report(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let env = config.environment();

    let report = ProbeReport::collect(&env, &config.settings, &config.options);
    print!("{}", report);

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Video types: {}", config.host.video.len());
            println!("  Audio types: {}", config.host.audio.len());
            println!(
                "  Allowed audio channels: {}",
                config.settings.allowed_audio_channels
            );
            println!(
                "  Disabled video audio codecs: {}",
                config.options.disable_video_audio_codecs.len()
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!(
                "  Allowed audio channels: {}",
                config.settings.allowed_audio_channels
            );
        }
    }

    Ok(())
}
