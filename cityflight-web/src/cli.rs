//! Command-line overrides for native runs.

use std::path::{Path, PathBuf};

use clap::Parser;
use cityflight_core::{CONFIG_FILE_NAME, FlightConfig};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "cityflight", about = "Fly a drone over a small city")]
pub struct CliArgs {
    /// Path to the RON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Show the frame rate in the corner.
    #[arg(long)]
    pub show_fps: bool,
}

impl CliArgs {
    pub fn config_path(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or_else(|| Path::new(CONFIG_FILE_NAME))
    }
}

pub fn apply_cli_overrides(config: &mut FlightConfig, args: &CliArgs) {
    if let Some(ref level) = args.log_level {
        config.debug.log_level = level.clone();
    }
    if args.show_fps {
        config.debug.show_fps = true;
    }
}

/// Parse the process arguments and resolve the effective config.
///
/// A broken config file is reported and replaced by defaults so the game still starts.
pub fn load_config() -> (FlightConfig, Vec<String>) {
    let args = CliArgs::parse();
    resolve_config(&args)
}

pub fn resolve_config(args: &CliArgs) -> (FlightConfig, Vec<String>) {
    let mut warnings = Vec::new();
    let path = args.config_path();
    let mut config = match FlightConfig::load_or_default(path) {
        Ok(config) => config,
        Err(err) => {
            warnings.push(format!("{} ({}), using defaults", err, path.display()));
            FlightConfig::default()
        }
    };
    apply_cli_overrides(&mut config, args);
    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = FlightConfig::default();
        let args = CliArgs {
            config: None,
            log_level: Some("debug".to_string()),
            show_fps: true,
        };
        apply_cli_overrides(&mut config, &args);
        assert_eq!(config.debug.log_level, "debug");
        assert!(config.debug.show_fps);
        assert_eq!(config.physics, FlightConfig::default().physics);
    }

    #[test]
    fn test_cli_no_override() {
        let original = FlightConfig::default();
        let mut config = FlightConfig::default();
        apply_cli_overrides(&mut config, &CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_flags_parse() {
        let args =
            CliArgs::try_parse_from(["cityflight", "--log-level", "trace", "--show-fps"]).unwrap();
        assert_eq!(args.log_level.as_deref(), Some("trace"));
        assert!(args.show_fps);
        assert_eq!(args.config_path(), Path::new(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let args = CliArgs {
            config: Some(PathBuf::from("definitely/not/here/cityflight.ron")),
            ..CliArgs::default()
        };
        let (config, warnings) = resolve_config(&args);
        assert_eq!(config, FlightConfig::default());
        assert!(warnings.is_empty());
    }
}
