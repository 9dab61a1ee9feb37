//! Config command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use airq_core::EngineConfig;

use crate::cli::ConfigAction;
use crate::format::FormatOptions;
use crate::style;
use crate::util::{config_path, load_engine_config, write_output};

pub fn cmd_config(
    action: ConfigAction,
    config: Option<&PathBuf>,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let path = config_path(config);

    match action {
        ConfigAction::Path => write_output(output, &format!("{}\n", path.display())),
        ConfigAction::Show => {
            let engine = load_engine_config(config)?;
            write_output(output, &engine.to_toml()?)
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            EngineConfig::default()
                .save(&path)
                .with_context(|| format!("Failed to initialize config at {}", path.display()))?;
            let message = format!("Wrote default configuration to {}", path.display());
            write_output(output, &format!("{}\n", style::format_success(&message, opts.no_color)))
        }
        ConfigAction::Validate => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            load_engine_config(Some(&path))?;
            let message = format!("{} is valid", path.display());
            write_output(output, &format!("{}\n", style::format_success(&message, opts.no_color)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plain() -> FormatOptions {
        FormatOptions::new(true)
    }

    #[test]
    fn test_init_then_validate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let out = dir.path().join("out.txt");

        cmd_config(ConfigAction::Init { force: false }, Some(&path), Some(&out), &plain()).unwrap();
        assert!(path.exists());
        assert!(std::fs::read_to_string(&out).unwrap().starts_with("[OK] Wrote default"));

        cmd_config(ConfigAction::Validate, Some(&path), Some(&out), &plain()).unwrap();
        assert!(std::fs::read_to_string(&out).unwrap().contains("is valid"));
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let out = dir.path().join("out.txt");
        std::fs::write(&path, "[forecast]\nhours = 6\n").unwrap();

        let err = cmd_config(ConfigAction::Init { force: false }, Some(&path), Some(&out), &plain())
            .unwrap_err();
        assert!(err.to_string().contains("--force"));

        cmd_config(ConfigAction::Init { force: true }, Some(&path), Some(&out), &plain()).unwrap();
        assert_eq!(EngineConfig::load(&path).unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_show_writes_effective_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let out = dir.path().join("out.toml");
        std::fs::write(&path, "[forecast]\nhours = 6\n").unwrap();

        cmd_config(ConfigAction::Show, Some(&path), Some(&out), &plain()).unwrap();
        let shown: EngineConfig = toml::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(shown.forecast.hours, 6);
        assert_eq!(shown.pollutants, EngineConfig::default().pollutants);
    }

    #[test]
    fn test_validate_reports_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[forecast]\naqi_min = 300\naqi_max = 10\n").unwrap();

        let err = cmd_config(ConfigAction::Validate, Some(&path), None, &plain()).unwrap_err();
        assert!(format!("{:#}", err).contains("forecast.aqi_max"));
    }
}
