//! Utility functions for CLI operations.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use airq_core::{EngineConfig, default_config_path};
use time::OffsetDateTime;

/// Current time in the local UTC offset.
///
/// Diurnal forecast windows are read in this offset. Falls back to UTC when
/// the local offset cannot be determined (e.g. once other threads exist on
/// Unix).
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|e| {
        tracing::debug!("Local offset unavailable ({}), using UTC", e);
        OffsetDateTime::now_utc()
    })
}

/// Path of the configuration file: the `--config` flag, else the platform default.
pub fn config_path(path: Option<&PathBuf>) -> PathBuf {
    path.cloned().unwrap_or_else(default_config_path)
}

/// Load and validate the engine configuration.
///
/// An explicitly given file must exist. The default location may be absent,
/// in which case the built-in configuration is used.
pub fn load_engine_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => load_file(path),
        None => {
            let path = default_config_path();
            if path.exists() {
                load_file(&path)
            } else {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(EngineConfig::default())
            }
        }
    }
}

fn load_file(path: &Path) -> Result<EngineConfig> {
    let config = EngineConfig::load_validated(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Write output to file or stdout.
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path_prefers_flag() {
        let flag = PathBuf::from("/tmp/custom.toml");
        assert_eq!(config_path(Some(&flag)), flag);
        assert!(config_path(None).ends_with("airq/config.toml"));
    }

    #[test]
    fn test_load_engine_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[forecast]\nhours = 6\n").unwrap();

        let config = load_engine_config(Some(&path)).unwrap();
        assert_eq!(config.forecast.hours, 6);
        assert_eq!(config.profiles, EngineConfig::default().profiles);
    }

    #[test]
    fn test_load_engine_config_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_engine_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_load_engine_config_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[forecast]\nhours = 0\n").unwrap();

        let err = load_engine_config(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("forecast.hours"));
    }

    #[test]
    fn test_local_now_is_current_instant() {
        let before = OffsetDateTime::now_utc();
        let now = local_now();
        let after = OffsetDateTime::now_utc();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        write_output(Some(&path), "hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
