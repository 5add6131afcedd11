use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "ess-tui";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EssConfig {
    /// Base URL of the ESS service, e.g. "http://127.0.0.1:5000"
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for EssConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl EssConfig {
    fn root_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::root_path()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::root_path()?.join("ess-tui.log"))
    }

    /// Defaults, then the config file if present, then `ESS_*` environment
    /// variables.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .set_default("api_url", default_api_url())?
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("ESS").prefix_separator("_"))
            .build()
            .with_context(|| format!("Failed to read config at {}", path.display()))?;

        settings
            .try_deserialize::<Self>()
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_default_url() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = EssConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg.api_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn saved_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = EssConfig {
            api_url: "http://ess.internal:8000".to_string(),
        };

        cfg.save_to(&path).unwrap();
        let loaded = EssConfig::load_from(&path).unwrap();

        assert_eq!(loaded.api_url, "http://ess.internal:8000");
    }
}
