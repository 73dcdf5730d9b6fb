use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Bot configuration persisted as TOML.
///
/// Fields:
/// - server: game server address, e.g. "localhost:8080"
/// - user: name of the seat this agent plays
/// - password: credential for that seat
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: String,
    pub user: String,
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: "localhost:8080".to_string(),
            user: "player".to_string(),
            password: "password".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`. If the file does not exist, create it
    /// with reasonable defaults and return the default config.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading config file '{}'", path.display()))?;
            let cfg: Config = toml::from_str(&s)
                .with_context(|| format!("parsing TOML config '{}'", path.display()))?;
            Ok(cfg)
        } else {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("creating config directory '{}'", parent.display())
                    })?;
                }
            }

            let cfg = Config::default();
            let toml_text = toml::to_string_pretty(&cfg)
                .with_context(|| "serializing default config to TOML")?;
            fs::write(path, toml_text)
                .with_context(|| format!("writing default config to '{}'", path.display()))?;
            Ok(cfg)
        }
    }

    /// Save the current config state back to the provided path (overwrites).
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating config directory '{}'", parent.display()))?;
            }
        }
        let toml_text =
            toml::to_string_pretty(&self).with_context(|| "serializing config to TOML")?;
        fs::write(path, toml_text)
            .with_context(|| format!("writing config to '{}'", path.display()))?;
        Ok(())
    }
}
